//! SSD1351 command definitions
//!
//! This module defines the command bytes used to bring up and drive the SSD1351
//! OLED controller. Commands are sent over SPI with the DC pin low; their
//! parameters follow with the DC pin high.
//!
//! ## Command Structure
//!
//! 1. Set DC low (command mode)
//! 2. Send command byte
//! 3. Set DC high (data mode)
//! 4. Send parameter bytes (if any)
//!
//! The power-on configuration is kept as data in [`INIT_SEQUENCE`] so the exact
//! register order can be read and diffed against the controller datasheet.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1351_splash::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! // Replay the power-on configuration by hand
//! for step in command::INIT_SEQUENCE {
//!     let _ = interface.send_command(step.command);
//!     if !step.params.is_empty() {
//!         let _ = interface.send_data(step.params);
//!     }
//! }
//! let _ = interface.send_command(command::DISPLAY_ON);
//! ```

// Addressing and RAM

/// Set column address command (0x15)
///
/// Requires 2 bytes: [start, end], 0..=127
pub const SET_COLUMN_ADDRESS: u8 = 0x15;

/// Set row address command (0x75)
///
/// Requires 2 bytes: [start, end], 0..=127
pub const SET_ROW_ADDRESS: u8 = 0x75;

/// Write RAM command (0x5C)
///
/// Every data byte after this command is written into the addressed window,
/// two bytes per pixel in 65k color mode.
pub const WRITE_RAM: u8 = 0x5C;

// Panel geometry and color

/// Remap and color depth command (0xA0)
///
/// Requires 1 byte. 0x74 selects horizontal increment, BGR order and the
/// 65k color format.
pub const SET_REMAP: u8 = 0xA0;

/// Display start line command (0xA1)
pub const SET_START_LINE: u8 = 0xA1;

/// Display offset command (0xA2)
pub const SET_DISPLAY_OFFSET: u8 = 0xA2;

/// Multiplex ratio command (0xCA)
///
/// Requires 1 byte: rows - 1
pub const SET_MUX_RATIO: u8 = 0xCA;

// Display mode

/// All pixels follow RAM content, not inverted (0xA6)
pub const DISPLAY_NORMAL: u8 = 0xA6;

/// Sleep mode on, panel dark (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Sleep mode off, panel lit (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Timing and drive

/// Function selection command (0xAB)
///
/// Requires 1 byte: 0x01 enables the internal VDD regulator.
pub const FUNCTION_SELECT: u8 = 0xAB;

/// Phase 1/2 pre-charge period command (0xB1)
pub const SET_PRECHARGE: u8 = 0xB1;

/// Front clock divider and oscillator frequency command (0xB3)
pub const CLOCK_DIVIDER: u8 = 0xB3;

/// Segment low voltage (VSL) command (0xB4)
///
/// Requires 3 bytes.
pub const SET_VSL: u8 = 0xB4;

/// GPIO0/GPIO1 pin mode command (0xB5)
pub const SET_GPIO: u8 = 0xB5;

/// Second pre-charge period command (0xB6)
pub const SET_SECOND_PRECHARGE: u8 = 0xB6;

/// COM deselect voltage level command (0xBE)
pub const SET_VCOMH: u8 = 0xBE;

/// Per-channel contrast command (0xC1)
///
/// Requires 3 bytes: [A, B, C] channel contrast.
pub const SET_CONTRAST_ABC: u8 = 0xC1;

/// Master contrast current control command (0xC7)
///
/// Requires 1 byte, 0x00..=0x0F.
pub const MASTER_CONTRAST: u8 = 0xC7;

// Command lock

/// Command lock command (0xFD)
///
/// Requires 1 byte, see [`UNLOCK_DRIVER`] and [`UNLOCK_PROTECTED`].
pub const COMMAND_LOCK: u8 = 0xFD;

/// Unlock the OLED driver IC command interface
pub const UNLOCK_DRIVER: u8 = 0x12;

/// Make the protected commands (0xA2, 0xB1, 0xB3, 0xBB, 0xBE, 0xC1) accessible
pub const UNLOCK_PROTECTED: u8 = 0xB1;

/// Last column and row index of the full 128x128 addressing window
pub const LAST_ADDRESS: u8 = 0x7F;

/// One step of the controller bring-up: a command byte and its parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitStep {
    /// Command byte (sent with DC low)
    pub command: u8,
    /// Parameter bytes (sent with DC high); empty for bare commands
    pub params: &'static [u8],
}

impl InitStep {
    const fn new(command: u8, params: &'static [u8]) -> Self {
        Self { command, params }
    }
}

/// Power-on configuration for a 128x128 SSD1351 panel
///
/// Runs after the hardware reset. The panel is left in sleep mode; send
/// [`DISPLAY_ON`] afterwards to light it.
pub const INIT_SEQUENCE: &[InitStep] = &[
    InitStep::new(COMMAND_LOCK, &[UNLOCK_DRIVER]),
    InitStep::new(COMMAND_LOCK, &[UNLOCK_PROTECTED]),
    InitStep::new(DISPLAY_OFF, &[]),
    InitStep::new(CLOCK_DIVIDER, &[0xF1]),
    InitStep::new(SET_MUX_RATIO, &[LAST_ADDRESS]),
    InitStep::new(SET_COLUMN_ADDRESS, &[0x00, LAST_ADDRESS]),
    InitStep::new(SET_ROW_ADDRESS, &[0x00, LAST_ADDRESS]),
    InitStep::new(SET_REMAP, &[0x74]),
    InitStep::new(SET_START_LINE, &[0x00]),
    InitStep::new(SET_DISPLAY_OFFSET, &[0x00]),
    InitStep::new(SET_GPIO, &[0x00]),
    InitStep::new(FUNCTION_SELECT, &[0x01]),
    InitStep::new(SET_PRECHARGE, &[0x32]),
    InitStep::new(SET_VSL, &[0xA0, 0xB5, 0x55]),
    InitStep::new(SET_VCOMH, &[0x05]),
    InitStep::new(MASTER_CONTRAST, &[0x0F]),
    InitStep::new(SET_SECOND_PRECHARGE, &[0x01]),
    InitStep::new(DISPLAY_NORMAL, &[]),
    InitStep::new(SET_CONTRAST_ABC, &[0xFF, 0xFF, 0xFF]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_matches_panel_bring_up_bytes() {
        let expected: [(u8, &[u8]); 19] = [
            (0xFD, &[0x12]),
            (0xFD, &[0xB1]),
            (0xAE, &[]),
            (0xB3, &[0xF1]),
            (0xCA, &[0x7F]),
            (0x15, &[0x00, 0x7F]),
            (0x75, &[0x00, 0x7F]),
            (0xA0, &[0x74]),
            (0xA1, &[0x00]),
            (0xA2, &[0x00]),
            (0xB5, &[0x00]),
            (0xAB, &[0x01]),
            (0xB1, &[0x32]),
            (0xB4, &[0xA0, 0xB5, 0x55]),
            (0xBE, &[0x05]),
            (0xC7, &[0x0F]),
            (0xB6, &[0x01]),
            (0xA6, &[]),
            (0xC1, &[0xFF, 0xFF, 0xFF]),
        ];
        let actual: alloc::vec::Vec<(u8, &[u8])> = INIT_SEQUENCE
            .iter()
            .map(|step| (step.command, step.params))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_sequence_starts_with_both_unlocks() {
        assert_eq!(INIT_SEQUENCE[0], InitStep::new(COMMAND_LOCK, &[0x12]));
        assert_eq!(INIT_SEQUENCE[1], InitStep::new(COMMAND_LOCK, &[0xB1]));
    }

    #[test]
    fn test_sequence_never_turns_display_on() {
        assert!(INIT_SEQUENCE.iter().all(|step| step.command != DISPLAY_ON));
    }

    #[test]
    fn test_sequence_addresses_full_panel() {
        let window: alloc::vec::Vec<_> = INIT_SEQUENCE
            .iter()
            .filter(|step| matches!(step.command, SET_COLUMN_ADDRESS | SET_ROW_ADDRESS))
            .map(|step| step.params)
            .collect();
        assert_eq!(window, [&[0x00u8, 0x7F][..], &[0x00u8, 0x7F][..]]);
    }

    #[test]
    fn test_sequence_selects_bgr_65k_color() {
        let remap = INIT_SEQUENCE
            .iter()
            .find(|step| step.command == SET_REMAP)
            .map(|step| step.params);
        assert_eq!(remap, Some(&[0x74][..]));
    }

    #[test]
    fn test_sequence_ends_with_full_channel_contrast() {
        let last = INIT_SEQUENCE.last().copied();
        assert_eq!(
            last,
            Some(InitStep::new(SET_CONTRAST_ABC, &[0xFF, 0xFF, 0xFF]))
        );
        let normal = INIT_SEQUENCE.len() - 2;
        assert_eq!(INIT_SEQUENCE[normal].command, DISPLAY_NORMAL);
    }
}
