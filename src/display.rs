//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::command::{
    DISPLAY_ON, INIT_SEQUENCE, LAST_ADDRESS, SET_COLUMN_ADDRESS, SET_ROW_ADDRESS, WRITE_RAM,
};
use crate::error::Error;
use crate::frame::{BUFFER_SIZE, Frame};
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for SSD1351
///
/// This struct sequences commands and pixel data for a 128x128 panel. It keeps
/// a serialization buffer so each [`flush`](Self::flush) hands the whole frame
/// to the interface in one call.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Big-endian copy of the last flushed frame
    wire: [u8; BUFFER_SIZE],
    /// Whether the display power is on
    is_display_on: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I) -> Self {
        Self {
            interface,
            wire: [0; BUFFER_SIZE],
            is_display_on: false,
        }
    }

    /// Perform hardware reset and configure the controller
    ///
    /// The panel stays dark until [`power_on`](Self::power_on).
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.reset(delay);
        log::debug!(
            "ssd1351: reset done, sending {} init steps",
            INIT_SEQUENCE.len()
        );

        for step in INIT_SEQUENCE {
            self.send_command(step.command)?;
            if !step.params.is_empty() {
                self.send_data(step.params)?;
            }
        }
        self.is_display_on = false;

        Ok(())
    }

    /// Turn the panel on
    pub fn power_on(&mut self) -> DisplayResult<I> {
        self.send_command(DISPLAY_ON)?;
        self.is_display_on = true;
        log::debug!("ssd1351: display on");
        Ok(())
    }

    /// Whether [`power_on`](Self::power_on) has been issued since the last init
    pub fn is_display_on(&self) -> bool {
        self.is_display_on
    }

    /// Write a full frame to display RAM
    ///
    /// Re-addresses the whole panel first so the transfer does not depend on
    /// where the controller's address counter was left.
    pub fn flush(&mut self, frame: &Frame) -> DisplayResult<I> {
        self.set_full_window()?;
        self.send_command(WRITE_RAM)?;

        frame.write_be_bytes(&mut self.wire);
        self.interface
            .send_data(&self.wire)
            .map_err(Error::Interface)
    }

    /// Access the underlying interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }

    fn set_full_window(&mut self) -> DisplayResult<I> {
        self.send_command(SET_COLUMN_ADDRESS)?;
        self.send_data(&[0x00, LAST_ADDRESS])?;
        self.send_command(SET_ROW_ADDRESS)?;
        self.send_data(&[0x00, LAST_ADDRESS])?;
        Ok(())
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::command::{DISPLAY_OFF, InitStep};
    use crate::frame::{HEIGHT, WIDTH};
    use alloc::boxed::Box;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct MockInterface {
        commands: Vec<u8>,
        data: Vec<Vec<u8>>,
        command_data: Vec<(u8, Vec<u8>)>,
        last_command: Option<u8>,
        resets: usize,
        fail: bool,
    }

    impl DisplayInterface for MockInterface {
        type Error = &'static str;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            if self.fail {
                return Err("spi down");
            }
            self.commands.push(command);
            self.last_command = Some(command);
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err("spi down");
            }
            self.data.push(data.to_vec());
            if let Some(cmd) = self.last_command {
                self.command_data.push((cmd, data.to_vec()));
            }
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) {
            self.resets += 1;
        }
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    fn test_display() -> Box<Display<MockInterface>> {
        Box::new(Display::new(MockInterface::default()))
    }

    fn replayed_steps(interface: &MockInterface) -> Vec<InitStep> {
        INIT_SEQUENCE
            .iter()
            .zip(interface.commands.iter())
            .map(|(step, &command)| InitStep {
                command,
                params: step.params,
            })
            .collect()
    }

    #[test]
    fn test_init_resets_then_sends_sequence_in_order() {
        let mut display = test_display();
        display.init(&mut MockDelay).unwrap();

        assert_eq!(display.interface.resets, 1);
        let expected: Vec<u8> = INIT_SEQUENCE.iter().map(|step| step.command).collect();
        assert_eq!(display.interface.commands, expected);
        assert_eq!(replayed_steps(&display.interface), INIT_SEQUENCE);

        let expected_data: Vec<Vec<u8>> = INIT_SEQUENCE
            .iter()
            .filter(|step| !step.params.is_empty())
            .map(|step| step.params.to_vec())
            .collect();
        assert_eq!(display.interface.data, expected_data);
    }

    #[test]
    fn test_init_wire_traffic_matches_bring_up_bytes() {
        let mut display = test_display();
        display.init(&mut MockDelay).unwrap();

        assert_eq!(
            display.interface.commands,
            [
                0xFD, 0xFD, 0xAE, 0xB3, 0xCA, 0x15, 0x75, 0xA0, 0xA1, 0xA2, 0xB5, 0xAB, 0xB1, 0xB4,
                0xBE, 0xC7, 0xB6, 0xA6, 0xC1,
            ]
        );
        let params: Vec<u8> = display.interface.data.concat();
        assert_eq!(
            params,
            [
                0x12, 0xB1, 0xF1, 0x7F, 0x00, 0x7F, 0x00, 0x7F, 0x74, 0x00, 0x00, 0x00, 0x01, 0x32,
                0xA0, 0xB5, 0x55, 0x05, 0x0F, 0x01, 0xFF, 0xFF, 0xFF,
            ]
        );
        // bare commands carry no parameter bytes
        assert_eq!(display.interface.data.len(), 17);
    }

    #[test]
    fn test_init_leaves_display_off() {
        let mut display = test_display();
        display.init(&mut MockDelay).unwrap();
        assert!(!display.is_display_on());
        assert!(display.interface.commands.contains(&DISPLAY_OFF));
        assert!(!display.interface.commands.contains(&DISPLAY_ON));
    }

    #[test]
    fn test_power_on_sends_display_on() {
        let mut display = test_display();
        display.init(&mut MockDelay).unwrap();
        display.power_on().unwrap();
        assert!(display.is_display_on());
        assert_eq!(display.interface.commands.last(), Some(&DISPLAY_ON));
    }

    #[test]
    fn test_flush_addresses_full_window_then_writes_ram() {
        let mut display = test_display();
        let frame = Box::new(Frame::new());
        display.flush(&frame).unwrap();

        assert_eq!(
            display.interface.commands,
            [SET_COLUMN_ADDRESS, SET_ROW_ADDRESS, WRITE_RAM]
        );
        assert_eq!(
            display.interface.command_data[..2],
            [
                (SET_COLUMN_ADDRESS, alloc::vec![0x00, 0x7F]),
                (SET_ROW_ADDRESS, alloc::vec![0x00, 0x7F]),
            ]
        );
        let (command, pixels) = &display.interface.command_data[2];
        assert_eq!(*command, WRITE_RAM);
        assert_eq!(pixels.len(), WIDTH * HEIGHT * 2);
    }

    #[test]
    fn test_flush_sends_high_byte_first() {
        let mut display = test_display();
        let mut frame = Box::new(Frame::new());
        frame.set_pixel(0, 0, Color::from_raw(0xF81F));
        frame.set_pixel(1, 0, Color::from_raw(0x07E0));
        display.flush(&frame).unwrap();

        let pixels = display.interface.data.last().unwrap();
        assert_eq!(pixels[..4], [0xF8, 0x1F, 0x07, 0xE0]);
    }

    #[test]
    fn test_every_flush_repeats_same_framing() {
        let mut display = test_display();
        let mut frame = Box::new(Frame::new());
        display.flush(&frame).unwrap();
        frame.clear(Color::RED);
        display.flush(&frame).unwrap();

        assert_eq!(
            display.interface.commands,
            [
                SET_COLUMN_ADDRESS,
                SET_ROW_ADDRESS,
                WRITE_RAM,
                SET_COLUMN_ADDRESS,
                SET_ROW_ADDRESS,
                WRITE_RAM,
            ]
        );
        let lengths: Vec<usize> = display.interface.data.iter().map(Vec::len).collect();
        assert_eq!(lengths, [2, 2, 32_768, 2, 2, 32_768]);
        assert!(
            display.interface.data[5]
                .chunks(2)
                .all(|px| px == [0x00, 0x1F])
        );
    }

    #[test]
    fn test_flush_error_is_returned() {
        let mut display = test_display();
        display.interface.fail = true;
        let frame = Box::new(Frame::new());
        assert!(matches!(
            display.flush(&frame),
            Err(Error::Interface("spi down"))
        ));
    }

    #[test]
    fn test_release_returns_interface() {
        let mut display = Display::new(MockInterface::default());
        display.power_on().unwrap();
        let interface = display.release();
        assert_eq!(interface.commands, [DISPLAY_ON]);
    }
}
