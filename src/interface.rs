//! Hardware interface abstraction
//!
//! [`DisplayInterface`] is the seam between the SSD1351 protocol and the
//! hardware; [`Interface`] implements it for any embedded-hal SPI device and
//! two output pins.
//!
//! ## Wiring
//!
//! - SPI, mode 0, write only
//! - DC: low while a command byte is clocked out, high for parameters and pixels
//! - RST: active low
//!
//! Large payloads are split into consecutive SPI writes of at most
//! [`DEFAULT_MAX_TRANSFER`] bytes, which is the default buffer limit of the Linux
//! `spidev` driver.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1351_splash::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//!
//! // Pulse the reset line
//! interface.reset(&mut delay);
//!
//! // full column window
//! let _ = interface.send_command(0x15);
//! let _ = interface.send_data(&[0x00, 0x7F]);
//! ```

use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Byte transport to an SSD1351 controller
///
/// [`Display`](crate::display::Display) only talks to the panel through this
/// trait, which lets tests substitute a recording mock.
pub trait DisplayInterface {
    /// Transport failure, printable for logs
    type Error: Debug;

    /// Send a command byte to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin low (command mode)
    /// 2. Send the command byte over SPI
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to the controller
    ///
    /// The implementation must:
    /// 1. Set DC pin high (data mode)
    /// 2. Send the data bytes over SPI, in order
    ///
    /// # Errors
    ///
    /// Returns an error if SPI communication or GPIO fails. Bytes of earlier
    /// transfers may already have reached the panel.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;

    /// Perform hardware reset
    ///
    /// The implementation must drive RST high, low, then high again, holding
    /// each level for at least 10ms.
    fn reset<D: DelayNs>(&mut self, delay: &mut D);
}

/// SPI or GPIO failure while talking to the panel
#[derive(Debug)]
pub enum InterfaceError<SpiErr, PinErr> {
    /// The SPI write failed
    Spi(SpiErr),
    /// Driving the DC line failed
    Pin(PinErr),
}

impl<SpiErr: Debug, PinErr: Debug> core::fmt::Display for InterfaceError<SpiErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "Pin error: {e:?}"),
        }
    }
}

impl<SpiErr: Debug, PinErr: Debug> core::error::Error for InterfaceError<SpiErr, PinErr> {}

/// Default upper bound for a single SPI transfer, in bytes
pub const DEFAULT_MAX_TRANSFER: usize = 4096;

/// Minimum hold time for each level of the reset pulse
pub const RESET_HOLD_MS: u32 = 10;

/// [`DisplayInterface`] over an embedded-hal [`SpiDevice`] and two [`OutputPin`]s
///
/// Data payloads are cut into writes of at most
/// [`max_transfer`](Self::max_transfer) bytes.
pub struct Interface<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
    /// Largest payload handed to a single SPI write
    max_transfer: usize,
}

impl<SPI, DC, RST> Debug for Interface<SPI, DC, RST> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interface")
            .field("max_transfer", &self.max_transfer)
            .finish_non_exhaustive()
    }
}

impl<SPI, DC, RST> Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Wrap an SPI device with its DC and RST lines, using the default transfer limit
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            dc,
            rst,
            max_transfer: DEFAULT_MAX_TRANSFER,
        }
    }

    /// Set the largest number of bytes sent in one SPI write
    ///
    /// Default is 4096. A value of 0 is treated as 1.
    pub fn set_max_transfer(&mut self, bytes: usize) -> &mut Self {
        self.max_transfer = bytes.max(1);
        self
    }

    /// Get the current transfer size limit in bytes
    pub fn max_transfer(&self) -> usize {
        self.max_transfer
    }

    /// Give back the SPI device and pins
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST, PinErr> DisplayInterface for Interface<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Debug,
    DC: OutputPin<Error = PinErr>,
    RST: OutputPin<Error = PinErr>,
    PinErr: Debug,
{
    type Error = InterfaceError<SPI::Error, PinErr>;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.dc.set_low().map_err(InterfaceError::Pin)?;
        self.spi.write(&[command]).map_err(InterfaceError::Spi)?;
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.dc.set_high().map_err(InterfaceError::Pin)?;
        for chunk in data.chunks(self.max_transfer) {
            self.spi.write(chunk).map_err(InterfaceError::Spi)?;
        }
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        // Reset sequence: HIGH -> wait -> LOW -> wait -> HIGH -> wait
        let _ = self.rst.set_high();
        delay.delay_ms(RESET_HOLD_MS);
        let _ = self.rst.set_low();
        delay.delay_ms(RESET_HOLD_MS);
        let _ = self.rst.set_high();
        delay.delay_ms(RESET_HOLD_MS);
    }
}
