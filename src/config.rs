//! Splash configuration types and builder
//!
//! The defaults describe the wiring of the target board: the panel on
//! `/dev/spidev0.0` at 40 MHz, DC on GPIO 24 and RST on GPIO 25 of
//! `/dev/gpiochip0`, and a 20 column bar moving 4 columns every 30ms.

pub use crate::error::BuilderError;
use crate::frame::WIDTH;
use crate::interface::DEFAULT_MAX_TRANSFER;
use crate::scanner::Scanner;
use crate::splash::DEFAULT_FRAME_INTERVAL_MS;

/// Runtime configuration
///
/// Use [`Builder`] to create a validated Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// SPI character device
    pub spi_device: &'static str,
    /// GPIO character device holding the DC and RST lines
    pub gpio_chip: &'static str,
    /// Data/Command line offset
    pub dc_line: u32,
    /// Reset line offset
    pub rst_line: u32,
    /// Consumer label attached to the requested GPIO lines
    pub consumer: &'static str,
    /// SPI clock rate in Hz
    pub spi_clock_hz: u32,
    /// Largest payload per SPI write, in bytes
    pub max_transfer: usize,
    /// Pause between frames in milliseconds
    pub frame_interval_ms: u32,
    /// Full width of the scanner bar in columns
    pub bar_width: i32,
    /// Columns the bar moves per frame
    pub bar_step: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spi_device: "/dev/spidev0.0",
            gpio_chip: "/dev/gpiochip0",
            dc_line: 24,
            rst_line: 25,
            consumer: "boot-splash",
            spi_clock_hz: 40_000_000,
            max_transfer: DEFAULT_MAX_TRANSFER,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
            bar_width: Scanner::DEFAULT_WIDTH,
            bar_step: Scanner::DEFAULT_STEP,
        }
    }
}

/// Builder for constructing the splash configuration
///
/// # Example
///
/// ```
/// use ssd1351_splash::Builder;
///
/// let config = match Builder::new().spi_clock_hz(20_000_000).bar_step(2).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.spi_device, "/dev/spidev0.0");
/// assert_eq!(config.bar_step, 2);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    /// Create a new Builder with the board defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SPI device path
    pub fn spi_device(mut self, path: &'static str) -> Self {
        self.config.spi_device = path;
        self
    }

    /// Set the GPIO chip path
    pub fn gpio_chip(mut self, path: &'static str) -> Self {
        self.config.gpio_chip = path;
        self
    }

    /// Set the Data/Command line offset
    pub fn dc_line(mut self, line: u32) -> Self {
        self.config.dc_line = line;
        self
    }

    /// Set the reset line offset
    pub fn rst_line(mut self, line: u32) -> Self {
        self.config.rst_line = line;
        self
    }

    /// Set the GPIO consumer label
    pub fn consumer(mut self, label: &'static str) -> Self {
        self.config.consumer = label;
        self
    }

    /// Set the SPI clock rate
    pub fn spi_clock_hz(mut self, hz: u32) -> Self {
        self.config.spi_clock_hz = hz;
        self
    }

    /// Set the largest payload per SPI write
    pub fn max_transfer(mut self, bytes: usize) -> Self {
        self.config.max_transfer = bytes;
        self
    }

    /// Set the pause between frames
    pub fn frame_interval_ms(mut self, ms: u32) -> Self {
        self.config.frame_interval_ms = ms;
        self
    }

    /// Set the scanner bar width
    pub fn bar_width(mut self, columns: i32) -> Self {
        self.config.bar_width = columns;
        self
    }

    /// Set the scanner step per frame
    pub fn bar_step(mut self, columns: i32) -> Self {
        self.config.bar_step = columns;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns a [`BuilderError`] if:
    /// - the SPI clock or transfer limit is zero
    /// - the bar width is outside `2..=WIDTH`
    /// - the bar step is not positive
    /// - DC and RST name the same line
    pub fn build(self) -> Result<Config, BuilderError> {
        let config = self.config;

        if config.spi_clock_hz == 0 {
            return Err(BuilderError::InvalidClockRate);
        }
        if config.max_transfer == 0 {
            return Err(BuilderError::InvalidTransferSize);
        }
        if !(2..=WIDTH as i32).contains(&config.bar_width) {
            return Err(BuilderError::InvalidBarWidth(config.bar_width));
        }
        if config.bar_step <= 0 {
            return Err(BuilderError::InvalidBarStep(config.bar_step));
        }
        if config.dc_line == config.rst_line {
            return Err(BuilderError::LineConflict(config.dc_line));
        }

        Ok(config)
    }
}
