//! Linux hardware backend
//!
//! Opens the panel through the kernel's `spidev` and GPIO character device
//! interfaces. [`Hardware`] owns the SPI device, the GPIO chip and both line
//! handles; all of them are closed when it is dropped. If acquisition fails
//! part way, whatever was already opened is closed before the error returns.

use std::io;

use embedded_hal::delay::DelayNs;
use linux_embedded_hal::gpio_cdev::{self, Chip, LineRequestFlags};
use linux_embedded_hal::spidev::{SpiModeFlags, Spidev, SpidevOptions};
use linux_embedded_hal::{CdevPin, SpidevDevice};

use crate::config::Config;
use crate::display::Display;
use crate::error::Error;
use crate::interface::Interface;

/// [`Interface`] over spidev and two GPIO character device lines
pub type PanelInterface = Interface<SpidevDevice, CdevPin, CdevPin>;

/// Errors raised while bringing up the panel
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    /// The SPI device node could not be opened
    #[error("cannot open SPI device {path}")]
    SpiOpen {
        /// Device path
        path: &'static str,
        /// Underlying error
        #[source]
        source: io::Error,
    },
    /// Mode, word size or clock rate was rejected
    #[error("cannot configure SPI device {path}")]
    SpiConfigure {
        /// Device path
        path: &'static str,
        /// Underlying error
        #[source]
        source: io::Error,
    },
    /// The GPIO chip could not be opened
    #[error("cannot open GPIO chip {path}")]
    ChipOpen {
        /// Chip path
        path: &'static str,
        /// Underlying error
        #[source]
        source: gpio_cdev::errors::Error,
    },
    /// A line could not be requested as an output
    #[error("cannot acquire GPIO line {line} as output")]
    LineAcquisition {
        /// Line offset
        line: u32,
        /// Underlying error
        #[source]
        source: gpio_cdev::errors::Error,
    },
    /// Reset or the init sequence failed on the wire
    #[error("panel initialization failed")]
    PanelInit(#[source] Error<PanelInterface>),
}

/// Exclusively owned panel hardware
///
/// Dropping it closes the SPI device, both line handles and the GPIO chip.
pub struct Hardware {
    display: Display<PanelInterface>,
    // kept open for as long as the lines are held
    _chip: Chip,
}

impl Hardware {
    /// Open and configure the SPI device, then request DC and RST as outputs
    pub fn open(config: &Config) -> Result<Self, SetupError> {
        let mut spi = Spidev::open(config.spi_device).map_err(|source| SetupError::SpiOpen {
            path: config.spi_device,
            source,
        })?;

        let options = SpidevOptions::new()
            .bits_per_word(8)
            .max_speed_hz(config.spi_clock_hz)
            .mode(SpiModeFlags::SPI_MODE_0)
            .build();
        spi.configure(&options)
            .map_err(|source| SetupError::SpiConfigure {
                path: config.spi_device,
                source,
            })?;

        let mut chip = Chip::new(config.gpio_chip).map_err(|source| SetupError::ChipOpen {
            path: config.gpio_chip,
            source,
        })?;
        let dc = request_output(&mut chip, config.dc_line, config.consumer)?;
        let rst = request_output(&mut chip, config.rst_line, config.consumer)?;

        let mut interface = Interface::new(SpidevDevice(spi), dc, rst);
        interface.set_max_transfer(config.max_transfer);

        log::info!(
            "hardware: {} at {} Hz, DC={} RST={} on {}",
            config.spi_device,
            config.spi_clock_hz,
            config.dc_line,
            config.rst_line,
            config.gpio_chip
        );

        Ok(Self {
            display: Display::new(interface),
            _chip: chip,
        })
    }

    /// Reset the controller, send the init sequence and turn the panel on
    pub fn start<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), SetupError> {
        self.display
            .init(delay)
            .and_then(|()| self.display.power_on())
            .map_err(SetupError::PanelInit)
    }

    /// The panel driver
    pub fn display_mut(&mut self) -> &mut Display<PanelInterface> {
        &mut self.display
    }
}

fn request_output(chip: &mut Chip, line: u32, consumer: &str) -> Result<CdevPin, SetupError> {
    let acquisition = |source| SetupError::LineAcquisition { line, source };

    let handle = chip
        .get_line(line)
        .and_then(|l| l.request(LineRequestFlags::OUTPUT, 0, consumer))
        .map_err(acquisition)?;
    CdevPin::new(handle).map_err(acquisition)
}
