//! SSD1351 Boot Splash
//!
//! Early-boot splash for 128x128 SSD1351 OLED panels: a built-in welcome image
//! with a red scanner bar sweeping back and forth along the bottom edge until
//! the process is told to stop.
//!
//! ## Features
//!
//! - `no_std` compatible core (protocol, compositor, animation loop)
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Linux spidev + GPIO character device backend and the `boot-splash`
//!   binary (with `linux` feature)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use core::sync::atomic::AtomicBool;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use ssd1351_splash::{Builder, Display, Interface, Splash, WELCOME_IMAGE};
//!
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
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! static SHUTDOWN: AtomicBool = AtomicBool::new(false);
//!
//! let config = match Builder::new().build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut interface = Interface::new(spi, dc, rst);
//! interface.set_max_transfer(config.max_transfer);
//!
//! let mut display = Display::new(interface);
//! if display.init(&mut delay).and_then(|()| display.power_on()).is_err() {
//!     return;
//! }
//!
//! let mut splash = Splash::from_config(&WELCOME_IMAGE, &config);
//! let _frames = splash.run(&mut display, &SHUTDOWN, &mut delay);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(test)]
extern crate alloc;

/// Built-in welcome image
pub mod background;
/// BGR-565 pixel color
pub mod color;
/// SSD1351 command definitions
pub mod command;
/// Splash configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Frame buffer and compositor
pub mod frame;
/// Hardware interface abstraction
pub mod interface;
/// Scanner bar animation state
pub mod scanner;
/// Fixed-rate animation loop
pub mod splash;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
#[cfg_attr(docsrs, doc(cfg(feature = "graphics")))]
pub mod graphics;

/// Linux spidev and GPIO character device backend (requires `linux` feature)
#[cfg(feature = "linux")]
#[cfg_attr(docsrs, doc(cfg(feature = "linux")))]
pub mod linux;

pub use background::WELCOME_IMAGE;
pub use color::Color;
pub use config::{Builder, Config};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use frame::Frame;
pub use interface::InterfaceError;
pub use interface::{DEFAULT_MAX_TRANSFER, DisplayInterface, Interface};
pub use scanner::{Direction, Scanner};
pub use splash::Splash;
