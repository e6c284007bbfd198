//! Error types for the splash
//!
//! - [`BuilderError`]: a [`Builder`](crate::Builder) value was rejected
//! - [`Error`]: a panel operation failed on the wire
//! - [`InterfaceError`](crate::interface::InterfaceError): the SPI or GPIO
//!   failure underneath an [`Error`]
//!
//! ## Example
//!
//! ```
//! use ssd1351_splash::{Builder, BuilderError};
//!
//! // A scanner bar wider than the panel
//! let result = Builder::new().bar_width(400).build();
//! assert!(matches!(result, Err(BuilderError::InvalidBarWidth(400))));
//!
//! // DC and RST sharing one GPIO line
//! let result = Builder::new().dc_line(25).rst_line(25).build();
//! assert!(result.is_err());
//! ```

use crate::frame::WIDTH;
use crate::interface::DisplayInterface;

/// Failure of a panel operation
///
/// Carries the interface's own error type so callers can inspect the SPI or
/// GPIO cause.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// A command or data transfer was not delivered
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "panel transfer failed: {e:?}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Rejected configuration value
///
/// Raised by [`Builder::build`](crate::config::Builder::build) before any
/// device is opened.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// SPI clock rate of zero
    InvalidClockRate,
    /// Transfer size limit of zero bytes
    InvalidTransferSize,
    /// Scanner bar width outside `2..=WIDTH`
    InvalidBarWidth(i32),
    /// Scanner step of zero or less
    InvalidBarStep(i32),
    /// DC and RST requested on the same GPIO line
    LineConflict(u32),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidClockRate => write!(f, "SPI clock rate must be non-zero"),
            Self::InvalidTransferSize => write!(f, "Transfer size limit must be non-zero"),
            Self::InvalidBarWidth(width) => {
                write!(f, "Invalid bar width {width} (must be 2..={WIDTH})")
            }
            Self::InvalidBarStep(step) => write!(f, "Invalid bar step {step} (must be positive)"),
            Self::LineConflict(line) => {
                write!(f, "DC and RST cannot share GPIO line {line}")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
