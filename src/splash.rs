//! Fixed-rate animation loop
//!
//! [`Splash`] composes the background with the scanner bar, flushes the frame,
//! advances the bar and sleeps, until the shutdown flag is raised. The flag is
//! only checked between ticks: a frame that has started is always completed.
//! Time spent composing and flushing is not subtracted from the sleep.
//!
//! ## Example
//!
//! ```rust,no_run
//! use core::sync::atomic::AtomicBool;
//! use embedded_hal::delay::DelayNs;
//! use ssd1351_splash::{Display, DisplayInterface, Splash, Scanner, WELCOME_IMAGE};
//! # struct MockInterface;
//! # impl DisplayInterface for MockInterface {
//! #     type Error = core::convert::Infallible;
//! #     fn send_command(&mut self, _command: u8) -> Result<(), Self::Error> { Ok(()) }
//! #     fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn reset<D: DelayNs>(&mut self, _delay: &mut D) {}
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! static SHUTDOWN: AtomicBool = AtomicBool::new(false);
//!
//! let mut display = Display::new(MockInterface);
//! let _ = display.init(&mut delay);
//! let _ = display.power_on();
//!
//! let mut splash = Splash::new(&WELCOME_IMAGE, Scanner::default());
//! let _frames = splash.run(&mut display, &SHUTDOWN, &mut delay);
//! ```

use core::sync::atomic::{AtomicBool, Ordering};
use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::config::Config;
use crate::display::Display;
use crate::error::Error;
use crate::frame::{Frame, PIXELS};
use crate::interface::DisplayInterface;
use crate::scanner::Scanner;

/// Default pause between frames, for roughly 33 frames per second
pub const DEFAULT_FRAME_INTERVAL_MS: u32 = 30;

/// Background, frame buffer and scanner state of the boot animation
pub struct Splash<'a> {
    background: &'a [Color; PIXELS],
    frame: Frame,
    scanner: Scanner,
    frame_interval_ms: u32,
}

impl<'a> Splash<'a> {
    /// Animate `scanner` over `background` at the default frame interval
    pub fn new(background: &'a [Color; PIXELS], scanner: Scanner) -> Self {
        Self {
            background,
            frame: Frame::new(),
            scanner,
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }

    /// Bar geometry and timing taken from `config`
    pub fn from_config(background: &'a [Color; PIXELS], config: &Config) -> Self {
        Self::new(background, Scanner::new(config.bar_width, config.bar_step))
            .with_frame_interval(config.frame_interval_ms)
    }

    /// Override the pause between frames
    pub fn with_frame_interval(mut self, interval_ms: u32) -> Self {
        self.frame_interval_ms = interval_ms;
        self
    }

    /// The last composed frame
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Current scanner state
    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Compose and flush one frame, then advance the bar
    ///
    /// The bar advances even when the flush fails, so the animation keeps its
    /// pace if the panel recovers.
    pub fn tick<I: DisplayInterface>(&mut self, display: &mut Display<I>) -> Result<(), Error<I>> {
        self.frame
            .compose(self.background, self.scanner.center(), self.scanner.width());
        let flushed = display.flush(&self.frame);
        self.scanner.advance();
        flushed
    }

    /// Run until `shutdown` is set, returning the number of frames produced
    ///
    /// Flush failures are logged and the loop carries on; nothing is retried.
    pub fn run<I, D>(
        &mut self,
        display: &mut Display<I>,
        shutdown: &AtomicBool,
        delay: &mut D,
    ) -> u32
    where
        I: DisplayInterface,
        D: DelayNs,
    {
        let mut frames: u32 = 0;
        let mut failing = false;

        while !shutdown.load(Ordering::Acquire) {
            match self.tick(display) {
                Ok(()) if failing => {
                    log::info!("splash: panel writes recovered at frame {frames}");
                    failing = false;
                }
                Ok(()) => {}
                Err(e) if !failing => {
                    log::warn!("splash: frame {frames} not delivered: {e}");
                    failing = true;
                }
                Err(_) => {}
            }
            frames = frames.wrapping_add(1);
            delay.delay_ms(self.frame_interval_ms);
        }

        log::info!("splash: stopped after {frames} frames");
        frames
    }
}
