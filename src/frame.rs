//! Frame buffer and compositor
//!
//! A [`Frame`] always holds exactly [`PIXELS`] pixels. Every composition copies
//! the background verbatim and then overwrites the bottom [`BAR_ROWS`] rows with
//! the scanner bar: a red band whose intensity peaks at the bar center and falls
//! off linearly to a floor of [`MIN_INTENSITY`], black outside the lit span.
//!
//! ## Example
//!
//! ```
//! use ssd1351_splash::frame::{Frame, HEIGHT, PIXELS};
//! use ssd1351_splash::Color;
//!
//! let background = [Color::BLACK; PIXELS];
//! let mut frame = Frame::new();
//! frame.compose(&background, 64, 20);
//!
//! assert_eq!(frame.pixel(64, HEIGHT - 1), Some(Color::new(0, 0, 31)));
//! assert_eq!(frame.pixel(84, HEIGHT - 1), Some(Color::BLACK));
//! ```

use crate::color::Color;

/// Panel width in pixels
pub const WIDTH: usize = 128;
/// Panel height in pixels
pub const HEIGHT: usize = 128;
/// Pixels per frame
pub const PIXELS: usize = WIDTH * HEIGHT;
/// Bytes per frame on the wire (two per pixel)
pub const BUFFER_SIZE: usize = PIXELS * 2;

/// Rows at the bottom of the frame occupied by the scanner bar
pub const BAR_ROWS: usize = 4;
/// Brightest red level, at the bar center
pub const MAX_INTENSITY: u8 = 31;
/// Dimmest red level anywhere inside the lit span
pub const MIN_INTENSITY: u8 = 8;

/// Red intensity of the bar at `distance` columns from its center
///
/// Returns `None` outside the lit span (`distance >= reach`).
pub fn bar_intensity(distance: i32, reach: i32) -> Option<u8> {
    if reach <= 0 || distance < 0 || distance >= reach {
        return None;
    }
    let max = i32::from(MAX_INTENSITY);
    let level = (max - distance * max / reach).max(i32::from(MIN_INTENSITY));
    Some(level as u8)
}

/// Full-panel pixel buffer
#[derive(Clone, PartialEq)]
pub struct Frame {
    pixels: [Color; PIXELS],
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Frame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .finish_non_exhaustive()
    }
}

impl Frame {
    /// An all-black frame
    pub const fn new() -> Self {
        Self {
            pixels: [Color::BLACK; PIXELS],
        }
    }

    /// Row-major pixels, top-left first
    pub fn pixels(&self) -> &[Color; PIXELS] {
        &self.pixels
    }

    /// Pixel at column `x`, row `y`, or `None` off-panel
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        (x < WIDTH && y < HEIGHT).then(|| self.pixels[y * WIDTH + x])
    }

    /// Set the pixel at column `x`, row `y`; off-panel writes are ignored
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < WIDTH && y < HEIGHT {
            self.pixels[y * WIDTH + x] = color;
        }
    }

    /// Fill every pixel with one color
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Copy `background` and overdraw the scanner bar centered on column `center`
    ///
    /// Columns closer than `reach` to the center are lit with
    /// [`bar_intensity`]; the rest of the bar rows are black.
    pub fn compose(&mut self, background: &[Color; PIXELS], center: i32, reach: i32) {
        self.pixels.copy_from_slice(background);

        let mut band = [Color::BLACK; WIDTH];
        for (x, color) in band.iter_mut().enumerate() {
            let distance = (x as i32 - center).abs();
            if let Some(level) = bar_intensity(distance, reach) {
                *color = Color::new(0, 0, level);
            }
        }

        for row in self.pixels[(HEIGHT - BAR_ROWS) * WIDTH..].chunks_exact_mut(WIDTH) {
            row.copy_from_slice(&band);
        }
    }

    /// Serialize for the controller, high byte of each pixel first
    pub fn write_be_bytes(&self, out: &mut [u8; BUFFER_SIZE]) {
        for (bytes, pixel) in out.chunks_exact_mut(2).zip(self.pixels.iter()) {
            bytes.copy_from_slice(&pixel.to_be_bytes());
        }
    }
}
