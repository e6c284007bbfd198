//! 16-bit BGR-565 pixel color
//!
//! The SSD1351 is configured for BGR order in 65k color mode, so a pixel packs
//! its channels as `BBBBBGGGGGGRRRRR`: red lives in the five least significant
//! bits.
//!
//! | Channel | Bits   | Range  |
//! |---------|--------|--------|
//! | Blue    | 15..11 | 0..=31 |
//! | Green   | 10..5  | 0..=63 |
//! | Red     | 4..0   | 0..=31 |
//!
//! ## Example
//!
//! ```
//! use ssd1351_splash::Color;
//!
//! let dim_red = Color::new(0, 0, 8);
//! assert_eq!(dim_red.raw(), 0x0008);
//! assert_eq!(Color::RED.to_be_bytes(), [0x00, 0x1F]);
//! ```

/// One pixel in the panel's BGR-565 encoding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color(u16);

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU16;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::Rgb565> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::Rgb565) -> Self {
        use embedded_graphics_core::pixelcolor::RgbColor;

        Self::new(color.b(), color.g(), color.r())
    }
}

impl Color {
    /// All channels off
    pub const BLACK: Self = Self(0x0000);
    /// Full-intensity red
    pub const RED: Self = Self(0x001F);

    /// Maximum value of the 5-bit red and blue channels
    pub const MAX_RED: u8 = 0x1F;

    /// Pack channel intensities; bits beyond each channel's width are dropped
    pub const fn new(blue: u8, green: u8, red: u8) -> Self {
        Self(((blue as u16 & 0x1F) << 11) | ((green as u16 & 0x3F) << 5) | (red as u16 & 0x1F))
    }

    /// Wrap an already-encoded pixel value
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// The encoded pixel value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Blue channel, 0..=31
    pub const fn blue(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel, 0..=63
    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Red channel, 0..=31
    pub const fn red(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Wire order for the controller: high byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}
