//! Built-in welcome image
//!
//! The image is supplied at build time as `assets/welcome.bgr565`: raw
//! big-endian BGR-565, row-major, exactly one 128x128 frame. It is decoded while
//! compiling, so an asset of the wrong size fails the build.

use crate::color::Color;
use crate::frame::{BUFFER_SIZE, PIXELS};

/// The welcome background shown behind the scanner bar
pub static WELCOME_IMAGE: [Color; PIXELS] = decode(include_bytes!("../assets/welcome.bgr565"));

/// Decode a raw big-endian BGR-565 frame
///
/// # Panics
///
/// In a const context only: a buffer that is not exactly one frame long stops
/// compilation.
pub const fn decode(bytes: &[u8]) -> [Color; PIXELS] {
    assert!(
        bytes.len() == BUFFER_SIZE,
        "background must be 128x128 BGR-565"
    );

    let mut pixels = [Color::BLACK; PIXELS];
    let mut i = 0;
    while i < PIXELS {
        pixels[i] = Color::from_raw(u16::from_be_bytes([bytes[2 * i], bytes[2 * i + 1]]));
        i += 1;
    }
    pixels
}
