//! Graphics support via embedded-graphics
//!
//! [`Frame`] implements [`DrawTarget`] so backgrounds can be drawn with the
//! embedded-graphics primitives before being handed to a [`Splash`](crate::Splash).
//! Pixels outside the panel are dropped.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//! };
//! use ssd1351_splash::{Color, Frame};
//!
//! let mut frame = Frame::new();
//! let _ = Circle::new(Point::new(34, 34), 60)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::RED, 2))
//!     .draw(&mut frame);
//!
//! // use the drawing as the splash background
//! let background = frame.pixels();
//! # let _ = background;
//! ```

use core::convert::Infallible;

use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::color::Color;
use crate::frame::{Frame, HEIGHT, WIDTH};

impl DrawTarget for Frame {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.set_pixel(x as usize, y as usize, color);
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        Frame::clear(self, color);
        Ok(())
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}
