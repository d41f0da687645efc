//! Heap-allocated RGBA canvas implementing `DrawTarget<Color = Rgb888>`.
//!
//! Pixels start fully transparent so the rounded corners of the widget
//! background stay see-through; every drawn pixel is opaque.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Bytes per pixel (R, G, B, A)
const CHANNELS: usize = 4;

/// Largest pixel buffer a canvas will allocate (64 MiB, ~4096x4096)
pub const MAX_CANVAS_BYTES: usize = 64 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Allocate a transparent canvas.
    /// Returns `None` if the buffer would exceed `MAX_CANVAS_BYTES`.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(CHANNELS)
            .filter(|&len| len <= MAX_CANVAS_BYTES)?;
        Some(Self {
            width,
            height,
            pixels: vec![0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA value at (x, y), or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.offset(x as usize, y as usize);
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[idx..idx + CHANNELS]);
        Some(px)
    }

    /// Opaque color at (x, y); `None` for transparent or out-of-bounds pixels
    pub fn color_at(&self, x: u32, y: u32) -> Option<Rgb888> {
        match self.pixel(x, y)? {
            [r, g, b, 0xFF] => Some(Rgb888::new(r, g, b)),
            _ => None,
        }
    }

    /// Row-major RGBA bytes
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width as usize + x) * CHANNELS
    }

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb888) {
        let idx = self.offset(x, y);
        self.pixels[idx..idx + CHANNELS].copy_from_slice(&[color.r(), color.g(), color.b(), 0xFF]);
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let w = self.width as i32;
        let h = self.height as i32;

        for Pixel(coord, color) in pixels {
            if coord.x >= 0 && coord.y >= 0 && coord.x < w && coord.y < h {
                self.set_pixel(coord.x as usize, coord.y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let w = self.width as i64;
        let h = self.height as i64;

        // Clamp the area to canvas bounds
        let x0 = area.top_left.x as i64;
        let y0 = area.top_left.y as i64;
        let x_start = x0.clamp(0, w) as usize;
        let y_start = y0.clamp(0, h) as usize;
        let x_end = (x0 + area.size.width as i64).clamp(0, w) as usize;
        let y_end = (y0 + area.size.height as i64).clamp(0, h) as usize;

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}
