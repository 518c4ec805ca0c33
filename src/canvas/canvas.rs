//! RGBA framebuffer the life table is painted on

use std::io::Cursor;

use image::{ImageFormat, RgbImage};

use super::color::Color;
use super::shapes::Shape;
use crate::errors::Result;

/// Framebuffer canvas
///
/// Pixels are RGBA with alpha compositing, stored row-major.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Pixel data (row-major, RGBA)
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a fully transparent canvas (used for offscreen layers)
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_background(width, height, Color::TRANSPARENT)
    }

    /// Create canvas with background color
    pub fn with_background(width: u32, height: u32, bg: Color) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![bg; size],
        }
    }

    /// Get pixel at coordinates
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set pixel at coordinates
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.pixels[idx] = color;
        }
    }

    /// Set pixel with alpha blending; out-of-range coordinates are ignored
    #[inline]
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height) {
            let idx = self.index(x as u32, y as u32);
            self.pixels[idx] = color.blend_over(&self.pixels[idx]);
        }
    }

    /// Draw a shape onto the canvas
    pub fn draw<S: Shape>(&mut self, shape: &S) {
        shape.rasterize(self.width, self.height, &mut self.pixels);
    }

    /// New canvas turned a quarter turn counter-clockwise
    pub fn rotated_ccw(&self) -> Canvas {
        let mut out = Canvas::new(self.height, self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                out.set_pixel(y, self.width - 1 - x, self.pixels[self.index(x, y)]);
            }
        }
        out
    }

    /// Alpha-composite `layer` with its top-left corner at (x, y)
    pub fn composite(&mut self, layer: &Canvas, x: i64, y: i64) {
        for ly in 0..layer.height {
            for lx in 0..layer.width {
                let color = layer.pixels[layer.index(lx, ly)];
                if color.a > 0.0 {
                    self.blend_pixel(x + i64::from(lx), y + i64::from(ly), color);
                }
            }
        }
    }

    /// Flatten onto white and drop alpha
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let color = self.pixels[self.index(x, y)].blend_over(&Color::WHITE);
            image::Rgb(color.to_rgb8())
        })
    }

    /// Encode as PNG
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.to_rgb_image()
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
