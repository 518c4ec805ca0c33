//! Text measurement and drawing
//!
//! Two backends:
//! 1. TrueType via `ab_glyph` (anti-aliased, any script the font covers)
//! 2. Built-in 8x8 bitmap glyphs via `font8x8`, used when no font file loads
//!
//! Coordinates follow the image convention: y grows downward and a text box's
//! top edge is the font's ascender line.

use std::path::Path;

use ab_glyph::{point, Font as _, FontArc, PxScale, ScaleFont};
use font8x8::{UnicodeFonts, BASIC_FONTS, GREEK_FONTS, LATIN_FONTS};
use tracing::{debug, warn};

use super::{Canvas, Color};

/// Drawn for characters the bitmap font does not cover
const MISSING_GLYPH: [u8; 8] = [0x00, 0x7E, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];

/// Loaded typeface, cheap to clone and share across threads
#[derive(Clone)]
pub enum Font {
    TrueType(FontArc),
    Builtin,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Font::TrueType(_) => f.write_str("Font::TrueType"),
            Font::Builtin => f.write_str("Font::Builtin"),
        }
    }
}

impl Font {
    /// Load a TrueType/OpenType file, falling back to the built-in bitmap font
    pub fn load_or_builtin(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(bytes) => match FontArc::try_from_vec(bytes) {
                Ok(font) => {
                    debug!("Loaded font {}", path.display());
                    Font::TrueType(font)
                }
                Err(e) => {
                    warn!("Font {} is not usable ({}), using built-in font", path.display(), e);
                    Font::Builtin
                }
            },
            Err(e) => {
                warn!("Cannot read font {} ({}), using built-in font", path.display(), e);
                Font::Builtin
            }
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin)
    }

    /// The same typeface at a pixel size
    pub fn at_size(&self, size: f32) -> FontFace {
        FontFace {
            font: self.clone(),
            size,
        }
    }
}

/// Where the given point sits on the text box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Point is the top-left corner
    LeftTop,
    /// Point is the middle of the top edge
    MiddleTop,
    /// Point is the middle of the left edge
    LeftMiddle,
}

/// Horizontal extent and vertical metrics of a run of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub ascent: f32,
    /// Distance below the baseline, positive
    pub descent: f32,
}

impl TextMetrics {
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// A [`Font`] at one pixel size
#[derive(Debug, Clone)]
pub struct FontFace {
    font: Font,
    size: f32,
}

impl FontFace {
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Integer zoom applied to the 8x8 bitmap glyphs
    fn bitmap_scale(&self) -> u32 {
        ((self.size / 10.0).round() as u32).max(1)
    }

    pub fn measure(&self, text: &str) -> TextMetrics {
        match &self.font {
            Font::TrueType(font) => {
                let scaled = font.as_scaled(PxScale::from(self.size));
                let mut width = 0.0;
                let mut previous = None;
                for c in text.chars() {
                    let id = scaled.glyph_id(c);
                    if let Some(prev) = previous {
                        width += scaled.kern(prev, id);
                    }
                    width += scaled.h_advance(id);
                    previous = Some(id);
                }
                TextMetrics {
                    width,
                    ascent: scaled.ascent(),
                    descent: -scaled.descent(),
                }
            }
            Font::Builtin => {
                let cell = (8 * self.bitmap_scale()) as f32;
                TextMetrics {
                    width: cell * text.chars().count() as f32,
                    ascent: cell,
                    descent: 0.0,
                }
            }
        }
    }

    /// Advance of a capital `A`, the per-character estimate used for wrapping
    pub fn average_char_width(&self) -> f32 {
        let width = self.measure("A").width;
        if width > 0.0 {
            width
        } else {
            self.size * 0.6
        }
    }

    /// Draw `text` anchored at (x, y)
    pub fn draw(&self, canvas: &mut Canvas, text: &str, x: f32, y: f32, anchor: Anchor, color: Color) {
        let metrics = self.measure(text);
        let (left, top) = match anchor {
            Anchor::LeftTop => (x, y),
            Anchor::MiddleTop => (x - metrics.width / 2.0, y),
            Anchor::LeftMiddle => (x, y - metrics.height() / 2.0),
        };

        match &self.font {
            Font::TrueType(font) => draw_outlined(font, self.size, canvas, text, left, top, color),
            Font::Builtin => draw_bitmap(self.bitmap_scale(), canvas, text, left, top, color),
        }
    }

    /// Render `text` alone onto a transparent layer sized to its box
    pub fn render_layer(&self, text: &str, color: Color) -> Canvas {
        let metrics = self.measure(text);
        let mut layer = Canvas::new(
            metrics.width.ceil().max(1.0) as u32,
            metrics.height().ceil().max(1.0) as u32,
        );
        self.draw(&mut layer, text, 0.0, 0.0, Anchor::LeftTop, color);
        layer
    }
}

fn draw_outlined(
    font: &FontArc,
    size: f32,
    canvas: &mut Canvas,
    text: &str,
    left: f32,
    top: f32,
    color: Color,
) {
    let scaled = font.as_scaled(PxScale::from(size));
    let baseline = top + scaled.ascent();
    let mut caret = left;
    let mut previous = None;

    for c in text.chars() {
        let mut glyph = scaled.scaled_glyph(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, glyph.id);
        }
        glyph.position = point(caret, baseline);
        caret += scaled.h_advance(glyph.id);
        previous = Some(glyph.id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                canvas.blend_pixel(
                    bounds.min.x as i64 + i64::from(gx),
                    bounds.min.y as i64 + i64::from(gy),
                    color.with_coverage(coverage),
                );
            });
        }
    }
}

fn bitmap_glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| GREEK_FONTS.get(c))
        .unwrap_or(MISSING_GLYPH)
}

fn draw_bitmap(scale: u32, canvas: &mut Canvas, text: &str, left: f32, top: f32, color: Color) {
    let scale = i64::from(scale);
    let origin_x = left.round() as i64;
    let origin_y = top.round() as i64;

    for (i, c) in text.chars().enumerate() {
        let glyph_x = origin_x + i as i64 * 8 * scale;
        for (row, bits) in bitmap_glyph(c).iter().enumerate() {
            for col in 0..8 {
                // Bit 0 is the leftmost pixel
                if bits & (1u8 << col) == 0 {
                    continue;
                }
                for dy in 0..scale {
                    for dx in 0..scale {
                        canvas.blend_pixel(
                            glyph_x + col * scale + dx,
                            origin_y + row as i64 * scale + dy,
                            color,
                        );
                    }
                }
            }
        }
    }
}
