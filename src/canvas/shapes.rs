//! Geometric shapes for canvas drawing

use super::Color;

/// 2D point with f64 coordinates (subpixel precision)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Shape trait for drawable primitives
pub trait Shape {
    /// Draw the shape onto a pixel buffer
    fn rasterize(&self, width: u32, height: u32, pixels: &mut [Color]);
}

#[inline]
fn plot(pixels: &mut [Color], width: u32, height: u32, x: i64, y: i64, color: Color) {
    if x >= 0 && y >= 0 && x < i64::from(width) && y < i64::from(height) {
        let idx = (y as u64 * u64::from(width) + x as u64) as usize;
        if let Some(px) = pixels.get_mut(idx) {
            *px = color.blend_over(px);
        }
    }
}

/// Box with inclusive pixel corners, optional fill and 1-px outline
#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
    pub fill: Option<Color>,
    pub outline: Option<Color>,
}

impl Rectangle {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
            fill: None,
            outline: None,
        }
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn with_outline(mut self, color: Color) -> Self {
        self.outline = Some(color);
        self
    }
}

impl Shape for Rectangle {
    fn rasterize(&self, width: u32, height: u32, pixels: &mut [Color]) {
        for y in self.y0..=self.y1 {
            for x in self.x0..=self.x1 {
                let on_edge = x == self.x0 || x == self.x1 || y == self.y0 || y == self.y1;
                let color = match (on_edge, self.outline, self.fill) {
                    (true, Some(outline), _) => outline,
                    (_, _, Some(fill)) => fill,
                    _ => continue,
                };
                plot(pixels, width, height, x, y, color);
            }
        }
    }
}

/// Axis-aligned line drawn as a solid band `width` pixels thick
///
/// The band runs along the dominant axis of the segment, at the start
/// point's other coordinate.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub color: Color,
    pub width: f64,
}

impl Line {
    pub fn new(start: Point, end: Point, color: Color) -> Self {
        Self {
            start,
            end,
            color,
            width: 1.0,
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    fn is_horizontal(&self) -> bool {
        (self.end.x - self.start.x).abs() >= (self.end.y - self.start.y).abs()
    }
}

impl Shape for Line {
    fn rasterize(&self, width: u32, height: u32, pixels: &mut [Color]) {
        let thickness = self.width.round().max(1.0) as i64;
        let before = thickness / 2;
        let after = thickness - before - 1;

        let band = if self.is_horizontal() {
            let y = self.start.y.round() as i64;
            let (x0, x1) = (self.start.x.round() as i64, self.end.x.round() as i64);
            Rectangle::new(x0, y - before, x1, y + after)
        } else {
            let x = self.start.x.round() as i64;
            let (y0, y1) = (self.start.y.round() as i64, self.end.y.round() as i64);
            Rectangle::new(x - before, y0, x + after, y1)
        };
        band.with_fill(self.color).rasterize(width, height, pixels);
    }
}

/// Filled polygon (arrowheads)
#[derive(Debug, Clone)]
pub struct Polygon {
    pub vertices: Vec<Point>,
    pub color: Color,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>, color: Color) -> Self {
        Self { vertices, color }
    }

    /// Even-odd test, with points on an edge counted as inside
    fn covers(&self, p: Point) -> bool {
        let n = self.vertices.len();
        let mut inside = false;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];

            let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
            let within = p.x >= a.x.min(b.x)
                && p.x <= a.x.max(b.x)
                && p.y >= a.y.min(b.y)
                && p.y <= a.y.max(b.y);
            if cross.abs() < 1e-9 && within {
                return true;
            }

            if (a.y > p.y) != (b.y > p.y) {
                let x_at = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x_at {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Bounding box of the vertices
    fn bounds(&self) -> Rect {
        if self.vertices.is_empty() {
            return Rect::default();
        }
        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for p in &self.vertices {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

impl Shape for Polygon {
    fn rasterize(&self, width: u32, height: u32, pixels: &mut [Color]) {
        if self.vertices.len() < 3 {
            return;
        }
        let b = self.bounds();
        for py in (b.y.floor() as i64)..=(b.bottom().ceil() as i64) {
            for px in (b.x.floor() as i64)..=(b.right().ceil() as i64) {
                if self.covers(Point::new(px as f64, py as f64)) {
                    plot(pixels, width, height, px, py, self.color);
                }
            }
        }
    }
}
