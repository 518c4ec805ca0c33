//! # Canvas - raster drawing surface for the life table
//!
//! ```text
//!   shapes (Rectangle, Line, Polygon) ──┐
//!                                       ├──► Canvas (RGBA, alpha blended) ──► PNG bytes
//!   text (TrueType | built-in bitmap) ──┘
//! ```
//!
//! Offscreen layers are plain canvases created transparent; they can be
//! rotated and composited back, which is how vertical labels are drawn.

#[allow(clippy::module_inception)]
mod canvas;
mod color;
mod shapes;
mod text;

pub use canvas::Canvas;
pub use color::Color;
pub use shapes::{Line, Point, Polygon, Rectangle, Shape};
pub use text::{Anchor, Font, FontFace, TextMetrics};
