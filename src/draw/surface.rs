//! The drawing capability the controller renders through.
//!
//! [`DrawSurface`] is the seam between input handling and pixels: the
//! controller only ever calls these primitives, so tests can substitute a
//! recording surface for the Cairo-backed [`CairoCanvas`](super::CairoCanvas).

use super::color::Color;
use super::font::FontDescriptor;
use crate::import::DecodedImage;
use thiserror::Error;

/// A position on the canvas in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Shape of stroke end points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Pen settings applied to one stroke segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub cap: LineCap,
}

/// Text settings applied to one stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub font: FontDescriptor,
    /// Font size in pixels.
    pub size: f64,
    /// Outline width in effect while stamping.
    pub line_width: f64,
}

/// Errors raised when the raster cannot be serialized.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] cairo::IoError),

    #[error("Pixel data unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),
}

/// Immediate-mode raster drawing primitives.
///
/// Every call is rasterized at once; nothing is retained as vector data.
pub trait DrawSurface {
    /// Canvas width in pixels.
    fn width(&self) -> u32;

    /// Canvas height in pixels.
    fn height(&self) -> u32;

    /// Strokes one straight segment.
    fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle);

    /// Fills a rectangle with a flat color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws an image scaled to exactly cover `dest`.
    fn draw_image(&mut self, image: &DecodedImage, dest: Rect);

    /// Renders `text` with its alphabetic baseline starting at `at`.
    fn stamp_text(&mut self, text: &str, at: Point, style: &TextStyle);

    /// Serializes the current raster as PNG bytes.
    fn export_png(&mut self) -> Result<Vec<u8>, SurfaceError>;

    /// The whole canvas as a rectangle.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width() as f64, self.height() as f64)
    }

    /// Fills the whole canvas with one color.
    fn clear(&mut self, color: Color) {
        let bounds = self.bounds();
        self.fill_rect(bounds, color);
    }
}
