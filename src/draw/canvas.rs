//! Cairo-backed raster canvas.

use super::color::Color;
use super::surface::{DrawSurface, LineCap, Point, Rect, StrokeStyle, SurfaceError, TextStyle};
use crate::import::DecodedImage;
use cairo::{Context, Format, ImageSurface};
use log::debug;

/// Fixed canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 800;
/// Fixed canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 500;

/// An ARGB32 image surface that all drawing lands on.
///
/// A Cairo context is created per operation so the surface stays exclusively
/// owned between calls and its pixels can be read back.
pub struct CairoCanvas {
    surface: ImageSurface,
}

impl CairoCanvas {
    /// Creates a transparent canvas of the fixed 800x500 size.
    pub fn new() -> Result<Self, SurfaceError> {
        Self::with_size(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    /// Creates a transparent canvas of an arbitrary size.
    pub fn with_size(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let surface = ImageSurface::create(Format::ARgb32, width as i32, height as i32)?;
        Ok(Self { surface })
    }

    /// Reads one pixel as un-premultiplied `[r, g, b, a]`.
    ///
    /// Returns `None` outside the canvas or if the pixel data is unavailable.
    pub fn pixel(&mut self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }

        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
        Some(unpremultiply(u32::from_ne_bytes(bytes)))
    }

    /// Returns true if every pixel equals `expected` (compared as 8-bit RGBA).
    pub fn is_uniform(&mut self, expected: Color) -> bool {
        let target = color_to_rgba8(expected);
        self.surface.flush();
        let width = self.width() as usize;
        let stride = self.surface.stride() as usize;
        let Ok(data) = self.surface.data() else {
            return false;
        };

        data.chunks(stride).all(|row| {
            row[..width * 4].chunks_exact(4).all(|px| {
                let bytes: [u8; 4] = [px[0], px[1], px[2], px[3]];
                unpremultiply(u32::from_ne_bytes(bytes)) == target
            })
        })
    }

    fn context(&self) -> Option<Context> {
        match Context::new(&self.surface) {
            Ok(ctx) => Some(ctx),
            Err(err) => {
                debug!("Failed to create Cairo context: {err}");
                None
            }
        }
    }
}

impl DrawSurface for CairoCanvas {
    fn width(&self) -> u32 {
        self.surface.width() as u32
    }

    fn height(&self) -> u32 {
        self.surface.height() as u32
    }

    fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        let Some(ctx) = self.context() else {
            return;
        };

        set_source(&ctx, style.color);
        ctx.set_line_width(style.width);
        ctx.set_line_cap(cairo_line_cap(style.cap));
        ctx.set_line_join(cairo::LineJoin::Round);

        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        if let Err(err) = ctx.stroke() {
            debug!("Stroke failed: {err}");
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(ctx) = self.context() else {
            return;
        };

        set_source(&ctx, color);
        ctx.rectangle(rect.x, rect.y, rect.width, rect.height);
        if let Err(err) = ctx.fill() {
            debug!("Fill failed: {err}");
        }
    }

    fn draw_image(&mut self, image: &DecodedImage, dest: Rect) {
        if image.width <= 0 || image.height <= 0 {
            return;
        }

        let source = match ImageSurface::create_for_data(
            image.data.clone(),
            Format::ARgb32,
            image.width,
            image.height,
            image.stride,
        ) {
            Ok(surface) => surface,
            Err(err) => {
                debug!("Rejected decoded image buffer: {err}");
                return;
            }
        };

        let Some(ctx) = self.context() else {
            return;
        };

        ctx.save().ok();
        ctx.translate(dest.x, dest.y);
        ctx.scale(
            dest.width / image.width as f64,
            dest.height / image.height as f64,
        );
        // Pad the edges so upscaled borders don't fade into transparency
        ctx.rectangle(0.0, 0.0, image.width as f64, image.height as f64);
        ctx.clip();
        let painted = ctx.set_source_surface(&source, 0.0, 0.0).and_then(|_| {
            ctx.source().set_extend(cairo::Extend::Pad);
            ctx.paint()
        });
        if let Err(err) = painted {
            debug!("Image paint failed: {err}");
        }
        ctx.restore().ok();
    }

    fn stamp_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let Some(ctx) = self.context() else {
            return;
        };

        // Keep the outline width scoped to this stamp
        ctx.save().ok();
        ctx.set_line_width(style.line_width);

        let layout = pangocairo::functions::create_layout(&ctx);
        layout.set_font_description(Some(&style.font.to_pango(style.size)));
        layout.set_text(text);

        // Pango positions from the top-left; the stamp point is the baseline
        let baseline = layout.baseline() as f64 / pango::SCALE as f64;
        ctx.move_to(at.x, at.y - baseline);

        set_source(&ctx, style.color);
        pangocairo::functions::show_layout(&ctx, &layout);

        ctx.restore().ok();
    }

    fn export_png(&mut self) -> Result<Vec<u8>, SurfaceError> {
        self.surface.flush();
        let mut bytes = Vec::new();
        self.surface.write_to_png(&mut bytes)?;
        Ok(bytes)
    }
}

fn set_source(ctx: &Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
}

fn cairo_line_cap(cap: LineCap) -> cairo::LineCap {
    match cap {
        LineCap::Butt => cairo::LineCap::Butt,
        LineCap::Round => cairo::LineCap::Round,
        LineCap::Square => cairo::LineCap::Square,
    }
}

/// Converts a premultiplied ARGB32 pixel into straight `[r, g, b, a]`.
fn unpremultiply(argb: u32) -> [u8; 4] {
    let a = (argb >> 24) as u8;
    let channel = |shift: u32| {
        let c = ((argb >> shift) & 0xff) as u32;
        if a == 0 {
            0
        } else {
            ((c * 255 + a as u32 / 2) / a as u32).min(255) as u8
        }
    };
    [channel(16), channel(8), channel(0), a]
}

fn color_to_rgba8(color: Color) -> [u8; 4] {
    let to_u8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [
        to_u8(color.r),
        to_u8(color.g),
        to_u8(color.b),
        to_u8(color.a),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};
    use crate::draw::font::FontDescriptor;

    fn pen(color: Color, width: f64) -> StrokeStyle {
        StrokeStyle {
            color,
            width,
            cap: LineCap::Round,
        }
    }

    #[test]
    fn new_canvas_is_transparent_and_fixed_size() {
        let mut canvas = CairoCanvas::new().unwrap();
        assert_eq!(canvas.width(), 800);
        assert_eq!(canvas.height(), 500);
        assert_eq!(canvas.pixel(10, 10), Some([0, 0, 0, 0]));
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut canvas = CairoCanvas::with_size(64, 32).unwrap();
        canvas.clear(WHITE);
        assert!(canvas.is_uniform(WHITE));
        assert_eq!(canvas.pixel(63, 31), Some([255, 255, 255, 255]));
    }

    #[test]
    fn stroke_segment_marks_pixels_along_the_line() {
        let mut canvas = CairoCanvas::with_size(100, 100).unwrap();
        canvas.clear(WHITE);
        canvas.stroke_segment(
            Point::new(10.0, 50.0),
            Point::new(90.0, 50.0),
            &pen(BLACK, 6.0),
        );

        assert_eq!(canvas.pixel(50, 50), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(50, 10), Some([255, 255, 255, 255]));
        assert!(!canvas.is_uniform(WHITE));
    }

    #[test]
    fn draw_image_scales_to_destination() {
        let mut canvas = CairoCanvas::with_size(80, 50).unwrap();
        // 2x2 opaque red image, premultiplied ARGB32
        let px = 0xffff_0000u32.to_ne_bytes();
        let image = DecodedImage {
            width: 2,
            height: 2,
            stride: 8,
            data: px.iter().copied().cycle().take(16).collect(),
        };

        let bounds = canvas.bounds();
        canvas.draw_image(&image, bounds);
        assert!(canvas.is_uniform(RED));
    }

    #[test]
    fn empty_text_stamp_draws_nothing() {
        let mut canvas = CairoCanvas::with_size(100, 100).unwrap();
        canvas.clear(WHITE);
        let style = TextStyle {
            color: BLACK,
            font: FontDescriptor::default(),
            size: 48.0,
            line_width: 1.0,
        };
        canvas.stamp_text("", Point::new(10.0, 60.0), &style);
        assert!(canvas.is_uniform(WHITE));
    }

    #[test]
    fn export_produces_png_signature() {
        let mut canvas = CairoCanvas::with_size(16, 16).unwrap();
        canvas.clear(WHITE);
        let bytes = canvas.export_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn pixel_outside_canvas_is_none() {
        let mut canvas = CairoCanvas::with_size(4, 4).unwrap();
        assert_eq!(canvas.pixel(4, 0), None);
    }
}
