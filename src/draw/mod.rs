//! Raster drawing primitives (Cairo-based).
//!
//! This module defines the drawing side of the board:
//! - [`Color`]: RGBA color representation with hex parsing and constants
//! - [`DrawingContext`]: pen state with canvas-style save/restore
//! - [`DrawSurface`]: the primitives the controller renders through
//! - [`CairoCanvas`]: the fixed-size 800x500 raster implementation

pub mod canvas;
pub mod color;
pub mod context;
pub mod font;
pub mod surface;

// Re-export commonly used types at module level
pub use canvas::{CANVAS_HEIGHT, CANVAS_WIDTH, CairoCanvas};
pub use color::{BACKGROUND, Color, ColorParseError};
pub use context::{ContextState, DrawingContext};
pub use font::FontDescriptor;
pub use surface::{DrawSurface, LineCap, Point, Rect, StrokeStyle, SurfaceError, TextStyle};
