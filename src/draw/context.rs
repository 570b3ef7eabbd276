//! Mutable pen state with a save/restore stack.

use super::color::Color;
use super::font::FontDescriptor;
use super::surface::{LineCap, StrokeStyle, TextStyle};

/// One snapshot of the drawing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextState {
    /// Color used for freehand strokes
    pub stroke_color: Color,
    /// Color used for flood fills and stamped text
    pub fill_color: Color,
    /// Stroke width in pixels
    pub line_width: f64,
    /// End cap for strokes
    pub line_cap: LineCap,
    /// Font used for stamped text
    pub font: FontDescriptor,
    /// Text size in pixels
    pub font_size: f64,
}

/// Drawing parameters owned by the controller.
///
/// Mirrors an immediate-mode 2D context: the current state can be pushed
/// with [`save`](Self::save) and popped with [`restore`](Self::restore).
#[derive(Debug, Clone)]
pub struct DrawingContext {
    current: ContextState,
    saved: Vec<ContextState>,
}

impl DrawingContext {
    pub fn new(initial: ContextState) -> Self {
        Self {
            current: initial,
            saved: Vec::new(),
        }
    }

    pub fn state(&self) -> &ContextState {
        &self.current
    }

    pub fn state_mut(&mut self) -> &mut ContextState {
        &mut self.current
    }

    /// Pushes a copy of the current state.
    pub fn save(&mut self) {
        self.saved.push(self.current.clone());
    }

    /// Pops the most recently saved state. Does nothing if nothing was saved.
    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
    }

    /// Number of states currently saved.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Sets both the stroke and fill color.
    pub fn set_color(&mut self, color: Color) {
        self.current.stroke_color = color;
        self.current.fill_color = color;
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.current.stroke_color,
            width: self.current.line_width,
            cap: self.current.line_cap,
        }
    }

    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            color: self.current.fill_color,
            font: self.current.font.clone(),
            size: self.current.font_size,
            line_width: self.current.line_width,
        }
    }
}
