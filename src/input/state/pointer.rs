use crate::draw::{DrawSurface, Point};

use super::core::{DrawingController, StrokeState};

impl<S: DrawSurface> DrawingController<S> {
    /// Processes pointer motion over the canvas.
    ///
    /// # Behavior
    /// - Painting: strokes a segment from the pen position to `p`
    /// - Idle: moves the pen to `p` without drawing
    /// - Fill mode: moves the pen to `p` without drawing
    pub(super) fn on_pointer_move(&mut self, p: Point) {
        if self.tool.is_painting()
            && !self.tool.is_fill()
            && let Some(from) = self.pen
        {
            let style = self.context.stroke_style();
            self.surface.stroke_segment(from, p, &style);
        }
        self.pen = Some(p);
    }

    /// Processes a press on the canvas.
    ///
    /// In Fill mode the whole canvas is flooded with the fill color and no
    /// stroke starts; in Draw mode painting begins.
    pub(super) fn on_pointer_down(&mut self, _p: Point) {
        if self.tool.is_fill() {
            let bounds = self.surface.bounds();
            self.surface.fill_rect(bounds, self.context.state().fill_color);
            self.tool.stroke = StrokeState::Idle;
        } else {
            self.tool.stroke = StrokeState::Painting;
        }
    }

    /// Processes a release or the pointer leaving the canvas.
    ///
    /// Ending the path keeps a later re-entry from connecting to the old stroke.
    pub(super) fn on_pointer_up(&mut self) {
        self.tool.stroke = StrokeState::Idle;
        self.end_path();
    }
}
