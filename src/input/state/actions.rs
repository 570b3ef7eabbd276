use crate::draw::{Color, DrawSurface, Point, SurfaceError, color::WHITE};
use crate::export::{EXPORT_FILENAME, ExportedImage};
use crate::import::{ImportCompletion, ImportOutcome, ImportTicket};
use log::{info, warn};
use std::path::PathBuf;

use super::core::DrawingController;

/// Line width in effect while stamping text.
const STAMP_LINE_WIDTH: f64 = 1.0;

impl<S: DrawSurface> DrawingController<S> {
    /// Applies the line-width input value to the pen.
    ///
    /// Non-finite or non-positive widths are ignored, leaving the pen unchanged.
    pub(super) fn set_line_width(&mut self, width: f64) {
        self.controls.line_width = width;
        if width.is_finite() && width > 0.0 {
            self.context.state_mut().line_width = width;
        } else {
            warn!("Ignoring invalid line width {width}");
        }
    }

    /// Applies a color chosen in the color picker.
    pub(super) fn pick_color(&mut self, color: Color) {
        self.context.set_color(color);
        self.controls.color_picker = color;
    }

    /// Applies the color attached to swatch `index` and mirrors it into the picker.
    pub(super) fn select_swatch(&mut self, index: usize) {
        let Some(swatch) = self.controls.swatches.get(index) else {
            warn!(
                "Swatch {index} does not exist ({} available)",
                self.controls.swatches.len()
            );
            return;
        };

        match Color::parse(&swatch.data) {
            Ok(color) => self.pick_color(color),
            Err(err) => warn!("Swatch {index}: {err}"),
        }
    }

    /// Flips between Draw and Fill and relabels the toggle button.
    pub(super) fn toggle_mode(&mut self) {
        self.tool.mode = self.tool.mode.toggled();
        self.controls.mode_label = self.tool.mode.label().to_string();
    }

    /// Switches the pen to the background color.
    ///
    /// Erasing only works by drawing, so Fill mode is left; otherwise the path
    /// is ended so erasing starts cleanly.
    pub(super) fn erase(&mut self) {
        self.context.set_color(WHITE);
        self.controls.color_picker = WHITE;
        if self.tool.is_fill() {
            self.toggle_mode();
        } else {
            self.end_path();
        }
    }

    /// Clears the whole canvas to the background color.
    pub(super) fn reset(&mut self) {
        self.surface.clear(self.background);
        self.end_path();
    }

    /// Stamps the text-input value with its baseline at `p`.
    ///
    /// The stamp runs inside a save/restore pair, so the stroke width used by
    /// later freehand strokes is untouched.
    pub(super) fn stamp_text(&mut self, p: Point) {
        self.context.save();
        self.context.state_mut().line_width = STAMP_LINE_WIDTH;
        let style = self.context.text_style();
        self.surface.stamp_text(&self.controls.text, p, &style);
        self.context.restore();
    }

    /// Records a new file selection and returns its ticket.
    ///
    /// Any decode still running for an earlier selection becomes stale.
    pub fn begin_import(&mut self, path: PathBuf) -> ImportTicket {
        self.import_generation += 1;
        self.controls.file_selection = Some(path);
        ImportTicket {
            generation: self.import_generation,
        }
    }

    /// Applies a finished decode.
    ///
    /// Only the newest selection draws; the image is scaled to cover the whole
    /// canvas and the file selector is cleared so the same file can be picked
    /// again.
    pub fn finish_import(&mut self, completion: ImportCompletion) -> ImportOutcome {
        if completion.ticket.generation != self.import_generation {
            info!(
                "Discarding import #{} of {}; superseded by #{}",
                completion.ticket.generation,
                completion.path.display(),
                self.import_generation
            );
            return ImportOutcome::Superseded;
        }

        self.controls.file_selection = None;
        match completion.result {
            Ok(image) if image.width > 0 && image.height > 0 => {
                let bounds = self.surface.bounds();
                self.surface.draw_image(&image, bounds);
                info!(
                    "Imported {} ({}x{})",
                    completion.path.display(),
                    image.width,
                    image.height
                );
                ImportOutcome::Drawn
            }
            Ok(image) => {
                let reason = format!("image has no pixels ({}x{})", image.width, image.height);
                warn!("Import of {} failed: {reason}", completion.path.display());
                ImportOutcome::Failed(reason)
            }
            Err(err) => {
                warn!("Import of {} failed: {err}", completion.path.display());
                ImportOutcome::Failed(err.to_string())
            }
        }
    }

    /// Encodes the canvas as the PNG download.
    pub fn export(&mut self) -> Result<ExportedImage, SurfaceError> {
        let bytes = self.surface.export_png()?;
        Ok(ExportedImage {
            filename: EXPORT_FILENAME.to_string(),
            bytes,
        })
    }
}
