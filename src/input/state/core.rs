//! Tool state machine and controller construction.

use crate::config::Config;
use crate::draw::{
    BACKGROUND, Color, ContextState, DrawSurface, DrawingContext, FontDescriptor, LineCap, Point,
    SurfaceError,
};
use crate::export::ExportedImage;
use crate::import::ImportTicket;
use crate::input::{
    InputEvent,
    controls::{Controls, Swatch},
    mode::ToolMode,
};
use log::debug;
use std::path::PathBuf;

/// Whether a freehand stroke is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeState {
    /// Pointer is up; moves only reposition the pen
    #[default]
    Idle,
    /// Pointer is down in Draw mode; moves paint
    Painting,
}

/// Per-controller tool state.
///
/// `stroke` is `Painting` only between a press in Draw mode and the next
/// release or leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolState {
    pub mode: ToolMode,
    pub stroke: StrokeState,
}

impl ToolState {
    pub fn is_fill(&self) -> bool {
        self.mode == ToolMode::Fill
    }

    pub fn is_painting(&self) -> bool {
        self.stroke == StrokeState::Painting
    }
}

/// Follow-up work an event hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing further to do
    None,
    /// Decode `path` and report back via `finish_import`
    StartImport { ticket: ImportTicket, path: PathBuf },
    /// Deliver the exported image as a download
    Download(ExportedImage),
}

/// Initial drawing parameters for a controller.
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    /// Initial stroke and fill color
    pub color: Color,
    /// Initial line width in pixels
    pub line_width: f64,
    pub line_cap: LineCap,
    /// Font used for text stamps
    pub font: FontDescriptor,
    /// Text stamp size in pixels
    pub text_size: f64,
    pub swatches: Vec<Swatch>,
    /// Paint the background once at construction
    pub clear_on_start: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ControllerSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            color: config.drawing.default_color.to_color(),
            line_width: config.drawing.default_line_width,
            line_cap: config.drawing.line_cap.into(),
            font: FontDescriptor::new(
                config.drawing.font_family.clone(),
                config.drawing.font_weight.clone(),
                config.drawing.font_style.clone(),
            ),
            text_size: config.drawing.text_size,
            swatches: config
                .palette
                .swatches
                .iter()
                .map(|data| Swatch::new(data.clone()))
                .collect(),
            clear_on_start: config.canvas.clear_on_start,
        }
    }
}

/// Translates input events into drawing calls on a [`DrawSurface`].
///
/// Owns the surface, the drawing context, the tool state, and the control
/// values, so several boards can live side by side without sharing anything.
pub struct DrawingController<S: DrawSurface> {
    pub(super) surface: S,
    pub(super) context: DrawingContext,
    pub(super) tool: ToolState,
    pub(super) controls: Controls,
    /// Current pen position; `None` after the path was ended
    pub(super) pen: Option<Point>,
    /// Generation of the newest file selection
    pub(super) import_generation: u64,
    pub(super) background: Color,
}

impl<S: DrawSurface> DrawingController<S> {
    /// Creates a controller drawing onto `surface`.
    pub fn new(surface: S, settings: ControllerSettings) -> Self {
        let context = DrawingContext::new(ContextState {
            stroke_color: settings.color,
            fill_color: settings.color,
            line_width: settings.line_width,
            line_cap: settings.line_cap,
            font: settings.font,
            font_size: settings.text_size,
        });
        let controls = Controls::new(settings.line_width, settings.color, settings.swatches);

        let mut controller = Self {
            surface,
            context,
            tool: ToolState::default(),
            controls,
            pen: None,
            import_generation: 0,
            background: BACKGROUND,
        };

        if settings.clear_on_start {
            controller.surface.clear(controller.background);
        }

        controller
    }

    /// Creates a controller with default settings (black pen, width 5).
    pub fn with_defaults(surface: S) -> Self {
        Self::new(surface, ControllerSettings::default())
    }

    /// Dispatches one input event.
    ///
    /// Only `Export` can fail, when the raster cannot be encoded.
    pub fn handle(&mut self, event: InputEvent) -> Result<Effect, SurfaceError> {
        debug!("Handling {:?} in {} mode", event, self.tool.mode);

        match event {
            InputEvent::PointerMove(p) => self.on_pointer_move(p),
            InputEvent::PointerDown(p) => self.on_pointer_down(p),
            InputEvent::PointerUp(_) | InputEvent::PointerLeave => self.on_pointer_up(),
            InputEvent::DoubleClick(p) => self.stamp_text(p),
            InputEvent::LineWidthChanged(width) => self.set_line_width(width),
            InputEvent::ColorPicked(color) => self.pick_color(color),
            InputEvent::SwatchClicked(index) => self.select_swatch(index),
            InputEvent::ToggleMode => self.toggle_mode(),
            InputEvent::Erase => self.erase(),
            InputEvent::Reset => self.reset(),
            InputEvent::TextChanged(text) => self.controls.text = text,
            InputEvent::ImportSelected(path) => {
                let ticket = self.begin_import(path.clone());
                return Ok(Effect::StartImport { ticket, path });
            }
            InputEvent::Export => return self.export().map(Effect::Download),
        }

        Ok(Effect::None)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the controller, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn context(&self) -> &DrawingContext {
        &self.context
    }

    pub fn tool_state(&self) -> ToolState {
        self.tool
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Current pen position, if a path is open.
    pub fn pen(&self) -> Option<Point> {
        self.pen
    }

    /// Ends the current path; the next move starts a fresh one.
    pub(super) fn end_path(&mut self) {
        self.pen = None;
    }
}
