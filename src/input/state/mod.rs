mod actions;
mod core;
mod pointer;

pub use core::{ControllerSettings, DrawingController, Effect, StrokeState, ToolState};
