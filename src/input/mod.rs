//! Input handling and tool state machine.
//!
//! This module translates pointer, form, and button events into drawing calls.
//! It owns the current tool state (Draw/Fill, idle/painting), the drawing
//! parameters, and a model of the controls that surround the canvas.

pub mod controls;
pub mod events;
pub mod mode;
pub mod state;

// Re-export commonly used types at module level
pub use controls::{Controls, Swatch};
pub use events::InputEvent;
pub use mode::ToolMode;
pub use state::{ControllerSettings, DrawingController, Effect, StrokeState, ToolState};
