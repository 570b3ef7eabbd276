//! Input events the controller reacts to.

use crate::draw::{Color, Point};
use std::path::PathBuf;

/// One user interaction with the canvas or its controls.
///
/// Front-ends (the script replayer, tests) translate their native events into
/// these before handing them to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved over the canvas
    PointerMove(Point),
    /// Primary button pressed on the canvas
    PointerDown(Point),
    /// Primary button released
    PointerUp(Point),
    /// Pointer left the canvas
    PointerLeave,
    /// Double-click on the canvas (stamps text)
    DoubleClick(Point),
    /// The line-width input changed
    LineWidthChanged(f64),
    /// The color picker changed
    ColorPicked(Color),
    /// A preset swatch was clicked (index into the palette)
    SwatchClicked(usize),
    /// The Draw/Fill mode button was clicked
    ToggleMode,
    /// The erase button was clicked
    Erase,
    /// The reset button was clicked
    Reset,
    /// The text input changed
    TextChanged(String),
    /// A file was chosen in the file selector
    ImportSelected(PathBuf),
    /// The save button was clicked
    Export,
}
