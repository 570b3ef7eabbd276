//! Model of the form controls around the canvas.

use crate::draw::Color;
use std::path::PathBuf;

/// A preset color button.
///
/// The color travels as an unparsed data string, exactly as it is attached to
/// the control; it is only interpreted when the swatch is clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    pub data: String,
}

impl Swatch {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

/// Displayed values of the controls the controller reads from and writes to.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    /// Value of the numeric line-width input
    pub line_width: f64,
    /// Value displayed by the color picker
    pub color_picker: Color,
    /// Text on the Draw/Fill toggle button
    pub mode_label: String,
    /// File currently held by the file selector
    pub file_selection: Option<PathBuf>,
    /// Value of the text input used for stamping
    pub text: String,
    /// Preset swatches in display order
    pub swatches: Vec<Swatch>,
}

impl Controls {
    pub fn new(line_width: f64, color: Color, swatches: Vec<Swatch>) -> Self {
        Self {
            line_width,
            color_picker: color,
            mode_label: super::ToolMode::default().label().to_string(),
            file_selection: None,
            text: String::new(),
            swatches,
        }
    }

    /// The color picker value as it would be displayed (`#rrggbb`).
    pub fn picker_value(&self) -> String {
        self.color_picker.to_hex()
    }
}
