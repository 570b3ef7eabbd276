//! Configuration type definitions.

use super::enums::{ColorSpec, LineCapSpec};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the pen and text defaults when the board first opens.
/// Events can change the pen at runtime; the text size stays fixed.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial pen and fill color
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial line width in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_line_width")]
    pub default_line_width: f64,

    /// Stroke end cap (butt, round, square)
    #[serde(default = "default_line_cap")]
    pub line_cap: LineCapSpec,

    /// Font family name for stamped text (e.g., "Sans", "Serif", "Monospace")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Stamped text size in pixels (valid range: 8.0 - 200.0)
    #[serde(default = "default_text_size")]
    pub text_size: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_line_width: default_line_width(),
            line_cap: default_line_cap(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            text_size: default_text_size(),
        }
    }
}

/// Preset color swatches.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PaletteConfig {
    /// Color data attached to each swatch, in display order (`#rrggbb` or a name)
    #[serde(default = "default_swatches")]
    pub swatches: Vec<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            swatches: default_swatches(),
        }
    }
}

/// Canvas startup behavior.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Paint the white background when the board opens (otherwise transparent)
    #[serde(default)]
    pub clear_on_start: bool,
}

/// Where exported drawings are written.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory for `myDrawing.png` (`~/` is expanded)
    #[serde(default = "default_export_directory")]
    pub directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_directory(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_line_width() -> f64 {
    5.0
}

fn default_line_cap() -> LineCapSpec {
    LineCapSpec::Round
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_text_size() -> f64 {
    48.0
}

fn default_swatches() -> Vec<String> {
    [
        "#1abc9c", "#3498db", "#34495e", "#27ae60", "#8e44ad", "#f1c40f", "#e74c3c", "#95a5a6",
        "#d35400", "#bdc3c7",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_export_directory() -> String {
    ".".to_string()
}
