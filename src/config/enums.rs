//! Configuration enum types.

use crate::draw::{Color, LineCap, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stroke end cap as written in the config file.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LineCapSpec {
    /// Flat end exactly at the end point
    Butt,
    /// Half-circle around the end point
    Round,
    /// Half-square around the end point
    Square,
}

impl From<LineCapSpec> for LineCap {
    fn from(spec: LineCapSpec) -> Self {
        match spec {
            LineCapSpec::Butt => LineCap::Butt,
            LineCapSpec::Round => LineCap::Round,
            LineCapSpec::Square => LineCap::Square,
        }
    }
}

/// Color specification - a hex string, a named color, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "black"
///
/// # Hex, as a color picker reports it
/// default_color = "#2c3e50"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `#rrggbb`, `#rgb`, or one of: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown or malformed values fall back to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Color::parse(name).unwrap_or_else(|err| {
                warn!("{err}, using black");
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_spec_accepts_hex_names_and_rgb() {
        assert_eq!(
            ColorSpec::Name("#ff0000".into()).to_color(),
            crate::draw::color::RED
        );
        assert_eq!(ColorSpec::Name("white".into()).to_color(), crate::draw::color::WHITE);
        assert_eq!(
            ColorSpec::Rgb([0, 0, 255]).to_color(),
            crate::draw::color::BLUE
        );
    }

    #[test]
    fn unknown_color_falls_back_to_black() {
        assert_eq!(ColorSpec::Name("chartreuse-ish".into()).to_color(), BLACK);
    }
}
