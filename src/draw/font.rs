//! Font selection for text stamps.

use pango::{FontDescription, Style, Weight};

/// Family, weight and style of stamped text, as written in the config.
///
/// Size is not part of the descriptor; the drawing context carries it and
/// stamps are always laid out at an absolute pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub family: String,
    /// `normal`, `bold`, `light`, `ultralight`, `ultrabold`, `heavy`, or 100-900
    pub weight: String,
    /// `normal`, `italic`, or `oblique`
    pub style: String,
}

impl FontDescriptor {
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Pango weight for the configured name or number. Unknown values are normal.
    pub fn pango_weight(&self) -> Weight {
        match self.weight.to_lowercase().as_str() {
            "ultralight" => Weight::Ultralight,
            "light" => Weight::Light,
            "bold" => Weight::Bold,
            "ultrabold" => Weight::Ultrabold,
            "heavy" => Weight::Heavy,
            other => other.parse::<u32>().map_or(Weight::Normal, numeric_weight),
        }
    }

    pub fn pango_style(&self) -> Style {
        match self.style.to_lowercase().as_str() {
            "italic" => Style::Italic,
            "oblique" => Style::Oblique,
            _ => Style::Normal,
        }
    }

    /// Builds the Pango description for text `size_px` pixels tall.
    pub fn to_pango(&self, size_px: f64) -> FontDescription {
        let mut desc = FontDescription::new();
        desc.set_family(&self.family);
        desc.set_weight(self.pango_weight());
        desc.set_style(self.pango_style());
        desc.set_absolute_size(size_px * pango::SCALE as f64);
        desc
    }
}

impl Default for FontDescriptor {
    /// Plain sans-serif at regular weight.
    fn default() -> Self {
        Self {
            family: "Sans".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

/// Snaps a CSS-style numeric weight to the nearest named Pango weight.
fn numeric_weight(value: u32) -> Weight {
    match value {
        0..=149 => Weight::Thin,
        150..=249 => Weight::Ultralight,
        250..=349 => Weight::Light,
        350..=449 => Weight::Normal,
        450..=549 => Weight::Medium,
        550..=649 => Weight::Semibold,
        650..=749 => Weight::Bold,
        750..=849 => Weight::Ultrabold,
        _ => Weight::Heavy,
    }
}
