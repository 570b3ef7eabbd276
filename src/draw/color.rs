//! RGBA color type, hex parsing, and predefined color constants.

use thiserror::Error;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use paintboard::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// assert_eq!(red.to_hex(), "#ff0000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

/// Error returned when a color string cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}': expected #rgb, #rrggbb, or a color name")]
pub struct ColorParseError(pub String);

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#rrggbb` or the `#rgb` shorthand (case-insensitive).
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError(value.to_string());
        let digits = value.trim().strip_prefix('#').ok_or_else(err)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| err());
        match digits.len() {
            6 => Ok(Self::from_rgb8(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::from_rgb8(r * 17, g * 17, b * 17))
            }
            _ => Err(err()),
        }
    }

    /// Parses a hex string or one of the named palette colors.
    ///
    /// This is the format carried by color-picker values and swatch data.
    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        if value.trim_start().starts_with('#') {
            Self::from_hex(value)
        } else {
            crate::util::name_to_color(value.trim())
                .ok_or_else(|| ColorParseError(value.to_string()))
        }
    }

    /// Formats the color as lowercase `#rrggbb`, the way a color picker displays it.
    ///
    /// Alpha is dropped.
    pub fn to_hex(&self) -> String {
        let to_u8 = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            to_u8(self.r),
            to_u8(self.g),
            to_u8(self.b)
        )
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined pink/magenta color (R=1.0, G=0.0, B=1.0)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined white color, also the canvas background.
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color, the default pen color.
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Background used by reset and erase.
pub const BACKGROUND: Color = WHITE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_hex() {
        let color = Color::from_hex("#e74c3c").unwrap();
        assert_eq!(color, Color::from_rgb8(0xe7, 0x4c, 0x3c));
        assert_eq!(color.to_hex(), "#e74c3c");
    }

    #[test]
    fn parses_short_hex_and_uppercase() {
        assert_eq!(Color::from_hex("#FFF").unwrap(), WHITE);
        assert_eq!(Color::from_hex("#0f0").unwrap(), GREEN);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("ffffff").is_err());
        assert!(Color::from_hex("#ffff").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert!(Color::from_hex("#").is_err());
    }

    #[test]
    fn parse_accepts_names() {
        assert_eq!(Color::parse("black").unwrap(), BLACK);
        assert_eq!(Color::parse(" White ").unwrap(), WHITE);
        assert!(Color::parse("mauve").is_err());
    }

    #[test]
    fn to_hex_clamps_out_of_range_channels() {
        let color = Color::new(1.5, -0.2, 0.5, 1.0);
        assert_eq!(color.to_hex(), "#ff0080");
    }
}
