//! Tool mode selection.

use std::fmt;

/// What a press on the canvas does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Press and drag paints a freehand stroke (initial mode)
    #[default]
    Draw,
    /// Press floods the whole canvas with the fill color
    Fill,
}

impl ToolMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ToolMode::Draw => ToolMode::Fill,
            ToolMode::Fill => ToolMode::Draw,
        }
    }

    /// Text shown on the mode toggle button.
    pub fn label(self) -> &'static str {
        match self {
            ToolMode::Draw => "Draw",
            ToolMode::Fill => "Fill",
        }
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(ToolMode::Draw.toggled().toggled(), ToolMode::Draw);
        assert_eq!(ToolMode::Fill.toggled(), ToolMode::Draw);
    }

    #[test]
    fn labels_match_button_text() {
        assert_eq!(ToolMode::default().label(), "Draw");
        assert_eq!(ToolMode::Fill.to_string(), "Fill");
    }
}
