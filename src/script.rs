//! TOML event scripts for headless sessions.
//!
//! A script is a list of `[[events]]` tables, each naming one interaction:
//!
//! ```toml
//! [[events]]
//! type = "color"
//! value = "#e74c3c"
//!
//! [[events]]
//! type = "pointer-down"
//! x = 10
//! y = 20
//! ```

use crate::draw::{Color, ColorParseError, Point};
use crate::input::InputEvent;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Event {index}: {source}")]
    Color {
        index: usize,
        source: ColorParseError,
    },
}

/// One scripted interaction as written in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScriptEvent {
    PointerMove { x: f64, y: f64 },
    PointerDown { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    PointerLeave,
    DoubleClick { x: f64, y: f64 },
    LineWidth { value: f64 },
    Color { value: String },
    Swatch { index: usize },
    ToggleMode,
    Erase,
    Reset,
    Text { value: String },
    Import { path: PathBuf },
    /// Wait for every pending import before continuing
    Settle,
    Export,
}

/// What the replayer does next.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Hand an event to the controller
    Input(InputEvent),
    /// Block until pending imports have been applied
    Settle,
}

/// A parsed script file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Parses a script from TOML source.
    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    /// Converts the script into replay steps.
    ///
    /// Relative import paths are resolved against `base_dir` (normally the
    /// directory holding the script). Color strings are validated here so a bad
    /// script fails before anything is drawn.
    pub fn steps(&self, base_dir: &Path) -> Result<Vec<Step>, ScriptError> {
        self.events
            .iter()
            .enumerate()
            .map(|(index, event)| {
                let point = |x: &f64, y: &f64| Point::new(*x, *y);
                let input = match event {
                    ScriptEvent::PointerMove { x, y } => InputEvent::PointerMove(point(x, y)),
                    ScriptEvent::PointerDown { x, y } => InputEvent::PointerDown(point(x, y)),
                    ScriptEvent::PointerUp { x, y } => InputEvent::PointerUp(point(x, y)),
                    ScriptEvent::PointerLeave => InputEvent::PointerLeave,
                    ScriptEvent::DoubleClick { x, y } => InputEvent::DoubleClick(point(x, y)),
                    ScriptEvent::LineWidth { value } => InputEvent::LineWidthChanged(*value),
                    ScriptEvent::Color { value } => {
                        let color = Color::parse(value)
                            .map_err(|source| ScriptError::Color { index, source })?;
                        InputEvent::ColorPicked(color)
                    }
                    ScriptEvent::Swatch { index } => InputEvent::SwatchClicked(*index),
                    ScriptEvent::ToggleMode => InputEvent::ToggleMode,
                    ScriptEvent::Erase => InputEvent::Erase,
                    ScriptEvent::Reset => InputEvent::Reset,
                    ScriptEvent::Text { value } => InputEvent::TextChanged(value.clone()),
                    ScriptEvent::Import { path } => {
                        InputEvent::ImportSelected(base_dir.join(path))
                    }
                    ScriptEvent::Settle => return Ok(Step::Settle),
                    ScriptEvent::Export => InputEvent::Export,
                };
                Ok(Step::Input(input))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    #[test]
    fn parses_every_event_kind() {
        let script = Script::parse(
            r##"
            [[events]]
            type = "pointer-move"
            x = 1
            y = 2.5

            [[events]]
            type = "pointer-leave"

            [[events]]
            type = "color"
            value = "#ff0000"

            [[events]]
            type = "swatch"
            index = 3

            [[events]]
            type = "toggle-mode"

            [[events]]
            type = "import"
            path = "photo.png"

            [[events]]
            type = "settle"

            [[events]]
            type = "export"
            "##,
        )
        .unwrap();

        let steps = script.steps(Path::new("/scripts")).unwrap();
        assert_eq!(
            steps,
            vec![
                Step::Input(InputEvent::PointerMove(Point::new(1.0, 2.5))),
                Step::Input(InputEvent::PointerLeave),
                Step::Input(InputEvent::ColorPicked(RED)),
                Step::Input(InputEvent::SwatchClicked(3)),
                Step::Input(InputEvent::ToggleMode),
                Step::Input(InputEvent::ImportSelected(PathBuf::from(
                    "/scripts/photo.png"
                ))),
                Step::Settle,
                Step::Input(InputEvent::Export),
            ]
        );
    }

    #[test]
    fn absolute_import_paths_are_kept() {
        let script = Script {
            events: vec![ScriptEvent::Import {
                path: PathBuf::from("/images/cat.png"),
            }],
        };
        let steps = script.steps(Path::new("/scripts")).unwrap();
        assert_eq!(
            steps,
            vec![Step::Input(InputEvent::ImportSelected(PathBuf::from(
                "/images/cat.png"
            )))]
        );
    }

    #[test]
    fn bad_color_reports_event_index() {
        let script = Script::parse(
            r#"
            [[events]]
            type = "reset"

            [[events]]
            type = "color"
            value = "sort-of-blue"
            "#,
        )
        .unwrap();

        let err = script.steps(Path::new(".")).unwrap_err();
        assert!(matches!(err, ScriptError::Color { index: 1, .. }));
    }

    #[test]
    fn unknown_event_type_is_a_parse_error() {
        let err = Script::parse("[[events]]\ntype = \"teleport\"\n").unwrap_err();
        assert!(matches!(err, ScriptError::Parse(_)));
    }

    #[test]
    fn empty_script_has_no_steps() {
        let script = Script::parse("").unwrap();
        assert!(script.steps(Path::new(".")).unwrap().is_empty());
    }
}
