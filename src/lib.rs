//! Library exports for the paintboard drawing tool.
//!
//! Exposes the controller, the drawing surface abstraction, and the config,
//! import, export, and script layers so front-ends and tests can drive a
//! board without the command-line binary.

pub mod config;
pub mod draw;
pub mod export;
pub mod import;
pub mod input;
pub mod replay;
pub mod script;
pub mod util;

pub use config::Config;
