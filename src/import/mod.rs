//! Image import for the drawing board.
//!
//! Decoding is the only asynchronous step in the tool:
//! - [`ImageDecoder`] turns file bytes into premultiplied pixels off the UI thread
//! - [`ImportTicket`] tags each file selection with a generation number
//! - [`ImportManager`] bridges background decodes back into the event loop
//!
//! The controller only draws a completion whose ticket is still the newest.

pub mod decoder;
pub mod types;

mod manager;

pub use decoder::{ImageDecoder, PngDecoder, decode_png, load_image};
pub use manager::ImportManager;
pub use types::{DecodedImage, ImportCompletion, ImportError, ImportOutcome, ImportTicket};
