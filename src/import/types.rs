//! Data types for image import.

use std::path::PathBuf;
use thiserror::Error;

/// Identifies one file selection.
///
/// Every new selection gets a higher generation; only the newest one may draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImportTicket {
    pub generation: u64,
}

/// A decoded image in premultiplied ARGB32 layout (Cairo's native format).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: i32,
    pub height: i32,
    /// Bytes per row
    pub stride: i32,
    pub data: Vec<u8>,
}

/// A finished decode, ready to be handed back to the controller.
#[derive(Debug)]
pub struct ImportCompletion {
    pub ticket: ImportTicket,
    pub path: PathBuf,
    pub result: Result<DecodedImage, ImportError>,
}

/// What the controller did with a completed import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The image was drawn over the whole canvas.
    Drawn,
    /// A newer selection was made while this one decoded; nothing was drawn.
    Superseded,
    /// Reading or decoding failed; nothing was drawn.
    Failed(String),
}

/// Errors that can occur while importing an image.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read image file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] cairo::IoError),

    #[error("Image processing error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Decoded pixels unavailable: {0}")]
    Borrow(#[from] cairo::BorrowError),

    #[error("Image has no pixels ({width}x{height})")]
    Empty { width: i32, height: i32 },

    #[error("Decoder task failed: {0}")]
    Task(String),
}
