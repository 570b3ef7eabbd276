//! Delivering the exported drawing as a file.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixed name of the downloaded drawing.
pub const EXPORT_FILENAME: &str = "myDrawing.png";

/// An encoded image ready to be handed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedImage {
    /// Suggested file name for the download
    pub filename: String,
    /// PNG bytes
    pub bytes: Vec<u8>,
}

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode drawing: {0}")]
    Encode(#[from] crate::draw::SurfaceError),

    #[error("Failed to save drawing: {0}")]
    Save(#[from] std::io::Error),
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Write a download into `directory`, replacing any earlier file of the same name.
///
/// # Returns
/// Path to the saved file
pub fn save_download(image: &ExportedImage, directory: &Path) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(directory)?;
    let file_path = directory.join(&image.filename);

    log::info!(
        "Saving drawing to: {} ({} bytes)",
        file_path.display(),
        image.bytes.len()
    );

    fs::write(&file_path, &image.bytes)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(file_path)
}
