use std::io::Cursor;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cairo::{Context, Format, ImageSurface};

use super::types::{DecodedImage, ImportCompletion, ImportError, ImportTicket};

/// Abstraction over turning encoded image bytes into pixels.
#[async_trait]
pub trait ImageDecoder: Send + Sync {
    async fn decode(&self, bytes: Vec<u8>) -> Result<DecodedImage, ImportError>;
}

/// PNG decoder built on Cairo's reader, run on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngDecoder;

#[async_trait]
impl ImageDecoder for PngDecoder {
    async fn decode(&self, bytes: Vec<u8>) -> Result<DecodedImage, ImportError> {
        tokio::task::spawn_blocking(move || decode_png(&bytes))
            .await
            .map_err(|e| ImportError::Task(e.to_string()))?
    }
}

/// Decodes PNG bytes and normalizes the result to premultiplied ARGB32.
///
/// Cairo hands back RGB24 for opaque PNGs; painting onto an ARGB32 surface
/// gives every import the same layout.
pub fn decode_png(bytes: &[u8]) -> Result<DecodedImage, ImportError> {
    let png = ImageSurface::create_from_png(&mut Cursor::new(bytes))?;
    let (width, height) = (png.width(), png.height());
    if width <= 0 || height <= 0 {
        return Err(ImportError::Empty { width, height });
    }

    let mut argb = ImageSurface::create(Format::ARgb32, width, height)?;
    {
        let ctx = Context::new(&argb)?;
        ctx.set_source_surface(&png, 0.0, 0.0)?;
        ctx.paint()?;
    }
    argb.flush();

    let stride = argb.stride();
    let data = argb.data()?.to_vec();
    Ok(DecodedImage {
        width,
        height,
        stride,
        data,
    })
}

/// Reads `path` and decodes it, tagging the result with `ticket`.
pub async fn load_image(
    decoder: &dyn ImageDecoder,
    ticket: ImportTicket,
    path: &Path,
) -> ImportCompletion {
    log::debug!("Decoding {} for import #{}", path.display(), ticket.generation);

    let result = match tokio::fs::read(path).await {
        Ok(bytes) => decoder.decode(bytes).await,
        Err(err) => Err(ImportError::Read(err)),
    };

    ImportCompletion {
        ticket,
        path: PathBuf::from(path),
        result,
    }
}
