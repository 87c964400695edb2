//! Image loading with a byte-level fallback decode.

use std::io::Cursor;
use std::path::Path;

use image::{ImageReader, RgbImage};
use log::debug;

use crate::error::ScanError;

/// Load a color image from disk.
///
/// The direct reader is tried first; if that decode fails (a mislabeled
/// extension, or a resource that only yields raw bytes), the file is read
/// into memory and decoded with a format guessed from content. A missing
/// path is reported as `ResourceNotFound` before any decode is attempted.
pub fn load_color(path: &Path) -> Result<RgbImage, ScanError> {
    if !path.exists() {
        return Err(ScanError::ResourceNotFound(path.to_path_buf()));
    }

    match ImageReader::open(path)?.decode() {
        Ok(img) => Ok(img.to_rgb8()),
        Err(err) => {
            debug!(
                "direct decode of {} failed ({err}); retrying from bytes",
                path.display()
            );
            let bytes = std::fs::read(path)?;
            let img = ImageReader::new(Cursor::new(bytes))
                .with_guessed_format()?
                .decode()?;
            Ok(img.to_rgb8())
        }
    }
}
