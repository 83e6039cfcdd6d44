use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::{CanvasError, CanvasResult};

/// File name suggested by the save prompt
pub const DEFAULT_FILE_NAME: &str = "image.png";

/// `image.png` in the working directory
pub fn default_save_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_default()
        .join(DEFAULT_FILE_NAME)
}

/// Writes straight RGBA as a PNG, whatever extension `path` carries
pub fn save(image: &RgbaImage, path: &Path) -> CanvasResult<()> {
    log::info!("Saving {}x{} canvas to {}", image.width(), image.height(), path.display());
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| {
            log::error!("Failed to save {}: {}", path.display(), source);
            CanvasError::EncodeFailure {
                path: path.to_path_buf(),
                source,
            }
        })
}

/// Decodes an image file into straight RGBA
pub fn load(path: &Path) -> CanvasResult<RgbaImage> {
    match image::open(path) {
        Ok(img) => {
            log::debug!("Decoded {}: {}x{}", path.display(), img.width(), img.height());
            Ok(img.to_rgba8())
        }
        Err(source) => {
            log::error!("Failed to decode {}: {}", path.display(), source);
            Err(CanvasError::DecodeFailure {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}
