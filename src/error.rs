use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while editing, loading or saving the canvas
#[derive(Debug, Error)]
pub enum CanvasError {
    /// A pixel read landed outside the bitmap. Never shown to the user.
    #[error("Point ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("Failed to load {}: {source}", path.display())]
    DecodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save {}: {source}", path.display())]
    EncodeFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A replacement bitmap did not match the fixed canvas dimensions
    #[error("Bitmap is {}x{}, canvas is {}x{}", actual.0, actual.1, expected.0, expected.1)]
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("Canvas dimensions must be non-zero")]
    EmptyCanvas,
}

/// Result type for canvas operations
pub type CanvasResult<T> = Result<T, CanvasError>;
