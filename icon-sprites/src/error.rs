//! Error type shared by every sprite operation

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RotatorError>;

#[derive(Error, Debug)]
pub enum RotatorError {
    #[error("Source image not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("Failed to decode image {}: {source}", path.display())]
    UnreadableSource {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("Angle step must be between 1 and 360 degrees, got {0}")]
    InvalidStep(u32),
}

impl RotatorError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Split an encoder failure into an I/O failure or a codec failure.
    pub(crate) fn encode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        match source {
            image::ImageError::IoError(io) => Self::write(path, io),
            other => Self::Encode {
                path: path.into(),
                source: other,
            },
        }
    }
}
