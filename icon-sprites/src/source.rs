//! Source icon loading

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{Result, RotatorError};
use crate::format::SpriteFormat;

/// The icon a sprite set is rendered from.
/// Always held as RGBA8 regardless of how it was stored on disk.
#[derive(Clone, Debug)]
pub struct SourceImage {
    path: PathBuf,
    format: SpriteFormat,
    pixels: RgbaImage,
}

impl SourceImage {
    /// Load a source icon from a PNG or WebP file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RotatorError::SourceNotFound(path.to_path_buf()));
        }
        let format = SpriteFormat::from_path(path)?;
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => RotatorError::SourceNotFound(path.to_path_buf()),
            _ => RotatorError::UnreadableSource {
                path: path.to_path_buf(),
                source: image::ImageError::IoError(e),
            },
        })?;
        Self::from_bytes(path, format, &bytes)
    }

    /// Decode a source icon from bytes already in memory.
    /// `path` is only used for error messages and logging.
    pub fn from_bytes(path: impl Into<PathBuf>, format: SpriteFormat, bytes: &[u8]) -> Result<Self> {
        let path = path.into();
        let img = image::load_from_memory_with_format(bytes, format.image_format()).map_err(
            |source| RotatorError::UnreadableSource {
                path: path.clone(),
                source,
            },
        )?;
        let pixels = img.into_rgba8();
        log::debug!(
            "Loaded source {} ({}x{}, {})",
            path.display(),
            pixels.width(),
            pixels.height(),
            format
        );
        Ok(Self {
            path,
            format,
            pixels,
        })
    }

    /// Wrap pixels that were produced in memory.
    pub fn from_pixels(path: impl Into<PathBuf>, format: SpriteFormat, pixels: RgbaImage) -> Self {
        Self {
            path: path.into(),
            format,
            pixels,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format the source was stored in.
    pub fn format(&self) -> SpriteFormat {
        self.format
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Get dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}
