//! Supported sprite file formats

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use image::{ImageFormat, RgbaImage};

use crate::error::RotatorError;

/// File format of a sprite. Only PNG and lossless WebP are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteFormat {
    Png,
    Webp,
}

impl SpriteFormat {
    pub const ALL: [SpriteFormat; 2] = [SpriteFormat::Png, SpriteFormat::Webp];

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Webp => "webp",
        }
    }

    pub fn image_format(&self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Webp => ImageFormat::WebP,
        }
    }

    /// Detect the format from a path's extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RotatorError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| RotatorError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }

    /// Like [`SpriteFormat::from_path`] but `None` for anything that is not a sprite.
    pub fn sniff(path: impl AsRef<Path>) -> Option<Self> {
        Self::from_path(path).ok()
    }

    /// Encode `img` to `path` in this format. WebP output is lossless.
    pub fn save(&self, img: &RgbaImage, path: impl AsRef<Path>) -> Result<(), RotatorError> {
        let path = path.as_ref();
        img.save_with_format(path, self.image_format())
            .map_err(|e| RotatorError::encode(path, e))
    }
}

impl FromStr for SpriteFormat {
    type Err = RotatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "webp" => Ok(Self::Webp),
            _ => Err(RotatorError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for SpriteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
