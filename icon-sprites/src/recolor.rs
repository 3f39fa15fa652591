//! Retinting a finished sprite set to a single color

use std::path::PathBuf;

use image::{Rgba, RgbaImage};

use crate::error::{Result, RotatorError};
use crate::format::SpriteFormat;
use crate::manifest::sprite_files;
use crate::rotate::TRANSPARENT;

/// Opaque blue, the default tint.
pub const DEFAULT_COLOR: [u8; 4] = [0, 0, 255, 255];

#[derive(Debug, Clone)]
pub struct RecolorOptions {
    /// Directory whose PNG and WebP files are rewritten in place.
    pub directory: PathBuf,
    /// Replacement color for every visible pixel.
    pub color: [u8; 4],
    /// Keep each pixel's own alpha instead of the alpha of `color`.
    pub preserve_alpha: bool,
}

impl RecolorOptions {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            color: DEFAULT_COLOR,
            preserve_alpha: false,
        }
    }

    pub fn with_color(mut self, color: [u8; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn with_preserve_alpha(mut self, preserve: bool) -> Self {
        self.preserve_alpha = preserve;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecolorReport {
    pub recolored: Vec<PathBuf>,
}

/// Paint every pixel with non-zero alpha `color`; fully transparent pixels
/// are reset to `(0, 0, 0, 0)`.
pub fn recolor_image(img: &mut RgbaImage, color: [u8; 4], preserve_alpha: bool) {
    for pixel in img.pixels_mut() {
        let alpha = pixel.0[3];
        *pixel = if alpha == 0 {
            TRANSPARENT
        } else if preserve_alpha {
            Rgba([color[0], color[1], color[2], alpha])
        } else {
            Rgba(color)
        };
    }
}

/// Recolor every PNG and WebP file in `options.directory` in place.
pub fn recolor(options: &RecolorOptions) -> Result<RecolorReport> {
    let files = sprite_files(&options.directory)?;
    log::info!(
        "Recoloring {} sprites in {} to {:?}",
        files.len(),
        options.directory.display(),
        options.color
    );

    let mut report = RecolorReport::default();
    for path in files {
        let format = SpriteFormat::from_path(&path)?;
        let mut img = image::open(&path)
            .map_err(|source| RotatorError::UnreadableSource {
                path: path.clone(),
                source,
            })?
            .into_rgba8();

        recolor_image(&mut img, options.color, options.preserve_alpha);
        format.save(&img, &path)?;
        log::debug!("Recolored {}", path.display());
        report.recolored.push(path);
    }

    log::info!("Recolor completed for {} sprites", report.recolored.len());
    Ok(report)
}
