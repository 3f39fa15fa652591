//! Rotational sprite set generation

use std::path::{Path, PathBuf};

use crate::angles::AngleSequence;
use crate::background::{clear_background, DEFAULT_THRESHOLD};
use crate::error::{Result, RotatorError};
use crate::format::SpriteFormat;
use crate::manifest::OutputManifest;
use crate::rotate::{rotate, Resample};
use crate::source::SourceImage;

/// Everything a generation run needs.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Icon every sprite is rendered from.
    pub source: PathBuf,
    /// Flat directory that receives `rotated_icon_<angle>.<ext>` files.
    pub output_dir: PathBuf,
    /// Degrees between consecutive sprites.
    pub step: u32,
    /// Grow the canvas to fit the rotated icon instead of clipping corners.
    pub expand: bool,
    /// Brightness above which pixels become transparent. `None` skips the pass.
    pub threshold: Option<u8>,
    /// Also write a 360 degree sprite identical to the 0 degree one.
    pub include_full_turn: bool,
    /// Output format. Defaults to the source's format.
    pub format: Option<SpriteFormat>,
    pub resample: Resample,
}

impl GenerateOptions {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            step: 5,
            expand: true,
            threshold: Some(DEFAULT_THRESHOLD),
            include_full_turn: false,
            format: None,
            resample: Resample::Nearest,
        }
    }

    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    pub fn with_threshold(mut self, threshold: Option<u8>) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_full_turn(mut self, include: bool) -> Self {
        self.include_full_turn = include;
        self
    }

    pub fn with_format(mut self, format: Option<SpriteFormat>) -> Self {
        self.format = format;
        self
    }

    pub fn with_resample(mut self, resample: Resample) -> Self {
        self.resample = resample;
        self
    }

    pub fn angles(&self) -> Result<AngleSequence> {
        AngleSequence::new(self.step, self.include_full_turn)
    }

    /// Output format: the explicit one, else the source file's extension.
    pub fn output_format(&self) -> Result<SpriteFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => SpriteFormat::from_path(&self.source),
        }
    }

    pub fn manifest(&self) -> Result<OutputManifest> {
        Ok(OutputManifest::new(
            &self.output_dir,
            &self.angles()?,
            self.output_format()?,
        ))
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Sprites written, in angle order.
    pub written: Vec<PathBuf>,
    /// Stale sprites deleted before writing.
    pub removed: Vec<PathBuf>,
    /// Total pixels turned transparent by the background pass.
    pub cleared_pixels: usize,
}

/// What a run would do, without touching the disk.
#[derive(Debug, Clone)]
pub struct Plan {
    pub manifest: OutputManifest,
    pub stale: Vec<PathBuf>,
}

/// Compute the files a run would write and the stale files it would delete.
pub fn plan(options: &GenerateOptions) -> Result<Plan> {
    let manifest = options.manifest()?;
    let stale = manifest.stale_files()?;
    Ok(Plan { manifest, stale })
}

fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| RotatorError::write(dir, e))
}

/// Render the full sprite set described by `options`.
///
/// The source is loaded before the output directory is touched, so a bad
/// source never destroys an existing sprite set. A failure while writing
/// aborts the run and leaves already written sprites in place.
pub fn generate(options: &GenerateOptions) -> Result<GenerateReport> {
    let manifest = options.manifest()?;
    let source = SourceImage::open(&options.source)?;
    generate_from(&source, options, &manifest)
}

/// Like [`generate`] but with a source already in memory.
pub fn generate_from(
    source: &SourceImage,
    options: &GenerateOptions,
    manifest: &OutputManifest,
) -> Result<GenerateReport> {
    log::info!(
        "Generating {} sprites from {} ({}x{}) into {}",
        manifest.len(),
        source.path().display(),
        source.width(),
        source.height(),
        manifest.directory().display()
    );

    ensure_dir(manifest.directory())?;
    let removed = manifest.remove_stale()?;

    let mut report = GenerateReport {
        removed,
        ..Default::default()
    };

    for entry in manifest.entries() {
        let mut sprite = rotate(
            source.pixels(),
            entry.angle as f64,
            options.expand,
            options.resample,
        );
        if let Some(threshold) = options.threshold {
            report.cleared_pixels += clear_background(&mut sprite, threshold);
        }
        manifest.format().save(&sprite, &entry.path)?;
        log::debug!(
            "Wrote {} ({}x{})",
            entry.path.display(),
            sprite.width(),
            sprite.height()
        );
        report.written.push(entry.path.clone());
    }

    log::info!(
        "Wrote {} sprites, removed {} stale",
        report.written.len(),
        report.removed.len()
    );
    Ok(report)
}
