//! Command line interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{Config, GenerateConfig, RecolorConfig};

#[derive(Parser)]
#[command(name = "icon-rotator", about = "Rotational sprite set generator")]
pub struct Cli {
    /// TOML config file (defaults to ./rotator.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render rotated sprites from a source icon
    Generate(GenerateArgs),
    /// Retint every sprite in a directory
    Recolor(RecolorArgs),
    /// Show which sprites a generate run would write and delete
    Plan(PlanArgs),
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Source icon (PNG or WebP)
    pub source: Option<PathBuf>,
    /// Output directory
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Degrees between sprites
    #[arg(long)]
    pub step: Option<u32>,
    /// Keep the source canvas size and clip corners
    #[arg(long)]
    pub fixed: bool,
    /// Per-channel brightness above which pixels become transparent
    #[arg(long)]
    pub threshold: Option<u8>,
    /// Skip the background removal pass
    #[arg(long)]
    pub keep_background: bool,
    /// Also write rotated_icon_360
    #[arg(long)]
    pub full_turn: bool,
    /// Output format: png or webp
    #[arg(long)]
    pub format: Option<String>,
    /// Bilinear resampling instead of nearest neighbor
    #[arg(long)]
    pub bilinear: bool,
}

/// Only the flags that change which files a run writes.
#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Source icon; its extension picks the format unless --format is given
    pub source: Option<PathBuf>,
    /// Output directory
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Degrees between sprites
    #[arg(long)]
    pub step: Option<u32>,
    /// Also write rotated_icon_360
    #[arg(long)]
    pub full_turn: bool,
    /// Output format: png or webp
    #[arg(long)]
    pub format: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct RecolorArgs {
    /// Directory of sprites to recolor
    pub directory: Option<PathBuf>,
    /// Target color as R,G,B,A
    #[arg(long, value_parser = parse_color)]
    pub color: Option<[u8; 4]>,
    /// Keep each pixel's alpha
    #[arg(long)]
    pub preserve_alpha: bool,
}

/// Parse "R,G,B" or "R,G,B,A" into RGBA; alpha defaults to 255.
pub fn parse_color(s: &str) -> Result<[u8; 4], String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid color '{}': {}", s, e))?;
    match parts[..] {
        [r, g, b] => Ok([r, g, b, 255]),
        [r, g, b, a] => Ok([r, g, b, a]),
        _ => Err(format!("invalid color '{}': expected R,G,B or R,G,B,A", s)),
    }
}

impl GenerateArgs {
    /// Overlay command line flags on top of the `[generate]` section.
    pub fn apply(&self, config: &GenerateConfig) -> GenerateConfig {
        let mut merged = config.clone();
        if let Some(source) = &self.source {
            merged.source = Some(source.clone());
        }
        if let Some(out) = &self.out {
            merged.output_dir = out.clone();
        }
        if let Some(step) = self.step {
            merged.step = step;
        }
        if self.fixed {
            merged.expand = false;
        }
        if let Some(threshold) = self.threshold {
            merged.threshold = threshold;
        }
        if self.keep_background {
            merged.clear_background = false;
        }
        if self.full_turn {
            merged.include_full_turn = true;
        }
        if let Some(format) = &self.format {
            merged.format = Some(format.clone());
        }
        if self.bilinear {
            merged.resample = "bilinear".to_string();
        }
        merged
    }
}

impl PlanArgs {
    /// Overlay command line flags on top of the `[generate]` section.
    pub fn apply(&self, config: &GenerateConfig) -> GenerateConfig {
        GenerateArgs {
            source: self.source.clone(),
            out: self.out.clone(),
            step: self.step,
            full_turn: self.full_turn,
            format: self.format.clone(),
            ..Default::default()
        }
        .apply(config)
    }
}

impl RecolorArgs {
    /// Overlay command line flags on top of the `[recolor]` section.
    pub fn apply(&self, config: &RecolorConfig) -> RecolorConfig {
        let mut merged = config.clone();
        if let Some(directory) = &self.directory {
            merged.directory = directory.clone();
        }
        if let Some(color) = self.color {
            merged.color = color;
        }
        if self.preserve_alpha {
            merged.preserve_alpha = true;
        }
        merged
    }
}

impl Cli {
    pub fn load_config(&self) -> Result<Config, crate::config::ConfigError> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Config::load_default(),
        }
    }
}
