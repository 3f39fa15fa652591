//! Configuration loading from rotator.toml

use std::path::{Path, PathBuf};

use icon_sprites::{GenerateOptions, RecolorOptions, Resample, SpriteFormat, DEFAULT_COLOR};
use serde::Deserialize;
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "rotator.toml";

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub recolor: RecolorConfig,
}

/// `[generate]` section
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateConfig {
    /// Source icon (PNG or WebP)
    pub source: Option<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Degrees between sprites
    #[serde(default = "default_step")]
    pub step: u32,
    /// Grow the canvas to fit the rotated icon
    #[serde(default = "default_expand")]
    pub expand: bool,
    /// Per-channel brightness above which a pixel becomes transparent
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    #[serde(default = "default_clear_background")]
    pub clear_background: bool,
    /// Also write rotated_icon_360
    #[serde(default)]
    pub include_full_turn: bool,
    /// "png" or "webp"; defaults to the source's format
    pub format: Option<String>,
    /// "nearest" or "bilinear"
    #[serde(default = "default_resample")]
    pub resample: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            source: None,
            output_dir: default_output_dir(),
            step: default_step(),
            expand: default_expand(),
            threshold: default_threshold(),
            clear_background: default_clear_background(),
            include_full_turn: false,
            format: None,
            resample: default_resample(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("rotated_icons")
}

fn default_step() -> u32 {
    5
}

fn default_expand() -> bool {
    true
}

fn default_threshold() -> u8 {
    icon_sprites::DEFAULT_THRESHOLD
}

fn default_clear_background() -> bool {
    true
}

fn default_resample() -> String {
    "nearest".to_string()
}

/// `[recolor]` section
#[derive(Debug, Clone, Deserialize)]
pub struct RecolorConfig {
    #[serde(default = "default_output_dir")]
    pub directory: PathBuf,
    /// Target color [r, g, b, a]
    #[serde(default = "default_color")]
    pub color: [u8; 4],
    #[serde(default)]
    pub preserve_alpha: bool,
}

impl Default for RecolorConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            color: default_color(),
            preserve_alpha: false,
        }
    }
}

fn default_color() -> [u8; 4] {
    DEFAULT_COLOR
}

/// Parse a resampling filter name.
pub fn resample_from_str(s: &str) -> Resample {
    match s.to_lowercase().as_str() {
        "nearest" | "nearest-neighbor" => Resample::Nearest,
        "bilinear" | "linear" => Resample::Bilinear,
        _ => {
            log::warn!("Unknown resample filter '{}', defaulting to nearest", s);
            Resample::Nearest
        }
    }
}

impl GenerateConfig {
    /// Build library options. Fails when no source was configured or the
    /// format name is not a sprite format.
    pub fn to_options(&self) -> Result<GenerateOptions, ConfigError> {
        let source = self
            .source
            .clone()
            .ok_or_else(|| ConfigError::Invalid("no source image configured".to_string()))?;
        let format = self
            .format
            .as_deref()
            .map(str::parse::<SpriteFormat>)
            .transpose()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        let threshold = self.clear_background.then_some(self.threshold);

        Ok(GenerateOptions::new(source, &self.output_dir)
            .with_step(self.step)
            .with_expand(self.expand)
            .with_threshold(threshold)
            .with_full_turn(self.include_full_turn)
            .with_format(format)
            .with_resample(resample_from_str(&self.resample)))
    }
}

impl RecolorConfig {
    pub fn to_options(&self) -> RecolorOptions {
        RecolorOptions::new(&self.directory)
            .with_color(self.color)
            .with_preserve_alpha(self.preserve_alpha)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load rotator.toml from the current directory, or defaults if it is absent
    pub fn load_default() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_FILE).is_file() {
            log::info!("Using config {}", DEFAULT_CONFIG_FILE);
            Self::load(DEFAULT_CONFIG_FILE)
        } else {
            Ok(Self::default())
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.generate.step, 5);
        assert!(config.generate.expand);
        assert_eq!(config.generate.threshold, 200);
        assert_eq!(config.generate.output_dir, PathBuf::from("rotated_icons"));
        assert_eq!(config.recolor.color, [0, 0, 255, 255]);
        assert!(!config.recolor.preserve_alpha);
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
            [generate]
            source = "src/helpers/barco.webp"
            output_dir = "public/rotated_icons"
            step = 10
            expand = false
            threshold = 220
            include_full_turn = true
            format = "png"
            resample = "bilinear"

            [recolor]
            directory = "public/rotated_icons"
            color = [255, 0, 0, 255]
            preserve_alpha = true
            "#,
        )
        .unwrap();

        let options = config.generate.to_options().unwrap();
        assert_eq!(options.source, PathBuf::from("src/helpers/barco.webp"));
        assert_eq!(options.step, 10);
        assert!(!options.expand);
        assert_eq!(options.threshold, Some(220));
        assert!(options.include_full_turn);
        assert_eq!(options.format, Some(SpriteFormat::Png));
        assert_eq!(options.resample, Resample::Bilinear);

        let recolor = config.recolor.to_options();
        assert_eq!(recolor.directory, PathBuf::from("public/rotated_icons"));
        assert_eq!(recolor.color, [255, 0, 0, 255]);
        assert!(recolor.preserve_alpha);
    }

    #[test]
    fn test_background_pass_can_be_disabled() {
        let config = Config::parse(
            r#"
            [generate]
            source = "icon.png"
            clear_background = false
            "#,
        )
        .unwrap();
        assert_eq!(config.generate.to_options().unwrap().threshold, None);
    }

    #[test]
    fn test_missing_source_is_invalid() {
        let err = Config::default().generate.to_options().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_bad_format_is_invalid() {
        let mut config = GenerateConfig::default();
        config.source = Some(PathBuf::from("icon.png"));
        config.format = Some("gif".to_string());
        assert!(matches!(config.to_options(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Config::parse("[generate]\nstep = \"five\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_resample_falls_back() {
        assert_eq!(resample_from_str("Bilinear"), Resample::Bilinear);
        assert_eq!(resample_from_str("lanczos"), Resample::Nearest);
    }
}
