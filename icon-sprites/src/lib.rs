//! # icon-sprites
//!
//! Pre-renders rotational sprite sets from a single PNG or WebP icon.
//!
//! ## Features
//! - Clockwise rotation at a fixed angular step, with expanding or fixed canvas
//! - Near-white background removal after rotation
//! - Manifest-based cleanup that only deletes stale sprites
//! - In-place recoloring of a finished sprite set
//!
//! ## Example
//!
//! ```no_run
//! use icon_sprites::{generate, recolor, GenerateOptions, RecolorOptions};
//!
//! let options = GenerateOptions::new("assets/ship.png", "public/rotated_icons")
//!     .with_step(5)
//!     .with_expand(true)
//!     .with_threshold(Some(200));
//! let report = generate(&options).unwrap();
//! println!("wrote {} sprites", report.written.len());
//!
//! recolor(&RecolorOptions::new("public/rotated_icons").with_color([0, 0, 255, 255])).unwrap();
//! ```

pub mod angles;
pub mod background;
mod error;
pub mod format;
mod generate;
pub mod manifest;
mod recolor;
pub mod rotate;
mod source;

#[cfg(test)]
mod test_util;

pub use angles::AngleSequence;
pub use background::{clear_background, DEFAULT_THRESHOLD};
pub use error::{Result, RotatorError};
pub use format::SpriteFormat;
pub use generate::{generate, generate_from, plan, GenerateOptions, GenerateReport, Plan};
pub use manifest::{is_sprite_file_name, sprite_file_name, ManifestEntry, OutputManifest};
pub use recolor::{recolor, recolor_image, RecolorOptions, RecolorReport, DEFAULT_COLOR};
pub use rotate::{rotate, rotated_bounds, Resample};
pub use source::SourceImage;
