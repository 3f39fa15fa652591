//! Expected output files of a sprite set and stale-file cleanup
//!
//! A run only ever deletes files whose names match the sprite pattern
//! `rotated_icon_<digits>.<png|webp>` exactly and that the current run will
//! not write. Anything else in the directory is left alone, including names
//! that merely share the prefix.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use glob::glob;

use crate::angles::AngleSequence;
use crate::error::{Result, RotatorError};
use crate::format::SpriteFormat;

/// File name prefix shared by every sprite.
pub const FILE_PREFIX: &str = "rotated_icon_";

/// File name of the sprite rendered at `angle`.
pub fn sprite_file_name(angle: u32, format: SpriteFormat) -> String {
    format!("{}{}.{}", FILE_PREFIX, angle, format.extension())
}

/// Whether `name` follows the sprite naming pattern.
pub fn is_sprite_file_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix(FILE_PREFIX) else {
        return false;
    };
    let Some((angle, ext)) = rest.split_once('.') else {
        return false;
    };
    !angle.is_empty()
        && angle.bytes().all(|b| b.is_ascii_digit())
        && SpriteFormat::ALL.iter().any(|f| f.extension() == ext)
}

/// List the PNG/WebP files directly inside `dir`, sorted by path.
pub(crate) fn sprite_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(RotatorError::write(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "directory does not exist"),
        ));
    }

    let pattern = format!("{}/*", glob::Pattern::escape(&dir.to_string_lossy()));
    let entries = glob(&pattern).map_err(|e| {
        RotatorError::write(
            dir,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()),
        )
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            RotatorError::write(path, std::io::Error::from(e))
        })?;
        if !path.is_file() {
            continue;
        }
        if SpriteFormat::sniff(&path).is_some() {
            files.push(path);
        } else {
            log::debug!("Skipping non-sprite file {}", path.display());
        }
    }
    files.sort();
    Ok(files)
}

/// One expected output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub angle: u32,
    pub path: PathBuf,
}

/// Every file a run with a given configuration writes.
#[derive(Debug, Clone)]
pub struct OutputManifest {
    directory: PathBuf,
    format: SpriteFormat,
    entries: Vec<ManifestEntry>,
}

impl OutputManifest {
    pub fn new(directory: impl Into<PathBuf>, angles: &AngleSequence, format: SpriteFormat) -> Self {
        let directory = directory.into();
        let entries = angles
            .iter()
            .map(|angle| ManifestEntry {
                angle,
                path: directory.join(sprite_file_name(angle, format)),
            })
            .collect();
        Self {
            directory,
            format,
            entries,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn format(&self) -> SpriteFormat {
        self.format
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn file_names(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .map(|e| sprite_file_name(e.angle, self.format))
            .collect()
    }

    /// Sprite-pattern files in the directory that this manifest does not
    /// produce. A missing directory has none.
    pub fn stale_files(&self) -> Result<Vec<PathBuf>> {
        if !self.directory.exists() {
            return Ok(Vec::new());
        }
        let expected = self.file_names();
        let stale = sprite_files(&self.directory)?
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| is_sprite_file_name(name) && !expected.contains(name))
            })
            .collect();
        Ok(stale)
    }

    /// Delete every stale file and return the removed paths.
    pub fn remove_stale(&self) -> Result<Vec<PathBuf>> {
        let stale = self.stale_files()?;
        for path in &stale {
            std::fs::remove_file(path).map_err(|e| RotatorError::write(path, e))?;
            log::debug!("Removed stale sprite {}", path.display());
        }
        if !stale.is_empty() {
            log::info!(
                "Removed {} stale sprites from {}",
                stale.len(),
                self.directory.display()
            );
        }
        Ok(stale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::ScratchDir;

    #[test]
    fn test_sprite_file_name() {
        assert_eq!(sprite_file_name(0, SpriteFormat::Png), "rotated_icon_0.png");
        assert_eq!(sprite_file_name(355, SpriteFormat::Webp), "rotated_icon_355.webp");
    }

    #[test]
    fn test_name_pattern_is_strict() {
        assert!(is_sprite_file_name("rotated_icon_0.png"));
        assert!(is_sprite_file_name("rotated_icon_360.webp"));
        assert!(!is_sprite_file_name("rotated_icon_.png"));
        assert!(!is_sprite_file_name("rotated_icon_backup.png"));
        assert!(!is_sprite_file_name("rotated_icon_5.png.bak"));
        assert!(!is_sprite_file_name("rotated_icon_5.jpg"));
        assert!(!is_sprite_file_name("icon_5.png"));
    }

    #[test]
    fn test_manifest_entries() {
        let angles = AngleSequence::new(90, true).unwrap();
        let manifest = OutputManifest::new("out", &angles, SpriteFormat::Png);
        let names: Vec<_> = manifest
            .entries()
            .iter()
            .map(|e| e.path.clone())
            .collect();
        assert_eq!(manifest.len(), 5);
        assert_eq!(names[1], Path::new("out").join("rotated_icon_90.png"));
        assert_eq!(names[4], Path::new("out").join("rotated_icon_360.png"));
    }

    #[test]
    fn test_stale_files_only_touch_pattern_matches() {
        let dir = ScratchDir::new("manifest_stale");
        for name in [
            "rotated_icon_0.png",
            "rotated_icon_45.png",
            "rotated_icon_90.webp",
            "rotated_icon_backup.png",
            "logo.png",
            "notes.txt",
        ] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }

        let angles = AngleSequence::new(90, false).unwrap();
        let manifest = OutputManifest::new(dir.path(), &angles, SpriteFormat::Png);
        let removed = manifest.remove_stale().unwrap();

        let removed: Vec<_> = removed
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(removed, vec!["rotated_icon_45.png", "rotated_icon_90.webp"]);
        assert!(dir.path().join("rotated_icon_0.png").exists());
        assert!(dir.path().join("rotated_icon_backup.png").exists());
        assert!(dir.path().join("logo.png").exists());
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_missing_directory_has_no_stale_files() {
        let angles = AngleSequence::default();
        let manifest = OutputManifest::new("no/such/dir", &angles, SpriteFormat::Png);
        assert!(manifest.stale_files().unwrap().is_empty());
    }
}
