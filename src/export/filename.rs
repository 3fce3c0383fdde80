//! Sequential `hexgrid_NNN.png` file naming.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;

/// Prefix of every exported file name.
pub const EXPORT_PREFIX: &str = "hexgrid_";

/// Path for the next export in `dir`: one past the highest existing
/// `hexgrid_NNN.png`, or `hexgrid_000.png` if there is none.
///
/// A missing directory counts as empty.
///
/// # Errors
///
/// Fails if the directory exists but cannot be read.
pub fn next_export_path(dir: &Path) -> Result<PathBuf> {
    let pattern = Regex::new(r"^hexgrid_(\d{3})\.png$").context("Invalid export name pattern")?;

    let mut next = 0u32;
    if dir.exists() {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read export directory: {}", dir.display()))?;
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(caps) = name.to_str().and_then(|n| pattern.captures(n)) else {
                continue;
            };
            if let Ok(n) = caps[1].parse::<u32>() {
                next = next.max(n + 1);
            }
        }
    }

    Ok(dir.join(format!("{EXPORT_PREFIX}{next:03}.png")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_empty_directory_starts_at_zero() {
        let temp = TempDir::new().unwrap();
        let path = next_export_path(temp.path()).unwrap();
        assert_eq!(path, temp.path().join("hexgrid_000.png"));
    }

    #[test]
    fn test_missing_directory_starts_at_zero() {
        let temp = TempDir::new().unwrap();
        let path = next_export_path(&temp.path().join("nope")).unwrap();
        assert!(path.ends_with("hexgrid_000.png"));
    }

    #[test]
    fn test_continues_after_highest() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "hexgrid_000.png");
        touch(temp.path(), "hexgrid_007.png");
        touch(temp.path(), "hexgrid_003.png");
        let path = next_export_path(temp.path()).unwrap();
        assert_eq!(path, temp.path().join("hexgrid_008.png"));
    }

    #[test]
    fn test_ignores_other_names() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "hexgrid_12.png");
        touch(temp.path(), "hexgrid_0042.png");
        touch(temp.path(), "hexgrid_005.png.bak");
        touch(temp.path(), "my_hexgrid_009.png");
        touch(temp.path(), "hexgrid_abc.png");
        let path = next_export_path(temp.path()).unwrap();
        assert_eq!(path, temp.path().join("hexgrid_000.png"));
    }

    #[test]
    fn test_counter_past_three_digits() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "hexgrid_999.png");
        let path = next_export_path(temp.path()).unwrap();
        assert_eq!(path, temp.path().join("hexgrid_1000.png"));
    }
}
