//! PNG export of the painted hex grid.
//!
//! The grid area of the canvas is rasterized with [`render_grid`] and written
//! next to earlier exports under a sequential `hexgrid_NNN.png` name.

pub mod filename;
pub mod raster;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::grid::HexGridStore;
use crate::models::PixelRect;

pub use filename::next_export_path;
pub use raster::render_grid;

/// Renders the grid area and saves it as the next `hexgrid_NNN.png` in `dir`.
///
/// The directory is created if needed. Returns the written path.
///
/// # Errors
///
/// Fails if the area is empty or the directory or file cannot be written.
pub fn export_png(grid: &HexGridStore, area: PixelRect, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

    let pixmap = render_grid(grid, area)?;
    let path = next_export_path(dir)?;
    pixmap
        .save_png(&path)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("Failed to write PNG: {}", path.display()))?;

    info!(
        "Exported {}x{} grid image to {}",
        pixmap.width(),
        pixmap.height(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HexGeometry;
    use crate::models::{Point, RgbColor};
    use tempfile::TempDir;

    fn grid() -> HexGridStore {
        let geometry = HexGeometry::new(Point::new(60, 60), 10, 3).unwrap();
        HexGridStore::new(geometry, RgbColor::BLUE)
    }

    #[test]
    fn test_export_writes_sequential_files() {
        let temp = TempDir::new().unwrap();
        let area = PixelRect::new(0, 0, 140, 140);

        let first = export_png(&grid(), area, temp.path()).unwrap();
        let second = export_png(&grid(), area, temp.path()).unwrap();

        assert_eq!(first, temp.path().join("hexgrid_000.png"));
        assert_eq!(second, temp.path().join("hexgrid_001.png"));
        assert!(first.exists());

        let loaded = tiny_skia::Pixmap::load_png(&second).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (140, 140));
    }

    #[test]
    fn test_export_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("out").join("pngs");
        let path = export_png(&grid(), PixelRect::new(0, 0, 140, 140), &dir).unwrap();
        assert!(path.starts_with(&dir));
        assert!(path.exists());
    }

    #[test]
    fn test_export_fails_on_file_in_place_of_directory() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        assert!(export_png(&grid(), PixelRect::new(0, 0, 140, 140), &blocker).is_err());
    }
}
