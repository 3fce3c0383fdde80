//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use hexpaint::controller::InteractionController;
use hexpaint::geometry::HexGeometry;
use hexpaint::grid::HexGridStore;
use hexpaint::layout::{CanvasLayout, Control};
use hexpaint::models::{PixelRect, Point, RgbColor};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Pure red, handy for spotting painted cells.
pub const RED: RgbColor = RgbColor::new(255, 0, 0);

/// Geometry with its origin at (0, 0).
pub fn test_geometry(side: i32, radius: i32) -> HexGeometry {
    HexGeometry::new(Point::new(0, 0), side, radius).unwrap()
}

/// Empty grid with side 20 at the origin, unpainted cells blue.
pub fn test_grid(radius: i32) -> HexGridStore {
    HexGridStore::new(test_geometry(20, radius), RgbColor::BLUE)
}

/// Default 1560x1000 canvas layout with side 20.
pub fn default_layout() -> CanvasLayout {
    CanvasLayout::new(20, 1560, 1000).unwrap()
}

/// Controller over the default layout with a fresh grid.
pub fn default_controller() -> InteractionController {
    let layout = default_layout();
    let geometry = HexGeometry::from_config(layout.geometry());
    InteractionController::new(layout, HexGridStore::new(geometry, RgbColor::BLUE))
}

/// Middle pixel of a rectangle.
pub fn center_of(rect: PixelRect) -> Point {
    Point::new(rect.x + rect.width / 2, rect.y + rect.height / 2)
}

/// Middle pixel of a tool panel button.
pub fn button_center(controller: &InteractionController, control: Control) -> Point {
    center_of(controller.layout().panel().button_rect(control))
}

/// Clicks (pointer down then up) at `point`.
pub fn click(controller: &mut InteractionController, point: Point) {
    controller.pointer_down(point);
    controller.pointer_up();
}

/// Writes `content` to a config.toml in a fresh temp directory.
///
/// Returns the file path and the directory guard, which must stay alive.
pub fn create_temp_config_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    (path, temp_dir)
}
