//! Sparse store of painted hex cells.

use std::collections::HashMap;

use tracing::debug;

use crate::geometry::HexGeometry;
use crate::models::{AxialCoord, RgbColor};

/// Painted colors keyed by axial coordinate, bounded by the geometry's radius.
///
/// Unpainted cells report the default color. Paints outside the radius are
/// dropped without error.
#[derive(Debug, Clone)]
pub struct HexGridStore {
    geometry: HexGeometry,
    default_color: RgbColor,
    colors: HashMap<AxialCoord, RgbColor>,
}

impl HexGridStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(geometry: HexGeometry, default_color: RgbColor) -> Self {
        Self {
            geometry,
            default_color,
            colors: HashMap::new(),
        }
    }

    /// The projection this store paints through.
    #[must_use]
    pub const fn geometry(&self) -> &HexGeometry {
        &self.geometry
    }

    /// Color reported for cells that were never painted.
    #[must_use]
    pub const fn default_color(&self) -> RgbColor {
        self.default_color
    }

    /// Stores `color` for the cell if it lies within the radius.
    ///
    /// Returns true if the cell was (re)colored.
    pub fn paint(&mut self, coord: AxialCoord, color: RgbColor) -> bool {
        if !self.geometry.is_in_radius(coord) {
            return false;
        }
        self.colors.insert(coord, color);
        true
    }

    /// Hit-tests the pixel and paints the cell under it.
    ///
    /// Returns true if a cell inside the radius was (re)colored.
    pub fn paint_at(&mut self, px: i32, py: i32, color: RgbColor) -> bool {
        let coord = self.geometry.hit_test(px, py);
        let painted = self.paint(coord, color);
        if painted {
            debug!("Painted {} with {} at pixel ({}, {})", coord, color, px, py);
        }
        painted
    }

    /// Stored color of the cell, or the default color.
    #[must_use]
    pub fn color_at(&self, coord: AxialCoord) -> RgbColor {
        self.colors
            .get(&coord)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Forgets every painted cell.
    pub fn clear(&mut self) {
        self.colors = HashMap::new();
    }

    /// Number of explicitly painted cells.
    #[must_use]
    pub fn painted_count(&self) -> usize {
        self.colors.len()
    }

    /// Every cell of the region with its current color, in region order.
    pub fn cells(&self) -> impl Iterator<Item = (AxialCoord, RgbColor)> + '_ {
        self.geometry
            .region()
            .map(move |coord| (coord, self.color_at(coord)))
    }
}
