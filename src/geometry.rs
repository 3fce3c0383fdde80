//! Projection between axial hex coordinates and pixel-space hexagons.
//!
//! Hexagons are flat-topped with horizontal top and bottom edges of length
//! `S` and pointed left/right corners:
//!
//! ```text
//!     A _____ B
//!      /     \
//!   F /       \ C
//!     \       /
//!      \_____/
//!      E     D
//! ```
//!
//! `dx = S / 2` is the horizontal reach of the pointed corners and `dy` is half
//! the hexagon height, `S * 0.866` truncated to an integer. Rows are `2 * dy`
//! apart and each column is shifted down by `dy` relative to the previous one.

// Pixel math mixes i32 coordinates with a float scale factor
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

use anyhow::Result;

use crate::models::axial::{self, AxialCoord};
use crate::models::Point;

/// Truncated `√3 / 2`, used for the hexagon height and the layout span.
pub const ROOT_THREE_HALVES: f64 = 0.866;

/// Immutable projection parameters, fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexGeometryConfig {
    /// Pixel position of corner A of cell (0, 0)
    pub origin: Point,
    /// Length of every hexagon edge in pixels
    pub side: i32,
    /// Horizontal reach of the pointed corners, `side / 2`
    pub dx: i32,
    /// Half the hexagon height, `trunc(side * 0.866)`
    pub dy: i32,
    /// Radius of the paintable region
    pub radius: i32,
}

impl HexGeometryConfig {
    /// Derives the configuration from the origin, side length and radius.
    ///
    /// # Errors
    ///
    /// Fails if the side length is too small to produce a positive hexagon
    /// height, if the radius is not positive, or if the outlines of the region
    /// and its outer ring would not fit in `i32` pixel coordinates.
    pub fn new(origin: Point, side: i32, radius: i32) -> Result<Self> {
        if side <= 0 {
            anyhow::bail!("Hex side length must be positive, got {side}");
        }
        if radius <= 0 {
            anyhow::bail!("Hex grid radius must be positive, got {radius}");
        }

        let dx = side / 2;
        let dy = (f64::from(side) * ROOT_THREE_HALVES) as i32;
        if dy <= 0 {
            anyhow::bail!("Hex side length {side} is too small: derived hexagon height is zero");
        }
        let (Some(column_pitch), Some(row_pitch)) = (side.checked_add(dx), dy.checked_mul(2)) else {
            anyhow::bail!("Hex side length {side} is too large for the pixel space");
        };

        // Cells up to radius + 1 away are outlined by `locate`
        let reach = i64::from(radius) + 1;
        let extent_x = reach * i64::from(column_pitch) + i64::from(column_pitch);
        let extent_y = 2 * reach * i64::from(dy) + i64::from(row_pitch);
        let fits = |center: i32, extent: i64| {
            i32::try_from(i64::from(center) - extent).is_ok()
                && i32::try_from(i64::from(center) + extent).is_ok()
        };
        if !fits(origin.x, extent_x) || !fits(origin.y, extent_y) {
            anyhow::bail!(
                "Hex grid of radius {radius} and side {side} at ({}, {}) does not fit the pixel space",
                origin.x,
                origin.y
            );
        }

        Ok(Self {
            origin,
            side,
            dx,
            dy,
            radius,
        })
    }

    /// Horizontal distance between adjacent columns, `S + dx`.
    #[must_use]
    pub const fn column_pitch(&self) -> i32 {
        self.side + self.dx
    }

    /// Vertical distance between adjacent rows, `2 * dy`.
    #[must_use]
    pub const fn row_pitch(&self) -> i32 {
        2 * self.dy
    }
}

/// Stateless conversion between axial coordinates and pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexGeometry {
    config: HexGeometryConfig,
}

impl HexGeometry {
    /// Creates a geometry from an already validated configuration.
    #[must_use]
    pub const fn from_config(config: HexGeometryConfig) -> Self {
        Self { config }
    }

    /// Creates a geometry, validating the parameters.
    pub fn new(origin: Point, side: i32, radius: i32) -> Result<Self> {
        Ok(Self::from_config(HexGeometryConfig::new(origin, side, radius)?))
    }

    /// The projection parameters.
    #[must_use]
    pub const fn config(&self) -> &HexGeometryConfig {
        &self.config
    }

    /// Radius of the paintable region.
    #[must_use]
    pub const fn radius(&self) -> i32 {
        self.config.radius
    }

    /// Corner A (top-left) of the cell.
    fn anchor(&self, coord: AxialCoord) -> Point {
        let c = &self.config;
        Point::new(
            c.origin.x + coord.q * c.column_pitch(),
            c.origin.y + coord.q * c.dy + coord.r * c.row_pitch(),
        )
    }

    /// The six outline vertices A..F of the cell, in drawing order:
    /// top-left, top-right, right, bottom-right, bottom-left, left.
    #[must_use]
    pub fn cell_outline(&self, coord: AxialCoord) -> [Point; 6] {
        let Point { x, y } = self.anchor(coord);
        let HexGeometryConfig { side: s, dx, dy, .. } = self.config;

        [
            Point::new(x, y),               // A
            Point::new(x + s, y),           // B
            Point::new(x + s + dx, y + dy), // C
            Point::new(x + s, y + 2 * dy),  // D
            Point::new(x, y + 2 * dy),      // E
            Point::new(x - dx, y + dy),     // F
        ]
    }

    /// Pixel at the middle of the cell.
    #[must_use]
    pub fn cell_center(&self, coord: AxialCoord) -> Point {
        let Point { x, y } = self.anchor(coord);
        Point::new(x + self.config.dx, y + self.config.dy)
    }

    /// Maps a pixel to the cell it belongs to, approximately.
    ///
    /// The lattice is bucketed as if each cell owned the rectangle from its
    /// corner A to the next column, so clicks on the pointed corners can land
    /// in a neighbouring cell. Division floors towards negative infinity.
    /// Every pixel maps to some coordinate; callers check the radius.
    #[must_use]
    pub fn hit_test(&self, px: i32, py: i32) -> AxialCoord {
        let c = &self.config;
        let q = (i64::from(px) - i64::from(c.origin.x)).div_euclid(i64::from(c.column_pitch()));
        let r = (i64::from(py) - i64::from(c.origin.y) - q * i64::from(c.dy))
            .div_euclid(i64::from(c.row_pitch()));
        AxialCoord::new(saturate(q), saturate(r))
    }

    /// Returns true if the cell lies inside the configured radius.
    #[must_use]
    pub fn is_in_radius(&self, coord: AxialCoord) -> bool {
        coord.is_in_radius(self.config.radius)
    }

    /// Every cell of the configured region, `q` outer and `r` inner.
    pub fn region(&self) -> impl Iterator<Item = AxialCoord> + Clone {
        axial::enumerate_region(self.config.radius)
    }

    /// Exact point-in-hexagon test against the cell outline. Points on the
    /// outline count as inside.
    #[must_use]
    pub fn contains(&self, coord: AxialCoord, px: i32, py: i32) -> bool {
        let outline = self.cell_outline(coord);
        let (px, py) = (i64::from(px), i64::from(py));

        // The outline winds clockwise on screen, so inside points sit to the
        // right of every edge.
        (0..outline.len()).all(|i| {
            let a = outline[i];
            let b = outline[(i + 1) % outline.len()];
            let (ax, ay) = (i64::from(a.x), i64::from(a.y));
            let (bx, by) = (i64::from(b.x), i64::from(b.y));
            (bx - ax) * (py - ay) - (by - ay) * (px - ax) >= 0
        })
    }

    /// The cell whose outline actually contains the pixel.
    ///
    /// Checks the hit-test candidate and its neighbours; pixels in the slivers
    /// between truncated outlines fall back to the hit-test result. So do
    /// pixels whose candidate lies beyond the ring around the region.
    #[must_use]
    pub fn locate(&self, px: i32, py: i32) -> AxialCoord {
        let candidate = self.hit_test(px, py);
        if !candidate.is_in_radius(self.config.radius.saturating_add(1)) {
            return candidate;
        }
        if self.contains(candidate, px, py) {
            return candidate;
        }
        candidate
            .neighbors()
            .into_iter()
            .find(|&n| self.contains(n, px, py))
            .unwrap_or(candidate)
    }
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
