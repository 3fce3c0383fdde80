//! Axial hex coordinates and radius-bounded regions.

use std::fmt;

/// Axial address of one cell on the infinite hex lattice.
///
/// `q` selects the column, `r` the cell within the column. Columns are
/// shifted half a cell down for every step in `q`, so the neighbours of
/// `(q, r)` are `(q, r ± 1)`, `(q + 1, r)`, `(q + 1, r - 1)`, `(q - 1, r)` and
/// `(q - 1, r + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxialCoord {
    /// Column index
    pub q: i32,
    /// Row index within the column
    pub r: i32,
}

impl AxialCoord {
    /// The cell at the center of every region.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a new axial coordinate.
    #[must_use]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Returns true if the cell lies inside the hexagonal region of `radius`
    /// centered on the origin: `|q| <= R`, `|r| <= R` and `|q + r| <= R`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexpaint::models::AxialCoord;
    ///
    /// assert!(AxialCoord::new(3, -3).is_in_radius(3));
    /// assert!(!AxialCoord::new(2, 2).is_in_radius(3));
    /// ```
    #[must_use]
    pub fn is_in_radius(&self, radius: i32) -> bool {
        let (q, r) = (i64::from(self.q), i64::from(self.r));
        let radius = i64::from(radius);
        q.abs() <= radius && r.abs() <= radius && (q + r).abs() <= radius
    }

    /// The six cells sharing an edge with this one.
    #[must_use]
    pub const fn neighbors(&self) -> [Self; 6] {
        let Self { q, r } = *self;
        [
            Self::new(q, r - 1),
            Self::new(q + 1, r - 1),
            Self::new(q + 1, r),
            Self::new(q, r + 1),
            Self::new(q - 1, r + 1),
            Self::new(q - 1, r),
        ]
    }
}

impl fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// Lazily enumerates every cell of the hexagonal region of `radius`.
///
/// Cells come out in row-major order with `q` outer and `r` inner. The
/// iterator is cheap to clone and calling this again restarts the sequence.
/// A negative radius yields nothing.
///
/// # Examples
///
/// ```
/// use hexpaint::models::axial::enumerate_region;
///
/// assert_eq!(enumerate_region(0).count(), 1);
/// assert_eq!(enumerate_region(2).count(), 19);
/// ```
pub fn enumerate_region(radius: i32) -> impl Iterator<Item = AxialCoord> + Clone {
    (-radius..=radius)
        .flat_map(move |q| (-radius..=radius).map(move |r| AxialCoord::new(q, r)))
        .filter(move |coord| coord.is_in_radius(radius))
}

/// Number of cells in a region of `radius`: `3R(R + 1) + 1`.
#[must_use]
pub const fn region_size(radius: u32) -> usize {
    let radius = radius as usize;
    3 * radius * (radius + 1) + 1
}
