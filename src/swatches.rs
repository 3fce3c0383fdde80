//! Board of 16×4 user-editable color swatches.
//!
//! The board is frozen by default. Unfreezing it lets the next swatch click
//! overwrite that swatch with the palette color; every swatch click freezes
//! the board again, so one unfreeze allows exactly one overwrite.

use crate::models::RgbColor;

/// Swatch columns.
pub const SWATCH_COLUMNS: u8 = 16;

/// Swatch rows.
pub const SWATCH_ROWS: u8 = 4;

/// Color of swatches without a seeded value.
pub const UNSEEDED_SWATCH: RgbColor = RgbColor::new(160, 160, 160);

/// Position of a swatch on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SwatchIndex {
    /// Column, 0-15
    pub col: u8,
    /// Row, 0-3
    pub row: u8,
}

impl SwatchIndex {
    /// Creates an index, or `None` if it falls off the board.
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col < SWATCH_COLUMNS && row < SWATCH_ROWS {
            Some(Self { col, row })
        } else {
            None
        }
    }

    const fn slot(self) -> usize {
        self.row as usize * SWATCH_COLUMNS as usize + self.col as usize
    }
}

/// Seeded stops as `(col, row, color)`.
#[rustfmt::skip]
const DEFAULT_STOPS: &[(u8, u8, RgbColor)] = &[
    (0, 0, RgbColor::new(26, 19, 52)),
    (1, 0, RgbColor::new(38, 41, 74)),
    (2, 0, RgbColor::new(1, 84, 90)),
    (3, 0, RgbColor::new(1, 115, 81)),
    (4, 0, RgbColor::new(3, 195, 131)),
    (5, 0, RgbColor::new(170, 217, 98)),
    (6, 0, RgbColor::new(251, 191, 69)),
    (7, 0, RgbColor::new(239, 106, 50)),
    (8, 0, RgbColor::new(237, 3, 69)),
    (9, 0, RgbColor::new(161, 42, 94)),
    (10, 0, RgbColor::new(113, 1, 98)),
    (11, 0, RgbColor::new(2, 44, 125)),
    (15, 0, RgbColor::BLUE),

    (0, 1, RgbColor::new(84, 48, 5)),
    (1, 1, RgbColor::new(140, 81, 10)),
    (2, 1, RgbColor::new(191, 129, 45)),
    (3, 1, RgbColor::new(223, 194, 125)),
    (4, 1, RgbColor::new(246, 232, 195)),
    (5, 1, RgbColor::new(245, 245, 245)),
    (6, 1, RgbColor::new(199, 234, 229)),
    (7, 1, RgbColor::new(128, 205, 193)),
    (8, 1, RgbColor::new(53, 151, 143)),
    (9, 1, RgbColor::new(1, 102, 94)),
    (10, 1, RgbColor::new(0, 60, 48)),

    (0, 2, RgbColor::new(158, 1, 66)),
    (1, 2, RgbColor::new(213, 62, 79)),
    (2, 2, RgbColor::new(244, 109, 67)),
    (3, 2, RgbColor::new(253, 174, 97)),
    (4, 2, RgbColor::new(254, 224, 139)),
    (5, 2, RgbColor::new(230, 245, 152)),
    (6, 2, RgbColor::new(171, 221, 164)),
    (7, 2, RgbColor::new(102, 194, 165)),
    (8, 2, RgbColor::new(50, 136, 189)),
    (9, 2, RgbColor::new(94, 79, 162)),

    (0, 3, RgbColor::new(247, 252, 253)),
    (1, 3, RgbColor::new(224, 236, 244)),
    (2, 3, RgbColor::new(191, 211, 230)),
    (3, 3, RgbColor::new(158, 188, 218)),
    (4, 3, RgbColor::new(140, 150, 198)),
    (5, 3, RgbColor::new(140, 107, 177)),
    (6, 3, RgbColor::new(136, 65, 157)),
    (7, 3, RgbColor::new(129, 15, 124)),
    (8, 3, RgbColor::new(77, 0, 75)),
    (11, 3, RgbColor::new(85, 34, 51)),
    (12, 3, RgbColor::new(187, 68, 68)),
    (13, 3, RgbColor::new(187, 170, 68)),
    (14, 3, RgbColor::new(136, 168, 147)),
    (15, 3, RgbColor::new(118, 89, 65)),
];

const SLOTS: usize = SWATCH_COLUMNS as usize * SWATCH_ROWS as usize;

/// The swatch colors, the freeze gate and the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwatchBoard {
    colors: [RgbColor; SLOTS],
    frozen: bool,
    selected: SwatchIndex,
    selected_color: RgbColor,
}

impl SwatchBoard {
    /// Creates a frozen board seeded with the default stops, with swatch
    /// (0, 0) selected.
    #[must_use]
    pub fn new() -> Self {
        let mut colors = [UNSEEDED_SWATCH; SLOTS];
        for &(col, row, color) in DEFAULT_STOPS {
            colors[usize::from(row) * usize::from(SWATCH_COLUMNS) + usize::from(col)] = color;
        }
        let selected = SwatchIndex::default();

        Self {
            selected_color: colors[selected.slot()],
            colors,
            frozen: true,
            selected,
        }
    }

    /// Whether swatch overwrites are currently blocked.
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Label for the freeze control.
    #[must_use]
    pub const fn freeze_label(&self) -> &'static str {
        if self.frozen {
            "frozen"
        } else {
            "unfrozen"
        }
    }

    /// Current color of a swatch.
    #[must_use]
    pub const fn color_at(&self, index: SwatchIndex) -> RgbColor {
        self.colors[index.slot()]
    }

    /// The selected swatch.
    #[must_use]
    pub const fn selected(&self) -> SwatchIndex {
        self.selected
    }

    /// Paint color picked from the board, used for the hex grid.
    #[must_use]
    pub const fn selected_color(&self) -> RgbColor {
        self.selected_color
    }

    /// Overwrites the swatch unless the board is frozen.
    ///
    /// Returns true if the swatch was overwritten.
    pub fn try_set_swatch(&mut self, index: SwatchIndex, color: RgbColor) -> bool {
        if self.frozen {
            return false;
        }
        self.colors[index.slot()] = color;
        true
    }

    /// Selects the swatch, records its color as the paint color and freezes
    /// the board.
    pub fn select_swatch(&mut self, index: SwatchIndex) -> RgbColor {
        self.selected = index;
        self.selected_color = self.colors[index.slot()];
        self.frozen = true;
        self.selected_color
    }

    /// A click on a swatch: commit the palette color if the board is
    /// unfrozen and the palette has a selection, then select the swatch.
    pub fn click(&mut self, index: SwatchIndex, palette_color: Option<RgbColor>) -> RgbColor {
        if let Some(color) = palette_color {
            self.try_set_swatch(index, color);
        }
        self.select_swatch(index)
    }

    /// Flips the freeze gate.
    pub fn toggle_freeze(&mut self) {
        self.frozen = !self.frozen;
    }
}

impl Default for SwatchBoard {
    fn default() -> Self {
        Self::new()
    }
}
