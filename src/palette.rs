//! Generative 16×16 palette over a slice of the RGB cube.
//!
//! Two channels are spanned by the palette grid (`i`, `j`), the third one is
//! the depth `k = idx * 16`, stepped with the less/more controls. The channel
//! mode decides which channel is the depth.

use crate::models::RgbColor;

/// Palette cells along each side of the grid.
pub const PALETTE_SIDE: u8 = 16;

/// Largest depth index.
pub const MAX_DEPTH_INDEX: u8 = PALETTE_SIDE - 1;

/// Channel value step between adjacent cells and depth levels.
const CHANNEL_STEP: u8 = 16;

/// Depth index restored by [`PaletteModel::reset`].
pub const RESET_DEPTH_INDEX: u8 = 1;

/// Which channel carries the depth axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChannelMode {
    /// Depth drives green: `(i, k, j)`
    #[default]
    Green,
    /// Depth drives red: `(k, i, j)`
    Red,
    /// Depth drives blue: `(i, j, k)`
    Blue,
}

impl ChannelMode {
    /// Next mode in the cycle green → red → blue → green.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Green => Self::Red,
            Self::Red => Self::Blue,
            Self::Blue => Self::Green,
        }
    }

    /// Short label used on the palette buttons.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Green => 'g',
            Self::Red => 'r',
            Self::Blue => 'b',
        }
    }

    /// Color of palette cell `(i, j)` at channel value `k`.
    ///
    /// `i` and `j` are cell indices in `0..16`; `k` is already a channel value.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexpaint::models::RgbColor;
    /// use hexpaint::palette::ChannelMode;
    ///
    /// assert_eq!(ChannelMode::Green.color(1, 2, 48), RgbColor::new(16, 48, 32));
    /// assert_eq!(ChannelMode::Red.color(1, 2, 48), RgbColor::new(48, 16, 32));
    /// assert_eq!(ChannelMode::Blue.color(1, 2, 48), RgbColor::new(16, 32, 48));
    /// ```
    #[must_use]
    pub const fn color(self, i: u8, j: u8, k: u8) -> RgbColor {
        let i = channel(i);
        let j = channel(j);
        match self {
            Self::Green => RgbColor::new(i, k, j),
            Self::Red => RgbColor::new(k, i, j),
            Self::Blue => RgbColor::new(i, j, k),
        }
    }
}

/// Channel value of a cell index, clamped to the last cell.
const fn channel(index: u8) -> u8 {
    let index = if index > MAX_DEPTH_INDEX {
        MAX_DEPTH_INDEX
    } else {
        index
    };
    index * CHANNEL_STEP
}

/// Palette selection state: depth, channel mode and the picked cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteModel {
    idx: u8,
    mode: ChannelMode,
    selected: Option<((u8, u8), RgbColor)>,
}

impl PaletteModel {
    /// Starts at depth 0 in green mode with nothing selected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            idx: 0,
            mode: ChannelMode::Green,
            selected: None,
        }
    }

    /// Current depth index (0-15).
    #[must_use]
    pub const fn idx(&self) -> u8 {
        self.idx
    }

    /// Current depth as a channel value (0, 16, ..., 240).
    #[must_use]
    pub const fn k(&self) -> u8 {
        self.idx * CHANNEL_STEP
    }

    /// Current channel mode.
    #[must_use]
    pub const fn mode(&self) -> ChannelMode {
        self.mode
    }

    /// Raises the depth by one step; ignored at the top.
    pub fn increment(&mut self) {
        if self.idx < MAX_DEPTH_INDEX {
            self.idx += 1;
        }
    }

    /// Lowers the depth by one step; ignored at the bottom.
    pub fn decrement(&mut self) {
        if self.idx > 0 {
            self.idx -= 1;
        }
    }

    /// Advances to the next channel mode.
    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
    }

    /// Puts the depth back to index 1 (not 0).
    pub fn reset(&mut self) {
        self.idx = RESET_DEPTH_INDEX;
    }

    /// Color of cell `(i, j)` at the current depth and mode.
    #[must_use]
    pub const fn color_at(&self, i: u8, j: u8) -> RgbColor {
        self.mode.color(i, j, self.k())
    }

    /// Picks cell `(i, j)` and returns its color, which becomes the paint
    /// color offered to the swatch board. Indices past the grid are clamped.
    pub fn select_cell(&mut self, i: u8, j: u8) -> RgbColor {
        let cell = (i.min(MAX_DEPTH_INDEX), j.min(MAX_DEPTH_INDEX));
        let color = self.color_at(cell.0, cell.1);
        self.selected = Some((cell, color));
        color
    }

    /// The picked cell, if any.
    #[must_use]
    pub fn selected_cell(&self) -> Option<(u8, u8)> {
        self.selected.map(|(cell, _)| cell)
    }

    /// Color recorded when the cell was picked, if any.
    ///
    /// This does not follow later depth or mode changes.
    #[must_use]
    pub fn selected_color(&self) -> Option<RgbColor> {
        self.selected.map(|(_, color)| color)
    }
}

impl Default for PaletteModel {
    fn default() -> Self {
        Self::new()
    }
}
