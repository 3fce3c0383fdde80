//! Pointer routing between the tool panel and the hex grid.
//!
//! Every pointer-down runs the full pass in a fixed order: clear/save
//! buttons, palette, swatch board, then the grid. The grid is painted on
//! every click with whatever swatch color is selected at that point, even
//! when the same click also changed the swatch selection. Any pointer-up
//! releases every pressed button.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::grid::HexGridStore;
use crate::layout::{CanvasLayout, Control};
use crate::models::{Point, RgbColor};
use crate::palette::PaletteModel;
use crate::swatches::SwatchBoard;

/// What a pointer-down changed, for the host to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerOutcome {
    /// A grid cell was (re)colored
    pub painted: bool,
    /// The grid was cleared
    pub cleared: bool,
    /// The save button was hit; the host should export the grid
    pub save_requested: bool,
}

/// Owns the palette, the swatch board and the grid and routes pointer input
/// to them.
#[derive(Debug, Clone)]
pub struct InteractionController {
    layout: CanvasLayout,
    palette: PaletteModel,
    swatches: SwatchBoard,
    grid: HexGridStore,
    pressed: HashSet<Control>,
}

impl InteractionController {
    /// Creates a controller with fresh palette and swatch state.
    #[must_use]
    pub fn new(layout: CanvasLayout, grid: HexGridStore) -> Self {
        Self {
            layout,
            palette: PaletteModel::new(),
            swatches: SwatchBoard::new(),
            grid,
            pressed: HashSet::new(),
        }
    }

    /// Canvas layout the controller hit-tests against.
    #[must_use]
    pub const fn layout(&self) -> &CanvasLayout {
        &self.layout
    }

    /// Palette state.
    #[must_use]
    pub const fn palette(&self) -> &PaletteModel {
        &self.palette
    }

    /// Swatch board state.
    #[must_use]
    pub const fn swatches(&self) -> &SwatchBoard {
        &self.swatches
    }

    /// Painted grid.
    #[must_use]
    pub const fn grid(&self) -> &HexGridStore {
        &self.grid
    }

    /// Whether the button is currently held down.
    #[must_use]
    pub fn is_pressed(&self, control: Control) -> bool {
        self.pressed.contains(&control)
    }

    /// Current caption of a button.
    #[must_use]
    pub fn label(&self, control: Control) -> String {
        let letter = self.palette.mode().letter();
        match control {
            Control::Less => format!("less {letter}"),
            Control::More => format!("more {letter}"),
            Control::Axis => format!("axis {letter}"),
            Control::Reset => "reset".to_string(),
            Control::Freeze => self.swatches.freeze_label().to_string(),
            Control::Clear => "clear".to_string(),
            Control::Save => "save".to_string(),
        }
    }

    /// Marks the button pressed if the point is inside it.
    fn press(&mut self, control: Control, point: Point) -> bool {
        let hit = self.layout.panel().button_rect(control).contains(point);
        if hit {
            self.pressed.insert(control);
        }
        hit
    }

    /// Runs one pointer-down through clear/save, palette, swatch board and
    /// grid, in that order.
    pub fn pointer_down(&mut self, point: Point) -> PointerOutcome {
        let mut outcome = PointerOutcome::default();

        if self.press(Control::Clear, point) {
            self.grid.clear();
            outcome.cleared = true;
            info!("Cleared hex grid");
        }
        if self.press(Control::Save, point) {
            outcome.save_requested = true;
        }

        self.poke_palette(point);
        self.poke_swatches(point);

        let color = self.swatches.selected_color();
        outcome.painted = self.grid.paint_at(point.x, point.y, color);
        outcome
    }

    /// Releases every pressed button, wherever the pointer went up.
    pub fn pointer_up(&mut self) {
        self.pressed.clear();
    }

    fn poke_palette(&mut self, point: Point) {
        if self.press(Control::Less, point) {
            self.palette.decrement();
            debug!("Palette depth {}", self.palette.idx());
        } else if self.press(Control::More, point) {
            self.palette.increment();
            debug!("Palette depth {}", self.palette.idx());
        } else if self.press(Control::Axis, point) {
            self.palette.cycle_mode();
            debug!("Palette mode {:?}", self.palette.mode());
        } else if self.press(Control::Reset, point) {
            self.palette.reset();
            debug!("Palette depth reset to {}", self.palette.idx());
        } else if let Some((i, j)) = self.layout.panel().palette_cell_at(point) {
            let color = self.palette.select_cell(i, j);
            debug!("Picked palette cell ({}, {}) = {}", i, j, color);
        }
    }

    fn poke_swatches(&mut self, point: Point) {
        if self.press(Control::Freeze, point) {
            self.swatches.toggle_freeze();
            debug!("Swatch board {}", self.swatches.freeze_label());
        } else if let Some(index) = self.layout.panel().swatch_at(point) {
            let color = self.swatches.click(index, self.palette.selected_color());
            debug!("Selected swatch ({}, {}) = {}", index.col, index.row, color);
        }
    }

    /// Clears the grid without going through the clear button.
    pub fn clear_grid(&mut self) {
        self.grid.clear();
        info!("Cleared hex grid");
    }

    /// Paint color that the next grid click will use.
    #[must_use]
    pub const fn paint_color(&self) -> RgbColor {
        self.swatches.selected_color()
    }
}
