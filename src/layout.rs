//! Canvas layout: where the hex grid and the tool panel controls live.
//!
//! The canvas is a virtual pixel space (1560×1000 by default). The tool panel
//! takes a fixed-width strip on the right; the hex grid is centered in the
//! remaining area and sized so the whole region fits.

// Layout math mixes i32 pixel sizes with the float hex height factor
#![allow(clippy::cast_possible_truncation)]

use anyhow::{Context, Result};

use crate::geometry::{HexGeometryConfig, ROOT_THREE_HALVES};
use crate::models::{PixelRect, Point};
use crate::palette::PALETTE_SIDE;
use crate::swatches::{SwatchIndex, SWATCH_COLUMNS, SWATCH_ROWS};

/// Edge length of a swatch or palette square.
pub const COLOR_SQUARE_SIZE: i32 = 20;
/// Gap between adjacent squares.
pub const COLOR_SQUARE_SPACE: i32 = 3;
/// Distance between the top-left corners of adjacent squares.
pub const COLOR_SQUARE_PITCH: i32 = COLOR_SQUARE_SIZE + COLOR_SQUARE_SPACE;

/// Width of every push button.
pub const BUTTON_WIDTH: i32 = 80;
/// Height of every push button.
pub const BUTTON_HEIGHT: i32 = 30;

/// Width of the tool panel: sixteen squares.
pub const TOOLS_WIDTH: i32 = 16 * COLOR_SQUARE_PITCH;
/// Gap kept free to the right of the tool panel.
const TOOLS_MARGIN: i32 = 20;

const SWATCH_Y: i32 = 50;
const FREEZE_BUTTON_X_OFFSET: i32 = 150;

const PALETTE_Y: i32 = 200;
const PALETTE_BUTTONS_X_OFFSET: i32 = 15;
const PALETTE_BUTTON_SPACING: i32 = 5;

const CLEAR_BUTTON_Y: i32 = 700;
const CLEAR_BUTTON_X_OFFSET: i32 = 100;
const SAVE_BUTTON_SPACING_X: i32 = 20;

/// A push button in the tool panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Lower the palette depth
    Less,
    /// Raise the palette depth
    More,
    /// Cycle the palette channel mode
    Axis,
    /// Reset the palette depth
    Reset,
    /// Toggle the swatch board freeze gate
    Freeze,
    /// Clear the hex grid
    Clear,
    /// Export the hex grid as PNG
    Save,
}

impl Control {
    /// Every control, in dispatch order.
    pub const ALL: [Self; 7] = [
        Self::Clear,
        Self::Save,
        Self::Less,
        Self::More,
        Self::Axis,
        Self::Reset,
        Self::Freeze,
    ];
}

/// Pixel rectangles of every tool panel element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPanelLayout {
    bounds: PixelRect,
    swatch_origin: Point,
    palette_origin: Point,
    less: PixelRect,
    more: PixelRect,
    axis: PixelRect,
    reset: PixelRect,
    freeze: PixelRect,
    clear: PixelRect,
    save: PixelRect,
}

impl ToolPanelLayout {
    /// Lays the panel out starting at `x0`, spanning `height` pixels.
    #[must_use]
    pub fn new(x0: i32, height: i32) -> Self {
        let swatch_origin = Point::new(x0, SWATCH_Y);
        let below_swatches =
            SWATCH_Y + COLOR_SQUARE_PITCH * i32::from(SWATCH_ROWS) + COLOR_SQUARE_SPACE;

        let palette_origin = Point::new(x0, PALETTE_Y);
        let below_palette =
            PALETTE_Y + COLOR_SQUARE_PITCH * i32::from(PALETTE_SIDE) + COLOR_SQUARE_SPACE;
        let palette_button = |n: i32| {
            PixelRect::new(
                x0 + PALETTE_BUTTONS_X_OFFSET + n * (BUTTON_WIDTH + PALETTE_BUTTON_SPACING),
                below_palette,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            )
        };

        let clear_x = x0 + CLEAR_BUTTON_X_OFFSET;
        let save_x = clear_x + BUTTON_WIDTH + SAVE_BUTTON_SPACING_X;

        Self {
            bounds: PixelRect::new(x0, 0, TOOLS_WIDTH, height),
            swatch_origin,
            palette_origin,
            less: palette_button(0),
            more: palette_button(1),
            axis: palette_button(2),
            reset: palette_button(3),
            freeze: PixelRect::new(
                x0 + FREEZE_BUTTON_X_OFFSET,
                below_swatches,
                BUTTON_WIDTH,
                BUTTON_HEIGHT,
            ),
            clear: PixelRect::new(clear_x, CLEAR_BUTTON_Y, BUTTON_WIDTH, BUTTON_HEIGHT),
            save: PixelRect::new(save_x, CLEAR_BUTTON_Y, BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }

    /// The strip occupied by the panel.
    #[must_use]
    pub const fn bounds(&self) -> PixelRect {
        self.bounds
    }

    /// Rectangle of a push button.
    #[must_use]
    pub const fn button_rect(&self, control: Control) -> PixelRect {
        match control {
            Control::Less => self.less,
            Control::More => self.more,
            Control::Axis => self.axis,
            Control::Reset => self.reset,
            Control::Freeze => self.freeze,
            Control::Clear => self.clear,
            Control::Save => self.save,
        }
    }

    /// The push button under the point, if any.
    #[must_use]
    pub fn button_at(&self, point: Point) -> Option<Control> {
        Control::ALL
            .into_iter()
            .find(|&control| self.button_rect(control).contains(point))
    }

    /// Rectangle of a swatch square.
    #[must_use]
    pub fn swatch_rect(&self, index: SwatchIndex) -> PixelRect {
        square_rect(self.swatch_origin, index.col, index.row)
    }

    /// The swatch under the point; gaps between squares hit nothing.
    #[must_use]
    pub fn swatch_at(&self, point: Point) -> Option<SwatchIndex> {
        let (col, row) = square_at(self.swatch_origin, point, SWATCH_COLUMNS, SWATCH_ROWS)?;
        SwatchIndex::new(col, row)
    }

    /// Rectangle of palette cell `(i, j)`.
    #[must_use]
    pub fn palette_cell_rect(&self, i: u8, j: u8) -> PixelRect {
        square_rect(self.palette_origin, i, j)
    }

    /// The palette cell under the point; gaps between squares hit nothing.
    #[must_use]
    pub fn palette_cell_at(&self, point: Point) -> Option<(u8, u8)> {
        square_at(self.palette_origin, point, PALETTE_SIDE, PALETTE_SIDE)
    }
}

fn square_rect(origin: Point, col: u8, row: u8) -> PixelRect {
    PixelRect::new(
        origin.x + i32::from(col) * COLOR_SQUARE_PITCH,
        origin.y + i32::from(row) * COLOR_SQUARE_PITCH,
        COLOR_SQUARE_SIZE,
        COLOR_SQUARE_SIZE,
    )
}

fn square_at(origin: Point, point: Point, columns: u8, rows: u8) -> Option<(u8, u8)> {
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;
    if dx < 0 || dy < 0 {
        return None;
    }
    if dx % COLOR_SQUARE_PITCH >= COLOR_SQUARE_SIZE || dy % COLOR_SQUARE_PITCH >= COLOR_SQUARE_SIZE
    {
        return None;
    }
    let col = u8::try_from(dx / COLOR_SQUARE_PITCH).ok()?;
    let row = u8::try_from(dy / COLOR_SQUARE_PITCH).ok()?;
    (col < columns && row < rows).then_some((col, row))
}

/// Everything derived from the canvas dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasLayout {
    width: i32,
    height: i32,
    grid_area: PixelRect,
    geometry: HexGeometryConfig,
    panel: ToolPanelLayout,
}

impl CanvasLayout {
    /// Derives the grid geometry and panel layout for a canvas.
    ///
    /// The radius is the largest that fits both the drawable width
    /// (`width - tool panel - 20`) and the canvas height; the origin puts
    /// cell (0, 0) in the middle of the drawable area.
    ///
    /// # Errors
    ///
    /// Fails if any dimension is not positive or the canvas is too small to
    /// hold a grid of radius 1.
    pub fn new(side: i32, width: i32, height: i32) -> Result<Self> {
        if side <= 0 {
            anyhow::bail!("Hex side length must be positive, got {side}");
        }
        if width <= 0 || height <= 0 {
            anyhow::bail!("Canvas size must be positive, got {width}x{height}");
        }

        let tools_start_x = width - (TOOLS_WIDTH + TOOLS_MARGIN);
        if tools_start_x <= 0 {
            anyhow::bail!(
                "Canvas width {width} leaves no room for the grid next to the {TOOLS_WIDTH}px tool panel"
            );
        }

        let Some(hex_width) = side.checked_mul(2) else {
            anyhow::bail!("Hex side length {side} is too large for the canvas");
        };
        let hexes_x = tools_start_x.div_euclid(hex_width);
        let hexes_y = (f64::from(height) / (f64::from(side) * ROOT_THREE_HALVES)).floor() as i32;
        let span = hexes_x.min(hexes_y);
        let radius = (span - 1).div_euclid(2);

        let origin = Point::new(tools_start_x / 2 - side, height / 2 - side);
        let geometry = HexGeometryConfig::new(origin, side, radius).with_context(|| {
            format!("Canvas {width}x{height} is too small for hexes of side {side}")
        })?;

        Ok(Self {
            width,
            height,
            grid_area: PixelRect::new(0, 0, tools_start_x, height),
            geometry,
            panel: ToolPanelLayout::new(tools_start_x, height),
        })
    }

    /// Canvas width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Everything left of the tool panel; this is what gets exported.
    #[must_use]
    pub const fn grid_area(&self) -> PixelRect {
        self.grid_area
    }

    /// Projection parameters for the hex grid.
    #[must_use]
    pub const fn geometry(&self) -> HexGeometryConfig {
        self.geometry
    }

    /// Tool panel rectangles.
    #[must_use]
    pub const fn panel(&self) -> &ToolPanelLayout {
        &self.panel
    }
}
