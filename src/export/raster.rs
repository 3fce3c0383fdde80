//! Rasterizes the hex grid into a pixmap.

// Pixel coordinates are small enough to be exact in f32
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

use anyhow::{Context, Result};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::grid::HexGridStore;
use crate::models::{PixelRect, Point, RgbColor};

/// Width of the black cell outlines.
pub const OUTLINE_WIDTH: f32 = 3.0;

/// Renders every cell of the grid's region onto a black pixmap covering
/// `area`.
///
/// Cells are filled with their stored (or default) color and then outlined
/// in black. Pixel `(area.x, area.y)` lands at the pixmap's top-left corner.
///
/// # Errors
///
/// Fails if the area is empty.
pub fn render_grid(grid: &HexGridStore, area: PixelRect) -> Result<Pixmap> {
    let width = u32::try_from(area.width).unwrap_or(0);
    let height = u32::try_from(area.height).unwrap_or(0);
    let mut pixmap = Pixmap::new(width, height)
        .with_context(|| format!("Cannot allocate a {}x{} image", area.width, area.height))?;
    pixmap.fill(RgbColor::BLACK.to_skia_color());

    let offset = Point::new(area.x, area.y);
    let stroke = Stroke {
        width: OUTLINE_WIDTH,
        ..Stroke::default()
    };
    let outline_paint = solid(RgbColor::BLACK);

    for (coord, color) in grid.cells() {
        let Some(path) = hexagon_path(&grid.geometry().cell_outline(coord), offset) else {
            continue;
        };
        pixmap.fill_path(
            &path,
            &solid(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        pixmap.stroke_path(&path, &outline_paint, &stroke, Transform::identity(), None);
    }

    Ok(pixmap)
}

fn solid(color: RgbColor) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia_color());
    paint.anti_alias = false;
    paint
}

fn hexagon_path(outline: &[Point; 6], offset: Point) -> Option<Path> {
    let mut pb = PathBuilder::new();
    let [first, rest @ ..] = outline;
    pb.move_to((first.x - offset.x) as f32, (first.y - offset.y) as f32);
    for p in rest {
        pb.line_to((p.x - offset.x) as f32, (p.y - offset.y) as f32);
    }
    pb.close();
    pb.finish()
}
