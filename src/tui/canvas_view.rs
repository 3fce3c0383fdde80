//! Scaled view of the virtual canvas: hex grid on the left, tool panel on
//! the right.
//!
//! Every terminal cell shows the color of the canvas pixel under its center.
//! Button captions and selection markers are drawn on top.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};

use crate::controller::InteractionController;
use crate::layout::Control;
use crate::models::{PixelRect, Point, RgbColor};

/// Marker drawn on the selected swatch and palette cell.
const SELECTION_MARKER: char = '◆';

/// Maps terminal cells inside `area` onto a `width`×`height` pixel canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    area: Rect,
    width: i32,
    height: i32,
}

impl Viewport {
    /// Creates a viewport stretching the canvas over `area`.
    #[must_use]
    pub const fn new(area: Rect, width: i32, height: i32) -> Self {
        Self {
            area,
            width,
            height,
        }
    }

    /// Terminal area covered by the canvas.
    #[must_use]
    pub const fn area(&self) -> Rect {
        self.area
    }

    /// Canvas pixel under the center of terminal cell `(col, row)`, or `None`
    /// outside the viewport.
    #[must_use]
    pub fn to_pixel(&self, col: u16, row: u16) -> Option<Point> {
        let a = self.area;
        if a.width == 0 || a.height == 0 {
            return None;
        }
        if col < a.x || row < a.y || col >= a.x + a.width || row >= a.y + a.height {
            return None;
        }
        let x = scale_center(col - a.x, a.width, self.width);
        let y = scale_center(row - a.y, a.height, self.height);
        Some(Point::new(x, y))
    }

    /// Terminal cell whose sampled pixel is closest to `point`, clamped to the
    /// viewport.
    #[must_use]
    pub fn to_cell(&self, point: Point) -> (u16, u16) {
        let a = self.area;
        let col = scale_down(point.x, self.width, a.width);
        let row = scale_down(point.y, self.height, a.height);
        (a.x + col, a.y + row)
    }

    /// Terminal cells covered by a pixel rectangle, at least one cell.
    #[must_use]
    pub fn cells_for(&self, rect: PixelRect) -> Rect {
        let (x0, y0) = self.to_cell(Point::new(rect.x, rect.y));
        let (x1, y1) = self.to_cell(Point::new(rect.right() - 1, rect.bottom() - 1));
        Rect::new(x0, y0, x1.saturating_sub(x0) + 1, y1.saturating_sub(y0) + 1)
    }
}

/// Pixel at the center of cell `index` when `cells` cells span `pixels`.
fn scale_center(index: u16, cells: u16, pixels: i32) -> i32 {
    let numerator = (2 * i64::from(index) + 1) * i64::from(pixels);
    i32::try_from(numerator / (2 * i64::from(cells))).unwrap_or(i32::MAX)
}

/// Cell index containing pixel `p` when `cells` cells span `pixels`.
fn scale_down(p: i32, pixels: i32, cells: u16) -> u16 {
    if pixels <= 0 || cells == 0 {
        return 0;
    }
    let p = i64::from(p.clamp(0, pixels - 1));
    let index = p * i64::from(cells) / i64::from(pixels);
    u16::try_from(index).unwrap_or(cells - 1).min(cells - 1)
}

/// Color of the canvas at `point`, as the user sees it.
///
/// Tool panel elements take precedence; elsewhere the hex under the point is
/// shown if it lies inside the grid radius, black otherwise.
#[must_use]
pub fn scene_color(controller: &InteractionController, point: Point) -> RgbColor {
    let layout = controller.layout();
    let panel = layout.panel();

    if let Some(control) = panel.button_at(point) {
        return if controller.is_pressed(control) {
            RgbColor::BLUE
        } else {
            RgbColor::GRAY
        };
    }
    if let Some(index) = panel.swatch_at(point) {
        return controller.swatches().color_at(index);
    }
    if let Some((i, j)) = panel.palette_cell_at(point) {
        return controller.palette().color_at(i, j);
    }

    if layout.grid_area().contains(point) {
        let grid = controller.grid();
        let coord = grid.geometry().locate(point.x, point.y);
        if grid.geometry().is_in_radius(coord) {
            return grid.color_at(coord);
        }
    }
    RgbColor::BLACK
}

/// Canvas widget.
pub struct CanvasView;

impl CanvasView {
    /// Render the canvas into `viewport`'s area
    pub fn render(f: &mut Frame, viewport: &Viewport, controller: &InteractionController) {
        let buf = f.buffer_mut();
        let area = viewport.area().intersection(buf.area);
        if area.is_empty() {
            return;
        }

        for row in area.top()..area.bottom() {
            for col in area.left()..area.right() {
                let Some(point) = viewport.to_pixel(col, row) else {
                    continue;
                };
                let color = scene_color(controller, point).to_ratatui_color();
                if let Some(cell) = buf.cell_mut((col, row)) {
                    cell.set_char(' ').set_bg(color);
                }
            }
        }

        draw_markers(buf, viewport, controller);
        draw_labels(buf, viewport, controller);
    }
}

fn draw_markers(buf: &mut Buffer, viewport: &Viewport, controller: &InteractionController) {
    let panel = controller.layout().panel();
    let selected_swatch = panel.swatch_rect(controller.swatches().selected());
    let selected_palette = controller
        .palette()
        .selected_cell()
        .map(|(i, j)| panel.palette_cell_rect(i, j));

    for rect in std::iter::once(selected_swatch).chain(selected_palette) {
        let center = Point::new(rect.x + rect.width / 2, rect.y + rect.height / 2);
        let (col, row) = viewport.to_cell(center);
        let under = viewport
            .to_pixel(col, row)
            .map_or(RgbColor::BLACK, |p| scene_color(controller, p));
        if let Some(cell) = buf.cell_mut((col, row)) {
            cell.set_char(SELECTION_MARKER).set_fg(contrast(under));
        }
    }
}

fn draw_labels(buf: &mut Buffer, viewport: &Viewport, controller: &InteractionController) {
    let panel = controller.layout().panel();

    for control in Control::ALL {
        let cells = viewport.cells_for(panel.button_rect(control));
        let face = if controller.is_pressed(control) {
            RgbColor::BLUE
        } else {
            RgbColor::GRAY
        };

        let label = controller.label(control);
        let width = usize::from(cells.width);
        let text: String = label.chars().take(width).collect();
        let pad = u16::try_from((width - text.chars().count()) / 2).unwrap_or(0);
        let row = cells.y + cells.height / 2;

        let style = Style::default()
            .fg(contrast(face))
            .bg(face.to_ratatui_color())
            .add_modifier(Modifier::BOLD);
        buf.set_string(cells.x + pad, row, text, style);
    }
}

/// Black or white, whichever reads better on `background`.
fn contrast(background: RgbColor) -> Color {
    if background.luma() > 128 {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HexGeometry;
    use crate::grid::HexGridStore;
    use crate::layout::CanvasLayout;
    use crate::models::AxialCoord;
    use crate::swatches::SwatchIndex;

    fn controller() -> InteractionController {
        let layout = CanvasLayout::new(20, 1560, 1000).unwrap();
        let geometry = HexGeometry::from_config(layout.geometry());
        InteractionController::new(layout, HexGridStore::new(geometry, RgbColor::BLUE))
    }

    #[test]
    fn test_viewport_samples_cell_centers() {
        let viewport = Viewport::new(Rect::new(0, 0, 156, 50), 1560, 1000);
        assert_eq!(viewport.to_pixel(0, 0), Some(Point::new(5, 10)));
        assert_eq!(viewport.to_pixel(155, 49), Some(Point::new(1555, 990)));
        assert_eq!(viewport.to_pixel(156, 0), None);
        assert_eq!(viewport.to_pixel(0, 50), None);
    }

    #[test]
    fn test_viewport_with_offset_area() {
        let viewport = Viewport::new(Rect::new(2, 1, 100, 100), 1000, 1000);
        assert_eq!(viewport.to_pixel(1, 1), None);
        assert_eq!(viewport.to_pixel(2, 1), Some(Point::new(5, 5)));
        assert_eq!(viewport.to_cell(Point::new(5, 5)), (2, 1));
        assert_eq!(viewport.to_cell(Point::new(999, 999)), (101, 100));
        // Clamped into the viewport
        assert_eq!(viewport.to_cell(Point::new(-50, 5000)), (2, 100));
    }

    #[test]
    fn test_to_cell_inverts_to_pixel() {
        let viewport = Viewport::new(Rect::new(0, 0, 120, 40), 1560, 1000);
        for col in 0..120 {
            for row in 0..40 {
                let p = viewport.to_pixel(col, row).unwrap();
                assert_eq!(viewport.to_cell(p), (col, row));
            }
        }
    }

    #[test]
    fn test_cells_for_rect() {
        let viewport = Viewport::new(Rect::new(0, 0, 156, 100), 1560, 1000);
        let cells = viewport.cells_for(PixelRect::new(1272, 700, 80, 30));
        assert_eq!(cells, Rect::new(127, 70, 9, 3));
    }

    #[test]
    fn test_scene_shows_panel_elements() {
        let ctrl = controller();
        let panel = ctrl.layout().panel();

        let freeze = panel.button_rect(Control::Freeze);
        assert_eq!(
            scene_color(&ctrl, Point::new(freeze.x + 1, freeze.y + 1)),
            RgbColor::GRAY
        );

        let index = SwatchIndex::new(2, 1).unwrap();
        let swatch = panel.swatch_rect(index);
        assert_eq!(
            scene_color(&ctrl, Point::new(swatch.x, swatch.y)),
            RgbColor::new(191, 129, 45)
        );

        let cell = panel.palette_cell_rect(3, 4);
        assert_eq!(
            scene_color(&ctrl, Point::new(cell.x + 2, cell.y + 2)),
            RgbColor::new(48, 0, 64)
        );
    }

    #[test]
    fn test_scene_shows_pressed_button() {
        let mut ctrl = controller();
        let rect = ctrl.layout().panel().button_rect(Control::More);
        let point = Point::new(rect.x + 5, rect.y + 5);
        ctrl.pointer_down(point);
        assert_eq!(scene_color(&ctrl, point), RgbColor::BLUE);
        ctrl.pointer_up();
        assert_eq!(scene_color(&ctrl, point), RgbColor::GRAY);
    }

    #[test]
    fn test_scene_shows_grid() {
        let mut ctrl = controller();
        let center = ctrl.grid().geometry().cell_center(AxialCoord::new(3, -1));
        assert_eq!(scene_color(&ctrl, center), RgbColor::BLUE);

        ctrl.pointer_down(center);
        assert_eq!(scene_color(&ctrl, center), ctrl.paint_color());

        // Top-left corner of the canvas is outside the radius
        assert_eq!(scene_color(&ctrl, Point::new(0, 0)), RgbColor::BLACK);
    }
}
