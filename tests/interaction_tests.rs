//! End-to-end pointer flows through the interaction controller.

mod fixtures;
use fixtures::*;

use hexpaint::controller::InteractionController;
use hexpaint::geometry::HexGeometry;
use hexpaint::grid::HexGridStore;
use hexpaint::layout::Control;
use hexpaint::models::{AxialCoord, Point, RgbColor};
use hexpaint::palette::{ChannelMode, RESET_DEPTH_INDEX};
use hexpaint::swatches::{SwatchIndex, UNSEEDED_SWATCH};

#[test]
fn test_pick_commit_and_paint() {
    let mut ctrl = default_controller();
    let panel = ctrl.layout().panel().clone();

    // Depth 3 in blue mode
    for _ in 0..3 {
        let p = button_center(&ctrl, Control::More);
        click(&mut ctrl, p);
    }
    let p = button_center(&ctrl, Control::Axis);
    click(&mut ctrl, p);
    let p = button_center(&ctrl, Control::Axis);
    click(&mut ctrl, p);
    assert_eq!(ctrl.palette().mode(), ChannelMode::Blue);
    assert_eq!(ctrl.label(Control::More), "more b");

    click(&mut ctrl, center_of(panel.palette_cell_rect(5, 10)));
    let picked = RgbColor::new(80, 160, 48);
    assert_eq!(ctrl.palette().selected_color(), Some(picked));

    let p = button_center(&ctrl, Control::Freeze);
    click(&mut ctrl, p);
    let slot = SwatchIndex::new(13, 0).unwrap();
    assert_eq!(ctrl.swatches().color_at(slot), UNSEEDED_SWATCH);
    click(&mut ctrl, center_of(panel.swatch_rect(slot)));
    assert_eq!(ctrl.swatches().color_at(slot), picked);

    let coord = AxialCoord::new(4, -7);
    let center = ctrl.grid().geometry().cell_center(coord);
    ctrl.pointer_down(center);
    assert_eq!(ctrl.grid().color_at(coord), picked);
}

#[test]
fn test_frozen_board_only_selects() {
    let mut ctrl = default_controller();
    let panel = ctrl.layout().panel().clone();

    click(&mut ctrl, center_of(panel.palette_cell_rect(1, 1)));
    let slot = SwatchIndex::new(6, 2).unwrap();
    let before = ctrl.swatches().color_at(slot);

    click(&mut ctrl, center_of(panel.swatch_rect(slot)));
    assert_eq!(ctrl.swatches().color_at(slot), before);
    assert_eq!(ctrl.paint_color(), before);
    assert_eq!(ctrl.swatches().selected(), slot);
}

#[test]
fn test_reset_lands_on_depth_one() {
    let mut ctrl = default_controller();
    for _ in 0..9 {
        let p = button_center(&ctrl, Control::More);
        click(&mut ctrl, p);
    }
    assert_eq!(ctrl.palette().idx(), 9);

    let p = button_center(&ctrl, Control::Reset);
    click(&mut ctrl, p);
    assert_eq!(ctrl.palette().idx(), RESET_DEPTH_INDEX);
    assert_eq!(ctrl.palette().idx(), 1);
}

#[test]
fn test_swatch_selection_and_paint_attempt_share_one_click() {
    let mut ctrl = default_controller();
    let panel = ctrl.layout().panel().clone();
    let slot = SwatchIndex::new(8, 2).unwrap();

    let outcome = ctrl.pointer_down(center_of(panel.swatch_rect(slot)));
    // The grid step already sees the newly selected color, but the swatch
    // lies outside every hex in the radius
    assert_eq!(ctrl.paint_color(), RgbColor::new(50, 136, 189));
    assert!(!outcome.painted);
    assert_eq!(ctrl.grid().painted_count(), 0);
}

#[test]
fn test_swatch_click_paints_hex_under_it_with_new_color() {
    let layout = default_layout();
    let slot = SwatchIndex::new(8, 2).unwrap();
    let swatch = layout.panel().swatch_rect(slot);

    // A grid anchored on the swatch, so the same click hits both
    let geometry = HexGeometry::new(Point::new(swatch.x, swatch.y), 20, 2).unwrap();
    let grid = HexGridStore::new(geometry, RgbColor::BLUE);
    let mut ctrl = InteractionController::new(layout, grid);

    let p = center_of(swatch);
    let outcome = ctrl.pointer_down(p);
    let coord = ctrl.grid().geometry().hit_test(p.x, p.y);
    assert_eq!(coord, AxialCoord::ORIGIN);

    assert_eq!(ctrl.swatches().selected(), slot);
    assert!(outcome.painted);
    assert_eq!(ctrl.grid().color_at(coord), RgbColor::new(50, 136, 189));
    assert_eq!(ctrl.grid().painted_count(), 1);
}

#[test]
fn test_depth_buttons_clamp() {
    let mut ctrl = default_controller();
    for _ in 0..3 {
        let p = button_center(&ctrl, Control::Less);
        click(&mut ctrl, p);
    }
    assert_eq!(ctrl.palette().idx(), 0);
    for _ in 0..40 {
        let p = button_center(&ctrl, Control::More);
        click(&mut ctrl, p);
    }
    assert_eq!(ctrl.palette().idx(), 15);
}

#[test]
fn test_pointer_down_in_button_gap_presses_nothing() {
    let mut ctrl = default_controller();
    let less = ctrl.layout().panel().button_rect(Control::Less);
    // The 5px gap between less and more
    let gap = hexpaint::models::Point::new(less.right() + 2, less.y + 10);
    ctrl.pointer_down(gap);
    assert!(Control::ALL.iter().all(|&c| !ctrl.is_pressed(c)));
    assert_eq!(ctrl.palette().idx(), 0);
}

#[test]
fn test_clear_button_resets_painting() {
    let mut ctrl = default_controller();
    for coord in [AxialCoord::new(0, 0), AxialCoord::new(1, 1), AxialCoord::new(-3, 2)] {
        let center = ctrl.grid().geometry().cell_center(coord);
        click(&mut ctrl, center);
    }
    assert_eq!(ctrl.grid().painted_count(), 3);

    let outcome = ctrl.pointer_down(button_center(&ctrl, Control::Clear));
    assert!(outcome.cleared);
    assert_eq!(ctrl.grid().painted_count(), 0);
    assert_eq!(ctrl.grid().color_at(AxialCoord::new(1, 1)), RgbColor::BLUE);
}
