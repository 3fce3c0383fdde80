//! Terminal user interface: state, event loop and rendering.
//!
//! The virtual canvas is stretched over the terminal above a status bar.
//! Mouse clicks are mapped back to canvas pixels and handed to the
//! [`InteractionController`].

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod canvas_view;
pub mod status_bar;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use crate::controller::InteractionController;
use crate::export;

pub use canvas_view::{CanvasView, Viewport};
pub use status_bar::StatusBar;

/// Application state for the TUI
pub struct AppState {
    /// Palette, swatches and grid
    pub controller: InteractionController,
    /// Where PNG exports go
    pub export_dir: PathBuf,
    /// Last status message shown in the status bar
    pub status_message: Option<String>,
    /// Whether the status message reports a failure
    pub status_is_error: bool,
    /// Canvas placement from the last draw, used to map mouse positions
    pub viewport: Option<Viewport>,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    /// Create a new application state
    #[must_use]
    pub fn new(controller: InteractionController, export_dir: PathBuf) -> Self {
        Self {
            controller,
            export_dir,
            status_message: None,
            status_is_error: false,
            viewport: None,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    /// Set error message
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }

    /// Clears the hex grid.
    pub fn clear_grid(&mut self) {
        self.controller.clear_grid();
        self.set_status("Grid cleared");
    }

    /// Exports the grid area as the next PNG. Failures end up in the status
    /// bar rather than stopping the app.
    pub fn save_grid(&mut self) {
        let area = self.controller.layout().grid_area();
        match export::export_png(self.controller.grid(), area, &self.export_dir) {
            Ok(path) => self.set_status(format!("Saved {}", path.display())),
            Err(e) => {
                warn!("Export failed: {e:#}");
                self.set_error(format!("Save failed: {e:#}"));
            }
        }
    }

    /// Routes a press at terminal cell `(col, row)` to the controller.
    pub fn pointer_down(&mut self, col: u16, row: u16) {
        let Some(point) = self.viewport.and_then(|v| v.to_pixel(col, row)) else {
            return;
        };
        let outcome = self.controller.pointer_down(point);
        if outcome.cleared {
            self.set_status("Grid cleared");
        }
        // Runs after every other effect of this click
        if outcome.save_requested {
            self.save_grid();
        }
    }

    /// Releases every pressed control.
    pub fn pointer_up(&mut self) {
        self.controller.pointer_up();
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    info!("Terminal UI started");
    loop {
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(state, mouse)?,
                // Terminal resized, will re-render on next loop
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    info!("Terminal UI stopped");
    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &mut AppState) {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Canvas
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    let layout = state.controller.layout();
    let viewport = Viewport::new(chunks[0], layout.width(), layout.height());
    state.viewport = Some(viewport);

    CanvasView::render(f, &viewport, &state.controller);
    StatusBar::render(f, chunks[1], state);
}

/// Handle keyboard input events. Returns true when the app should quit.
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            state.should_quit = true;
            return Ok(true);
        }
        KeyCode::Char('c') => state.clear_grid(),
        KeyCode::Char('s') => state.save_grid(),
        _ => {}
    }
    Ok(false)
}

/// Handle mouse input events
fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) -> Result<()> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => state.pointer_down(mouse.column, mouse.row),
        MouseEventKind::Up(_) => state.pointer_up(),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::HexGeometry;
    use crate::grid::HexGridStore;
    use crate::layout::{CanvasLayout, Control};
    use crate::models::{AxialCoord, RgbColor};
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;
    use tempfile::TempDir;

    fn state(export_dir: PathBuf) -> AppState {
        let layout = CanvasLayout::new(20, 1560, 1000).unwrap();
        let geometry = HexGeometry::from_config(layout.geometry());
        let controller =
            InteractionController::new(layout, HexGridStore::new(geometry, RgbColor::BLUE));
        let mut state = AppState::new(controller, export_dir);
        // One terminal cell per 10x10 pixels
        state.viewport = Some(Viewport::new(Rect::new(0, 0, 156, 100), 1560, 1000));
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut s = state(PathBuf::from("."));
        assert!(handle_key_event(&mut s, key(KeyCode::Char('q'))).unwrap());
        let mut s = state(PathBuf::from("."));
        assert!(handle_key_event(&mut s, key(KeyCode::Esc)).unwrap());
        assert!(s.should_quit);
        let mut s = state(PathBuf::from("."));
        assert!(!handle_key_event(&mut s, key(KeyCode::Char('x'))).unwrap());
    }

    #[test]
    fn test_click_paints_cell() {
        let mut s = state(PathBuf::from("."));
        let center = s
            .controller
            .grid()
            .geometry()
            .cell_center(AxialCoord::ORIGIN);
        // (576, 497) is sampled by cell (57, 49) at (575, 495)
        let (col, row) = (center.x / 10, center.y / 10);
        let (col, row) = (u16::try_from(col).unwrap(), u16::try_from(row).unwrap());

        handle_mouse_event(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), col, row))
            .unwrap();
        assert_eq!(s.controller.grid().painted_count(), 1);
        assert_eq!(
            s.controller.grid().color_at(AxialCoord::ORIGIN),
            s.controller.paint_color()
        );
    }

    #[test]
    fn test_button_release_via_mouse_up() {
        let mut s = state(PathBuf::from("."));
        // More button spans pixels 1272..1352 x 571..601
        handle_mouse_event(&mut s, mouse(MouseEventKind::Down(MouseButton::Left), 130, 58))
            .unwrap();
        assert!(s.controller.is_pressed(Control::More));
        assert_eq!(s.controller.palette().idx(), 1);

        handle_mouse_event(&mut s, mouse(MouseEventKind::Up(MouseButton::Left), 0, 0)).unwrap();
        assert!(!s.controller.is_pressed(Control::More));
    }

    #[test]
    fn test_right_click_is_ignored() {
        let mut s = state(PathBuf::from("."));
        handle_mouse_event(&mut s, mouse(MouseEventKind::Down(MouseButton::Right), 130, 58))
            .unwrap();
        assert_eq!(s.controller.palette().idx(), 0);
    }

    #[test]
    fn test_click_outside_viewport_is_ignored() {
        let mut s = state(PathBuf::from("."));
        s.pointer_down(500, 500);
        assert_eq!(s.controller.grid().painted_count(), 0);
    }

    #[test]
    fn test_save_key_writes_png() {
        let temp = TempDir::new().unwrap();
        let mut s = state(temp.path().to_path_buf());
        handle_key_event(&mut s, key(KeyCode::Char('s'))).unwrap();
        assert!(temp.path().join("hexgrid_000.png").exists());
        assert!(!s.status_is_error);
        assert!(s.status_message.unwrap().contains("hexgrid_000.png"));
    }

    #[test]
    fn test_save_button_writes_png() {
        let temp = TempDir::new().unwrap();
        let mut s = state(temp.path().to_path_buf());
        // Save button spans pixels 1372..1452 x 700..730
        s.pointer_down(140, 71);
        assert!(temp.path().join("hexgrid_000.png").exists());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        std::fs::write(&blocker, b"").unwrap();
        let mut s = state(blocker);
        s.save_grid();
        assert!(s.status_is_error);
        assert!(s.status_message.unwrap().starts_with("Save failed"));
    }

    #[test]
    fn test_clear_key() {
        let mut s = state(PathBuf::from("."));
        s.pointer_down(57, 49);
        assert_eq!(s.controller.grid().painted_count(), 1);
        handle_key_event(&mut s, key(KeyCode::Char('c'))).unwrap();
        assert_eq!(s.controller.grid().painted_count(), 0);
        assert_eq!(s.status_message.as_deref(), Some("Grid cleared"));
    }
}
