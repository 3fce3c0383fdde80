//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::AppState;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with the paint color, last message and key help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let controller = &state.controller;
        let paint = controller.paint_color();
        let palette = controller.palette();

        let mut spans = vec![
            Span::styled("Paint ", Style::default().fg(Color::Gray)),
            Span::styled("    ", Style::default().bg(paint.to_ratatui_color())),
            Span::raw(format!(" {paint}  ")),
            Span::styled(
                format!(
                    "Palette {} depth {}  ",
                    palette.mode().letter(),
                    palette.idx()
                ),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("{} painted", controller.grid().painted_count()),
                Style::default().fg(Color::Gray),
            ),
        ];
        if let Some(message) = &state.status_message {
            let style = if state.status_is_error {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green)
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(message.as_str(), style));
        }

        let help = Line::from(vec![
            Span::styled("Click", Style::default().fg(Color::Cyan)),
            Span::raw(" paint/select  "),
            Span::styled("c", Style::default().fg(Color::Cyan)),
            Span::raw(" clear  "),
            Span::styled("s", Style::default().fg(Color::Cyan)),
            Span::raw(" save  "),
            Span::styled("q/Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]);

        let status = Paragraph::new(vec![Line::from(spans), help])
            .block(Block::default().borders(Borders::ALL).title(" Status "));
        f.render_widget(status, area);
    }
}
