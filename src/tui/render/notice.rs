use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::centered_rect;

/// Blocking acknowledgment dialog, used by the simulated actions
/// (send-reminders, export) that perform no real work
pub fn render_notice(frame: &mut Frame, app: &App, area: Rect) {
    let Some(text) = &app.notice else { return };
    let bg = app.theme.background;

    let width = (text.chars().count() as u16 + 6).clamp(24, area.width);
    let popup = centered_rect(width, 5, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled(
            format!("  {}", text),
            Style::default().fg(app.theme.text_bright).bg(bg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Enter ok",
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
