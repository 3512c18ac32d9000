use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers::{centered_rect, pad_to};

/// Render the read-only record detail overlay. No form, no submit
/// handling; any dismiss key closes it.
pub fn render_info_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(info) = &app.info else { return };
    let bg = app.theme.background;

    let height = (info.lines.len() as u16) + 5;
    let popup = centered_rect(48, height, area);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    for (label, value) in &info.lines {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", pad_to(label, 14)),
                Style::default().fg(app.theme.dim).bg(bg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(value.clone(), Style::default().fg(app.theme.text_bright).bg(bg)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Esc close",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", info.title))
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}
