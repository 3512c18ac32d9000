use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    // A failed save takes priority over hints; user-visible state and
    // persisted state have diverged
    if let Some(note) = &app.status_note {
        let line = Line::from(Span::styled(
            format!(" {}", note),
            Style::default().fg(app.theme.red).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    let hint = match app.mode {
        Mode::Navigate => "1-5 views  j/k move  a add  A quick add  q quit",
        Mode::Form => "Enter save  Tab next  Esc cancel",
        Mode::Info | Mode::Notice => "Esc close",
    };

    let mut spans = vec![Span::styled(
        format!(" {}", hint),
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    if content_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width),
            Style::default().bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
