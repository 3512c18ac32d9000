use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::analytics::portfolio_stats;
use crate::tui::app::App;

use super::helpers::{bar_span, pad_to};

const BAR_WIDTH: usize = 32;

/// Render the analytics cards: title, value, and a percentage bar each,
/// all derived fresh from state
pub fn render_analytics(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let stats = portfolio_stats(&app.portfolio);
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        " Analytics",
        Style::default().fg(app.theme.text).bg(bg).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "  e export report",
        Style::default().fg(app.theme.dim).bg(bg),
    )));
    lines.push(Line::from(""));

    let charts: [(&str, String, u32); 4] = [
        ("Occupancy", format!("{}%", stats.occupancy_pct), stats.occupancy_pct),
        ("Rent collected", format!("${}", stats.collected), stats.collected_bar),
        (
            "Open maintenance",
            format!("{} tickets", stats.open_tickets),
            stats.open_bar,
        ),
        ("Portfolio health", format!("{}%", stats.health), stats.health),
    ];

    for (title, value, percent) in charts {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", pad_to(title, 20)),
                Style::default().fg(app.theme.text_bright).bg(bg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().fg(app.theme.text).bg(bg)),
        ]));

        let mut bar_line = vec![Span::styled("  ", Style::default().bg(bg))];
        bar_line.extend(bar_span(&app.theme, percent, BAR_WIDTH));
        bar_line.push(Span::styled(
            format!(" {}%", percent),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        lines.push(Line::from(bar_line));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
