use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::analytics::{portfolio_stats, preview};
use crate::tui::app::App;

use super::helpers::pad_to;

/// Render the dashboard summary: hero metrics, pill counters, and two
/// capped preview lists
pub fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let stats = portfolio_stats(&app.portfolio);
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        " Dashboard",
        Style::default().fg(app.theme.text).bg(bg).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "  A quick add   p mark all paid   e export",
        Style::default().fg(app.theme.dim).bg(bg),
    )));
    lines.push(Line::from(""));

    // Hero metrics
    let metrics: [(&str, String); 3] = [
        (
            "Occupied units",
            format!("{}/{}", stats.occupied, stats.total_listings),
        ),
        ("Open maintenance", format!("{}", stats.open_tickets)),
        ("Rent due", format!("{}", stats.due_count)),
    ];
    let mut hero = vec![Span::styled("  ", Style::default().bg(bg))];
    for (label, value) in metrics {
        hero.push(Span::styled(
            format!("{} ", value),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        hero.push(Span::styled(
            pad_to(label, 20),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    lines.push(Line::from(hero));
    lines.push(Line::from(""));

    // Maintenance preview with its pill counter
    lines.push(Line::from(vec![
        Span::styled(
            "  Maintenance  ",
            Style::default().fg(app.theme.text).bg(bg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} open", stats.open_tickets),
            Style::default().fg(app.theme.red).bg(app.theme.selection_bg),
        ),
    ]));
    if app.portfolio.maintenance.is_empty() {
        lines.push(empty_preview_line(app));
    } else {
        for ticket in preview(&app.portfolio.maintenance) {
            lines.push(Line::from(Span::styled(
                format!("    {} - {}", ticket.property, ticket.issue),
                Style::default().fg(app.theme.text).bg(bg),
            )));
        }
    }
    lines.push(Line::from(""));

    // Rent preview with its pill counter
    lines.push(Line::from(vec![
        Span::styled(
            "  Rent  ",
            Style::default().fg(app.theme.text).bg(bg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} due", stats.due_count),
            Style::default().fg(app.theme.yellow).bg(app.theme.selection_bg),
        ),
    ]));
    if app.portfolio.rents.is_empty() {
        lines.push(empty_preview_line(app));
    } else {
        for rent in preview(&app.portfolio.rents) {
            lines.push(Line::from(Span::styled(
                format!("    {} - ${}", rent.property, rent.amount),
                Style::default().fg(app.theme.text).bg(bg),
            )));
        }
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn empty_preview_line(app: &App) -> Line<'static> {
    Line::from(Span::styled(
        "    No updates yet.",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ))
}
