use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::TicketStatus;
use crate::tui::app::App;

use super::helpers::pad_to;

/// Render the maintenance table: header plus one row per ticket
pub fn render_maintenance(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        " Maintenance",
        Style::default().fg(app.theme.text).bg(bg).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "  v advance   a new request   Enter details",
        Style::default().fg(app.theme.dim).bg(bg),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!(
            "  {}{}{}{}",
            pad_to("Property", 28),
            pad_to("Issue", 30),
            pad_to("Priority", 10),
            pad_to("Status", 11),
        ),
        Style::default().fg(app.theme.dim).bg(bg).add_modifier(Modifier::BOLD),
    )));

    if app.portfolio.maintenance.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No maintenance tickets.",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    for (i, ticket) in app.portfolio.maintenance.iter().enumerate() {
        let is_cursor = i == app.maintenance_cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let marker = if is_cursor { "\u{258D} " } else { "  " };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(
                pad_to(&ticket.property, 28),
                Style::default().fg(app.theme.text_bright).bg(row_bg),
            ),
            Span::styled(
                pad_to(&ticket.issue, 30),
                Style::default().fg(app.theme.text).bg(row_bg),
            ),
            Span::styled(
                pad_to(ticket.priority.label(), 10),
                Style::default().fg(app.theme.text).bg(row_bg),
            ),
            Span::styled(
                pad_to(ticket.status.label(), 11),
                Style::default().fg(app.theme.ticket_status_color(ticket.status)).bg(row_bg),
            ),
        ];
        if ticket.status != TicketStatus::Completed {
            spans.push(Span::styled(
                "[v] advance",
                Style::default().fg(app.theme.cyan).bg(row_bg),
            ));
        }
        lines.push(Line::from(spans));

        lines.push(Line::from(vec![
            Span::styled("  ", Style::default().bg(row_bg)),
            Span::styled(
                format!("{}  \u{00B7}  ETA {}", ticket.id, ticket.eta),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
