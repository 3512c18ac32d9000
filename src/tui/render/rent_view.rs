use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::RentStatus;
use crate::tui::app::App;

use super::helpers::pad_to;

/// Render the rent table: header plus one row per record
pub fn render_rent(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        " Rent",
        Style::default().fg(app.theme.text).bg(bg).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "  c collect   p mark all paid   r send reminders   a add record",
        Style::default().fg(app.theme.dim).bg(bg),
    )));
    lines.push(Line::from(""));

    // Header row
    lines.push(Line::from(Span::styled(
        format!(
            "  {}{}{}{}",
            pad_to("Property", 28),
            pad_to("Tenant", 18),
            pad_to("Amount", 10),
            pad_to("Status", 10),
        ),
        Style::default().fg(app.theme.dim).bg(bg).add_modifier(Modifier::BOLD),
    )));

    if app.portfolio.rents.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No rent records.",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    for (i, rent) in app.portfolio.rents.iter().enumerate() {
        let is_cursor = i == app.rent_cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        let marker = if is_cursor { "\u{258D} " } else { "  " };

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(
                pad_to(&rent.property, 28),
                Style::default().fg(app.theme.text_bright).bg(row_bg),
            ),
            Span::styled(
                pad_to(&rent.tenant, 18),
                Style::default().fg(app.theme.text).bg(row_bg),
            ),
            Span::styled(
                pad_to(&format!("${}", rent.amount), 10),
                Style::default().fg(app.theme.text).bg(row_bg),
            ),
            Span::styled(
                pad_to(rent.status.label(), 10),
                Style::default().fg(app.theme.rent_status_color(rent.status)).bg(row_bg),
            ),
        ];
        // Collect affordance only on Due rows, like the original table
        if rent.status == RentStatus::Due {
            spans.push(Span::styled(
                "[c]ollect",
                Style::default().fg(app.theme.cyan).bg(row_bg),
            ));
        }
        lines.push(Line::from(spans));

        lines.push(Line::from(vec![
            Span::styled("  ", Style::default().bg(row_bg)),
            Span::styled(
                format!("{}  \u{00B7}  Due {}", rent.id, rent.due),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
