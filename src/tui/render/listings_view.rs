use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::pad_to;

/// Render listing cards: one three-line card per listing, rebuilt from
/// state on every draw
pub fn render_listings(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        " Listings",
        Style::default().fg(app.theme.text).bg(bg).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "  a add listing   Enter details",
        Style::default().fg(app.theme.dim).bg(bg),
    )));
    lines.push(Line::from(""));

    if app.portfolio.listings.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No listings yet.",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    for (i, listing) in app.portfolio.listings.iter().enumerate() {
        let is_cursor = i == app.listings_cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let marker = if is_cursor { "\u{258D} " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
            Span::styled(
                pad_to(&listing.name, 30),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(row_bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                pad_to(listing.status.label(), 11),
                Style::default()
                    .fg(app.theme.listing_status_color(listing.status))
                    .bg(row_bg),
            ),
            Span::styled(
                format!("${}/mo", listing.rent),
                Style::default().fg(app.theme.text).bg(row_bg),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("  ", Style::default().bg(row_bg)),
            Span::styled(
                format!("{}  \u{00B7}  {}", listing.id, listing.address),
                Style::default().fg(app.theme.dim).bg(row_bg),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
