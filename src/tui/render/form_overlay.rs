use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::form::FieldKind;

use super::helpers::{centered_rect, pad_to};

/// Render the modal create form over the current view
pub fn render_form_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.form else { return };
    let bg = app.theme.background;

    // One row per field plus chrome rows
    let height = (form.fields.len() as u16) + 6;
    let popup = centered_rect(56, height, area);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));

    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focus;
        let label_style = if focused {
            Style::default().fg(app.theme.text_bright).bg(bg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };

        let mut spans = vec![
            Span::styled(if focused { " \u{258D}" } else { "  " },
                Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(pad_to(field.label, 16), label_style),
        ];

        match field.kind {
            FieldKind::Select(options) => {
                for (j, option) in options.iter().enumerate() {
                    let chosen = j == field.selected;
                    let style = if chosen {
                        Style::default().fg(app.theme.text_bright).bg(app.theme.selection_bg)
                    } else {
                        Style::default().fg(app.theme.dim).bg(bg)
                    };
                    spans.push(Span::styled(format!(" {} ", option), style));
                }
                if focused {
                    spans.push(Span::styled(
                        "  \u{2190}\u{2192}",
                        Style::default().fg(app.theme.dim).bg(bg),
                    ));
                }
            }
            _ => {
                spans.push(Span::styled(
                    field.value.clone(),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ));
                if focused {
                    spans.push(Span::styled(
                        "\u{258C}",
                        Style::default().fg(app.theme.highlight).bg(bg),
                    ));
                }
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(app.theme.red).bg(bg),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "  Enter save  Tab next field  Esc cancel",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", form.title))
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup);
}
