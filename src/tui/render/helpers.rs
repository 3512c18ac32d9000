use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::theme::Theme;

/// Truncate and right-pad text to an exact display width. Overlong text
/// is cut with a trailing ellipsis.
pub fn pad_to(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let text_width = UnicodeWidthStr::width(text);
    if text_width <= width {
        let mut out = text.to_string();
        out.push_str(&" ".repeat(width - text_width));
        return out;
    }

    let mut out = String::new();
    let mut used = 0usize;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('\u{2026}');
    used += 1;
    out.push_str(&" ".repeat(width - used));
    out
}

/// A fixed-size rect centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Horizontal percentage bar, `width` cells wide
pub fn bar_span(theme: &Theme, percent: u32, width: usize) -> Vec<Span<'static>> {
    let filled = (width * percent.min(100) as usize) / 100;
    vec![
        Span::styled(
            "\u{2588}".repeat(filled),
            Style::default().fg(theme.bar_fill).bg(theme.background),
        ),
        Span::styled(
            "\u{2591}".repeat(width - filled),
            Style::default().fg(theme.bar_empty).bg(theme.background),
        ),
    ]
}
