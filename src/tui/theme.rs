use ratatui::style::Color;

use crate::model::{ListingStatus, RentStatus, TicketStatus, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub selection_bg: Color,
    pub bar_fill: Color,
    pub bar_empty: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0B, 0x10, 0x21),
            text: Color::Rgb(0xA8, 0xB3, 0xD4),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x3E, 0xA6, 0xFF),
            dim: Color::Rgb(0x5C, 0x67, 0x88),
            red: Color::Rgb(0xFF, 0x5C, 0x5C),
            yellow: Color::Rgb(0xFF, 0xC5, 0x4D),
            green: Color::Rgb(0x4D, 0xE0, 0x96),
            cyan: Color::Rgb(0x4D, 0xD4, 0xE0),
            selection_bg: Color::Rgb(0x1C, 0x2A, 0x4A),
            bar_fill: Color::Rgb(0x3E, 0xA6, 0xFF),
            bar_empty: Color::Rgb(0x1C, 0x2A, 0x4A),
        }
    }
}

/// Parse a hex color string like "#FF5C5C" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from app config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "cyan" => theme.cyan = color,
                    "selection_bg" => theme.selection_bg = color,
                    "bar_fill" => theme.bar_fill = color,
                    "bar_empty" => theme.bar_empty = color,
                    _ => {}
                }
            }
        }
        theme
    }

    /// Status color for a listing: Available reads as a warning
    pub fn listing_status_color(&self, status: ListingStatus) -> Color {
        match status {
            ListingStatus::Occupied => self.green,
            ListingStatus::Available => self.yellow,
        }
    }

    pub fn rent_status_color(&self, status: RentStatus) -> Color {
        match status {
            RentStatus::Paid => self.green,
            RentStatus::Due => self.yellow,
            RentStatus::Vacant => self.red,
        }
    }

    pub fn ticket_status_color(&self, status: TicketStatus) -> Color {
        match status {
            TicketStatus::Open => self.red,
            TicketStatus::Scheduled => self.yellow,
            TicketStatus::Completed => self.green,
        }
    }
}
