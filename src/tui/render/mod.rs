pub mod analytics_view;
pub mod dashboard_view;
pub mod form_overlay;
pub mod helpers;
pub mod info_overlay;
pub mod listings_view;
pub mod maintenance_view;
pub mod notice;
pub mod rent_view;
pub mod status_row;
pub mod tab_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, View};

/// Main render function: a full-state projection, rebuilt every draw.
/// There is no diffing; each view regenerates all of its content from
/// the current portfolio.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    match app.view {
        View::Dashboard => dashboard_view::render_dashboard(frame, app, chunks[1]),
        View::Listings => listings_view::render_listings(frame, app, chunks[1]),
        View::Rent => rent_view::render_rent(frame, app, chunks[1]),
        View::Maintenance => maintenance_view::render_maintenance(frame, app, chunks[1]),
        View::Analytics => analytics_view::render_analytics(frame, app, chunks[1]),
    }

    // Overlays (rendered on top of everything)
    if app.form.is_some() {
        form_overlay::render_form_overlay(frame, app, frame.area());
    }
    if app.info.is_some() {
        info_overlay::render_info_overlay(frame, app, frame.area());
    }
    if app.notice.is_some() {
        notice::render_notice(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[2]);
}
