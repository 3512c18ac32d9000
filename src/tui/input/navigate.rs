use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::{rent_ops, ticket_ops};
use crate::tui::app::{App, InfoState, View};
use crate::tui::form::FormState;

/// Handle a key in Navigate mode
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // View switching: number keys and Tab cycling
        KeyCode::Char('1') => app.set_view(View::Dashboard),
        KeyCode::Char('2') => app.set_view(View::Listings),
        KeyCode::Char('3') => app.set_view(View::Rent),
        KeyCode::Char('4') => app.set_view(View::Maintenance),
        KeyCode::Char('5') => app.set_view(View::Analytics),
        KeyCode::Tab => cycle_view(app, 1),
        KeyCode::BackTab => cycle_view(app, -1),

        // Row cursor movement
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),

        // Context-sensitive add, and global quick add
        KeyCode::Char('a') => open_add_form(app),
        KeyCode::Char('A') => app.open_form(FormState::quick_add()),

        // Record detail overlay
        KeyCode::Char('i') | KeyCode::Enter => open_info(app),

        // Mutations
        KeyCode::Char('c') => collect_under_cursor(app),
        KeyCode::Char('p') => {
            if matches!(app.view, View::Rent | View::Dashboard) {
                app.mutate(rent_ops::mark_all_paid);
            }
        }
        KeyCode::Char('v') => advance_under_cursor(app),

        // Stubs and the analytics refresh
        KeyCode::Char('r') => match app.view {
            View::Rent => app.open_notice("Reminders sent to tenants with due balances."),
            // Analytics are recomputed on every draw; the key exists for
            // parity with the refresh control
            View::Analytics => {}
            _ => {}
        },
        KeyCode::Char('e') => {
            if app.view == View::Analytics || app.view == View::Dashboard {
                app.open_notice("Report exported as HarborKey-Portfolio.pdf");
            }
        }

        _ => {}
    }
}

fn cycle_view(app: &mut App, direction: i32) {
    let idx = View::ALL.iter().position(|v| *v == app.view).unwrap_or(0);
    let len = View::ALL.len();
    let next = if direction > 0 {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    app.set_view(View::ALL[next]);
}

fn move_cursor(app: &mut App, direction: i32) {
    let (cursor, len) = match app.view {
        View::Listings => (&mut app.listings_cursor, app.portfolio.listings.len()),
        View::Rent => (&mut app.rent_cursor, app.portfolio.rents.len()),
        View::Maintenance => (
            &mut app.maintenance_cursor,
            app.portfolio.maintenance.len(),
        ),
        _ => return,
    };
    if len == 0 {
        return;
    }
    if direction > 0 {
        *cursor = (*cursor + 1).min(len - 1);
    } else {
        *cursor = cursor.saturating_sub(1);
    }
}

/// `a` adds the entity the current view shows
fn open_add_form(app: &mut App) {
    match app.view {
        View::Listings => app.open_form(FormState::add_listing()),
        View::Rent => app.open_form(FormState::add_rent()),
        View::Maintenance | View::Dashboard => app.open_form(FormState::new_request()),
        View::Analytics => {}
    }
}

fn collect_under_cursor(app: &mut App) {
    if app.view != View::Rent {
        return;
    }
    let Some(id) = app
        .portfolio
        .rents
        .get(app.rent_cursor)
        .map(|r| r.id.clone())
    else {
        return;
    };
    app.mutate(|p| rent_ops::collect_rent(p, &id));
}

fn advance_under_cursor(app: &mut App) {
    if app.view != View::Maintenance {
        return;
    }
    let Some(id) = app
        .portfolio
        .maintenance
        .get(app.maintenance_cursor)
        .map(|t| t.id.clone())
    else {
        return;
    };
    app.mutate(|p| ticket_ops::advance_ticket(p, &id));
}

/// Build the read-only detail overlay for the record under the cursor
fn open_info(app: &mut App) {
    let info = match app.view {
        View::Listings => app.portfolio.listings.get(app.listings_cursor).map(|l| InfoState {
            title: l.name.clone(),
            lines: vec![
                ("Address".into(), l.address.clone()),
                ("Status".into(), l.status.label().into()),
                ("Monthly rent".into(), format!("${}", l.rent)),
            ],
        }),
        View::Rent => app.portfolio.rents.get(app.rent_cursor).map(|r| InfoState {
            title: r.property.clone(),
            lines: vec![
                ("Tenant".into(), r.tenant.clone()),
                ("Amount".into(), format!("${}", r.amount)),
                ("Due".into(), r.due.clone()),
                ("Status".into(), r.status.label().into()),
            ],
        }),
        View::Maintenance => app
            .portfolio
            .maintenance
            .get(app.maintenance_cursor)
            .map(|t| InfoState {
                title: t.property.clone(),
                lines: vec![
                    ("Issue".into(), t.issue.clone()),
                    ("Priority".into(), t.priority.label().into()),
                    ("ETA".into(), t.eta.clone()),
                    ("Status".into(), t.status.label().into()),
                ],
            }),
        _ => None,
    };
    if let Some(info) = info {
        app.open_info(info);
    }
}
