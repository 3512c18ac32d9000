use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;
use crate::tui::form::FieldKind;

/// Handle a key while the modal form is open
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    if app.form.is_none() {
        app.close_overlay();
        return;
    }

    if key.code == KeyCode::Esc {
        app.close_overlay();
        return;
    }

    if key.code == KeyCode::Enter {
        let parsed = app.form.as_ref().map(|f| f.parse());
        match parsed {
            Some(Ok(record)) => {
                app.close_overlay();
                app.submit_record(record);
            }
            Some(Err(msg)) => {
                if let Some(form) = &mut app.form {
                    form.error = Some(msg);
                }
            }
            None => {}
        }
        return;
    }

    let Some(form) = &mut app.form else { return };
    form.error = None;

    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),

        // Select fields cycle with left/right/space; the quick-add type
        // selector also swaps the field set
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
            if matches!(form.fields[form.focus].kind, FieldKind::Select(_)) =>
        {
            let forward = key.code != KeyCode::Left;
            form.fields[form.focus].cycle(forward);
            if form.quick && form.focus == 0 {
                form.sync_quick_fields();
            }
        }

        KeyCode::Char(c) => form.fields[form.focus].push_char(c),
        KeyCode::Backspace => form.fields[form.focus].pop_char(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{press, test_app};
    use crate::model::{ListingStatus, RentStatus};
    use crate::tui::app::Mode;
    use crate::tui::form::EntityKind;
    use crossterm::event::KeyCode;
    use tempfile::TempDir;

    fn type_str(app: &mut crate::tui::app::App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn full_add_listing_flow() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let prior: Vec<String> = app.portfolio.listings.iter().map(|l| l.id.clone()).collect();

        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Birchwood Flats");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "9 Birch Ln");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right); // Occupied -> Available
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "1600");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        let first = &app.portfolio.listings[0];
        assert_eq!(first.name, "Birchwood Flats");
        assert_eq!(first.status, ListingStatus::Available);
        assert_eq!(first.occupancy, 0);
        assert_eq!(first.rent, 1600);
        assert_eq!(first.id.strip_prefix("L-").unwrap().len(), 4);

        let after: Vec<String> = app.portfolio.listings[1..].iter().map(|l| l.id.clone()).collect();
        assert_eq!(after, prior);

        // The add persisted before the next draw
        let reloaded = crate::io::store::load(&app.state_path);
        assert_eq!(reloaded, app.portfolio);
    }

    #[test]
    fn submit_with_missing_required_field_stays_open() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Form);
        assert!(app.form.as_ref().unwrap().error.is_some());
        // Next keystroke clears the error
        press(&mut app, KeyCode::Char('x'));
        assert!(app.form.as_ref().unwrap().error.is_none());
    }

    #[test]
    fn esc_discards_form_state() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "half-typed");
        press(&mut app, KeyCode::Esc);
        assert!(app.form.is_none());

        // Reopening builds a fresh form, not the half-typed one
        press(&mut app, KeyCode::Char('a'));
        assert!(app.form.as_ref().unwrap().fields[0].value.is_empty());
    }

    #[test]
    fn quick_add_rent_creates_due_record() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        press(&mut app, KeyCode::Char('A'));
        press(&mut app, KeyCode::Right); // type: Listing -> Rent
        assert_eq!(app.form.as_ref().unwrap().kind, EntityKind::Rent);

        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Harborline Lofts");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Sam Ortiz");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "1850");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Oct 01");
        press(&mut app, KeyCode::Enter);

        let first = &app.portfolio.rents[0];
        assert_eq!(first.property, "Harborline Lofts");
        assert_eq!(first.amount, 1850);
        assert_eq!(first.status, RentStatus::Due);
    }

    #[test]
    fn space_cycles_selects_but_types_into_text() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "Cedar Court");
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.form.as_ref().unwrap().fields[0].value, "Cedar Court ");

        // Move to the priority select; space cycles it
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.form.as_ref().unwrap().fields[2].selected_option(), "Medium");
    }
}
