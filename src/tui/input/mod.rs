mod form;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Form => form::handle_form(app, key),
        Mode::Info | Mode::Notice => handle_dismiss(app, key),
    }
}

/// Info and notice overlays block everything; Esc or Enter dismisses
fn handle_dismiss(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
        app.close_overlay();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Portfolio;
    use crate::tui::theme::Theme;
    use crossterm::event::KeyModifiers;
    use tempfile::TempDir;

    pub(super) fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub(super) fn test_app(dir: &TempDir) -> App {
        App::new(
            Portfolio::default_dataset(),
            dir.path().join("harborkey.json"),
            Theme::default(),
        )
    }

    #[test]
    fn notice_blocks_until_dismissed() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.open_notice("Reminders sent to tenants with due balances.");

        // Navigation keys do nothing while the notice is up
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.view, crate::tui::app::View::Dashboard);
        assert_eq!(app.mode, Mode::Notice);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
    }
}
