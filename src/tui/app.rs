use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::{config_io, store};
use crate::model::Portfolio;

use super::form::{FormState, NewRecord};
use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed. Exactly one at a time; the
/// dashboard is the initial view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Listings,
    Rent,
    Maintenance,
    Analytics,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Listings,
        View::Rent,
        View::Maintenance,
        View::Analytics,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Listings => "Listings",
            View::Rent => "Rent",
            View::Maintenance => "Maintenance",
            View::Analytics => "Analytics",
        }
    }
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Modal create form is open (`app.form` is Some)
    Form,
    /// Read-only record detail overlay is open (`app.info` is Some)
    Info,
    /// Blocking acknowledgment dialog (`app.notice` is Some)
    Notice,
}

/// Read-only detail overlay content for a clicked record
#[derive(Debug, Clone)]
pub struct InfoState {
    pub title: String,
    pub lines: Vec<(String, String)>,
}

/// Main application state: the portfolio plus all transient UI state
pub struct App {
    pub portfolio: Portfolio,
    pub state_path: PathBuf,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Row cursors per list view
    pub listings_cursor: usize,
    pub rent_cursor: usize,
    pub maintenance_cursor: usize,
    pub form: Option<FormState>,
    pub info: Option<InfoState>,
    pub notice: Option<String>,
    /// Transient status-line message (e.g. a failed save)
    pub status_note: Option<String>,
}

impl App {
    pub fn new(portfolio: Portfolio, state_path: PathBuf, theme: Theme) -> Self {
        App {
            portfolio,
            state_path,
            view: View::Dashboard,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            listings_cursor: 0,
            rent_cursor: 0,
            maintenance_cursor: 0,
            form: None,
            info: None,
            notice: None,
            status_note: None,
        }
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Apply a mutation to the portfolio, then persist immediately.
    ///
    /// This is the one path every state change goes through: mutate,
    /// save, and let the next draw rebuild all views from state. A save
    /// failure keeps the in-memory change and surfaces a non-fatal note.
    pub fn mutate(&mut self, f: impl FnOnce(&mut Portfolio)) {
        f(&mut self.portfolio);
        if let Err(e) = store::save(&self.state_path, &self.portfolio) {
            self.status_note = Some(format!("save failed: {}", e));
        } else {
            self.status_note = None;
        }
        self.clamp_cursors();
    }

    /// Keep row cursors inside their collections after mutations
    pub fn clamp_cursors(&mut self) {
        self.listings_cursor = self
            .listings_cursor
            .min(self.portfolio.listings.len().saturating_sub(1));
        self.rent_cursor = self
            .rent_cursor
            .min(self.portfolio.rents.len().saturating_sub(1));
        self.maintenance_cursor = self
            .maintenance_cursor
            .min(self.portfolio.maintenance.len().saturating_sub(1));
    }

    pub fn open_form(&mut self, form: FormState) {
        self.form = Some(form);
        self.mode = Mode::Form;
    }

    pub fn open_info(&mut self, info: InfoState) {
        self.info = Some(info);
        self.mode = Mode::Info;
    }

    pub fn open_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(text.into());
        self.mode = Mode::Notice;
    }

    /// Close any overlay, dropping its state entirely. Reopening always
    /// rebuilds content fresh.
    pub fn close_overlay(&mut self) {
        self.form = None;
        self.info = None;
        self.notice = None;
        self.mode = Mode::Navigate;
    }

    /// Dispatch a parsed form submission to the matching add operation
    pub fn submit_record(&mut self, record: NewRecord) {
        use crate::ops::{listing_ops, rent_ops, ticket_ops};
        self.mutate(|p| match record {
            NewRecord::Listing {
                name,
                address,
                status,
                rent,
            } => {
                listing_ops::add_listing(p, name, address, status, rent);
            }
            NewRecord::Rent {
                property,
                tenant,
                amount,
                due,
            } => {
                rent_ops::add_rent(p, property, tenant, amount, due);
            }
            NewRecord::Maintenance {
                property,
                issue,
                priority,
                eta,
            } => {
                ticket_ops::add_ticket(p, property, issue, priority, eta);
            }
        });
    }
}

/// Run the TUI application
pub fn run(state_file: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let state_path = store::resolve_state_path(state_file);
    let portfolio = store::load(&state_path);
    let config = config_io::load_config(&state_path);
    let theme = Theme::from_config(&config.ui);

    let mut app = App::new(portfolio, state_path, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Final persist on orderly shutdown
    let _ = store::save(&app.state_path, &app.portfolio);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
