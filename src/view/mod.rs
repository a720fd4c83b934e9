//! TUI rendering and terminal management (impure shell).
//!
//! The event loop is single-threaded: it drains fetch outcomes from the
//! feed channel, redraws, then polls the keyboard with a short timeout.
//! Fetches run on background threads (see `feed::client`) and the only
//! shared state is the outcome channel, so no reader ever observes a
//! partially applied store update.

mod detail_modal;
mod helpers;
mod home;
mod search_modal;
mod styles;
pub mod tabs;

pub use detail_modal::render_detail_modal;
pub use helpers::centered_rect;
pub use home::render_content;
pub use search_modal::render_search_modal;
pub use tabs::render_tab_bar;

use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    text::Line,
    widgets::Paragraph,
    Frame, Terminal,
};
use tracing::{info, warn};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::feed::{FeedClient, FetchOutcome};
use crate::model::{AppError, KeyAction};
use crate::search::startup_query;
use crate::state::{AppState, FetchPhase, SubmitOutcome, Tab};

/// How long one keyboard poll waits before the loop ticks anyway (drives
/// the loader animation and outcome draining).
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Whether the event loop should keep running after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Exit the application.
    Quit,
}

// ===== TuiApp =====

/// The TUI application: a terminal plus the application state.
///
/// Generic over the backend so tests can drive it with `TestBackend`.
pub struct TuiApp<B: Backend> {
    terminal: Terminal<B>,
    /// Root application state.
    pub state: AppState,
    key_bindings: KeyBindings,
    tick: usize,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize the application: raw mode plus alternate
    /// screen.
    pub fn new(state: AppState) -> Result<Self, io::Error> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, state))
    }

    /// Run the main event loop until the user quits or a terminal error
    /// occurs.
    pub fn event_loop(
        &mut self,
        client: &mut FeedClient,
        rx: &Receiver<FetchOutcome>,
    ) -> Result<(), io::Error> {
        loop {
            while let Ok(outcome) = rx.try_recv() {
                self.state.apply_outcome(outcome);
            }

            self.draw()?;

            if event::poll(TICK_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press
                        && handle_key(&mut self.state, client, &self.key_bindings, key)
                            == Flow::Quit
                    {
                        info!("user quit");
                        return Ok(());
                    }
                }
            }
            self.tick = self.tick.wrapping_add(1);
        }
    }
}

impl<B: Backend> TuiApp<B> {
    /// Wrap an existing terminal (used by tests with `TestBackend`).
    pub fn with_terminal(terminal: Terminal<B>, state: AppState) -> Self {
        Self {
            terminal,
            state,
            key_bindings: KeyBindings::default(),
            tick: 0,
        }
    }

    /// Render one frame.
    pub fn draw(&mut self) -> Result<(), io::Error> {
        let Self {
            terminal,
            state,
            tick,
            ..
        } = self;
        terminal.draw(|frame| render(frame, state, *tick))?;
        Ok(())
    }
}

/// Restore the terminal to cooked mode. Called on every exit path.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
}

// ===== Entry point =====

/// Run the application with a resolved configuration.
///
/// Issues the unconditional startup query (unless `offline`), then hands
/// control to the event loop. The terminal is restored before any error
/// propagates.
pub fn run(config: &ResolvedConfig, offline: bool) -> Result<(), AppError> {
    let (tx, rx) = mpsc::channel();
    let mut client = FeedClient::new(config.base_url.clone(), tx)?;

    let mut app = TuiApp::new(AppState::new(config.units_metric)).map_err(AppError::Terminal)?;

    if !offline {
        let query = startup_query(config.min_magnitude);
        let seq = client.fetch(&query);
        app.state.begin_fetch(&query, seq);
    }

    let result = app.event_loop(&mut client, &rx);
    restore_terminal();
    result.map_err(AppError::Terminal)
}

// ===== Rendering =====

/// Render the whole frame: tab bar, active tab content, status line, and
/// any open overlay (overlays draw last, on top).
pub fn render(frame: &mut Frame, state: &mut AppState, tick: usize) {
    let [tab_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_tab_bar(frame, tab_area, state.active_tab);
    render_content(frame, content_area, state, tick);
    render_status(frame, status_area, state);
    render_search_modal(frame, state);
    render_detail_modal(frame, state);
}

fn render_status(frame: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
    let hint = if state.form.visible {
        "Enter search | Tab move | Esc close"
    } else if state.detail.is_some() {
        "Esc close"
    } else if matches!(state.phase, FetchPhase::Failed { .. }) {
        "r retry | / search | Tab tabs | q quit"
    } else {
        "/ search | Enter detail | j/k select | Tab tabs | q quit"
    };
    frame.render_widget(
        Paragraph::new(Line::styled(hint, styles::dim_style())),
        area,
    );
}

// ===== Key handling =====

/// Route one key press.
///
/// The search form swallows every key while open; the detail overlay
/// swallows everything except its close keys; otherwise the bindings
/// table maps keys to actions.
pub fn handle_key(
    state: &mut AppState,
    client: &mut FeedClient,
    bindings: &KeyBindings,
    key: KeyEvent,
) -> Flow {
    if state.form.visible {
        handle_form_key(state, client, key);
        return Flow::Continue;
    }

    if state.detail.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            state.close_detail();
        }
        return Flow::Continue;
    }

    let normalized = KeyEvent::new(key.code, key.modifiers);
    let Some(action) = bindings.get(normalized) else {
        return Flow::Continue;
    };

    match action {
        KeyAction::Quit => return Flow::Quit,
        KeyAction::NextTab => state.next_tab(),
        KeyAction::PrevTab => state.prev_tab(),
        KeyAction::SelectTab(n) => {
            if let Some(tab) = Tab::ALL.get(n.saturating_sub(1)) {
                state.select_tab(*tab);
            }
        }
        KeyAction::SelectDown => state.select_next_card(),
        KeyAction::SelectUp => state.select_prev_card(),
        KeyAction::SelectFirst => state.select_first_card(),
        KeyAction::OpenSearch => state.form.open(),
        KeyAction::OpenDetail => {
            if let Err(err) = state.open_detail() {
                // Unreachable through normal flow; log instead of dying.
                warn!(%err, "detail lookup out of range");
            }
        }
        KeyAction::Retry => {
            if matches!(state.phase, FetchPhase::Failed { .. }) {
                if let Some(query) = state.last_query().map(str::to_string) {
                    let seq = client.fetch(&query);
                    state.begin_fetch(&query, seq);
                }
            }
        }
    }
    Flow::Continue
}

fn handle_form_key(state: &mut AppState, client: &mut FeedClient, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.form.close(),
        KeyCode::Enter => match state.form.submit() {
            SubmitOutcome::Query(query) => {
                state.form.close();
                let seq = client.fetch(&query);
                state.begin_fetch(&query, seq);
            }
            // Invalid keeps the form open with its error lines; an
            // all-empty form never issues a request.
            SubmitOutcome::Invalid | SubmitOutcome::AllEmpty => {}
        },
        KeyCode::Tab | KeyCode::Down => state.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.form.focus_prev(),
        KeyCode::Backspace => state.form.backspace(),
        KeyCode::Char(c) => state.form.insert_char(c),
        _ => {}
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn test_client() -> (FeedClient, Receiver<FetchOutcome>) {
        let (tx, rx) = mpsc::channel();
        let client = FeedClient::new("http://127.0.0.1:0", tx).expect("client builds");
        (client, rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits_in_browse_mode() {
        let mut state = AppState::new(true);
        let (mut client, _rx) = test_client();
        let bindings = KeyBindings::default();
        assert_eq!(
            handle_key(&mut state, &mut client, &bindings, press(KeyCode::Char('q'))),
            Flow::Quit
        );
    }

    #[test]
    fn slash_opens_search_and_keys_route_to_the_form() {
        let mut state = AppState::new(true);
        let (mut client, _rx) = test_client();
        let bindings = KeyBindings::default();

        handle_key(&mut state, &mut client, &bindings, press(KeyCode::Char('/')));
        assert!(state.form.visible);

        // 'q' is typed into the focused field, not treated as quit.
        let flow = handle_key(&mut state, &mut client, &bindings, press(KeyCode::Char('q')));
        assert_eq!(flow, Flow::Continue);
        assert!(state.form.visible);

        handle_key(&mut state, &mut client, &bindings, press(KeyCode::Esc));
        assert!(!state.form.visible);
    }

    #[test]
    fn submitting_empty_form_issues_no_fetch() {
        let mut state = AppState::new(true);
        let (mut client, _rx) = test_client();
        let bindings = KeyBindings::default();

        state.form.open();
        handle_key(&mut state, &mut client, &bindings, press(KeyCode::Enter));
        // Form stays open, nothing in flight.
        assert!(state.form.visible);
        assert!(!state.is_loading());
        assert_eq!(state.last_query(), None);
    }

    #[test]
    fn submitting_valid_form_starts_a_fetch_and_closes_the_form() {
        let mut state = AppState::new(true);
        let (mut client, _rx) = test_client();
        let bindings = KeyBindings::default();

        state.form.open();
        for c in "4.5".chars() {
            handle_key(&mut state, &mut client, &bindings, press(KeyCode::Char(c)));
        }
        handle_key(&mut state, &mut client, &bindings, press(KeyCode::Enter));
        assert!(!state.form.visible);
        assert!(state.is_loading());
        assert_eq!(
            state.last_query(),
            Some("/query?format=geojson&minmagnitude=4.5&limit=15&orderby=time")
        );
    }

    #[test]
    fn esc_closes_the_detail_overlay() {
        let mut state = AppState::new(true);
        let (mut client, _rx) = test_client();
        let bindings = KeyBindings::default();

        state.begin_fetch("/query?format=geojson", 0);
        state.apply_outcome(FetchOutcome {
            seq: 0,
            result: Ok(vec![crate::model::Event {
                magnitude: Some(5.2),
                depth_km: 8.3,
                latitude: 35.2,
                longitude: -120.1,
                place: "10km N of X".to_string(),
                time_millis: 1_000_000_000_000,
                felt_report: None,
                tsunami: 0,
            }]),
        });
        state.open_detail().expect("index in range");
        assert!(state.detail.is_some());

        let flow = handle_key(&mut state, &mut client, &bindings, press(KeyCode::Esc));
        assert_eq!(flow, Flow::Continue);
        assert!(state.detail.is_none());
    }

    #[test]
    fn retry_only_applies_in_failed_phase() {
        let mut state = AppState::new(true);
        let (mut client, _rx) = test_client();
        let bindings = KeyBindings::default();

        handle_key(&mut state, &mut client, &bindings, press(KeyCode::Char('r')));
        assert!(!state.is_loading());

        state.begin_fetch("/query?format=geojson&minmagnitude=2", 7);
        state.apply_outcome(FetchOutcome {
            seq: 7,
            result: Err(crate::model::FeedError::Status { status: 500 }),
        });
        handle_key(&mut state, &mut client, &bindings, press(KeyCode::Char('r')));
        assert!(state.is_loading());
    }

    #[test]
    fn full_frame_renders_on_test_backend() {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = TuiApp::with_terminal(terminal, AppState::new(true));
        app.draw().expect("frame renders");
    }
}
