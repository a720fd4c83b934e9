//! Application state and transitions.
//!
//! `AppState` is the root state object: the event store, the fetch phase
//! machine, the tab cache, overlay state, and the current request's
//! sequence number. There are no ambient globals; the view layer owns one
//! `AppState` and every transition is an explicit method. All transitions
//! here are pure and testable without a terminal or a network.

use tracing::{debug, info};

use crate::feed::FetchOutcome;
use crate::model::{DetailError, Event};
use crate::state::detail::{self, DetailView};
use crate::state::form::SearchFormState;
use crate::state::tab::{Tab, TabCache};

/// Static message shown when a fetch completes with zero events.
pub const NO_EVENTS_MESSAGE: &str =
    "No events exist with those search parameters. Please try again.";

// ===== FetchPhase =====

/// The fetch-completion pipeline's state machine.
///
/// `Empty → Loading → Populated | EmptyResult | Failed`; every search
/// submission that produces a query re-enters `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPhase {
    /// Nothing fetched yet (before the startup request, or offline mode).
    Empty,
    /// A request is in flight; the loader is visible.
    Loading,
    /// The most recent fetch returned events; the store and tab cache
    /// reflect it.
    Populated,
    /// The most recent fetch succeeded but returned zero events; the
    /// store is empty and the content area shows [`NO_EVENTS_MESSAGE`].
    EmptyResult,
    /// The most recent fetch failed; the previous store and cache are
    /// kept and a retry is offered.
    Failed {
        /// One-line failure description for the content area.
        message: String,
    },
}

// ===== AppState =====

/// Root application state. Pure data plus transition methods.
#[derive(Debug)]
pub struct AppState {
    /// The events of the most recently completed successful fetch, in
    /// feed order. Single writer: `apply_outcome`.
    events: Vec<Event>,
    /// Where the fetch pipeline currently stands.
    pub phase: FetchPhase,
    /// Per-tab content cache.
    pub tabs: TabCache,
    /// The tab currently shown.
    pub active_tab: Tab,
    /// Selected card index within the Home list.
    pub selected_card: usize,
    /// Vertical scroll offset of the Home list.
    pub scroll_offset: usize,
    /// Detail overlay contents when open.
    pub detail: Option<DetailView>,
    /// Search form overlay state.
    pub form: SearchFormState,
    /// Depth/radius unit label selection.
    pub units_metric: bool,
    /// Sequence number of the request currently in flight. Outcomes with
    /// any other number are stale and discarded.
    current_seq: Option<u64>,
    /// The last query issued, kept for the retry affordance.
    last_query: Option<String>,
}

impl AppState {
    /// Fresh state: empty store, empty tab cache, Home active.
    pub fn new(units_metric: bool) -> Self {
        Self {
            events: Vec::new(),
            phase: FetchPhase::Empty,
            tabs: TabCache::new(),
            active_tab: Tab::Home,
            selected_card: 0,
            scroll_offset: 0,
            detail: None,
            form: SearchFormState::new(),
            units_metric,
            current_seq: None,
            last_query: None,
        }
    }

    /// Immutable view of the event store.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// True while a request is in flight (loader visible).
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    /// The last issued query, for the retry affordance.
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    // ===== Fetch pipeline =====

    /// Record that a request for `query` was issued with sequence number
    /// `seq` and enter the loading state.
    pub fn begin_fetch(&mut self, query: &str, seq: u64) {
        self.last_query = Some(query.to_string());
        self.current_seq = Some(seq);
        self.phase = FetchPhase::Loading;
    }

    /// Apply a fetch completion.
    ///
    /// Returns `false` when the outcome is stale (its sequence number is
    /// not the current request's) and was discarded; the store, cache,
    /// and phase are untouched in that case.
    ///
    /// For the current request:
    /// - non-empty result: the store is replaced verbatim, the tab cache
    ///   is rebuilt, and the active tab switches to Home regardless of
    ///   which tab was active (deliberate behavior, not incidental);
    /// - empty result: the store is left empty and the cache is not
    ///   rebuilt;
    /// - failure: the previous store and cache are kept; the phase
    ///   carries the failure message.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        if self.current_seq != Some(outcome.seq) {
            debug!(
                seq = outcome.seq,
                current = ?self.current_seq,
                "discarding stale fetch outcome"
            );
            return false;
        }
        self.current_seq = None;

        match outcome.result {
            Ok(events) if events.is_empty() => {
                info!(seq = outcome.seq, "fetch returned zero events");
                self.events.clear();
                self.selected_card = 0;
                self.scroll_offset = 0;
                self.phase = FetchPhase::EmptyResult;
            }
            Ok(events) => {
                info!(seq = outcome.seq, count = events.len(), "fetch complete");
                self.events = events;
                self.tabs.rebuild(&self.events);
                self.active_tab = Tab::Home;
                self.selected_card = 0;
                self.scroll_offset = 0;
                self.phase = FetchPhase::Populated;
            }
            Err(err) => {
                self.phase = FetchPhase::Failed {
                    message: err.to_string(),
                };
            }
        }
        true
    }

    // ===== Tab navigation =====

    /// Switch to `tab`. Selecting the already-active tab scrolls the view
    /// back to the top instead.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab == tab {
            self.scroll_offset = 0;
        } else {
            self.active_tab = tab;
        }
    }

    /// Switch to the next tab (wraps).
    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    /// Switch to the previous tab (wraps).
    pub fn prev_tab(&mut self) {
        self.active_tab = self.active_tab.prev();
    }

    // ===== Card selection =====

    /// Move the Home selection down, clamped to the last card.
    pub fn select_next_card(&mut self) {
        let count = self.tabs.home_cards().len();
        if count > 0 {
            self.selected_card = (self.selected_card + 1).min(count - 1);
        }
    }

    /// Move the Home selection up, saturating at the first card.
    pub fn select_prev_card(&mut self) {
        self.selected_card = self.selected_card.saturating_sub(1);
    }

    /// Jump the Home selection back to the first card.
    pub fn select_first_card(&mut self) {
        self.selected_card = 0;
        self.scroll_offset = 0;
    }

    // ===== Detail overlay =====

    /// Open the detail overlay for the selected card.
    ///
    /// No-op outside the Home tab or when the store is empty. The index
    /// check is a precondition the renderer upholds; a violation is
    /// returned, not panicked.
    pub fn open_detail(&mut self) -> Result<(), DetailError> {
        if self.active_tab != Tab::Home || self.events.is_empty() {
            return Ok(());
        }
        let view = detail::present(&self.events, self.selected_card, self.units_metric)?;
        self.detail = Some(view);
        Ok(())
    }

    /// Close the detail overlay.
    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
