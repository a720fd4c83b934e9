//! Tabs and the per-tab content cache.
//!
//! Four mutually exclusive content views. The cache holds structured view
//! data rather than markup strings; all four entries exist at all times.
//! The Home entry is rebuilt on every successful non-empty fetch, the
//! other three are placeholders that never depend on event data in this
//! version. Switching tabs only reads the cache, it never regenerates
//! content.

use crate::model::Event;

// ===== Tab =====

/// Tab identifiers. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// The event card list.
    #[default]
    Home,
    /// Timeline view (placeholder).
    Timeline,
    /// Map view (placeholder).
    VisualMap,
    /// About page (placeholder).
    About,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Timeline, Tab::VisualMap, Tab::About];

    /// Tab bar label.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Timeline => "Timeline",
            Tab::VisualMap => "Visual Map",
            Tab::About => "About",
        }
    }

    /// Position in display order.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or_default()
    }

    /// Next tab in display order (wraps).
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab in display order (wraps).
    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

// ===== EventCard =====

/// View data for one Home-tab card: the display strings plus the index of
/// the event it was built from. The index is the card's activation
/// payload; the detail presenter reads the store at that index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    /// Index into the event store this card was built from.
    pub index: usize,
    /// Magnitude display text. Empty when the feed sent no magnitude.
    pub magnitude: String,
    /// Location description.
    pub place: String,
    /// Human-readable UTC date.
    pub when: String,
}

impl EventCard {
    /// Build the card for `event` at store index `index`.
    pub fn from_event(index: usize, event: &Event) -> Self {
        Self {
            index,
            magnitude: event
                .magnitude
                .map(|m| m.to_string())
                .unwrap_or_default(),
            place: event.place.clone(),
            when: event.time_display(),
        }
    }
}

// ===== TabContent =====

/// Cached content for one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent {
    /// The Home card list.
    Cards(Vec<EventCard>),
    /// Static placeholder text.
    Placeholder(&'static str),
}

/// Placeholder shown by the three unbuilt tabs.
pub const PLACEHOLDER: &str = "Coming...soon?";

// ===== TabCache =====

/// The per-tab content cache.
///
/// Initialized with empty content for every tab, then fully repopulated
/// synchronously each time a non-empty fetch completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabCache {
    contents: [TabContent; 4],
}

impl Default for TabCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TabCache {
    /// All four entries present, all empty.
    pub fn new() -> Self {
        Self {
            contents: [
                TabContent::Cards(Vec::new()),
                TabContent::Placeholder(""),
                TabContent::Placeholder(""),
                TabContent::Placeholder(""),
            ],
        }
    }

    /// Cached content for one tab.
    pub fn get(&self, tab: Tab) -> &TabContent {
        &self.contents[tab.index()]
    }

    /// Rebuild every entry from the event store: one card per event for
    /// Home, placeholder text for the rest. Runs once per successful
    /// non-empty fetch; tab switches never call this.
    pub fn rebuild(&mut self, events: &[Event]) {
        let cards = events
            .iter()
            .enumerate()
            .map(|(index, event)| EventCard::from_event(index, event))
            .collect();
        self.contents = [
            TabContent::Cards(cards),
            TabContent::Placeholder(PLACEHOLDER),
            TabContent::Placeholder(PLACEHOLDER),
            TabContent::Placeholder(PLACEHOLDER),
        ];
    }

    /// The Home card list.
    pub fn home_cards(&self) -> &[EventCard] {
        match self.get(Tab::Home) {
            TabContent::Cards(cards) => cards,
            TabContent::Placeholder(_) => &[],
        }
    }
}

// ===== Tests =====
