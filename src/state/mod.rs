//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal
//! or a network connection.

pub mod app_state;
pub mod detail;
pub mod form;
pub mod tab;

pub use app_state::{AppState, FetchPhase, NO_EVENTS_MESSAGE};
pub use detail::{DetailView, NO_FELT_REPORTS};
pub use form::{SearchFormState, SubmitOutcome};
pub use tab::{EventCard, Tab, TabCache, TabContent, PLACEHOLDER};
