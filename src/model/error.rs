//! Error types for the quakewatch application.
//!
//! A small `thiserror` hierarchy:
//!
//! - [`AppError`] - top-level error wrapping all failure modes
//!   - [`FeedError`] - HTTP transport / feed decoding failures
//!   - `std::io::Error` - terminal/TUI failures
//!
//! Feed errors are non-fatal: a failed fetch surfaces an error line in the
//! content area with a retry affordance, and the previous event store and
//! tab cache are kept. Terminal errors are fatal and propagate to the
//! top-level handler.

use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// A feed request or response decode failed.
    ///
    /// Non-fatal: the loading indicator is cleared, the failure is shown
    /// in the content area, and the user may retry.
    #[error("Feed request failed: {0}")]
    Feed(#[from] FeedError),

    /// Terminal or TUI rendering error. Fatal; the terminal is restored
    /// and the error is written to stderr on exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors from querying the event feed.
///
/// Every variant carries enough context to render a one-line explanation
/// in the content area, so a failed request never leaves the loader
/// spinning without a message.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The HTTP request itself failed (connection, timeout, TLS, ...).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed answered with a non-success status code.
    #[error("Feed returned HTTP {status}")]
    Status {
        /// The HTTP status code returned by the feed.
        status: u16,
    },

    /// The response body was not the expected GeoJSON shape.
    #[error("Failed to decode feed response: {message}")]
    Decode {
        /// The decoder's error message.
        message: String,
    },
}

/// Detail lookup precondition violation.
///
/// Indices are only ever produced by the card renderer from the current
/// store, so this should be unreachable through normal flow; it is a
/// checked error rather than a panic so the UI can never be taken down by
/// a stale index.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetailError {
    /// The requested index is outside the current event store.
    #[error("Event index {index} out of range (store holds {len} events)")]
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of events currently in the store.
        len: usize,
    },
}
