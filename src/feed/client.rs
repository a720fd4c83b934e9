//! HTTP client for the event feed.
//!
//! The UI loop is single-threaded; each request runs on its own
//! background thread and delivers a [`FetchOutcome`] over an mpsc channel
//! that the loop drains between input polls. Outcomes carry the request's
//! sequence number so the state layer can discard stale responses when a
//! later request overtakes an earlier one (the feed offers no
//! cancellation, so overtaking is the only ordering discipline).

use std::sync::mpsc::Sender;
use std::time::Duration;

use tracing::{debug, warn};

use crate::model::{Event, FeedError, FeedResponse};

/// Request timeout. The feed normally answers well under a second; a
/// stuck request must not hold the loading state forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ===== FetchOutcome =====

/// Completion of one feed request.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Sequence number of the request that produced this outcome.
    pub seq: u64,
    /// The fetched events in feed order, or the failure.
    pub result: Result<Vec<Event>, FeedError>,
}

// ===== FeedClient =====

/// Issues feed requests and tags them with monotonically increasing
/// sequence numbers.
///
/// Cloning the inner reqwest client is cheap (it is reference-counted),
/// so each request thread gets its own handle.
#[derive(Debug)]
pub struct FeedClient {
    base_url: String,
    client: reqwest::blocking::Client,
    tx: Sender<FetchOutcome>,
    next_seq: u64,
}

impl FeedClient {
    /// Create a client for the given feed base URL. Outcomes are sent on
    /// `tx`.
    pub fn new(base_url: impl Into<String>, tx: Sender<FetchOutcome>) -> Result<Self, FeedError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
            tx,
            next_seq: 0,
        })
    }

    /// Issue a fetch for `query` (a path like `/query?format=geojson&...`
    /// appended to the base URL). Returns the request's sequence number;
    /// the caller records it as the current request and ignores outcomes
    /// bearing any other number.
    pub fn fetch(&mut self, query: &str) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;

        let url = format!("{}{}", self.base_url, query);
        let client = self.client.clone();
        let tx = self.tx.clone();
        debug!(seq, %url, "issuing feed request");

        std::thread::spawn(move || {
            let result = fetch_blocking(&client, &url);
            if let Err(err) = &result {
                warn!(seq, %err, "feed request failed");
            }
            // The receiver is dropped on shutdown; a dead channel just
            // means nobody is interested in this outcome any more.
            let _ = tx.send(FetchOutcome { seq, result });
        });

        seq
    }
}

/// Perform one blocking GET and decode the GeoJSON body.
fn fetch_blocking(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<Vec<Event>, FeedError> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status {
            status: status.as_u16(),
        });
    }
    let body = response.text()?;
    let feed: FeedResponse = serde_json::from_str(&body).map_err(|err| FeedError::Decode {
        message: err.to_string(),
    })?;
    Ok(feed.into_events())
}

// ===== Tests =====
