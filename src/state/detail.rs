//! Detail presentation: one event, extracted into labeled display slots.
//!
//! Pure read of the event store at a card's index. The store is never
//! mutated here; out-of-range indices are a checked error.

use crate::model::{DetailError, Event};

/// Literal shown when an event has no felt-report code.
pub const NO_FELT_REPORTS: &str = "No reports of a felt earthquake.";

// ===== DetailView =====

/// The fixed record of display strings for the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Magnitude text; empty when the feed sent none.
    pub magnitude: String,
    /// Depth value text (unit rendered separately).
    pub depth: String,
    /// Unit label for depth/radius display.
    pub depth_unit: &'static str,
    /// Felt-report line: the code when present, otherwise the
    /// [`NO_FELT_REPORTS`] literal.
    pub felt_report: String,
    /// Latitude text.
    pub latitude: String,
    /// Longitude text.
    pub longitude: String,
    /// Location description.
    pub place: String,
    /// Tsunami flag text ("0" or "1").
    pub tsunami: String,
}

/// Present the event at `index` in the store.
///
/// `units_metric` selects the depth unit label only; the value itself is
/// never converted (the feed reports kilometers).
pub fn present(
    events: &[Event],
    index: usize,
    units_metric: bool,
) -> Result<DetailView, DetailError> {
    let event = events.get(index).ok_or(DetailError::IndexOutOfRange {
        index,
        len: events.len(),
    })?;

    Ok(DetailView {
        magnitude: event.magnitude.map(|m| m.to_string()).unwrap_or_default(),
        depth: event.depth_km.to_string(),
        depth_unit: if units_metric { "km" } else { "mi" },
        felt_report: match event.felt_report {
            Some(code) => code.to_string(),
            None => NO_FELT_REPORTS.to_string(),
        },
        latitude: event.latitude.to_string(),
        longitude: event.longitude.to_string(),
        place: event.place.clone(),
        tsunami: event.tsunami.to_string(),
    })
}

// ===== Tests =====

#[cfg(test)]
#[path = "detail_tests.rs"]
mod tests;
