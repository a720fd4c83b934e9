//! Seismic event records and feed response deserialization.
//!
//! The feed returns GeoJSON: a top-level object with a `features` array.
//! Each feature carries scalar properties (`mag`, `place`, `time`, `cdi`,
//! `tsunami`) and a `geometry.coordinates` triple of
//! `[longitude, latitude, depth_km]`. Numeric properties may arrive as a
//! number, `null`, or an empty string depending on the event, so
//! deserialization is lenient for those fields.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

// ===== Event =====

/// One reported seismic event, taken verbatim from the feed.
///
/// Events have no persistent identifier in this design. They are addressed
/// by their index in the event store, and those indices are only stable
/// until the next fetch completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Magnitude. Absent when the feed sends `null` or an empty value.
    pub magnitude: Option<f64>,
    /// Depth in kilometers (third coordinate of the location).
    pub depth_km: f64,
    /// Latitude in degrees (second coordinate).
    pub latitude: f64,
    /// Longitude in degrees (first coordinate).
    pub longitude: f64,
    /// Free-text location description.
    pub place: String,
    /// Event time as epoch milliseconds. Converted to display text only
    /// at render time, never stored as derived state.
    pub time_millis: i64,
    /// Community Determined Intensity (felt-report code). Absent means no
    /// felt reports were filed.
    pub felt_report: Option<f64>,
    /// Tsunami flag, 0 or 1.
    pub tsunami: u8,
}

impl Event {
    /// Event time as a UTC timestamp.
    ///
    /// Millisecond values outside chrono's representable range fall back
    /// to the Unix epoch rather than panicking.
    pub fn time_utc(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.time_millis)
            .single()
            .unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Human-readable UTC date, matching the `toUTCString` shape used by
    /// the cards: `Sun, 09 Sep 2001 01:46:40 GMT`.
    pub fn time_display(&self) -> String {
        self.time_utc().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
    }
}

impl From<Feature> for Event {
    fn from(feature: Feature) -> Self {
        let [longitude, latitude, depth_km] = feature.geometry.coordinates;
        Self {
            magnitude: feature.properties.mag,
            depth_km,
            latitude,
            longitude,
            place: feature.properties.place.unwrap_or_default(),
            time_millis: feature.properties.time,
            felt_report: feature.properties.cdi,
            tsunami: feature.properties.tsunami,
        }
    }
}

// ===== Feed response =====

/// Top-level GeoJSON response from the feed.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    /// The reported events, in feed order.
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeedResponse {
    /// Convert the response into event records, preserving feed order.
    pub fn into_events(self) -> Vec<Event> {
        self.features.into_iter().map(Event::from).collect()
    }
}

/// One GeoJSON feature: properties plus a coordinate triple.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Scalar event properties.
    pub properties: Properties,
    /// Event location.
    pub geometry: Geometry,
}

/// Scalar properties of one feature.
#[derive(Debug, Clone, Deserialize)]
pub struct Properties {
    /// Magnitude; `null` or `""` in the feed maps to `None`.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub mag: Option<f64>,
    /// Location description; occasionally `null` in the feed.
    #[serde(default)]
    pub place: Option<String>,
    /// Epoch milliseconds.
    pub time: i64,
    /// Felt-report code; `null` or `""` maps to `None`.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cdi: Option<f64>,
    /// Tsunami flag, 0 or 1.
    #[serde(default)]
    pub tsunami: u8,
}

/// Feature geometry. Coordinates are `[longitude, latitude, depth_km]`.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// The coordinate triple.
    pub coordinates: [f64; 3],
}

/// Deserialize a field that may be a number, a numeric string, `""`, or
/// `null` into `Option<f64>`.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => None,
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        Some(_) => None,
    })
}

// ===== Tests =====
