//! The search field set: nine optional scalar inputs plus a sort method.
//!
//! Field order is fixed and significant: the query builder appends
//! parameters in this declared order so that identical form contents always
//! produce byte-identical query strings.

use std::fmt;

// ===== FieldName =====

/// The nine named search fields, in declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    /// Lower magnitude cutoff.
    MinMagnitude,
    /// Upper magnitude cutoff.
    MaxMagnitude,
    /// Lower depth cutoff (km).
    MinDepth,
    /// Upper depth cutoff (km).
    MaxDepth,
    /// Search-circle center latitude.
    Latitude,
    /// Search-circle center longitude.
    Longitude,
    /// Search-circle radius (km).
    MaxRadiusKm,
    /// Start of the time range (date text, passed through verbatim).
    StartTime,
    /// End of the time range (date text, passed through verbatim).
    EndTime,
}

impl FieldName {
    /// All fields in declared order. Query parameters are appended in
    /// exactly this order.
    pub const ALL: [FieldName; 9] = [
        FieldName::MinMagnitude,
        FieldName::MaxMagnitude,
        FieldName::MinDepth,
        FieldName::MaxDepth,
        FieldName::Latitude,
        FieldName::Longitude,
        FieldName::MaxRadiusKm,
        FieldName::StartTime,
        FieldName::EndTime,
    ];

    /// Position of this field in the declared order.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    /// The feed's query-parameter key for this field.
    pub fn query_key(self) -> &'static str {
        match self {
            FieldName::MinMagnitude => "minmagnitude",
            FieldName::MaxMagnitude => "maxmagnitude",
            FieldName::MinDepth => "mindepth",
            FieldName::MaxDepth => "maxdepth",
            FieldName::Latitude => "latitude",
            FieldName::Longitude => "longitude",
            FieldName::MaxRadiusKm => "maxradiuskm",
            FieldName::StartTime => "starttime",
            FieldName::EndTime => "endtime",
        }
    }

    /// Human-readable label for the search form.
    pub fn label(self) -> &'static str {
        match self {
            FieldName::MinMagnitude => "Min magnitude",
            FieldName::MaxMagnitude => "Max magnitude",
            FieldName::MinDepth => "Min depth (km)",
            FieldName::MaxDepth => "Max depth (km)",
            FieldName::Latitude => "Latitude",
            FieldName::Longitude => "Longitude",
            FieldName::MaxRadiusKm => "Max radius (km)",
            FieldName::StartTime => "Start time",
            FieldName::EndTime => "End time",
        }
    }

    /// Declared numeric bounds for this field; the validator's per-field
    /// checks use these. Time fields carry no numeric bounds.
    pub fn bounds(self) -> FieldBounds {
        match self {
            FieldName::MinMagnitude | FieldName::MaxMagnitude => FieldBounds {
                min: Some(-1.0),
                max: Some(10.0),
            },
            FieldName::MinDepth | FieldName::MaxDepth => FieldBounds {
                min: Some(-100.0),
                max: Some(1000.0),
            },
            FieldName::Latitude => FieldBounds {
                min: Some(-90.0),
                max: Some(90.0),
            },
            FieldName::Longitude => FieldBounds {
                min: Some(-180.0),
                max: Some(180.0),
            },
            FieldName::MaxRadiusKm => FieldBounds {
                min: Some(0.0),
                max: Some(20001.6),
            },
            FieldName::StartTime | FieldName::EndTime => FieldBounds {
                min: None,
                max: None,
            },
        }
    }
}

/// Declared `[min, max]` bounds for a numeric field. An absent bound is
/// unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldBounds {
    /// Minimum accepted value, inclusive.
    pub min: Option<f64>,
    /// Maximum accepted value, inclusive.
    pub max: Option<f64>,
}

// ===== SortMethod =====

/// Result ordering requested from the feed. Closed set; the feed rejects
/// anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMethod {
    /// Newest first (feed default).
    #[default]
    Time,
    /// Oldest first.
    TimeAsc,
    /// Largest magnitude first.
    Magnitude,
    /// Smallest magnitude first.
    MagnitudeAsc,
}

impl SortMethod {
    /// All sort methods, in the order the form cycles through them.
    pub const ALL: [SortMethod; 4] = [
        SortMethod::Time,
        SortMethod::TimeAsc,
        SortMethod::Magnitude,
        SortMethod::MagnitudeAsc,
    ];

    /// The feed's `orderby` value.
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortMethod::Time => "time",
            SortMethod::TimeAsc => "time-asc",
            SortMethod::Magnitude => "magnitude",
            SortMethod::MagnitudeAsc => "magnitude-asc",
        }
    }

    /// The next method in the cycle (wraps).
    pub fn next(self) -> SortMethod {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

// ===== SearchFields =====

/// Current values of the search field set.
///
/// Each of the nine fields holds raw text; empty means absent. The sort
/// method is non-optional and always has a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFields {
    values: [String; 9],
    /// Requested result ordering.
    pub sort: SortMethod,
}

impl SearchFields {
    /// A fresh, all-empty field set with the default sort method.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text of one field. Empty string means absent.
    pub fn get(&self, field: FieldName) -> &str {
        &self.values[field.index()]
    }

    /// Replace one field's raw text.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Mutable access to one field's raw text (for in-place editing).
    pub fn get_mut(&mut self, field: FieldName) -> &mut String {
        &mut self.values[field.index()]
    }

    /// True when the field holds a non-empty value after trimming.
    pub fn is_present(&self, field: FieldName) -> bool {
        !self.get(field).trim().is_empty()
    }

    /// True when every field is empty. An all-empty form never issues a
    /// request.
    pub fn all_empty(&self) -> bool {
        FieldName::ALL.iter().all(|f| !self.is_present(*f))
    }

    /// Parse one field as a number. Absent or unparseable text yields
    /// `None`; unparseable text is exempt from the validator's bound
    /// checks and left for the feed to reject.
    pub fn parsed(&self, field: FieldName) -> Option<f64> {
        let raw = self.get(field).trim();
        if raw.is_empty() {
            None
        } else {
            raw.parse().ok()
        }
    }
}

// ===== Tests =====
