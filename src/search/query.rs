//! Feed query-string construction.
//!
//! Builds the `/query?...` path appended to the feed base URL. The
//! builder only runs on a form that already passed validation; it appends
//! one `&name=value` pair per non-empty field in the declared field order,
//! then the fixed result limit and the sort method. An all-empty form is
//! a no-op: no query string, no request.

use crate::search::fields::{FieldName, SearchFields};

/// Fixed base path and format marker for every query.
pub const QUERY_BASE: &str = "/query?format=geojson";

/// Fixed result-count limit. There is no pagination; the feed is asked
/// for at most this many events.
pub const RESULT_LIMIT: u32 = 15;

/// The hard-coded startup query, issued unconditionally on load before
/// any user search. Not produced by [`build_query`].
pub const DEFAULT_QUERY: &str =
    "/query?format=geojson&minmagnitude=4.5&limit=15&includeallmagnitudes";

/// Build the startup query for a configurable minimum magnitude.
///
/// `startup_query(4.5)` reproduces [`DEFAULT_QUERY`] exactly.
pub fn startup_query(min_magnitude: f64) -> String {
    format!("{QUERY_BASE}&minmagnitude={min_magnitude}&limit={RESULT_LIMIT}&includeallmagnitudes")
}

/// Build a query string from the search field set.
///
/// Returns `None` when every field is empty; the caller must not issue a
/// request in that case. Otherwise the string contains exactly one
/// `&name=value` pair per non-empty field, in declared order, followed by
/// `&limit=15&orderby=<sort>`.
pub fn build_query(fields: &SearchFields) -> Option<String> {
    let mut query = String::from(QUERY_BASE);
    let mut any_appended = false;

    for field in FieldName::ALL {
        if fields.is_present(field) {
            any_appended = true;
            query.push('&');
            query.push_str(field.query_key());
            query.push('=');
            query.push_str(fields.get(field).trim());
        }
    }

    if !any_appended {
        return None;
    }

    query.push_str(&format!("&limit={RESULT_LIMIT}&orderby={}", fields.sort));
    Some(query)
}

// ===== Tests =====

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
