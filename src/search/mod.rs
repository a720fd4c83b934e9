//! Search form core: field set, validation, and query construction.
//!
//! All pure. The form UI state (focus, overlay visibility) lives in
//! `state::form`; this module only knows field values and rules.

pub mod fields;
pub mod query;
pub mod validate;

pub use fields::{FieldBounds, FieldName, SearchFields, SortMethod};
pub use query::{build_query, startup_query, DEFAULT_QUERY, QUERY_BASE, RESULT_LIMIT};
pub use validate::{validate, Verdict, LOCATION_ERROR, RANGE_ERROR};
