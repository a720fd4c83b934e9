//! Search form validation.
//!
//! Pure verdict production: given the current field values and each
//! numeric field's declared bounds, produce [`Verdict`] with one message
//! per offending field plus up to two cross-field messages. Displaying the
//! messages is the form renderer's job; this module never touches UI
//! state and never panics.

use crate::search::fields::{FieldName, SearchFields};

/// Shared message for the location triple rule.
pub const LOCATION_ERROR: &str =
    "Latitude, longitude, and max radius must be provided together.";

/// Shared message for both min/max ordering rules.
pub const RANGE_ERROR: &str = "Minimum values must be less than maximum values.";

// ===== Verdict =====

/// The validator's outcome: pass, or fail with explanatory messages.
///
/// Per-field messages are keyed by field order. The two cross-field rules
/// each have their own display slot; the magnitude and depth ordering
/// checks share one slot (the depth check overwrites the magnitude check
/// when both fire; invisible in practice since the message text is
/// identical).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verdict {
    field_errors: [Option<String>; 9],
    /// Location-completeness error, shared across the triple.
    pub location_error: Option<&'static str>,
    /// Range-ordering error, shared between the magnitude and depth pairs.
    pub range_error: Option<&'static str>,
}

impl Verdict {
    /// True when no rule fired.
    pub fn is_valid(&self) -> bool {
        self.location_error.is_none()
            && self.range_error.is_none()
            && self.field_errors.iter().all(Option::is_none)
    }

    /// The bound-violation message for one field, if any.
    pub fn field_error(&self, field: FieldName) -> Option<&str> {
        self.field_errors[field.index()].as_deref()
    }

    fn set_field_error(&mut self, field: FieldName, message: String) {
        self.field_errors[field.index()] = Some(message);
    }
}

// ===== Validation =====

/// Validate the search field set.
///
/// Rules, in order:
/// 1. Per-field bounds: a non-empty numeric value below the declared
///    minimum or above the declared maximum is flagged. The minimum check
///    takes precedence; a field is never flagged for both.
/// 2. Location completeness: latitude, longitude, and max radius must be
///    all empty or all non-empty (a partial triple makes the feed return
///    a server error).
/// 3. Range ordering: min >= max for the magnitude pair or the depth pair
///    (both present) fires the shared range message.
///
/// Empty fields are exempt from every check. Text that does not parse as
/// a number is exempt from bound checks and passed through for the feed
/// to reject.
pub fn validate(fields: &SearchFields) -> Verdict {
    let mut verdict = Verdict::default();

    for field in FieldName::ALL {
        let bounds = field.bounds();
        let Some(value) = fields.parsed(field) else {
            continue;
        };
        if let Some(min) = bounds.min {
            if value < min {
                verdict.set_field_error(
                    field,
                    format!(
                        "Your input must be greater than the minimum accepted value, {min}."
                    ),
                );
                continue;
            }
        }
        if let Some(max) = bounds.max {
            if value > max {
                verdict.set_field_error(
                    field,
                    format!(
                        "Your input must be less than the maximum accepted value, {max}."
                    ),
                );
            }
        }
    }

    let lat = fields.is_present(FieldName::Latitude);
    let lon = fields.is_present(FieldName::Longitude);
    let radius = fields.is_present(FieldName::MaxRadiusKm);
    if (lat || lon || radius) && !(lat && lon && radius) {
        verdict.location_error = Some(LOCATION_ERROR);
    }

    if let (Some(min), Some(max)) = (
        fields.parsed(FieldName::MinMagnitude),
        fields.parsed(FieldName::MaxMagnitude),
    ) {
        if min >= max {
            verdict.range_error = Some(RANGE_ERROR);
        }
    }
    if let (Some(min), Some(max)) = (
        fields.parsed(FieldName::MinDepth),
        fields.parsed(FieldName::MaxDepth),
    ) {
        if min >= max {
            // Shares the magnitude pair's slot; overwrites it when both fire.
            verdict.range_error = Some(RANGE_ERROR);
        }
    }

    verdict
}

// ===== Tests =====

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
