//! Search form overlay state.
//!
//! Tracks visibility, which row has focus (the nine fields plus the sort
//! selector), the raw field text being edited, and the last validation
//! verdict for error-line display. Submission re-validates from scratch,
//! clearing previous error lines first, and yields a query string only
//! for a valid, non-empty form.

use crate::search::{build_query, validate, FieldName, SearchFields, Verdict};

/// Row count: nine fields plus the sort selector.
const ROWS: usize = FieldName::ALL.len() + 1;

// ===== SubmitOutcome =====

/// Result of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; error lines are in the verdict. No request.
    Invalid,
    /// Every field was empty. No request.
    AllEmpty,
    /// A query string to fetch.
    Query(String),
}

// ===== SearchFormState =====

/// UI state of the search form overlay.
#[derive(Debug, Clone, Default)]
pub struct SearchFormState {
    /// Whether the overlay is shown.
    pub visible: bool,
    /// The field values and sort method being edited.
    pub fields: SearchFields,
    /// Focused row: `0..9` are the fields in declared order, `9` is the
    /// sort selector.
    pub focused: usize,
    /// Verdict from the most recent submission; drives error lines.
    pub verdict: Verdict,
}

impl SearchFormState {
    /// Closed form with empty fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the overlay (field values persist across open/close).
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Close the overlay.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// The field under focus, or `None` when the sort selector is focused.
    pub fn focused_field(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.focused).copied()
    }

    /// Move focus to the next row (wraps past the sort selector).
    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % ROWS;
    }

    /// Move focus to the previous row (wraps).
    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + ROWS - 1) % ROWS;
    }

    /// Type one character into the focused field. On the sort selector a
    /// space cycles the method; other characters are ignored there.
    pub fn insert_char(&mut self, c: char) {
        match self.focused_field() {
            Some(field) => {
                if !c.is_control() {
                    self.fields.get_mut(field).push(c);
                }
            }
            None => {
                if c == ' ' {
                    self.fields.sort = self.fields.sort.next();
                }
            }
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            self.fields.get_mut(field).pop();
        }
    }

    /// Clear every field and error line.
    pub fn clear(&mut self) {
        let sort = self.fields.sort;
        self.fields = SearchFields::new();
        self.fields.sort = sort;
        self.verdict = Verdict::default();
    }

    /// Validate and, on success, build the query string.
    ///
    /// Previous error lines are cleared before validation runs, so stale
    /// messages never survive a resubmission. An all-empty valid form is
    /// a no-op: the caller must not issue a request.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.verdict = validate(&self.fields);
        if !self.verdict.is_valid() {
            return SubmitOutcome::Invalid;
        }
        match build_query(&self.fields) {
            Some(query) => SubmitOutcome::Query(query),
            None => SubmitOutcome::AllEmpty,
        }
    }
}

// ===== Tests =====
