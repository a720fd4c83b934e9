//! Domain actions produced by keyboard input.
//!
//! Keyboard events are translated to these actions by the key bindings
//! table; the event loop dispatches on the action, never on raw keys.
//! Text entry inside the search form bypasses this table (raw characters
//! go straight to the focused field).

/// A user-intent action, decoupled from the physical key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application.
    Quit,
    /// Switch to the next tab (wraps).
    NextTab,
    /// Switch to the previous tab (wraps).
    PrevTab,
    /// Jump to a tab by 1-indexed position.
    SelectTab(usize),
    /// Move the card selection up.
    SelectUp,
    /// Move the card selection down.
    SelectDown,
    /// Jump selection back to the first card.
    SelectFirst,
    /// Open the search form overlay.
    OpenSearch,
    /// Open the detail overlay for the selected card.
    OpenDetail,
    /// Re-issue the last feed query after a failure.
    Retry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_action_is_copy_and_comparable() {
        let action = KeyAction::SelectTab(2);
        let copied = action;
        assert_eq!(action, copied);
        assert_ne!(action, KeyAction::SelectTab(3));
    }
}
