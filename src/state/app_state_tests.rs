//! Tests for AppState transitions: the fetch pipeline state machine,
//! stale-outcome discard, tab navigation, and the detail overlay.

use super::*;
use crate::model::FeedError;
use crate::state::tab::{TabContent, PLACEHOLDER};

// ===== Test Helpers =====

fn event(mag: f64, place: &str) -> Event {
    Event {
        magnitude: Some(mag),
        depth_km: 8.3,
        latitude: 35.2,
        longitude: -120.1,
        place: place.to_string(),
        time_millis: 1_000_000_000_000,
        felt_report: None,
        tsunami: 0,
    }
}

fn ok_outcome(seq: u64, events: Vec<Event>) -> FetchOutcome {
    FetchOutcome {
        seq,
        result: Ok(events),
    }
}

fn err_outcome(seq: u64) -> FetchOutcome {
    FetchOutcome {
        seq,
        result: Err(FeedError::Status { status: 500 }),
    }
}

fn populated_state() -> AppState {
    let mut state = AppState::new(true);
    state.begin_fetch("/query?format=geojson&minmagnitude=4.5", 0);
    state.apply_outcome(ok_outcome(0, vec![event(5.2, "A"), event(6.1, "B")]));
    state
}

// ===== Fetch pipeline =====

#[test]
fn initial_state_is_empty() {
    let state = AppState::new(true);
    assert_eq!(state.phase, FetchPhase::Empty);
    assert!(state.events().is_empty());
    assert_eq!(state.active_tab, Tab::Home);
}

#[test]
fn begin_fetch_enters_loading() {
    let mut state = AppState::new(true);
    state.begin_fetch("/query?format=geojson&minmagnitude=4.5", 0);
    assert!(state.is_loading());
    assert_eq!(
        state.last_query(),
        Some("/query?format=geojson&minmagnitude=4.5")
    );
}

#[test]
fn non_empty_result_populates_store_and_rebuilds_tabs() {
    let state = populated_state();
    assert_eq!(state.phase, FetchPhase::Populated);
    assert_eq!(state.events().len(), 2);
    assert_eq!(state.tabs.home_cards().len(), 2);
    assert_eq!(state.tabs.get(Tab::About), &TabContent::Placeholder(PLACEHOLDER));
}

#[test]
fn completion_forces_active_tab_back_to_home() {
    let mut state = populated_state();
    state.select_tab(Tab::About);
    state.begin_fetch("/query?format=geojson&minmagnitude=6", 1);
    state.apply_outcome(ok_outcome(1, vec![event(7.0, "C")]));
    assert_eq!(state.active_tab, Tab::Home);
}

#[test]
fn store_is_replaced_verbatim_in_feed_order() {
    let mut state = populated_state();
    state.begin_fetch("/query?format=geojson&minmagnitude=1", 1);
    state.apply_outcome(ok_outcome(1, vec![event(1.0, "Z"), event(9.9, "Y")]));
    let places: Vec<&str> = state.events().iter().map(|e| e.place.as_str()).collect();
    assert_eq!(places, ["Z", "Y"]);
}

#[test]
fn empty_result_leaves_store_empty_and_cache_untouched() {
    let mut state = populated_state();
    let cache_before = state.tabs.clone();
    state.begin_fetch("/query?format=geojson&minmagnitude=9.9", 1);
    state.apply_outcome(ok_outcome(1, Vec::new()));
    assert_eq!(state.phase, FetchPhase::EmptyResult);
    assert!(state.events().is_empty());
    // Tab content is not rebuilt on an empty result.
    assert_eq!(state.tabs, cache_before);
}

#[test]
fn failure_keeps_previous_store_and_cache() {
    let mut state = populated_state();
    let cache_before = state.tabs.clone();
    state.begin_fetch("/query?format=geojson&minmagnitude=2", 1);
    state.apply_outcome(err_outcome(1));
    assert_eq!(state.events().len(), 2);
    assert_eq!(state.tabs, cache_before);
    match &state.phase {
        FetchPhase::Failed { message } => assert!(message.contains("500")),
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(!state.is_loading());
}

#[test]
fn retry_query_is_the_last_issued_query() {
    let mut state = AppState::new(true);
    state.begin_fetch("/query?format=geojson&minmagnitude=2", 0);
    state.apply_outcome(err_outcome(0));
    assert_eq!(state.last_query(), Some("/query?format=geojson&minmagnitude=2"));
}

// ===== Stale-outcome discard =====

#[test]
fn stale_outcome_is_discarded() {
    let mut state = AppState::new(true);
    state.begin_fetch("/query?format=geojson&minmagnitude=4", 0);
    state.begin_fetch("/query?format=geojson&minmagnitude=6", 1);

    // The slow first response completes after the second was issued.
    let applied = state.apply_outcome(ok_outcome(0, vec![event(4.2, "stale")]));
    assert!(!applied);
    assert!(state.events().is_empty());
    assert!(state.is_loading());

    // The current request's outcome still applies.
    let applied = state.apply_outcome(ok_outcome(1, vec![event(6.5, "fresh")]));
    assert!(applied);
    assert_eq!(state.events()[0].place, "fresh");
}

#[test]
fn outcome_after_completion_is_discarded() {
    let mut state = populated_state();
    let applied = state.apply_outcome(ok_outcome(0, vec![event(1.1, "dup")]));
    assert!(!applied);
    assert_eq!(state.events().len(), 2);
}

// ===== Tab navigation =====

#[test]
fn tab_switching_never_rebuilds_cached_content() {
    let mut state = populated_state();
    let cache_before = state.tabs.clone();
    state.select_tab(Tab::Timeline);
    state.select_tab(Tab::VisualMap);
    state.select_tab(Tab::Home);
    state.next_tab();
    state.prev_tab();
    assert_eq!(state.tabs, cache_before);
}

#[test]
fn reselecting_active_tab_scrolls_to_top() {
    let mut state = populated_state();
    state.scroll_offset = 5;
    state.select_tab(Tab::Home);
    assert_eq!(state.scroll_offset, 0);
    assert_eq!(state.active_tab, Tab::Home);
}

#[test]
fn next_and_prev_tab_wrap() {
    let mut state = AppState::new(true);
    state.select_tab(Tab::About);
    state.next_tab();
    assert_eq!(state.active_tab, Tab::Home);
    state.prev_tab();
    assert_eq!(state.active_tab, Tab::About);
}

// ===== Card selection =====

#[test]
fn card_selection_clamps_to_store_bounds() {
    let mut state = populated_state();
    state.select_next_card();
    state.select_next_card();
    state.select_next_card();
    assert_eq!(state.selected_card, 1);
    state.select_prev_card();
    state.select_prev_card();
    state.select_prev_card();
    assert_eq!(state.selected_card, 0);
}

#[test]
fn selection_resets_on_new_data() {
    let mut state = populated_state();
    state.select_next_card();
    state.begin_fetch("/query?format=geojson&minmagnitude=3", 1);
    state.apply_outcome(ok_outcome(1, vec![event(3.3, "C")]));
    assert_eq!(state.selected_card, 0);
}

// ===== Detail overlay =====

#[test]
fn open_detail_reads_selected_card() {
    let mut state = populated_state();
    state.select_next_card();
    state.open_detail().expect("selection is in range");
    let view = state.detail.as_ref().expect("detail open");
    assert_eq!(view.place, "B");
    assert_eq!(view.magnitude, "6.1");
    state.close_detail();
    assert!(state.detail.is_none());
}

#[test]
fn open_detail_is_a_no_op_outside_home_or_when_empty() {
    let mut state = populated_state();
    state.select_tab(Tab::About);
    state.open_detail().expect("no-op is ok");
    assert!(state.detail.is_none());

    let mut empty = AppState::new(true);
    empty.open_detail().expect("no-op is ok");
    assert!(empty.detail.is_none());
}
