//! quakewatch
//!
//! TUI browser for the USGS FDSN earthquake event feed: fetches recent
//! seismic events, caches them in an in-memory store, and renders them
//! into tab-scoped views with a validated search form and a per-event
//! detail overlay.
//!
//! Layout follows a pure-core / impure-shell split: `search` and `state`
//! are pure and fully testable without a terminal or network; `feed` and
//! `view` are the shell.

pub mod config;
pub mod feed;
pub mod logging;
pub mod model;
pub mod search;
pub mod state;
pub mod view;
