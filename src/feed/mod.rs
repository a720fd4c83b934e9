//! Outbound HTTP: the event feed client (impure shell).

pub mod client;

pub use client::{FeedClient, FetchOutcome};
