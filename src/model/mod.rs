//! Domain model: event records, feed response shapes, errors, key actions.

pub mod error;
pub mod event;
pub mod key_action;

pub use error::{AppError, DetailError, FeedError};
pub use event::{Event, FeedResponse};
pub use key_action::KeyAction;
