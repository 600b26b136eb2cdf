//! Application state module.
//!
//! Splits the state into the central [`AppState`] container and the plain
//! value types shared with the loader and renderers, re-exported under
//! `crate::state::*`.

pub mod app_state;
pub mod types;

pub use app_state::{AppState, HitRect};
pub use types::{ContentItem, FeedEvent, LoadStatus};
