//! Data-source layer: the one-shot feed loader.

pub mod feed;

pub use feed::{FeedSource, fetch_feed};

/// Result type shared by source fetch operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
