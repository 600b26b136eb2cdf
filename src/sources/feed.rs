//! Curated-feed fetching and parsing.
//!
//! The feed is loaded exactly once per run: resolve the configured source,
//! fetch it (cache-busted for remote sources), and parse the body as a JSON
//! array of [`ContentItem`]. All failure causes collapse into one
//! "data unavailable" outcome for the UI; the distinction between network,
//! status, and parse failures exists only in the log.

use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue};
use tracing::{info, warn};

use crate::state::ContentItem;

type Result<T> = super::Result<T>;

/// Where the feed document lives. Remote sources are fetched over HTTP;
/// local paths are read directly (development convenience).
#[derive(Clone, Debug)]
pub enum FeedSource {
    /// HTTP(S) URL of the feed document.
    Remote(String),
    /// Filesystem path of the feed document.
    Local(PathBuf),
}

impl std::fmt::Display for FeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedSource::Remote(url) => write!(f, "{url}"),
            FeedSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Shared HTTP client with connect/read timeouts. A hung request degrades
/// into the single load error instead of an indefinite spinner.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(15))
        .timeout(Duration::from_secs(30))
        .user_agent(format!("gemfeed/{}", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()
        .expect("Failed to create HTTP client")
});

/// What: Append a cache-defeating timestamp parameter to a feed URL.
///
/// Inputs:
/// - `url`: Feed URL as configured.
/// - `millis`: Current time in milliseconds.
///
/// Output:
/// - The URL with `_={millis}` appended, using `?` or `&` depending on
///   whether the URL already carries a query string.
#[must_use]
pub fn cache_busted(url: &str, millis: i64) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}_={millis}")
}

/// What: Fetch and parse the feed from the given source.
///
/// Inputs:
/// - `source`: Resolved feed location (remote URL or local path).
///
/// Output:
/// - `Ok(Vec<ContentItem>)` in feed order on success.
///
/// # Errors
/// - Network failure, non-success HTTP status, unreadable local file, or a
///   body that does not parse as a JSON array of items. No retry; a failed
///   load is terminal for this run.
pub async fn fetch_feed(source: &FeedSource) -> Result<Vec<ContentItem>> {
    let body = match source {
        FeedSource::Remote(url) => {
            let busted = cache_busted(url, chrono::Utc::now().timestamp_millis());
            let res = HTTP_CLIENT.get(&busted).send().await.map_err(|e| {
                warn!(error = %e, url = %url, "feed request failed");
                e
            })?;
            let status = res.status();
            if !status.is_success() {
                warn!(%status, url = %url, "feed request returned non-success status");
                return Err(format!("feed request failed: HTTP {status}").into());
            }
            let body = res.text().await?;
            info!(bytes = body.len(), url = %url, "fetched feed");
            body
        }
        FeedSource::Local(path) => {
            let body = std::fs::read_to_string(path).map_err(|e| {
                warn!(error = %e, path = %path.display(), "failed to read feed file");
                e
            })?;
            info!(bytes = body.len(), path = %path.display(), "read feed file");
            body
        }
    };
    parse_feed(&body)
}

/// What: Parse a feed document body into the item sequence.
///
/// Inputs:
/// - `body`: Raw JSON text.
///
/// Output:
/// - Items in document order.
///
/// # Errors
/// - Any deserialization failure fails the whole load; a malformed item is
///   not individually skipped.
pub fn parse_feed(body: &str) -> Result<Vec<ContentItem>> {
    let items: Vec<ContentItem> = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "feed body did not parse as an item array");
        e
    })?;
    info!(count = items.len(), "parsed feed");
    Ok(items)
}
