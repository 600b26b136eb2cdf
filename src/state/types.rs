//! Core value types used by gemfeed state.

/// A single curated content entry as supplied by the feed document.
///
/// Every textual field is optional except [`link`](ContentItem::link) and
/// [`source`](ContentItem::source); absent optional fields render as empty
/// and suppress their containing block (no summary paragraph, no quote
/// block, no critique panel).
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct ContentItem {
    /// Display title (base language).
    #[serde(default)]
    pub title: String,
    /// Chinese title variant, preferred over `title` for Chinese display
    /// when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_zh: Option<String>,
    /// English AI-generated summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_en: Option<String>,
    /// Chinese AI-generated summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_zh: Option<String>,
    /// Highlighted quotation (English).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_quote_en: Option<String>,
    /// Highlighted quotation (Chinese).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_quote_zh: Option<String>,
    /// Longer-form critical analysis (English).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critique_en: Option<String>,
    /// Longer-form critical analysis (Chinese).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critique_zh: Option<String>,
    /// Topic tags (base language).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Localized tag sequence, used as-is for Chinese display when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_zh: Option<Vec<String>>,
    /// Origin label (publication or site name). Assumed present.
    pub source: String,
    /// Display date string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Target URL for the item's title. Assumed present.
    pub link: String,
}

/// Lifecycle of the one-shot feed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The fetch worker has not reported back yet.
    Loading,
    /// Items are available (possibly zero of them).
    Ready,
    /// The load failed; the localized unavailable message is shown.
    Failed,
}

/// Message sent from the feed worker to the runtime loop.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// The feed was fetched and parsed; payload is the item sequence.
    Loaded(Vec<ContentItem>),
    /// Network, status, or parse failure. Causes are collapsed; the
    /// distinction lives only in the log.
    Failed,
}

#[cfg(test)]
mod tests {
    use super::ContentItem;

    /// What: Feed items deserialize with absent optionals defaulting to empty.
    ///
    /// - Input: Minimal JSON object carrying only `source` and `link`
    /// - Output: Optional fields are `None`, `tags` empty, `title` empty
    #[test]
    fn content_item_minimal_deserializes() {
        let raw = r#"{"source":"S","link":"http://x"}"#;
        let item: ContentItem =
            serde_json::from_str(raw).expect("minimal item should deserialize");
        assert_eq!(item.source, "S");
        assert_eq!(item.link, "http://x");
        assert!(item.title.is_empty());
        assert!(item.title_zh.is_none());
        assert!(item.tags.is_empty());
        assert!(item.tags_zh.is_none());
        assert!(item.critique_en.is_none());
        assert!(item.date.is_none());
    }

    /// What: Unknown fields in the feed document are ignored.
    ///
    /// - Input: JSON with an extra field not in the model
    /// - Output: Deserialization succeeds and known fields are kept
    #[test]
    fn content_item_ignores_unknown_fields() {
        let raw = r#"{"source":"S","link":"http://x","title":"T","rating":5}"#;
        let item: ContentItem =
            serde_json::from_str(raw).expect("extra fields should be ignored");
        assert_eq!(item.title, "T");
    }
}
