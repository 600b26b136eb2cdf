//! Two-locale message catalog for gemfeed.
//!
//! The application ships exactly two display languages, Chinese (the default)
//! and English. Messages live in a static catalog keyed by dot-notation
//! strings; lookups that miss return the key itself so a missing entry is
//! visible in the UI instead of crashing.

/// Display language for all user-facing text and feed field selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    /// Chinese (default).
    Zh,
    /// English.
    En,
}

impl Lang {
    /// What: Parse a language code from user input (CLI flag or settings).
    ///
    /// Inputs:
    /// - `value`: Raw language token (e.g., "zh", "EN", "fr").
    ///
    /// Output:
    /// - `Lang::En` for an `en` token (case-insensitive); `Lang::Zh` for
    ///   everything else, including empty and unknown values.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("en") {
            Lang::En
        } else {
            Lang::Zh
        }
    }

    /// Return the canonical code for this language.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Lang::Zh => "zh",
            Lang::En => "en",
        }
    }

    /// Return the other supported language (used by the language-switch key).
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Lang::Zh => Lang::En,
            Lang::En => Lang::Zh,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Zh
    }
}

/// What: Look up a localized message for the given language.
///
/// Inputs:
/// - `lang`: Active display language.
/// - `key`: Dot-notation message key (e.g., "list.empty"); call sites use
///   literals, so the key is `'static`.
///
/// Output:
/// - The localized string, or the key itself when no entry exists.
#[must_use]
pub fn tr(lang: Lang, key: &'static str) -> &'static str {
    match (lang, key) {
        (Lang::Zh, "list.empty") => "暂无内容",
        (Lang::En, "list.empty") => "No content available",
        (Lang::Zh, "list.load_failed") => "数据加载失败",
        (Lang::En, "list.load_failed") => "Failed to load data",
        (Lang::Zh, "list.loading") => "加载中…",
        (Lang::En, "list.loading") => "Loading…",
        (Lang::Zh, "card.summary_label") => "AI总结：",
        (Lang::En, "card.summary_label") => "AI Summary: ",
        (Lang::Zh, "card.critique_expand") => "👓 深度分析",
        (Lang::En, "card.critique_expand") => "👓 Critical Analysis",
        (Lang::Zh, "card.critique_collapse") => "▲ 收起分析",
        (Lang::En, "card.critique_collapse") => "▲ Collapse Analysis",
        (Lang::Zh, "header.title") => "精选内容",
        (Lang::En, "header.title") => "Curated Gems",
        (Lang::Zh, "footer.hints") => "↑/↓ 选择  Enter 展开/收起  o 打开链接  l 切换语言  q 退出",
        (Lang::En, "footer.hints") => "↑/↓ select  Enter toggle  o open link  l language  q quit",
        (_, other) => {
            tracing::debug!(key = other, "missing translation key");
            // Returning the key keeps a missing entry visible instead of fatal.
            other
        }
    }
}
