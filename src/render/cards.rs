//! Language-specific field selection for content cards.
//!
//! Both rendering surfaces (the terminal card list and the HTML export) pick
//! item fields through these helpers so the selection rules exist in exactly
//! one place.

use crate::i18n::Lang;
use crate::state::ContentItem;

/// What: Display title for an item in the given language.
///
/// Inputs:
/// - `item`: Feed item.
/// - `lang`: Active display language.
///
/// Output:
/// - Chinese prefers a non-empty `title_zh` and falls back to the base
///   title; English always uses the base title.
#[must_use]
pub fn title_for(item: &ContentItem, lang: Lang) -> &str {
    match lang {
        Lang::Zh => match &item.title_zh {
            Some(t) if !t.is_empty() => t,
            _ => &item.title,
        },
        Lang::En => &item.title,
    }
}

/// What: Tag sequence for an item in the given language.
///
/// Output:
/// - Chinese uses the localized sequence whenever it is present (even when
///   empty); English always uses the base tags.
#[must_use]
pub fn tags_for(item: &ContentItem, lang: Lang) -> &[String] {
    match lang {
        Lang::Zh => item.tags_zh.as_deref().unwrap_or(&item.tags),
        Lang::En => &item.tags,
    }
}

/// Tags joined with the display separator.
#[must_use]
pub fn joined_tags(item: &ContentItem, lang: Lang) -> String {
    tags_for(item, lang).join(", ")
}

/// AI summary for the given language; empty string when absent.
#[must_use]
pub fn summary_for(item: &ContentItem, lang: Lang) -> &str {
    let field = match lang {
        Lang::Zh => &item.summary_zh,
        Lang::En => &item.summary_en,
    };
    field.as_deref().unwrap_or("")
}

/// Highlighted quote for the given language; empty string when absent.
#[must_use]
pub fn quote_for(item: &ContentItem, lang: Lang) -> &str {
    let field = match lang {
        Lang::Zh => &item.best_quote_zh,
        Lang::En => &item.best_quote_en,
    };
    field.as_deref().unwrap_or("")
}

/// Critical-analysis text for the given language; empty string when absent.
#[must_use]
pub fn critique_for(item: &ContentItem, lang: Lang) -> &str {
    let field = match lang {
        Lang::Zh => &item.critique_zh,
        Lang::En => &item.critique_en,
    };
    field.as_deref().unwrap_or("")
}

/// Opening and closing quotation glyphs for the language (corner brackets
/// for Chinese, straight double quotes for English).
#[must_use]
pub const fn quote_glyphs(lang: Lang) -> (&'static str, &'static str) {
    match lang {
        Lang::Zh => ("「", "」"),
        Lang::En => ("\"", "\""),
    }
}

/// What: Footer metadata line: source, joined tags, and date separated by
/// middle dots.
///
/// Output:
/// - `"{source} · {tags} · {date}"` with an empty date segment when the item
///   has no date.
#[must_use]
pub fn meta_line(item: &ContentItem, lang: Lang) -> String {
    format!(
        "{} · {} · {}",
        item.source,
        joined_tags(item, lang),
        item.date.as_deref().unwrap_or("")
    )
}
