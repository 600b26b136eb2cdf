//! HTML markup rendering for the card list.
//!
//! This is the export surface: one `<article>` fragment per item, assembled
//! in feed order into the list markup, with every interpolated text field
//! passed through [`esc`] exactly once. The item link URL is inserted
//! verbatim; feed links are operator-controlled input.

use crate::i18n::{Lang, tr};
use crate::render::cards;
use crate::state::ContentItem;

/// What: Escape the five HTML-sensitive characters.
///
/// Inputs:
/// - `text`: Raw text to interpolate into markup.
///
/// Output:
/// - Text with `&`, `<`, `>`, `"`, and `'` replaced by character references.
///
/// Details:
/// - Pure function. Not idempotent: escaping already-escaped text
///   double-escapes, so callers escape raw text exactly once.
#[must_use]
pub fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// [`esc`] over an optional value; absent coerces to the empty string.
#[must_use]
pub fn esc_opt(text: Option<&str>) -> String {
    esc(text.unwrap_or_default())
}

/// What: Render one item as an HTML card fragment.
///
/// Inputs:
/// - `item`: Feed item.
/// - `index`: Position of the item in the sequence; becomes the panel
///   identifier linking the toggle button to its critique panel.
/// - `lang`: Active display language.
///
/// Output:
/// - An `<article class="card">` fragment. Absent optional fields suppress
///   their whole block; the critique block carries a toggle button with
///   `data-id="v1-{index}"` and an initially hidden panel with the matching
///   `id`.
#[must_use]
pub fn card(item: &ContentItem, index: usize, lang: Lang) -> String {
    let title = esc(cards::title_for(item, lang));
    let summary = cards::summary_for(item, lang);
    let quote = cards::quote_for(item, lang);
    let critique = cards::critique_for(item, lang);
    let (open_glyph, close_glyph) = cards::quote_glyphs(lang);

    let mut out = String::new();
    out.push_str("<article class=\"card\">\n");
    out.push_str(&format!(
        "  <h3><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{title}</a></h3>\n",
        item.link
    ));
    if !summary.is_empty() {
        out.push_str(&format!(
            "  <p><span class=\"ai-label\">{}</span>{}</p>\n",
            tr(lang, "card.summary_label"),
            esc(summary)
        ));
    }
    if !quote.is_empty() {
        out.push_str(&format!(
            "  <blockquote>{open_glyph}{}{close_glyph}</blockquote>\n",
            esc(quote)
        ));
    }
    if !critique.is_empty() {
        out.push_str(&format!(
            "  <div class=\"critique-container\">\n    <button class=\"critique-toggle\" data-id=\"v1-{index}\">{}</button>\n    <div id=\"critique-v1-{index}\" class=\"critique-content hidden\">\n      <p>{}</p>\n    </div>\n  </div>\n",
            tr(lang, "card.critique_expand"),
            esc(critique)
        ));
    }
    out.push_str(&format!(
        "  <div class=\"meta\">{} · {} · {}</div>\n",
        esc(&item.source),
        esc(&cards::joined_tags(item, lang)),
        esc_opt(item.date.as_deref())
    ));
    out.push_str("</article>\n");
    out
}

/// What: Render the full list markup for a sequence of items.
///
/// Inputs:
/// - `items`: Item sequence, rendered in input order.
/// - `lang`: Active display language.
///
/// Output:
/// - Concatenated card fragments assembled in one pass; an empty sequence
///   yields an empty string (the empty-state message is a separate element,
///   see [`export_document`]).
#[must_use]
pub fn render_page(items: &[ContentItem], lang: Lang) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| card(item, i, lang))
        .collect()
}

/// Stylesheet for the exported page. Hidden panels rely on the `hidden`
/// class, matching the toggle script below.
const EXPORT_STYLE: &str = "\
    body { max-width: 46rem; margin: 2rem auto; padding: 0 1rem;\n\
           font-family: system-ui, sans-serif; line-height: 1.6; }\n\
    .card { border-bottom: 1px solid #ddd; padding: 1rem 0; }\n\
    .card h3 { margin: 0 0 .5rem; }\n\
    .card h3 a { color: inherit; }\n\
    .ai-label { font-weight: 600; }\n\
    blockquote { margin: .5rem 0; padding-left: .75rem; border-left: 3px solid #bbb; color: #444; }\n\
    .critique-toggle { cursor: pointer; border: 1px solid #bbb; border-radius: 4px;\n\
                       background: #f5f5f5; padding: .2rem .6rem; }\n\
    .critique-content { margin-top: .5rem; color: #333; }\n\
    .meta { margin-top: .5rem; color: #777; font-size: .85rem; }\n\
    .hidden { display: none; }\n";

/// What: Render a complete standalone HTML document for the item sequence.
///
/// Inputs:
/// - `items`: Item sequence (may be empty).
/// - `lang`: Active display language.
///
/// Output:
/// - A full document with the card list markup, a localized empty-state
///   paragraph when there are no items, and a delegated click handler that
///   toggles critique panels and swaps the button label.
#[must_use]
pub fn export_document(items: &[ContentItem], lang: Lang) -> String {
    let list = render_page(items, lang);
    let empty_state = if items.is_empty() {
        format!("<p id=\"empty\">{}</p>\n", tr(lang, "list.empty"))
    } else {
        String::new()
    };
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{}\">\n", lang.as_str()));
    out.push_str("<head>\n  <meta charset=\"utf-8\">\n");
    out.push_str(&format!("  <title>{}</title>\n", tr(lang, "header.title")));
    out.push_str("  <style>\n");
    out.push_str(EXPORT_STYLE);
    out.push_str("  </style>\n</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", tr(lang, "header.title")));
    out.push_str(&empty_state);
    out.push_str("<main id=\"list\">\n");
    out.push_str(&list);
    out.push_str("</main>\n<script>\n");
    out.push_str(&toggle_script(lang));
    out.push_str("</script>\n</body>\n</html>\n");
    out
}

/// Delegated click handler for the exported page: one listener on the list
/// container, dispatching on the toggle button's `data-id`.
fn toggle_script(lang: Lang) -> String {
    format!(
        "document.getElementById('list').addEventListener('click', function (e) {{\n\
         \x20 var btn = e.target.closest('.critique-toggle');\n\
         \x20 if (!btn) return;\n\
         \x20 e.preventDefault();\n\
         \x20 var panel = document.getElementById('critique-' + btn.dataset.id);\n\
         \x20 if (!panel) return;\n\
         \x20 panel.classList.toggle('hidden');\n\
         \x20 btn.textContent = panel.classList.contains('hidden') ? '{}' : '{}';\n\
         }});\n",
        tr(lang, "card.critique_expand"),
        tr(lang, "card.critique_collapse")
    )
}
