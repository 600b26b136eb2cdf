//! Integration tests for the HTML rendering surface.

use gemfeed::i18n::Lang;
use gemfeed::render::html::{card, esc, export_document, render_page};
use gemfeed::sources::feed::parse_feed;
use gemfeed::state::ContentItem;

fn feed_fixture() -> Vec<ContentItem> {
    parse_feed(
        r#"[
        {"title":"A","link":"http://x","source":"S","tags":["t1","t2"],
         "critique_en":"deep take"},
        {"title":"Rust & WebAssembly","title_zh":"Rust 与 WebAssembly",
         "link":"http://y","source":"Blog","tags":["tag1"],"tags_zh":["标签1"],
         "summary_zh":"中文总结","summary_en":"english summary",
         "best_quote_zh":"名言","best_quote_en":"a quote",
         "date":"2025-06-01"}
    ]"#,
    )
    .expect("fixture feed should parse")
}

/// What: Displayed titles come out language-appropriate and in input order.
///
/// - Input: Two-item fixture rendered in both languages
/// - Output: zh uses the Chinese title variant where present; order matches
///   the feed
#[test]
fn titles_localized_and_ordered() {
    let items = feed_fixture();
    let en = render_page(&items, Lang::En);
    let first = en.find(">A<").expect("first title rendered");
    let second = en
        .find("Rust &amp; WebAssembly")
        .expect("second title rendered and escaped");
    assert!(first < second);

    let zh = render_page(&items, Lang::Zh);
    assert!(zh.contains("Rust 与 WebAssembly"));
}

/// What: The reference card scenario renders every documented piece.
///
/// - Input: `{title:"A", link:"http://x", source:"S", tags:["t1","t2"],
///   critique_en:"deep take"}` in English
/// - Output: Linked title, `S · t1, t2 · ` footer, expand toggle, hidden
///   panel holding the critique
#[test]
fn reference_card_scenario() {
    let items = feed_fixture();
    let html = card(&items[0], 0, Lang::En);
    assert!(html.contains("href=\"http://x\""));
    assert!(html.contains(">A</a>"));
    assert!(html.contains("S · t1, t2 · "));
    assert!(html.contains("👓 Critical Analysis"));
    assert!(html.contains("id=\"critique-v1-0\""));
    assert!(html.contains("hidden"));
    assert!(html.contains("deep take"));
}

/// What: Chinese tag display prefers the localized sequence.
///
/// - Input: Item with `tags_zh:["标签1"]` and `tags:["tag1"]`
/// - Output: zh footer shows `标签1` and not `tag1`; en shows `tag1`
#[test]
fn chinese_tags_prefer_localized() {
    let items = feed_fixture();
    let zh = card(&items[1], 1, Lang::Zh);
    assert!(zh.contains("标签1"));
    let meta_start = zh.find("class=\"meta\"").expect("meta footer present");
    assert!(!zh[meta_start..].contains("tag1"));
    let en = card(&items[1], 1, Lang::En);
    assert!(en.contains("tag1"));
}

/// What: Items missing optional fields produce no placeholder markup.
///
/// - Input: First fixture item (no summary, no quote) in English
/// - Output: No summary paragraph or blockquote; critique present
#[test]
fn missing_blocks_are_absent() {
    let items = feed_fixture();
    let html = card(&items[0], 0, Lang::En);
    assert!(!html.contains("ai-label"));
    assert!(!html.contains("blockquote"));
    assert!(html.contains("critique-container"));

    // The second item has no critique: the whole block disappears.
    let other = card(&items[1], 1, Lang::En);
    assert!(!other.contains("critique"));
}

/// What: Every interpolated text field is escaped except the link URL.
///
/// - Input: Item with markup in title, source, tags, and a query-string link
/// - Output: Entities everywhere; the link appears verbatim
#[test]
fn escaping_applies_to_text_but_not_link() {
    let item = ContentItem {
        title: "<b>bold</b>".into(),
        tags: vec!["<t>".into()],
        source: "A&B".into(),
        link: "http://x/?a=1&b=2".into(),
        ..ContentItem::default()
    };
    let html = card(&item, 0, Lang::En);
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(html.contains("&lt;t&gt;"));
    assert!(html.contains("A&amp;B"));
    assert!(html.contains("href=\"http://x/?a=1&b=2\""));
    assert!(!html.contains("<b>bold"));
}

/// What: Double application of the escaper double-escapes.
///
/// - Input: Already-escaped ampersand
/// - Output: `&amp;amp;`
#[test]
fn escaper_is_not_idempotent() {
    assert_eq!(esc(&esc("&")), "&amp;amp;");
}

/// What: Empty and non-empty exports carry the right top-level structure.
///
/// - Input: Empty slice and the fixture, both languages
/// - Output: Localized empty-state with zero cards, or a card per item and
///   the toggle script
#[test]
fn export_document_structure() {
    let empty_zh = export_document(&[], Lang::Zh);
    assert!(empty_zh.contains("<html lang=\"zh\">"));
    assert!(empty_zh.contains("暂无内容"));
    assert!(!empty_zh.contains("<article"));

    let items = feed_fixture();
    let doc = export_document(&items, Lang::En);
    assert!(doc.contains("<html lang=\"en\">"));
    assert_eq!(doc.matches("<article class=\"card\">").count(), 2);
    assert!(doc.contains("addEventListener"));
    assert!(doc.contains("▲ Collapse Analysis"));
    assert!(!doc.contains("No content available"));
}
