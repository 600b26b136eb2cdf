//! Central [`AppState`] container shared by the event, networking, and UI
//! layers.

use std::collections::HashSet;

use crate::i18n::Lang;
use crate::state::types::{ContentItem, LoadStatus};

/// Hit-test rectangle recorded during rendering: `(x, y, width, height)` in
/// terminal cells.
pub type HitRect = (u16, u16, u16, u16);

/// Application state mutated by input events and the feed worker.
///
/// Rendering functions receive this struct explicitly; there are no ambient
/// globals. The UI records clickable rectangles here each frame so the mouse
/// handler can resolve clicks against what is actually on screen.
#[derive(Debug)]
pub struct AppState {
    /// Active display language.
    pub lang: Lang,
    /// Fetched item sequence, in feed order.
    pub items: Vec<ContentItem>,
    /// Lifecycle of the one-shot feed load.
    pub load: LoadStatus,
    /// Index into `items` that is currently highlighted.
    pub selected: usize,
    /// Positions of items whose critique panel is expanded.
    pub expanded: HashSet<usize>,
    /// First visible item index in the card list.
    pub list_offset: usize,
    /// Clickable rectangles for critique toggle buttons, keyed by item
    /// position. Rebuilt on every draw.
    pub toggle_rects: Vec<(usize, HitRect)>,
    /// Clickable rectangles covering whole cards (click-to-select), keyed by
    /// item position. Rebuilt on every draw.
    pub card_rects: Vec<(usize, HitRect)>,
}

impl AppState {
    /// Create the initial state for the given display language.
    #[must_use]
    pub fn new(lang: Lang) -> Self {
        AppState {
            lang,
            items: Vec::new(),
            load: LoadStatus::Loading,
            selected: 0,
            expanded: HashSet::new(),
            list_offset: 0,
            toggle_rects: Vec::new(),
            card_rects: Vec::new(),
        }
    }

    /// Item currently under the selection highlight, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&ContentItem> {
        self.items.get(self.selected)
    }

    /// Whether the item at `index` carries a critique in the active language.
    #[must_use]
    pub fn has_critique(&self, index: usize) -> bool {
        self.items
            .get(index)
            .is_some_and(|item| !crate::render::cards::critique_for(item, self.lang).is_empty())
    }

    /// Whether the critique panel at `index` is currently expanded.
    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    /// What: Flip the critique panel at `index` between collapsed and
    /// expanded.
    ///
    /// Inputs:
    /// - `index`: Item position carried by the toggle control.
    ///
    /// Output:
    /// - `true` when the panel state changed; `false` when the item does not
    ///   exist or has no critique in the active language (no-op).
    ///
    /// Details:
    /// - Two states per panel, initial collapsed, click flips. There are no
    ///   other transitions.
    pub fn toggle_critique(&mut self, index: usize) -> bool {
        if !self.has_critique(index) {
            return false;
        }
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
        }
        true
    }

    /// What: Switch the display language and re-render from scratch.
    ///
    /// Inputs:
    /// - `lang`: New display language.
    ///
    /// Details:
    /// - Re-rendering recreates every panel collapsed, so the expanded set is
    ///   cleared here rather than carried across languages.
    pub fn set_lang(&mut self, lang: Lang) {
        self.lang = lang;
        self.expanded.clear();
    }

    /// Replace the item sequence after a successful load.
    pub fn set_items(&mut self, items: Vec<ContentItem>) {
        self.items = items;
        self.load = LoadStatus::Ready;
        self.selected = 0;
        self.list_offset = 0;
        self.expanded.clear();
    }

    /// Mark the load as failed; the UI shows the localized message.
    pub fn set_load_failed(&mut self) {
        self.items.clear();
        self.load = LoadStatus::Failed;
    }

    /// Move the selection by `delta`, clamped to the item range.
    pub fn move_selection(&mut self, delta: i64) {
        if self.items.is_empty() {
            return;
        }
        let last = self.items.len() - 1;
        let cur = i64::try_from(self.selected).unwrap_or(i64::MAX);
        let next = cur.saturating_add(delta).clamp(0, i64::try_from(last).unwrap_or(i64::MAX));
        self.selected = usize::try_from(next).unwrap_or(last);
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Lang::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;

    fn item_with_critique() -> ContentItem {
        ContentItem {
            title: "A".into(),
            critique_en: Some("deep take".into()),
            critique_zh: Some("深入分析".into()),
            source: "S".into(),
            link: "http://x".into(),
            ..ContentItem::default()
        }
    }

    /// What: Toggling a panel twice returns it to collapsed.
    ///
    /// - Input: One item with a critique; two toggle calls
    /// - Output: Expanded after one call, collapsed after two
    #[test]
    fn toggle_twice_returns_to_collapsed() {
        let mut app = AppState::new(Lang::En);
        app.set_items(vec![item_with_critique()]);
        assert!(!app.is_expanded(0));
        assert!(app.toggle_critique(0));
        assert!(app.is_expanded(0));
        assert!(app.toggle_critique(0));
        assert!(!app.is_expanded(0));
    }

    /// What: Toggling an item without a critique is a no-op.
    ///
    /// - Input: Item lacking critique fields; out-of-range index
    /// - Output: `toggle_critique` returns false and nothing expands
    #[test]
    fn toggle_without_critique_is_noop() {
        let mut app = AppState::new(Lang::En);
        app.set_items(vec![ContentItem {
            source: "S".into(),
            link: "http://x".into(),
            ..ContentItem::default()
        }]);
        assert!(!app.toggle_critique(0));
        assert!(!app.toggle_critique(7));
        assert!(app.expanded.is_empty());
    }

    /// What: Switching language collapses every expanded panel.
    ///
    /// - Input: Expanded panel, then a language switch
    /// - Output: Expanded set is empty and the language changed
    #[test]
    fn language_switch_collapses_panels() {
        let mut app = AppState::new(Lang::Zh);
        app.set_items(vec![item_with_critique()]);
        assert!(app.toggle_critique(0));
        app.set_lang(app.lang.toggled());
        assert_eq!(app.lang, Lang::En);
        assert!(app.expanded.is_empty());
    }

    /// What: Selection movement clamps to the item range.
    ///
    /// - Input: Three items; moves past both ends
    /// - Output: Selection stays within bounds
    #[test]
    fn selection_clamps_to_range() {
        let mut app = AppState::new(Lang::Zh);
        app.set_items(vec![
            item_with_critique(),
            item_with_critique(),
            item_with_critique(),
        ]);
        app.move_selection(-5);
        assert_eq!(app.selected, 0);
        app.move_selection(2);
        assert_eq!(app.selected, 2);
        app.move_selection(10);
        assert_eq!(app.selected, 2);
    }
}
