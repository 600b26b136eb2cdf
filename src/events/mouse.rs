//! Mouse handling: wheel scrolling and click hit-testing against the
//! rectangles recorded by the card renderer.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::state::{AppState, HitRect};

/// What: Handle a single mouse event and update the [`AppState`].
///
/// Inputs:
/// - `m`: Mouse event including position and button.
/// - `app`: Mutable application state with the current frame's hit rects.
///
/// Output:
/// - `true` to request application exit (never used here); otherwise `false`.
///
/// Details:
/// - A left click on a critique toggle button flips that panel; toggle
///   buttons win over the enclosing card. A click elsewhere on a card
///   selects it. Clicks that miss every rectangle (or hit a card whose
///   panel rect was clipped out of the viewport) are no-ops.
pub fn handle_mouse_event(m: MouseEvent, app: &mut AppState) -> bool {
    match m.kind {
        MouseEventKind::ScrollUp => app.move_selection(-1),
        MouseEventKind::ScrollDown => app.move_selection(1),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = hit_test(&app.toggle_rects, m.column, m.row) {
                app.toggle_critique(index);
            } else if let Some(index) = hit_test(&app.card_rects, m.column, m.row) {
                app.selected = index;
            }
        }
        _ => {}
    }
    false
}

/// First item index whose rectangle contains the given position.
fn hit_test(rects: &[(usize, HitRect)], x: u16, y: u16) -> Option<usize> {
    rects
        .iter()
        .find(|(_, (rx, ry, rw, rh))| x >= *rx && x < rx + rw && y >= *ry && y < ry + rh)
        .map(|(i, _)| *i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Lang;
    use crate::state::ContentItem;
    use crossterm::event::KeyModifiers;

    fn app_with_rects() -> AppState {
        let mut app = AppState::new(Lang::En);
        app.set_items(vec![
            ContentItem {
                title: "A".into(),
                critique_en: Some("take".into()),
                source: "S".into(),
                link: "http://a".into(),
                ..ContentItem::default()
            },
            ContentItem {
                title: "B".into(),
                source: "S".into(),
                link: "http://b".into(),
                ..ContentItem::default()
            },
        ]);
        // Rectangles as the renderer would record them for one frame.
        app.card_rects = vec![(0, (1, 1, 40, 4)), (1, (1, 5, 40, 3))];
        app.toggle_rects = vec![(0, (3, 3, 10, 1))];
        app
    }

    fn click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// What: Clicking a toggle button flips its panel.
    ///
    /// - Input: Click inside the recorded toggle rect, twice
    /// - Output: Expanded after one click, collapsed after two
    #[test]
    fn click_on_toggle_flips_panel() {
        let mut app = app_with_rects();
        handle_mouse_event(click(5, 3), &mut app);
        assert!(app.is_expanded(0));
        handle_mouse_event(click(5, 3), &mut app);
        assert!(!app.is_expanded(0));
    }

    /// What: Clicking a card outside its toggle selects the card.
    ///
    /// - Input: Click inside the second card's rect
    /// - Output: Selection moves to that card, nothing expands
    #[test]
    fn click_on_card_selects_it() {
        let mut app = app_with_rects();
        handle_mouse_event(click(10, 6), &mut app);
        assert_eq!(app.selected, 1);
        assert!(app.expanded.is_empty());
    }

    /// What: Clicks outside every rectangle are no-ops.
    ///
    /// - Input: Click beyond the recorded rects
    /// - Output: State unchanged
    #[test]
    fn click_outside_is_noop() {
        let mut app = app_with_rects();
        handle_mouse_event(click(60, 20), &mut app);
        assert_eq!(app.selected, 0);
        assert!(app.expanded.is_empty());
    }

    /// What: Wheel scrolling moves the selection.
    ///
    /// - Input: Scroll down then up
    /// - Output: Selection follows the wheel within bounds
    #[test]
    fn wheel_moves_selection() {
        let mut app = app_with_rects();
        let mut ev = click(0, 0);
        ev.kind = MouseEventKind::ScrollDown;
        handle_mouse_event(ev, &mut app);
        assert_eq!(app.selected, 1);
        ev.kind = MouseEventKind::ScrollUp;
        handle_mouse_event(ev, &mut app);
        assert_eq!(app.selected, 0);
    }
}
