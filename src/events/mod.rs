//! Event handling layer: a single dispatcher for keyboard and mouse events.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind};

use crate::state::{AppState, LoadStatus};

mod mouse;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event from the input-reader thread.
/// - `app`: Mutable application state.
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Item-level actions (selection, toggling, opening links) only apply once
///   the feed is loaded and non-empty; quit and language switching always
///   work.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            match ke.code {
                KeyCode::Char('q') | KeyCode::Esc => return true,
                KeyCode::Char('l') | KeyCode::Char('L') => {
                    app.set_lang(app.lang.toggled());
                }
                KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
                KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
                KeyCode::Home => {
                    if !app.items.is_empty() {
                        app.selected = 0;
                    }
                }
                KeyCode::End => {
                    if !app.items.is_empty() {
                        app.selected = app.items.len() - 1;
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if app.load == LoadStatus::Ready {
                        app.toggle_critique(app.selected);
                    }
                }
                KeyCode::Char('o') => {
                    if let Some(item) = app.selected_item() {
                        crate::util::open_link(&item.link);
                    }
                }
                _ => {}
            }
            false
        }
        CEvent::Mouse(m) => mouse::handle_mouse_event(m, app),
        _ => false,
    }
}
