//! Card list rendering for the terminal surface.
//!
//! Cards are built as pre-wrapped lines so every frame knows exactly where
//! each critique toggle button sits; those positions are recorded into
//! [`AppState`] as hit-test rectangles for the mouse handler.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
};

use crate::i18n::tr;
use crate::render::cards as pick;
use crate::state::AppState;
use crate::theme::theme;
use crate::util::{clean_text, display_width, wrap_text};

/// Left indent (cells) applied to card body lines under the title.
const BODY_INDENT: u16 = 2;

/// One card prepared for drawing: its lines plus the position of the toggle
/// button line within the card, when the item has a critique.
struct BuiltCard {
    /// Styled lines for the card, including the trailing spacer.
    lines: Vec<Line<'static>>,
    /// Index of the toggle-button line within `lines`.
    toggle_line: Option<usize>,
    /// Display width of the toggle-button label in cells.
    toggle_width: u16,
}

/// What: Render the card list and record hit-test rectangles.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; `toggle_rects`, `card_rects`, and
///   `list_offset` are rewritten to match this frame.
/// - `area`: Target rectangle including borders.
///
/// Details:
/// - Keeps the selected card visible by advancing the first visible item
///   until the selection fits the viewport.
pub fn render_cards(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let wrap_w = area.width.saturating_sub(2) as usize;
    let viewport = area.height.saturating_sub(2) as usize;
    if wrap_w == 0 || viewport == 0 {
        return;
    }

    let built: Vec<BuiltCard> = app
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            build_card(
                item,
                app.lang,
                i == app.selected,
                app.is_expanded(i),
                wrap_w,
            )
        })
        .collect();

    // Keep the selection visible: never above the first visible card, and
    // advance the window until the selected card's first lines fit.
    let mut offset = app.list_offset.min(app.items.len().saturating_sub(1));
    if app.selected < offset {
        offset = app.selected;
    } else {
        while offset < app.selected {
            let used: usize = built[offset..=app.selected]
                .iter()
                .map(|c| c.lines.len())
                .sum();
            if used <= viewport {
                break;
            }
            offset += 1;
        }
    }
    app.list_offset = offset;

    // Record clickable rectangles for everything that lands in the viewport.
    let inner_x = area.x + 1;
    let top = area.y + 1;
    let bottom = top + u16::try_from(viewport).unwrap_or(u16::MAX);
    let mut y = top;
    for (i, card) in built.iter().enumerate().skip(offset) {
        if y >= bottom {
            break;
        }
        let h = u16::try_from(card.lines.len()).unwrap_or(u16::MAX);
        let visible_h = h.min(bottom - y);
        app.card_rects
            .push((i, (inner_x, y, area.width.saturating_sub(2), visible_h)));
        if let Some(toggle_line) = card.toggle_line {
            let ty = y.saturating_add(u16::try_from(toggle_line).unwrap_or(u16::MAX));
            if ty < bottom {
                app.toggle_rects
                    .push((i, (inner_x + BODY_INDENT, ty, card.toggle_width, 1)));
            }
        }
        y = y.saturating_add(h);
    }

    let list_items: Vec<ListItem> = built
        .into_iter()
        .map(|c| ListItem::new(Text::from(c.lines)))
        .collect();
    let title = format!(" {} ({}) ", tr(app.lang, "header.title"), app.items.len());
    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay))
            .title(Span::styled(title, Style::default().fg(th.subtext))),
    );
    let mut list_state = ListState::default().with_offset(offset);
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Build the styled lines for one card at the given wrap width.
fn build_card(
    item: &crate::state::ContentItem,
    lang: crate::i18n::Lang,
    selected: bool,
    expanded: bool,
    width: usize,
) -> BuiltCard {
    let th = theme();
    let indent = " ".repeat(BODY_INDENT as usize);
    let body_w = width.saturating_sub(BODY_INDENT as usize);
    let mut lines: Vec<Line<'static>> = Vec::new();

    // Title row with a selection marker; continuation lines align with the body.
    let title_style = if selected {
        Style::default()
            .fg(th.sapphire)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.text).add_modifier(Modifier::BOLD)
    };
    let marker = if selected { "▶ " } else { "  " };
    for (n, chunk) in wrap_text(&clean_text(pick::title_for(item, lang)), body_w)
        .into_iter()
        .enumerate()
    {
        let prefix = if n == 0 { marker } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(prefix.to_string(), Style::default().fg(th.sapphire)),
            Span::styled(chunk, title_style),
        ]));
    }

    // Summary with its localized label on the first line.
    let summary = clean_text(pick::summary_for(item, lang));
    if !summary.is_empty() {
        let label = tr(lang, "card.summary_label");
        let full = format!("{label}{summary}");
        for (n, chunk) in wrap_text(&full, body_w).into_iter().enumerate() {
            let mut spans = vec![Span::raw(indent.clone())];
            if n == 0 {
                if let Some(rest) = chunk.strip_prefix(label) {
                    spans.push(Span::styled(
                        label.to_string(),
                        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                    ));
                    spans.push(Span::styled(
                        rest.to_string(),
                        Style::default().fg(th.subtext),
                    ));
                } else {
                    spans.push(Span::styled(chunk, Style::default().fg(th.subtext)));
                }
            } else {
                spans.push(Span::styled(chunk, Style::default().fg(th.subtext)));
            }
            lines.push(Line::from(spans));
        }
    }

    // Quote wrapped in locale glyphs.
    let quote = clean_text(pick::quote_for(item, lang));
    if !quote.is_empty() {
        let (open, close) = pick::quote_glyphs(lang);
        for chunk in wrap_text(&format!("{open}{quote}{close}"), body_w) {
            lines.push(Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(
                    chunk,
                    Style::default()
                        .fg(th.lavender)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]));
        }
    }

    // Critique toggle button plus the panel content when expanded.
    let critique = clean_text(pick::critique_for(item, lang));
    let mut toggle_line = None;
    let mut toggle_width = 0u16;
    if !critique.is_empty() {
        let label = if expanded {
            tr(lang, "card.critique_collapse")
        } else {
            tr(lang, "card.critique_expand")
        };
        toggle_line = Some(lines.len());
        toggle_width = u16::try_from(display_width(label)).unwrap_or(u16::MAX);
        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(
                label.to_string(),
                Style::default()
                    .fg(th.mauve)
                    .bg(th.surface)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        if expanded {
            let panel_indent = " ".repeat((BODY_INDENT as usize) * 2);
            let panel_w = width.saturating_sub((BODY_INDENT as usize) * 2);
            for chunk in wrap_text(&critique, panel_w) {
                lines.push(Line::from(vec![
                    Span::raw(panel_indent.clone()),
                    Span::styled(chunk, Style::default().fg(th.text)),
                ]));
            }
        }
    }

    // Footer metadata.
    for chunk in wrap_text(&clean_text(&pick::meta_line(item, lang)), body_w) {
        lines.push(Line::from(vec![
            Span::raw(indent.clone()),
            Span::styled(chunk, Style::default().fg(th.overlay)),
        ]));
    }

    // Spacer between cards.
    lines.push(Line::from(""));

    BuiltCard {
        lines,
        toggle_line,
        toggle_width,
    }
}
