//! Terminal UI layout: header, card list, and footer hints.

pub mod cards;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::i18n::tr;
use crate::state::{AppState, LoadStatus};
use crate::theme::theme;

/// What: Draw one frame of the application.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Application state; hit-test rectangles are rebuilt here so the
///   mouse handler always matches what is on screen.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    // Rectangles always describe the current frame only.
    app.toggle_rects.clear();
    app.card_rects.clear();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(f, app, chunks[0]);

    match app.load {
        LoadStatus::Loading => {
            render_message(f, app, chunks[1], tr(app.lang, "list.loading"), th.subtext);
        }
        LoadStatus::Failed => {
            render_message(
                f,
                app,
                chunks[1],
                tr(app.lang, "list.load_failed"),
                th.red,
            );
        }
        LoadStatus::Ready if app.items.is_empty() => {
            render_message(f, app, chunks[1], tr(app.lang, "list.empty"), th.subtext);
        }
        LoadStatus::Ready => cards::render_cards(f, app, chunks[1]),
    }

    let hints = Paragraph::new(Line::from(Span::styled(
        format!(" {}", tr(app.lang, "footer.hints")),
        Style::default().fg(th.overlay),
    )));
    f.render_widget(hints, chunks[2]);
}

/// Header bar: application title, active language, and item count.
fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let count = match app.load {
        LoadStatus::Ready => app.items.len().to_string(),
        LoadStatus::Loading | LoadStatus::Failed => "-".to_string(),
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", tr(app.lang, "header.title")),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", app.lang.as_str()),
            Style::default().fg(th.base).bg(th.mauve),
        ),
        Span::styled(format!("  {count}"), Style::default().fg(th.subtext)),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.overlay)),
    );
    f.render_widget(header, area);
}

/// Centered status message used for the loading, failed, and empty states.
fn render_message(
    f: &mut Frame,
    app: &AppState,
    area: Rect,
    message: &str,
    color: ratatui::style::Color,
) {
    let th = theme();
    let pad = usize::from(area.height.saturating_sub(3) / 2);
    let mut lines: Vec<Line> = std::iter::repeat_with(|| Line::from(""))
        .take(pad)
        .collect();
    lines.push(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    let title = format!(" {} ", tr(app.lang, "header.title"));
    let msg = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.overlay))
                .title(Span::styled(title, Style::default().fg(th.subtext))),
        );
    f.render_widget(msg, area);
}
