//! Application runtime: terminal lifecycle, background workers, and the
//! event loop.

use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{select, sync::mpsc};

use crate::i18n::Lang;
use crate::render::html;
use crate::sources::{self, FeedSource};
use crate::state::{AppState, FeedEvent};
use crate::ui::ui;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// What: Start the interactive reader and run the main event loop.
///
/// Inputs:
/// - `lang`: Initial display language.
/// - `source`: Resolved feed location.
///
/// Output:
/// - `Ok(())` on normal shutdown; an error if terminal setup fails.
///
/// Details:
/// - Spawns the one-shot feed worker, a blocking input-reader thread, and a
///   periodic tick, then draws with ratatui and dispatches events until the
///   user quits. All state mutation happens on this loop.
///
/// # Errors
/// - Terminal initialization or restoration failures.
pub async fn run(lang: Lang, source: FeedSource) -> Result<()> {
    setup_terminal()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    let mut app = AppState::new(lang);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<CEvent>();
    let (feed_tx, mut feed_rx) = mpsc::unbounded_channel::<FeedEvent>();
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<()>();

    // The feed is loaded exactly once per run; every failure cause collapses
    // into the same unavailable outcome for the UI.
    let fetch_source = source.clone();
    tokio::spawn(async move {
        match sources::fetch_feed(&fetch_source).await {
            Ok(items) => {
                let _ = feed_tx.send(FeedEvent::Loaded(items));
            }
            Err(e) => {
                tracing::error!(error = %e, source = %fetch_source, "feed load failed");
                let _ = feed_tx.send(FeedEvent::Failed);
            }
        }
    });

    std::thread::spawn(move || {
        loop {
            if let Ok(true) = event::poll(Duration::from_millis(50))
                && let Ok(ev) = event::read()
            {
                let _ = event_tx.send(ev);
            }
        }
    });

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(200));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });

    loop {
        let _ = terminal.draw(|f| ui(f, &mut app));

        select! {
            Some(ev) = event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app) {
                    break;
                }
            }
            Some(fe) = feed_rx.recv() => match fe {
                FeedEvent::Loaded(items) => app.set_items(items),
                FeedEvent::Failed => app.set_load_failed(),
            },
            Some(()) = tick_rx.recv() => {}
            else => {}
        }
    }

    restore_terminal()?;
    Ok(())
}

/// What: Fetch the feed once and write the card list as a standalone HTML
/// page.
///
/// Inputs:
/// - `source`: Resolved feed location.
/// - `lang`: Display language for the exported page.
/// - `path`: Output file path.
///
/// Output:
/// - `Ok(())` after the document is written.
///
/// # Errors
/// - Feed load failures (network, status, parse) or an unwritable output
///   path.
pub async fn run_export(source: &FeedSource, lang: Lang, path: &Path) -> Result<()> {
    let items = sources::fetch_feed(source).await?;
    let doc = html::export_document(&items, lang);
    std::fs::write(path, doc)?;
    tracing::info!(count = items.len(), path = %path.display(), "exported feed to HTML");
    println!("Exported {} items to {}", items.len(), path.display());
    Ok(())
}
