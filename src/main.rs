//! gemfeed binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

use gemfeed::{app, args, config, i18n};

/// Log timestamp formatter: UTC, second precision.
struct GemfeedTimer;

impl tracing_subscriber::fmt::time::FormatTime for GemfeedTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[tokio::main]
async fn main() {
    let cli = args::Args::parse();
    let config_dir = config::config_dir(cli.config_dir.as_deref());

    // Initialize tracing, writing to <config>/logs/gemfeed.log with a stderr
    // fallback when the file cannot be opened.
    {
        let mut log_path = config::logs_dir(&config_dir);
        log_path.push("gemfeed.log");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| {
                        tracing_subscriber::EnvFilter::new(args::determine_log_level(&cli))
                    });
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .with_timer(GemfeedTimer)
                    .init();
                let _ = LOG_GUARD.set(guard);
                tracing::info!(path = %log_path.display(), "logging initialized");
            }
            Err(e) => {
                let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| {
                        tracing_subscriber::EnvFilter::new(args::determine_log_level(&cli))
                    });
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(true)
                    .with_timer(GemfeedTimer)
                    .init();
                tracing::warn!(error = %e, "failed to open log file; using stderr");
            }
        }
    }

    let settings = config::load_settings(&config_dir);
    let lang = args::resolve_lang(&cli, &settings);
    let source = args::resolve_source(&cli, &settings);
    tracing::info!(lang = lang.as_str(), source = %source, "gemfeed starting");

    if let Some(path) = cli.export.clone() {
        if let Err(err) = app::run_export(&source, lang, &path).await {
            tracing::error!(error = ?err, "export failed");
            eprintln!("{}", i18n::tr(lang, "list.load_failed"));
            std::process::exit(1);
        }
        return;
    }

    if let Err(err) = app::run(lang, source).await {
        tracing::error!(error = ?err, "application error");
    }
    tracing::info!("gemfeed exited");
}
