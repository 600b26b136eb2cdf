//! User configuration: settings file parsing and config/log directories.
//!
//! Settings live in `settings.conf` under the config directory as plain
//! `key = value` lines. A commented template is written on first run so the
//! file documents itself. CLI flags override anything set here.

use std::path::{Path, PathBuf};

use crate::i18n::Lang;

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Remote feed URL. Takes precedence over `data_file` when set.
    pub feed_url: Option<String>,
    /// Local feed document path (development convenience).
    pub data_file: Option<PathBuf>,
    /// Default display language (`zh` unless configured otherwise).
    pub lang: Lang,
}

/// Template written when no settings file exists yet.
const DEFAULT_SETTINGS_FILE: &str = "\
# gemfeed settings
#
# Remote feed URL (preferred when set):
# feed_url = https://example.github.io/curated-gems/data.json
#
# Local feed document (used when no feed_url is configured):
# data_file = ./data.json
#
# Default display language: zh or en
# lang = zh
";

/// What: Resolve the application config directory.
///
/// Inputs:
/// - `cli_override`: Directory passed via `--config-dir`, if any.
///
/// Output:
/// - The override when given, otherwise `$XDG_CONFIG_HOME/gemfeed` or
///   `$HOME/.config/gemfeed`. The directory is created best-effort.
#[must_use]
pub fn config_dir(cli_override: Option<&Path>) -> PathBuf {
    let dir = if let Some(dir) = cli_override {
        dir.to_path_buf()
    } else if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.trim().is_empty()
    {
        PathBuf::from(xdg).join("gemfeed")
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| String::from("."));
        PathBuf::from(home).join(".config").join("gemfeed")
    };
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Log directory under the config directory, created best-effort.
#[must_use]
pub fn logs_dir(config_dir: &Path) -> PathBuf {
    let dir = config_dir.join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// What: Load settings from `settings.conf` in the given directory.
///
/// Inputs:
/// - `dir`: Config directory.
///
/// Output:
/// - Parsed settings; defaults when the file is missing or unreadable. A
///   missing file is replaced with the commented template.
#[must_use]
pub fn load_settings(dir: &Path) -> Settings {
    let path = dir.join("settings.conf");
    match std::fs::read_to_string(&path) {
        Ok(text) => parse_settings(&text),
        Err(_) => {
            if let Err(e) = std::fs::write(&path, DEFAULT_SETTINGS_FILE) {
                tracing::warn!(error = %e, path = %path.display(), "failed to write default settings");
            }
            Settings::default()
        }
    }
}

/// What: Parse settings text into a [`Settings`] value.
///
/// Inputs:
/// - `text`: File contents as `key = value` lines; `#` starts a comment.
///
/// Output:
/// - Settings with recognized keys applied; unknown keys are ignored with a
///   debug log, empty values are treated as unset.
#[must_use]
pub fn parse_settings(text: &str) -> Settings {
    let mut settings = Settings::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        match key.as_str() {
            "feed_url" => settings.feed_url = Some(value.to_string()),
            "data_file" => settings.data_file = Some(PathBuf::from(value)),
            "lang" => settings.lang = Lang::parse(value),
            other => tracing::debug!(key = other, "ignoring unknown settings key"),
        }
    }
    settings
}
