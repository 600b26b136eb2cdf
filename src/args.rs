//! Command-line argument definition and resolution against settings.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::i18n::Lang;
use crate::sources::FeedSource;

/// gemfeed - a bilingual terminal reader for curated content feeds
#[derive(Parser, Debug)]
#[command(name = "gemfeed")]
#[command(version)]
#[command(about = "A bilingual terminal reader for curated content feeds", long_about = None)]
pub struct Args {
    /// Display language: zh or en (anything else falls back to zh)
    #[arg(long)]
    pub lang: Option<String>,

    /// Remote feed URL (overrides the settings file)
    #[arg(long)]
    pub url: Option<String>,

    /// Local feed document path (overrides the settings file)
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Render the feed to a standalone HTML page and exit
    #[arg(long, num_args = 0..=1, default_missing_value = "gemfeed.html")]
    pub export: Option<PathBuf>,

    /// Configuration directory (default: ~/.config/gemfeed)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective log level: `--verbose` wins over `--log-level`.
#[must_use]
pub fn determine_log_level(args: &Args) -> &str {
    if args.verbose { "debug" } else { &args.log_level }
}

/// Display language after applying the CLI override to the settings default.
#[must_use]
pub fn resolve_lang(args: &Args, settings: &Settings) -> Lang {
    args.lang
        .as_deref()
        .map_or(settings.lang, Lang::parse)
}

/// What: Resolve the feed source from CLI flags and settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings file contents.
///
/// Output:
/// - First match of: `--url`, `--data-file`, settings `feed_url`, settings
///   `data_file`, then the bundled default of `./data.json`.
#[must_use]
pub fn resolve_source(args: &Args, settings: &Settings) -> FeedSource {
    if let Some(url) = &args.url {
        return FeedSource::Remote(url.clone());
    }
    if let Some(path) = &args.data_file {
        return FeedSource::Local(path.clone());
    }
    if let Some(url) = &settings.feed_url {
        return FeedSource::Remote(url.clone());
    }
    if let Some(path) = &settings.data_file {
        return FeedSource::Local(path.clone());
    }
    FeedSource::Local(PathBuf::from("./data.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: The CLI parses its documented flags.
    ///
    /// - Input: A representative invocation
    /// - Output: Fields populated as expected
    #[test]
    fn args_parse_shape() {
        let args = Args::try_parse_from([
            "gemfeed",
            "--lang",
            "en",
            "--url",
            "https://example.com/data.json",
            "--verbose",
        ])
        .expect("args should parse");
        assert_eq!(args.lang.as_deref(), Some("en"));
        assert!(args.verbose);
        assert_eq!(determine_log_level(&args), "debug");
    }

    /// What: `--export` accepts an optional path with a default.
    ///
    /// - Input: Bare `--export` and `--export out.html`
    /// - Output: Default path when omitted; explicit path when given
    #[test]
    fn export_flag_defaults_path() {
        let bare = Args::try_parse_from(["gemfeed", "--export"]).expect("bare export parses");
        assert_eq!(bare.export.as_deref(), Some(std::path::Path::new("gemfeed.html")));
        let named = Args::try_parse_from(["gemfeed", "--export", "out.html"])
            .expect("named export parses");
        assert_eq!(named.export.as_deref(), Some(std::path::Path::new("out.html")));
    }

    /// What: Language resolution prefers the CLI and falls back correctly.
    ///
    /// - Input: CLI languages, settings default, unknown token
    /// - Output: CLI wins; unknown tokens become zh
    #[test]
    fn lang_resolution_order() {
        let settings = Settings {
            lang: Lang::En,
            ..Settings::default()
        };
        let cli = Args::try_parse_from(["gemfeed", "--lang", "zh"]).expect("parse");
        assert_eq!(resolve_lang(&cli, &settings), Lang::Zh);
        let none = Args::try_parse_from(["gemfeed"]).expect("parse");
        assert_eq!(resolve_lang(&none, &settings), Lang::En);
        let odd = Args::try_parse_from(["gemfeed", "--lang", "fr"]).expect("parse");
        assert_eq!(resolve_lang(&odd, &settings), Lang::Zh);
    }

    /// What: Source resolution follows the documented precedence.
    ///
    /// - Input: Combinations of CLI flags and settings values
    /// - Output: CLI URL first, then CLI file, then settings, then default
    #[test]
    fn source_resolution_order() {
        let settings = Settings {
            feed_url: Some("https://conf.example/data.json".into()),
            ..Settings::default()
        };

        let cli_url = Args::try_parse_from(["gemfeed", "--url", "https://cli.example/d.json"])
            .expect("parse");
        assert!(matches!(
            resolve_source(&cli_url, &settings),
            FeedSource::Remote(u) if u == "https://cli.example/d.json"
        ));

        let cli_file =
            Args::try_parse_from(["gemfeed", "--data-file", "feed.json"]).expect("parse");
        assert!(matches!(
            resolve_source(&cli_file, &settings),
            FeedSource::Local(p) if p == PathBuf::from("feed.json")
        ));

        let bare = Args::try_parse_from(["gemfeed"]).expect("parse");
        assert!(matches!(
            resolve_source(&bare, &settings),
            FeedSource::Remote(u) if u == "https://conf.example/data.json"
        ));

        assert!(matches!(
            resolve_source(&bare, &Settings::default()),
            FeedSource::Local(p) if p == PathBuf::from("./data.json")
        ));
    }
}
