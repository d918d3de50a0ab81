//! Command-line argument definitions.

use std::process::ExitCode;

use clap::Parser;
use swadeshi::api::ApiClient;
use swadeshi::i18n::Translations;
use swadeshi::prefs::Language;

use crate::args::fetch;

/// Swadeshi - terminal client for the Swadeshi Hind news, quotes, games and volunteering backend
#[derive(Parser, Debug)]
#[command(name = "swadeshi")]
#[command(version)]
#[command(about = "Terminal client for the Swadeshi Hind backend", long_about = None)]
pub struct Args {
    /// Backend origin, e.g. https://api.example.in (overrides SWADESHI_BACKEND_URL and settings.conf)
    #[arg(long, value_name = "URL")]
    pub backend_url: Option<String>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Language for command-line output (en or hi); defaults to the saved preference
    #[arg(long, value_parser = ["en", "hi"])]
    pub lang: Option<String>,

    /// Print the news feed with truth scores and exit
    #[arg(short = 'n', long)]
    pub news: bool,

    /// Print today's quote and exit
    #[arg(short = 'q', long)]
    pub quote: bool,

    /// Check that the backend is reachable and exit
    #[arg(long)]
    pub ping: bool,
}

impl Args {
    /// Whether any flag asks for a one-shot mode instead of the TUI.
    #[must_use]
    pub const fn is_one_shot(&self) -> bool {
        self.news || self.quote || self.ping
    }
}

/// What: Run the one-shot modes requested on the command line.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `client`: Client bound to the resolved backend.
/// - `lang`: Language for printed text.
///
/// Output:
/// - `None` to continue into the TUI, `Some(code)` to exit with `code`.
///
/// Details:
/// - Modes run in the order ping, news, quote; the first failure stops the rest.
pub async fn process_args(args: &Args, client: &ApiClient, lang: Language) -> Option<ExitCode> {
    if !args.is_one_shot() {
        return None;
    }
    let tr = Translations::load();
    if args.ping && !fetch::handle_ping(client, &tr, lang).await {
        return Some(ExitCode::FAILURE);
    }
    if args.news && !fetch::handle_news(client, &tr, lang).await {
        return Some(ExitCode::FAILURE);
    }
    if args.quote && !fetch::handle_quote(client, &tr, lang).await {
        return Some(ExitCode::FAILURE);
    }
    Some(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Plain invocation launches the TUI with default logging.
    fn defaults_launch_tui() {
        let args = Args::try_parse_from(["swadeshi"]).expect("parse");
        assert!(!args.is_one_shot());
        assert_eq!(args.log_level, "info");
        assert!(args.backend_url.is_none());
        assert!(args.lang.is_none());
    }

    #[test]
    /// What: One-shot flags and the backend override are recognized.
    fn one_shot_flags_parse() {
        let args = Args::try_parse_from([
            "swadeshi",
            "--backend-url",
            "http://localhost:5000",
            "-n",
            "--quote",
            "--lang",
            "hi",
        ])
        .expect("parse");
        assert!(args.is_one_shot());
        assert!(args.news && args.quote && !args.ping);
        assert_eq!(args.backend_url.as_deref(), Some("http://localhost:5000"));
        assert_eq!(args.lang.as_deref(), Some("hi"));
    }

    #[test]
    /// What: Unknown language codes are rejected by the parser.
    fn unknown_language_rejected() {
        assert!(Args::try_parse_from(["swadeshi", "--lang", "fr"]).is_err());
    }
}
