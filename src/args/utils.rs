//! Shared utilities for argument processing.

use swadeshi::config::KeyValueStore;
use swadeshi::prefs::{LANGUAGE_KEY, Language};

/// What: Determine the log level based on command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level`; `RUST_LOG` still wins at filter construction.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Pick the language for one-shot output.
///
/// Details:
/// - `--lang` wins; otherwise the saved preference; otherwise English.
/// - Unreadable storage is logged and treated as unset.
pub fn resolve_cli_language(cli: Option<&str>, storage: &dyn KeyValueStore) -> Language {
    if let Some(lang) = cli.and_then(Language::from_code) {
        return lang;
    }
    match storage.get(LANGUAGE_KEY) {
        Ok(Some(code)) => Language::from_code(&code).unwrap_or_default(),
        Ok(None) => Language::default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read saved language");
            Language::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use swadeshi::config::MemoryStore;

    #[test]
    /// What: Verbose maps to debug, otherwise the explicit level is used.
    fn verbose_overrides_level() {
        let args = crate::args::Args::try_parse_from(["swadeshi", "-v", "--log-level", "warn"])
            .expect("parse");
        assert_eq!(determine_log_level(&args), "debug");
        let args =
            crate::args::Args::try_parse_from(["swadeshi", "--log-level", "warn"]).expect("parse");
        assert_eq!(determine_log_level(&args), "warn");
    }

    #[test]
    /// What: Flag beats saved preference beats default.
    fn cli_language_precedence() {
        let saved = MemoryStore::with_entries([(LANGUAGE_KEY, "hi")]);
        assert_eq!(resolve_cli_language(Some("en"), &saved), Language::English);
        assert_eq!(resolve_cli_language(None, &saved), Language::Hindi);
        let junk = MemoryStore::with_entries([(LANGUAGE_KEY, "fr")]);
        assert_eq!(resolve_cli_language(None, &junk), Language::English);
        assert_eq!(
            resolve_cli_language(None, &MemoryStore::new()),
            Language::English
        );
    }
}
