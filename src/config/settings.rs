use std::fs;
use std::path::Path;
use std::time::Duration;

use super::store::split_setting_line;

/// User-configurable settings parsed from `settings.conf`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    /// Backend origin from the file; environment and CLI take precedence.
    pub backend_url: Option<String>,
    /// Persist and restore the light/dark choice. Off by default: only the
    /// language survives a restart unless the user opts in.
    pub persist_theme: bool,
    /// Per-request timeout; `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
}

/// What: Interpret common truthy spellings used across config files.
fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: Raw file content.
///
/// Output:
/// - Populated `Settings`; unknown keys and malformed values are ignored.
///
/// Details:
/// - `language`/`theme` keys belong to the preference store and are skipped here.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut settings = Settings::default();
    for (key, val) in content.lines().filter_map(split_setting_line) {
        match key.as_str() {
            "backend_url" | "backend" | "api_url" => {
                settings.backend_url = (!val.is_empty()).then(|| val.to_string());
            }
            "persist_theme" => settings.persist_theme = parse_bool(val),
            "request_timeout_secs" | "request_timeout" => {
                if let Ok(secs) = val.parse::<u64>() {
                    settings.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
                }
            }
            _ => {}
        }
    }
    settings
}

/// What: Load settings from `path`, falling back to defaults.
///
/// Details:
/// - A missing file is normal on first run and is not logged as a problem.
/// - Read failures are logged and produce defaults.
#[must_use]
pub fn load_settings(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => {
            let settings = parse_settings(&content);
            tracing::debug!(path = %path.display(), ?settings, "loaded settings");
            settings
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_settings_reads_known_keys() {
        let s = parse_settings(
            "# comment\nbackend_url = https://api.example.in\npersist-theme = yes\nrequest_timeout_secs = 12\nlanguage = hi\n",
        );
        assert_eq!(s.backend_url.as_deref(), Some("https://api.example.in"));
        assert!(s.persist_theme);
        assert_eq!(s.request_timeout, Some(Duration::from_secs(12)));
    }

    #[test]
    fn parse_settings_defaults_and_zero_timeout() {
        let s = parse_settings("request_timeout_secs = 0\nbackend_url =\npersist_theme = nope\n");
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn load_settings_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(load_settings(&dir.path().join("absent.conf")), Settings::default());
    }
}
