//! Durable key/value storage backing user preferences.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Header written when `settings.conf` is created from scratch.
pub const SETTINGS_SKELETON_CONTENT: &str = "# Swadeshi client settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments.\n\
#\n\
# backend_url          Origin of the Swadeshi Hind API (SWADESHI_BACKEND_URL overrides it)\n\
# language             en | hi (written by the language toggle)\n\
# persist_theme        true | false (remember light/dark across restarts)\n\
# request_timeout_secs 0 disables the per-request timeout\n\
#\n";

/// What: Minimal string key/value store used for preference persistence.
///
/// Details:
/// - Implementations must be usable from a blocking worker thread.
/// - Errors are returned, never swallowed; callers decide whether they are fatal.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    /// - Returns `Err` when the backing storage cannot be read.
    fn get(&self, key: &str) -> io::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// - Returns `Err` when the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
}

/// What: Normalize a settings key the way the parser does.
///
/// Inputs:
/// - `raw`: Key as written by the user (e.g., `Backend-URL`).
///
/// Output:
/// - Lowercase key with `.`, `-` and spaces mapped to `_`.
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Drop a trailing inline comment from a value.
///
/// Details:
/// - Only `#` or `//` preceded by whitespace start a comment, so URLs such as
///   `http://host/#frag` survive intact.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for i in 1..bytes.len() {
        if !bytes[i - 1].is_ascii_whitespace() {
            continue;
        }
        if bytes[i] == b'#' || s[i..].starts_with("//") {
            return s[..i].trim();
        }
    }
    s.trim()
}

/// What: Split a settings line into `(normalized_key, value)`.
///
/// Output:
/// - `None` for blank lines, comments, and lines without `=`.
#[must_use]
pub fn split_setting_line(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (k, v) = trimmed.split_once('=')?;
    Some((normalize_key(k), strip_inline_comment(v.trim())))
}

/// `key = value` file store, preserving comments and unrelated keys on rewrite.
pub struct SettingsFile {
    /// Location of the file on disk.
    path: PathBuf,
}

impl SettingsFile {
    /// Store backed by the file at `path`. Nothing is touched until the first read or write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for SettingsFile {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        let wanted = normalize_key(key);
        // Last occurrence wins, matching how the settings parser overwrites.
        Ok(content
            .lines()
            .filter_map(split_setting_line)
            .filter(|(k, _)| *k == wanted)
            .map(|(_, v)| v.to_string())
            .last())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let existing = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e),
        };
        let mut lines: Vec<String> = if existing.trim().is_empty() {
            SETTINGS_SKELETON_CONTENT
                .lines()
                .map(ToString::to_string)
                .collect()
        } else {
            existing.lines().map(ToString::to_string).collect()
        };
        let wanted = normalize_key(key);
        let mut replaced = false;
        for line in &mut lines {
            let matches = split_setting_line(line).is_some_and(|(k, _)| k == wanted);
            if matches {
                *line = format!("{wanted} = {value}");
                replaced = true;
            }
        }
        if !replaced {
            lines.push(format!("{wanted} = {value}"));
        }
        let mut content = lines.join("\n");
        content.push('\n');
        // Write-then-rename keeps a crash from truncating the user's file.
        let tmp = self.path.with_extension("conf.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)
    }
}

/// In-memory store for headless runs and tests.
#[derive(Default)]
pub struct MemoryStore {
    /// Stored entries.
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (normalize_key(k), v.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        let guard = self
            .entries
            .lock()
            .map_err(|_| io::Error::other("memory store poisoned"))?;
        Ok(guard.get(&normalize_key(key)).cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| io::Error::other("memory store poisoned"))?;
        guard.insert(normalize_key(key), value.to_string());
        Ok(())
    }
}
