//! Configuration: on-disk locations, `settings.conf`, the key/value store used
//! for preference persistence, and backend origin resolution.

/// Backend origin resolution.
mod backend;
/// Config directory layout.
mod paths;
/// `settings.conf` parsing.
mod settings;
/// Durable key/value storage.
mod store;

pub use backend::{BACKEND_URL_ENV, backend_url_from_env, normalize_origin, resolve_backend_url};
pub use paths::{config_dir, logs_dir, settings_path};
pub use settings::{Settings, load_settings, parse_settings};
pub use store::{KeyValueStore, MemoryStore, SettingsFile, normalize_key, strip_inline_comment};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize tests that touch `HOME` or other env vars.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
