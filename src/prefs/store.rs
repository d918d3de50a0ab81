use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};

use super::types::{Language, Preferences, ThemeMode};
use crate::config::KeyValueStore;

/// Storage key holding the language code (`en` / `hi`).
pub const LANGUAGE_KEY: &str = "language";
/// Storage key holding the theme (`light` / `dark`), used only when theme persistence is enabled.
pub const THEME_KEY: &str = "theme";

/// Work item for the persistence writer.
enum PersistOp {
    /// Store `value` under `key`.
    Write {
        /// Storage key.
        key: &'static str,
        /// Value to store.
        value: &'static str,
    },
    /// Signal once every earlier write has been applied.
    Barrier(oneshot::Sender<()>),
}

/// What: Single source of truth for language and theme.
///
/// Details:
/// - Mutation is optimistic: subscribers see the new value before it reaches storage.
/// - Writes are applied by one background task in enqueue order, so the stored value
///   converges on the in-memory value once [`PreferenceStore::flush`] returns.
/// - Storage failures are logged and never rolled back or retried.
pub struct PreferenceStore {
    /// Current snapshot plus change notification for subscribers.
    state: watch::Sender<Preferences>,
    /// Queue feeding the persistence writer.
    persist_tx: mpsc::UnboundedSender<PersistOp>,
    /// Backing store, also used directly for startup reads.
    storage: Arc<dyn KeyValueStore>,
    /// Whether theme changes are persisted and restored.
    persist_theme: bool,
}

impl PreferenceStore {
    /// What: Create a store with default preferences and start its persistence writer.
    ///
    /// Inputs:
    /// - `storage`: Durable key/value store.
    /// - `persist_theme`: Persist/restore the theme as well as the language.
    ///
    /// Details:
    /// - Must be called from within a tokio runtime; the writer is a spawned task.
    /// - Call [`PreferenceStore::initialize`] to restore persisted values.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>, persist_theme: bool) -> Self {
        let (state, _) = watch::channel(Preferences::default());
        let (persist_tx, persist_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(Arc::clone(&storage), persist_rx));
        Self {
            state,
            persist_tx,
            storage,
            persist_theme,
        }
    }

    /// What: Restore persisted preferences.
    ///
    /// Details:
    /// - A stored language of exactly `en` or `hi` replaces the default; anything else
    ///   (absent, unknown, unreadable) leaves `English` in place.
    /// - The theme is restored only when theme persistence is enabled.
    pub async fn initialize(&self) {
        if let Some(code) = self.read_key(LANGUAGE_KEY).await {
            match Language::from_code(&code) {
                Some(lang) => {
                    self.state.send_modify(|p| p.language = lang);
                    tracing::info!(language = %lang, "restored language preference");
                }
                None => tracing::warn!(value = %code, "ignoring invalid persisted language"),
            }
        }
        if self.persist_theme
            && let Some(key) = self.read_key(THEME_KEY).await
        {
            if let Some(theme) = ThemeMode::from_config_key(&key) {
                self.state.send_modify(|p| p.theme = theme);
                tracing::info!(theme = theme.as_config_key(), "restored theme preference");
            } else {
                tracing::warn!(value = %key, "ignoring invalid persisted theme");
            }
        }
    }

    /// Read a key off the async thread; failures are logged and read as absent.
    async fn read_key(&self, key: &'static str) -> Option<String> {
        let storage = Arc::clone(&self.storage);
        match tokio::task::spawn_blocking(move || storage.get(key)).await {
            Ok(Ok(value)) => value,
            Ok(Err(e)) => {
                tracing::warn!(key, error = %e, "failed to load preference");
                None
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "preference read task failed");
                None
            }
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn current(&self) -> Preferences {
        *self.state.borrow()
    }

    /// Current display language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.state.borrow().language
    }

    /// Current color theme.
    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.state.borrow().theme
    }

    /// Receiver notified on every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.state.subscribe()
    }

    /// What: Flip the language and queue it for persistence.
    ///
    /// Output:
    /// - The new language, already visible to readers and subscribers.
    pub fn toggle_language(&self) -> Language {
        let mut next = Language::default();
        self.state.send_modify(|p| {
            p.language = p.language.toggled();
            next = p.language;
        });
        tracing::info!(language = %next, "language toggled");
        self.enqueue(LANGUAGE_KEY, next.code());
        next
    }

    /// What: Flip the theme.
    ///
    /// Details:
    /// - In-memory only unless theme persistence is enabled in settings.
    pub fn toggle_theme(&self) -> ThemeMode {
        let mut next = ThemeMode::default();
        self.state.send_modify(|p| {
            p.theme = p.theme.toggled();
            next = p.theme;
        });
        tracing::info!(theme = next.as_config_key(), "theme toggled");
        if self.persist_theme {
            self.enqueue(THEME_KEY, next.as_config_key());
        }
        next
    }

    /// Wait until every write queued so far has been attempted.
    pub async fn flush(&self) {
        let (tx, rx) = oneshot::channel();
        if self.persist_tx.send(PersistOp::Barrier(tx)).is_ok() {
            let _ = rx.await;
        }
    }

    /// Queue a write; a stopped writer is logged, never fatal.
    fn enqueue(&self, key: &'static str, value: &'static str) {
        if self
            .persist_tx
            .send(PersistOp::Write { key, value })
            .is_err()
        {
            tracing::warn!(key, value, "preference writer stopped; change not persisted");
        }
    }
}

/// What: Apply queued preference writes in order.
///
/// Details:
/// - Each write runs on the blocking pool so file I/O never stalls the UI task.
/// - Exits when the owning store is dropped.
async fn run_writer(
    storage: Arc<dyn KeyValueStore>,
    mut rx: mpsc::UnboundedReceiver<PersistOp>,
) {
    while let Some(op) = rx.recv().await {
        match op {
            PersistOp::Write { key, value } => {
                let s = Arc::clone(&storage);
                match tokio::task::spawn_blocking(move || s.set(key, value)).await {
                    Ok(Ok(())) => tracing::debug!(key, value, "preference persisted"),
                    Ok(Err(e)) => {
                        tracing::warn!(key, value, error = %e, "failed to save preference");
                    }
                    Err(e) => tracing::warn!(key, error = %e, "preference write task failed"),
                }
            }
            PersistOp::Barrier(done) => {
                let _ = done.send(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::config::MemoryStore;

    /// Store whose reads and writes always fail.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> io::Result<Option<String>> {
            Err(io::Error::other("disk on fire"))
        }
        fn set(&self, _key: &str, _value: &str) -> io::Result<()> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[tokio::test]
    /// What: Language after N toggles depends only on the parity of N.
    async fn toggle_parity_from_default() {
        let store = PreferenceStore::new(Arc::new(MemoryStore::new()), false);
        for n in 1..=7 {
            store.toggle_language();
            let expected = if n % 2 == 0 {
                Language::English
            } else {
                Language::Hindi
            };
            assert_eq!(store.language(), expected, "after {n} toggles");
        }
    }

    #[tokio::test]
    /// What: Toggling from `en` persists `hi` once the write completes.
    async fn toggle_persists_language_code() {
        let storage = Arc::new(MemoryStore::new());
        let store = PreferenceStore::new(storage.clone(), false);
        assert_eq!(store.toggle_language(), Language::Hindi);
        store.flush().await;
        assert_eq!(storage.get(LANGUAGE_KEY).expect("read").as_deref(), Some("hi"));

        store.toggle_language();
        store.toggle_language();
        store.toggle_language();
        store.flush().await;
        assert_eq!(store.language(), Language::English);
        assert_eq!(storage.get(LANGUAGE_KEY).expect("read").as_deref(), Some("en"));
    }

    #[tokio::test]
    async fn initialize_restores_valid_language_only() {
        let store = PreferenceStore::new(Arc::new(MemoryStore::with_entries([("language", "hi")])), false);
        store.initialize().await;
        assert_eq!(store.language(), Language::Hindi);

        let store = PreferenceStore::new(Arc::new(MemoryStore::with_entries([("language", "fr")])), false);
        store.initialize().await;
        assert_eq!(store.language(), Language::English);
    }

    #[tokio::test]
    /// What: Theme is not persisted or restored unless opted in.
    async fn theme_persistence_is_opt_in() {
        let storage = Arc::new(MemoryStore::with_entries([("theme", "dark")]));
        let store = PreferenceStore::new(storage.clone(), false);
        store.initialize().await;
        assert_eq!(store.theme(), ThemeMode::Light);
        store.toggle_theme();
        store.toggle_theme();
        store.flush().await;
        assert_eq!(storage.get(THEME_KEY).expect("read").as_deref(), Some("dark"));

        let storage = Arc::new(MemoryStore::with_entries([("theme", "dark")]));
        let store = PreferenceStore::new(storage.clone(), true);
        store.initialize().await;
        assert_eq!(store.theme(), ThemeMode::Dark);
        assert_eq!(store.toggle_theme(), ThemeMode::Light);
        store.flush().await;
        assert_eq!(storage.get(THEME_KEY).expect("read").as_deref(), Some("light"));
    }

    #[tokio::test]
    /// What: Storage failures keep the in-memory value and never panic.
    async fn storage_failures_are_non_fatal() {
        let store = PreferenceStore::new(Arc::new(BrokenStore), true);
        store.initialize().await;
        assert_eq!(store.current(), Preferences::default());
        assert_eq!(store.toggle_language(), Language::Hindi);
        store.flush().await;
        assert_eq!(store.language(), Language::Hindi);
    }

    #[tokio::test]
    async fn subscribers_see_changes_before_persistence() {
        let store = PreferenceStore::new(Arc::new(MemoryStore::new()), false);
        let mut rx = store.subscribe();
        store.toggle_theme();
        assert!(rx.has_changed().expect("sender alive"));
        assert_eq!(rx.borrow_and_update().theme, ThemeMode::Dark);
    }
}
