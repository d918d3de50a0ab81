use std::sync::Arc;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::api::ApiClient;
use crate::config::KeyValueStore;
use crate::events::send_all;
use crate::i18n::Translations;
use crate::prefs::PreferenceStore;
use crate::state::{AppState, Tab};

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod cleanup;
mod event_loop;

pub use background::serve_request;
use background::{spawn_event_thread, spawn_tick_worker};
use channels::Channels;
use cleanup::cleanup_on_exit;
use event_loop::run_event_loop;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Environment variable that, when `1`, skips terminal setup and input reading.
pub const HEADLESS_ENV: &str = "SWADESHI_TEST_HEADLESS";

/// Inputs to [`run`].
pub struct RunOptions {
    /// Client bound to the resolved backend origin (or to none).
    pub client: ApiClient,
    /// Durable store for language/theme.
    pub storage: Arc<dyn KeyValueStore>,
    /// Whether the theme survives restarts.
    pub persist_theme: bool,
}

/// What: Run the TUI end-to-end.
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` only when the terminal cannot be set up
///   or restored.
///
/// Details:
/// - Restores persisted preferences before the first frame.
/// - Mounts the Home tab, which starts the first poll load.
/// - With [`HEADLESS_ENV`]`=1` no terminal is touched and the loop runs until cancelled.
pub async fn run(opts: RunOptions) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");
    let mut terminal = if headless {
        None
    } else {
        setup_terminal()?;
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                restore_terminal()?;
                return Err(e.into());
            }
        }
    };

    let prefs = PreferenceStore::new(opts.storage, opts.persist_theme);
    prefs.initialize().await;
    let backend_configured = opts.client.base_url().is_some();
    let mut app = AppState::new(Translations::load(), prefs.current(), backend_configured);
    tracing::info!(
        language = %app.language(),
        theme = app.prefs.theme.as_config_key(),
        backend_configured,
        headless,
        "starting UI"
    );

    let mut channels = Channels::new(opts.client);
    spawn_tick_worker(channels.tick_tx.clone());
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        Arc::clone(&channels.event_thread_cancelled),
    );

    let initial = app.activate(Tab::Home);
    send_all(&channels.req_tx, initial);

    run_event_loop(&mut app, &mut channels, &prefs, terminal.as_mut()).await;
    cleanup_on_exit(&mut app, &channels, &prefs).await;

    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
