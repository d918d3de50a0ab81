use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use super::send_all;
use crate::prefs::PreferenceStore;
use crate::state::{AppState, Request, Tab};

/// What: Keys that work on every tab.
///
/// Output:
/// - `Some(quit)` when the key was consumed, `None` to let the tab handle it.
pub fn handle_global_key(
    ke: KeyEvent,
    app: &mut AppState,
    prefs: &PreferenceStore,
    req_tx: &mpsc::UnboundedSender<Request>,
) -> Option<bool> {
    let target = match ke.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(true),
        KeyCode::Tab | KeyCode::Right => Some(app.tab.next()),
        KeyCode::BackTab | KeyCode::Left => Some(app.tab.prev()),
        KeyCode::Char(c @ '1'..='5') => c
            .to_digit(10)
            .and_then(|d| usize::try_from(d).ok())
            .and_then(|d| Tab::from_index(d - 1)),
        KeyCode::Char('l') => {
            let lang = prefs.toggle_language();
            tracing::info!(language = lang.code(), "language toggled");
            app.prefs = prefs.current();
            return Some(false);
        }
        KeyCode::Char('t') => {
            let theme = prefs.toggle_theme();
            tracing::info!(theme = theme.as_config_key(), "theme toggled");
            app.prefs = prefs.current();
            return Some(false);
        }
        KeyCode::Char('r') => {
            let reqs = app.refresh();
            send_all(req_tx, reqs);
            return Some(false);
        }
        _ => None,
    };
    let tab = target?;
    let reqs = app.activate(tab);
    send_all(req_tx, reqs);
    Some(false)
}
