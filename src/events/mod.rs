//! Keyboard handling: turns key presses into state changes and network requests.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::prefs::PreferenceStore;
use crate::state::{AppState, Request};

mod global;
mod modals;
mod tabs;
#[cfg(test)]
mod tests;

/// Queue `requests` for the network worker.
pub(crate) fn send_all(req_tx: &mpsc::UnboundedSender<Request>, requests: Vec<Request>) {
    for req in requests {
        if req_tx.send(req).is_err() {
            tracing::warn!("network worker is gone; dropping request");
            return;
        }
    }
}

/// What: Dispatch one terminal event.
///
/// Inputs:
/// - `prefs`: Preference store; toggles go through it and `app.prefs` is refreshed afterwards.
/// - `req_tx`: Channel to the network worker.
///
/// Output:
/// - `true` when the application should exit.
///
/// Details:
/// - Open overlays capture every key. Otherwise global keys (tabs, language, theme,
///   refresh, quit) are tried before the active tab's own keys.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    prefs: &PreferenceStore,
    req_tx: &mpsc::UnboundedSender<Request>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if is_interrupt(&ke) {
        return true;
    }
    if !app.modal.is_none() {
        modals::handle_modal_key(ke, app, req_tx);
        return false;
    }
    if let Some(quit) = global::handle_global_key(ke, app, prefs, req_tx) {
        return quit;
    }
    tabs::handle_tab_key(ke, app, req_tx);
    false
}

fn is_interrupt(ke: &KeyEvent) -> bool {
    ke.modifiers.contains(KeyModifiers::CONTROL) && matches!(ke.code, KeyCode::Char('c'))
}
