use std::io::Stdout;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::prefs::PreferenceStore;
use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;

/// What: Drive the UI until the user quits.
///
/// Inputs:
/// - `terminal`: `None` in headless mode; nothing is drawn.
///
/// Details:
/// - One frame is drawn per loop turn, before waiting on the next message.
/// - Worker replies are applied through the owning screen's ticket, so late or
///   superseded loads are ignored.
pub async fn run_event_loop(
    app: &mut AppState,
    channels: &mut Channels,
    prefs: &PreferenceStore,
    mut terminal: Option<&mut Terminal<CrosstermBackend<Stdout>>>,
) {
    let mut prefs_rx = prefs.subscribe();
    loop {
        if let Some(t) = terminal.as_deref_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "failed to draw frame");
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, app, prefs, &channels.req_tx) {
                    break;
                }
            }
            Some(reply) = channels.reply_rx.recv() => {
                app.apply_reply(reply);
            }
            Ok(()) = prefs_rx.changed() => {
                app.prefs = *prefs_rx.borrow_and_update();
            }
            Some(()) = channels.tick_rx.recv() => {}
            else => break,
        }
    }
}
