use std::sync::atomic::Ordering;

use crate::prefs::PreferenceStore;
use crate::state::AppState;

use super::channels::Channels;

/// What: Release runtime resources on exit.
///
/// Details:
/// - Detaches every screen so replies still in flight are dropped.
/// - Signals the input thread to stop.
/// - Waits for queued preference writes so the last toggle is on disk.
pub async fn cleanup_on_exit(app: &mut AppState, channels: &Channels, prefs: &PreferenceStore) {
    tracing::debug!("main loop exited; tearing down");
    app.teardown();
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    prefs.flush().await;
}
