use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::state::{Reply, Request};

/// Redraw cadence while idle; keeps the loading indicator and clock-driven text fresh.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// What: Perform one backend call and wrap its outcome for the event loop.
///
/// Inputs:
/// - `client`: Shared API client.
/// - `req`: Work item produced by the event layer.
///
/// Output:
/// - The matching [`Reply`], carrying the load ticket where there is one.
pub async fn serve_request(client: &ApiClient, req: Request) -> Reply {
    match req {
        Request::LoadPolls(ticket) => Reply::Polls(ticket, client.fetch_polls().await),
        Request::LoadNews(ticket) => Reply::News(ticket, client.fetch_news().await),
        Request::LoadQuote(ticket) => Reply::Quote(ticket, client.fetch_today_quote().await),
        Request::Vote(job) => Reply::Vote(
            client
                .vote_poll(&job.poll_id, job.vote, Some(&job.token))
                .await,
        ),
        Request::SubmitScore(job) => Reply::Score(
            client
                .submit_game_score(&job.score, Some(&job.token))
                .await,
        ),
        Request::SubmitVolunteer(job) => Reply::Volunteer(
            client
                .submit_volunteer(&job.application, Some(&job.token))
                .await,
        ),
    }
}

/// What: Serve requests concurrently, one spawned task per request.
///
/// Details:
/// - Replies may arrive out of order; tickets let the state drop stale ones.
/// - Exits when every request sender is gone.
pub fn spawn_network_worker(
    client: ApiClient,
    mut req_rx: mpsc::UnboundedReceiver<Request>,
    reply_tx: mpsc::UnboundedSender<Reply>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            tracing::debug!(?req, "dispatching request");
            let client = client.clone();
            let reply_tx = reply_tx.clone();
            tokio::spawn(async move {
                let reply = serve_request(&client, req).await;
                if reply_tx.send(reply).is_err() {
                    tracing::debug!("event loop gone; dropping reply");
                }
            });
        }
        tracing::debug!("network worker stopped");
    });
}

/// Spawn the periodic redraw tick.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Read terminal input on a dedicated OS thread.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started.
/// - `event_tx`: Destination for terminal events.
/// - `cancelled`: Set by cleanup; checked between short polls so exit is prompt.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "transient input read error"),
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "input poll error");
                }
            }
        }
    });
}
