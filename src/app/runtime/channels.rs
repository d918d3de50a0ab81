use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::state::{Reply, Request};

use super::background::spawn_network_worker;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - The event loop owns every receiver; senders are cloned into the input thread,
///   the tick worker and the network worker.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub req_tx: mpsc::UnboundedSender<Request>,
    pub reply_rx: mpsc::UnboundedReceiver<Reply>,
    pub tick_tx: mpsc::UnboundedSender<()>,
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all channels and start the network worker bound to `client`.
    ///
    /// Details:
    /// - Must be called inside a tokio runtime.
    pub fn new(client: ApiClient) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (req_tx, req_rx) = mpsc::unbounded_channel::<Request>();
        let (reply_tx, reply_rx) = mpsc::unbounded_channel::<Reply>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        spawn_network_worker(client, req_rx, reply_tx);
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            req_tx,
            reply_rx,
            tick_tx,
            tick_rx,
        }
    }
}
