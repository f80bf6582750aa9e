use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources;
use crate::state::Product;

/// What: Receiving side of the runtime channels, owned by the event loop.
///
/// Details:
/// - Terminal events flow from the blocking reader thread; the catalog arrives
///   once from the fetch worker.
/// - No sender is kept here, so a receiver closes once its worker is gone.
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the reader thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Products from the catalog worker (sent once).
    pub catalog_rx: mpsc::UnboundedReceiver<Vec<Product>>,
}

/// Sending side of the runtime channels, moved into the workers.
pub struct WorkerSenders {
    /// Handed to the terminal event reader.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Handed to the catalog worker.
    pub catalog_tx: mpsc::UnboundedSender<Vec<Product>>,
}

impl Channels {
    /// What: Create the event and catalog channels with the cancel flag cleared.
    ///
    /// Output:
    /// - Receivers for the event loop and senders for the workers.
    pub fn new() -> (Self, WorkerSenders) {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (catalog_tx, catalog_rx) = mpsc::unbounded_channel::<Vec<Product>>();
        (
            Self {
                event_rx,
                event_thread_cancelled: Arc::new(AtomicBool::new(false)),
                catalog_rx,
            },
            WorkerSenders {
                event_tx,
                catalog_tx,
            },
        )
    }
}

/// What: Spawn the one-shot catalog fetch.
///
/// Inputs:
/// - `url`: Catalog endpoint
/// - `catalog_tx`: Channel receiving the fetched products
///
/// Details:
/// - The fetch never fails from the caller's view; an unreachable or broken
///   source yields an empty list, which is still sent so the UI leaves its
///   loading state.
pub fn spawn_catalog_worker(url: String, catalog_tx: mpsc::UnboundedSender<Vec<Product>>) {
    tokio::spawn(async move {
        let items = sources::fetch_products(&url).await;
        tracing::debug!(count = items.len(), "[Runtime] catalog worker finished");
        let _ = catalog_tx.send(items);
    });
}

/// What: Spawn the blocking terminal event reader.
///
/// Inputs:
/// - `headless`: When `true`, no reader is started and `event_tx` is dropped,
///   closing the event channel
/// - `event_tx`: Channel receiving terminal events
/// - `event_thread_cancelled`: Flag checked between polls to stop the thread
///
/// Details:
/// - Polls with a 50ms timeout so the cancel flag is observed promptly on exit.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        loop {
            if event_thread_cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_thread_cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        // Receiver dropped on exit.
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "[Runtime] transient event read error");
                    }
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}
