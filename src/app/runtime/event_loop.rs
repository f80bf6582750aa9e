use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::logic;
use crate::state::{AppState, Product};
use crate::ui::ui;

use super::background::Channels;

/// What: Install the fetched catalog into the application state.
///
/// Inputs:
/// - `app`: Application state
/// - `items`: Products from the catalog worker (empty on failure)
///
/// Details:
/// - Search re-runs so a query typed during loading applies to the new data.
pub fn handle_catalog(app: &mut AppState, items: Vec<Product>) {
    if items.is_empty() {
        tracing::info!("[Runtime] catalog empty or unavailable");
    }
    logic::load_catalog(&mut app.view, items);
    app.catalog_loaded = true;
}

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
///
/// Details:
/// - A closed channel disables its branch; once every worker has hung up
///   (headless run after the catalog landed) the loop exits.
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(ev, app)
        }
        Some(items) = channels.catalog_rx.recv() => {
            handle_catalog(app, items);
            false
        }
        else => true,
    }
}

/// What: Drive rendering and message handling until exit is requested.
///
/// Inputs:
/// - `terminal`: Terminal to draw into; `None` in headless mode
/// - `app`: Application state
/// - `channels`: Communication channels
///
/// Details:
/// - Draws once before waiting on each message, so every state change is
///   visible on the next frame.
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "[Runtime] frame draw failed");
        }
        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
