use ratatui::{Terminal, backend::CrosstermBackend};

use crate::state::AppState;
use crate::theme::Settings;

use super::terminal::TerminalGuard;

mod background;
mod event_loop;

use background::{Channels, spawn_catalog_worker, spawn_event_thread};
use event_loop::run_event_loop;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the dashboard TUI end-to-end: initialize terminal and state, start the
/// catalog fetch and the event reader, drive the event loop, and restore the terminal.
///
/// Inputs:
/// - `settings`: Effective settings (file values with command-line overrides applied)
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on terminal setup or restore failures.
///
/// Details:
/// - The dashboard is interactive immediately; input before the catalog lands
///   operates on an empty dataset and is reapplied once it arrives.
/// - Once terminal setup succeeds the terminal is restored on every exit path,
///   including errors and panics, through [`TerminalGuard`].
/// - `PRODUCT_DASH_TEST_HEADLESS=1` skips raw-mode setup and the event reader;
///   the run then ends as soon as the catalog has been installed.
pub async fn run(settings: Settings) -> Result<()> {
    let headless = std::env::var("PRODUCT_DASH_TEST_HEADLESS").ok().as_deref() == Some("1");
    let guard = if headless {
        TerminalGuard::headless()
    } else {
        TerminalGuard::enter()?
    };
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::from_settings(&settings);
    let (mut channels, senders) = Channels::new();

    tracing::info!(url = %settings.catalog_url, "[Runtime] fetching catalog");
    spawn_catalog_worker(settings.catalog_url.clone(), senders.catalog_tx);
    spawn_event_thread(
        headless,
        senders.event_tx,
        channels.event_thread_cancelled.clone(),
    );

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    tracing::debug!(catalog_loaded = app.catalog_loaded, "[Runtime] main loop exited");
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    drop(terminal);
    guard.release()
}
