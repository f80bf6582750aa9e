//! Event handling layer for the dashboard TUI.
//!
//! Terminal events are mapped onto named handlers. Handlers hold no pipeline
//! logic; each one delegates to an operation in [`crate::logic`]:
//! - `search`: query editing, each keystroke re-runs the search
//! - `navigation`: sort headers, page-size selector, previous/next
//! - `mouse`: clicks on headers, pager buttons, and the selector

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{AppState, SortColumn};

mod mouse;
pub mod navigation;
pub mod search;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            handle_key(ke, app)
        }
        CEvent::Mouse(m) => {
            mouse::handle_mouse_event(m, app);
            false
        }
        _ => false,
    }
}

/// What: Map one key press onto a dashboard operation.
///
/// Inputs:
/// - `ke`: Key event (press only)
/// - `app`: Mutable application state
///
/// Output:
/// - `true` when the key requests exit.
///
/// Details:
/// - Control chords and function keys are checked before text input so that
///   `Ctrl+T` sorts instead of typing a `t`.
fn handle_key(ke: KeyEvent, app: &mut AppState) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Esc => return true,
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::F(2) => navigation::handle_sort(app, SortColumn::Title),
        KeyCode::Char('t') if ctrl => navigation::handle_sort(app, SortColumn::Title),
        KeyCode::F(3) => navigation::handle_sort(app, SortColumn::Price),
        KeyCode::Char('p') if ctrl => navigation::handle_sort(app, SortColumn::Price),
        KeyCode::Left | KeyCode::PageUp => navigation::handle_prev(app),
        KeyCode::Right | KeyCode::PageDown => navigation::handle_next(app),
        KeyCode::Tab => navigation::handle_page_size_cycle(app, true),
        KeyCode::BackTab => navigation::handle_page_size_cycle(app, false),
        KeyCode::Char('u') if ctrl => search::handle_clear(app),
        KeyCode::Backspace => search::handle_backspace(app),
        KeyCode::Char(ch) if !ctrl && !ke.modifiers.contains(KeyModifiers::ALT) => {
            search::handle_input_char(app, ch);
        }
        _ => {}
    }
    false
}
