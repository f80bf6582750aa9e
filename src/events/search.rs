//! Search input editing.

use crate::logic;
use crate::state::AppState;

/// What: Append a typed character to the query and re-run the search.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `ch`: Character to append
///
/// Output:
/// - Updates `app.view.query`, the filtered list, and resets to page 1.
pub fn handle_input_char(app: &mut AppState, ch: char) {
    app.view.query.push(ch);
    logic::apply_search(&mut app.view);
}

/// What: Delete the last query character and re-run the search.
///
/// Inputs:
/// - `app`: Mutable application state
///
/// Output:
/// - Pops one character; the search re-runs even when the query was already empty.
pub fn handle_backspace(app: &mut AppState) {
    app.view.query.pop();
    logic::apply_search(&mut app.view);
}

/// Clear the query entirely and re-run the search.
pub fn handle_clear(app: &mut AppState) {
    logic::set_query(&mut app.view, String::new());
}
