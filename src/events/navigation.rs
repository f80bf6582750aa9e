//! Sort headers, page-size selector, and pager triggers.

use crate::logic;
use crate::state::{AppState, SortColumn};

/// What: Activate a sortable column header.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `column`: Column whose header was activated
///
/// Output:
/// - Toggles direction on the active column, otherwise sorts ascending by `column`.
pub fn handle_sort(app: &mut AppState, column: SortColumn) {
    logic::apply_sort(&mut app.view, column);
}

/// Go to the previous page when one exists.
pub fn handle_prev(app: &mut AppState) {
    logic::prev_page(&mut app.view);
}

/// Go to the next page when one exists.
pub fn handle_next(app: &mut AppState) {
    logic::next_page(&mut app.view);
}

/// What: Step the page-size selector to the adjacent option.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `forward`: `true` for the next larger option, `false` for the previous
///
/// Output:
/// - Applies the new page size and resets to page 1.
///
/// Details:
/// - Options wrap around at both ends.
pub fn handle_page_size_cycle(app: &mut AppState, forward: bool) {
    let size = app.adjacent_page_size(forward);
    logic::set_page_size(&mut app.view, size);
}
