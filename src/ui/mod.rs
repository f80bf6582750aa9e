//! Terminal rendering for the dashboard.
//!
//! [`view`] derives what to show from the view state; the other submodules
//! only draw that projection and record clickable rectangles on [`AppState`].

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

mod pager;
mod search;
mod table;
pub mod view;

pub use view::{
    DashboardView, ImageCell, NavState, PageIndicator, ProductRow, SortGlyph, TableBody, project,
};

/// Key hints shown on the bottom line.
const KEY_HINTS: &str =
    "type to search · F2/^T sort title · F3/^P sort price · ←/→ page · Tab rows · Esc quit";

/// What: Render one full frame of the dashboard.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable application state (clickable rectangles are refreshed)
///
/// Output:
/// - Draws search input, product table, pager, and key hints.
///
/// Details:
/// - The display is re-derived from `app.view` on every frame, so no widget
///   keeps state of its own.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let dash = project(&app.view, &app.display);

    search::render_search(f, app, chunks[0]);
    table::render_table(f, app, &dash, chunks[1]);
    pager::render_pager(f, app, &dash, chunks[2]);

    let hints = Paragraph::new(Line::from(Span::styled(
        KEY_HINTS,
        Style::default().fg(th.overlay1),
    )))
    .style(Style::default().bg(th.mantle));
    f.render_widget(hints, chunks[3]);
}
