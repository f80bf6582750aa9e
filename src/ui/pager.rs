use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::view::DashboardView;
use crate::state::AppState;
use crate::theme::theme;

/// Label of the previous-page trigger.
const PREV_LABEL: &str = "[◀ Prev]";
/// Label of the next-page trigger.
const NEXT_LABEL: &str = "[Next ▶]";

/// What: Style a navigation trigger by enablement.
///
/// Inputs:
/// - `enabled`: Whether the trigger is active
///
/// Output:
/// - Bold accent style when enabled; dim style when disabled.
fn button_style(enabled: bool) -> Style {
    let th = theme();
    if enabled {
        Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.surface2)
    }
}

/// Width of `s` in terminal cells, clamped to `u16`.
fn cell_width(s: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(s)).unwrap_or(u16::MAX)
}

/// What: Render the pager line and record the button and selector rectangles.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (rects are written back)
/// - `dash`: Projected dashboard view
/// - `area`: Target rectangle for the pager block
///
/// Output:
/// - Draws `[◀ Prev]  Page X / Y  [Next ▶]   Rows: N ▾` with disabled triggers dimmed.
///
/// Details:
/// - Rectangles are recorded for both triggers even when disabled; the click
///   handlers go through the same no-op guards as the keyboard.
pub fn render_pager(f: &mut Frame, app: &mut AppState, dash: &DashboardView, area: Rect) {
    let th = theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface1));
    let inner = block.inner(area);

    let page_text = format!("  {}  ", dash.page.label(&app.display.page_label));
    let rows_text = format!("Rows: {} ▾", app.view.page_size);
    let gap = "   ";
    let line = Line::from(vec![
        Span::styled(PREV_LABEL, button_style(dash.nav.prev_enabled)),
        Span::styled(page_text.clone(), Style::default().fg(th.text)),
        Span::styled(NEXT_LABEL, button_style(dash.nav.next_enabled)),
        Span::raw(gap),
        Span::styled(rows_text.clone(), Style::default().fg(th.mauve)),
    ]);
    f.render_widget(
        Paragraph::new(line)
            .style(Style::default().bg(th.base))
            .block(block),
        area,
    );

    let prev_w = cell_width(PREV_LABEL);
    let next_x = inner
        .x
        .saturating_add(prev_w)
        .saturating_add(cell_width(&page_text));
    let next_w = cell_width(NEXT_LABEL);
    let rows_x = next_x.saturating_add(next_w).saturating_add(cell_width(gap));
    app.prev_button_rect = Some((inner.x, inner.y, prev_w, 1));
    app.next_button_rect = Some((next_x, inner.y, next_w, 1));
    app.page_size_rect = Some((rows_x, inner.y, cell_width(&rows_text), 1));
}
