use ratatui::{
    Frame,
    layout::Rect,
    prelude::Position,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::AppState;
use crate::theme::theme;

/// What: Render the search input and place the cursor after the query.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (query text, load status)
/// - `area`: Target rectangle for the search block
///
/// Output:
/// - Draws `> query` inside a titled block; the block title notes when the
///   catalog is still loading.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let title = if app.catalog_loaded {
        "Search by title"
    } else {
        "Search by title (loading catalog…)"
    };
    let input_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(th.sapphire)),
        Span::styled(app.view.query.clone(), Style::default().fg(th.text)),
    ]);
    let input = Paragraph::new(input_line)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(th.mauve)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.mauve)),
        );
    f.render_widget(input, area);

    let right = area.x + area.width.saturating_sub(2);
    let caret_cols = u16::try_from(UnicodeWidthStr::width(app.view.query.as_str())).unwrap_or(u16::MAX);
    let x = std::cmp::min(area.x.saturating_add(1 + 2).saturating_add(caret_cols), right);
    let y = area.y + 1;
    f.set_cursor_position(Position::new(x, y));
}
