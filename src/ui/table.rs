use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};

use super::view::{COLUMN_COUNT, DashboardView, ProductRow, SortGlyph, TableBody};
use crate::state::AppState;
use crate::theme::theme;
use crate::util::truncate_to_width;

/// Column widths in display order: id, image, title, description, category, price.
const COLUMN_WIDTHS: [Constraint; COLUMN_COUNT] = [
    Constraint::Length(4),
    Constraint::Percentage(20),
    Constraint::Percentage(20),
    Constraint::Fill(1),
    Constraint::Length(14),
    Constraint::Length(10),
];

/// Gap between columns, shared by the table widget and the hit-test layout.
const COLUMN_SPACING: u16 = 1;

/// What: Split the table's inner area into its column rectangles.
///
/// Inputs:
/// - `inner`: Area inside the table border
///
/// Output:
/// - One rectangle per column, laid out exactly as the table widget lays them out.
fn column_rects(inner: Rect) -> Vec<Rect> {
    Layout::horizontal(COLUMN_WIDTHS)
        .flex(Flex::Start)
        .spacing(COLUMN_SPACING)
        .split(inner)
        .to_vec()
}

/// What: Build the header cell for a sortable column.
///
/// Inputs:
/// - `name`: Column name
/// - `glyph`: Sort direction indicator
///
/// Output:
/// - Cell with the name and glyph; active glyphs are highlighted.
fn sortable_header(name: &str, glyph: SortGlyph) -> Cell<'static> {
    let th = theme();
    let glyph_style = if glyph == SortGlyph::Neutral {
        Style::default().fg(th.overlay1)
    } else {
        Style::default().fg(th.yellow).add_modifier(Modifier::BOLD)
    };
    Cell::from(Line::from(vec![
        Span::raw(format!("{name} ")),
        Span::styled(glyph.symbol(), glyph_style),
    ]))
}

/// What: Build a table row for one product, fitted to the column widths.
///
/// Inputs:
/// - `row`: Projected product row
/// - `cols`: Column rectangles
///
/// Output:
/// - Single-line [`Row`] with the title emphasized and placeholder images dimmed.
fn product_row(row: &ProductRow, cols: &[Rect]) -> Row<'static> {
    let th = theme();
    let w = |i: usize| cols.get(i).map_or(0, |r| usize::from(r.width));
    let image_style = match row.image {
        super::view::ImageCell::Remote(_) => Style::default().fg(th.sapphire),
        super::view::ImageCell::Placeholder(_) => Style::default().fg(th.overlay1),
    };
    Row::new(vec![
        Cell::from(Span::styled(row.id.to_string(), Style::default().fg(th.subtext0))),
        Cell::from(Span::styled(
            truncate_to_width(row.image.reference(), w(1)),
            image_style,
        )),
        Cell::from(Span::styled(
            truncate_to_width(&row.title, w(2)),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Cell::from(Span::styled(
            truncate_to_width(&row.description, w(3)),
            Style::default().fg(th.overlay2),
        )),
        Cell::from(Span::styled(
            truncate_to_width(&row.category, w(4)),
            Style::default().fg(th.mauve),
        )),
        Cell::from(Span::styled(row.price.clone(), Style::default().fg(th.green))),
    ])
}

/// What: Render the product table and record the sortable header rectangles.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (header rects are written back)
/// - `dash`: Projected dashboard view
/// - `area`: Target rectangle for the table block
///
/// Output:
/// - Draws the header and either one row per product or a single "no data" row
///   spanning the full table width.
pub fn render_table(f: &mut Frame, app: &mut AppState, dash: &DashboardView, area: Rect) {
    let th = theme();
    let title = format!(
        "Products ({} of {})",
        app.view.filtered_items.len(),
        app.view.all_items.len()
    );
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(th.overlay1)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));
    let inner = block.inner(area);
    let cols = column_rects(inner);

    let header = Row::new(vec![
        Cell::from("ID"),
        Cell::from("Image"),
        sortable_header("Title", dash.title_glyph),
        Cell::from("Description"),
        Cell::from("Category"),
        sortable_header("Price", dash.price_glyph),
    ])
    .style(Style::default().fg(th.lavender).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows: Vec<Row> = match &dash.body {
        TableBody::Rows(rows) => rows.iter().map(|r| product_row(r, &cols)).collect(),
        TableBody::Empty { .. } => Vec::new(),
    };

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .flex(Flex::Start)
        .column_spacing(COLUMN_SPACING)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block);
    f.render_widget(table, area);

    let header_rect = |r: Option<&Rect>| r.map(|r| (r.x, inner.y, r.width, 1));
    app.title_header_rect = header_rect(cols.get(2));
    app.price_header_rect = header_rect(cols.get(5));

    if let TableBody::Empty { message } = &dash.body {
        // Header line plus its bottom margin.
        let body_y = inner.y.saturating_add(2);
        if body_y < inner.y.saturating_add(inner.height) {
            let row_area = Rect::new(inner.x, body_y, inner.width, 1);
            let placeholder = Paragraph::new(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(th.overlay2).add_modifier(Modifier::ITALIC),
            )))
            .alignment(Alignment::Center);
            f.render_widget(placeholder, row_area);
        }
    }
}
