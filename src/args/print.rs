//! One-shot print mode: fetch, run the pipeline once, and print a page as text.

use crate::args::Args;
use crate::logic;
use crate::state::{DisplayOptions, Product, ViewState};
use crate::theme::Settings;
use crate::ui::{TableBody, project};
use crate::util::truncate_to_width;

/// Column widths used for plain-text output: id, title, category, price, image.
const TEXT_WIDTHS: [usize; 5] = [4, 28, 14, 10, 40];

/// What: Build the view state described by the print-mode flags.
///
/// Inputs:
/// - `args`: Parsed arguments (search, sort, desc, page)
/// - `page_size`: Rows per page
/// - `items`: Catalog as returned by the data source
///
/// Output:
/// - View state after load, search, sort, and page navigation.
///
/// Details:
/// - Operations run in the same order a user would trigger them in the TUI.
///   `--desc` activates the sort header a second time.
/// - Pages past the end clamp to the last page.
#[must_use]
pub fn build_view(args: &Args, page_size: usize, items: Vec<Product>) -> ViewState {
    let mut view = ViewState::new(page_size);
    logic::load_catalog(&mut view, items);
    if let Some(q) = &args.search {
        logic::set_query(&mut view, q.clone());
    }
    if let Some(column) = args.sort {
        logic::apply_sort(&mut view, column);
        if args.desc {
            logic::apply_sort(&mut view, column);
        }
    }
    for _ in 1..args.page.max(1) {
        if !logic::next_page(&mut view) {
            break;
        }
    }
    view
}

/// Left-align `s` in a field of `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let cut = truncate_to_width(s, width);
    let used = unicode_width::UnicodeWidthStr::width(cut.as_str());
    format!("{cut}{}", " ".repeat(width.saturating_sub(used)))
}

/// What: Render the current page of `view` as plain text lines.
///
/// Inputs:
/// - `view`: View state to print
/// - `display`: Labels and fallbacks
///
/// Output:
/// - Header line, one line per product (or the "no data" line), and the page label.
#[must_use]
pub fn render_page_text(view: &ViewState, display: &DisplayOptions) -> Vec<String> {
    let dash = project(view, display);
    let header = [
        "ID".to_string(),
        format!("Title {}", dash.title_glyph.symbol()),
        "Category".to_string(),
        format!("Price {}", dash.price_glyph.symbol()),
        "Image".to_string(),
    ];
    let join = |cells: &[String]| {
        cells
            .iter()
            .zip(TEXT_WIDTHS)
            .map(|(c, w)| pad(c, w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![join(&header)];
    match dash.body {
        TableBody::Rows(rows) => {
            for r in rows {
                lines.push(join(&[
                    r.id.to_string(),
                    r.title,
                    r.category,
                    r.price,
                    r.image.reference().to_string(),
                ]));
            }
        }
        TableBody::Empty { message } => lines.push(message),
    }
    lines.push(dash.page.label(&display.page_label));
    lines
}

/// What: Run print mode end-to-end.
///
/// Inputs:
/// - `args`: Parsed arguments
/// - `settings`: Effective settings
///
/// Output:
/// - Writes the requested page to stdout.
pub async fn handle_print(args: &Args, settings: &Settings) {
    tracing::info!(url = %settings.catalog_url, "Print mode requested from CLI");
    let items = crate::sources::fetch_products(&settings.catalog_url).await;
    let view = build_view(args, settings.page_size, items);
    for line in render_page_text(&view, &settings.display) {
        println!("{line}");
    }
}
