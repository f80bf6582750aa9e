//! Display projection of the current page.
//!
//! Everything the table, pager, and headers show is derived here from
//! [`ViewState`] and [`DisplayOptions`], so drawing code never touches the
//! pipeline and the projection can be tested without a terminal.

use crate::logic::paginate::{has_next, has_prev};
use crate::state::{DisplayOptions, Product, SortColumn, SortState, ViewState};
use crate::util::format_price;

/// Number of display columns: id, image, title, description, category, price.
pub const COLUMN_COUNT: usize = 6;

/// Image to show for a row, decided at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageCell {
    /// Usable `http`/`https` reference.
    Remote(String),
    /// Fallback shown in place of a missing or unusable reference.
    Placeholder(String),
}

impl ImageCell {
    /// What: Resolve a product's normalized image reference for display.
    ///
    /// Inputs:
    /// - `reference`: Normalized reference, if the product has one
    /// - `placeholder`: Fallback image reference
    ///
    /// Output:
    /// - `Remote` when the reference parses as an absolute `http`/`https` URL with a
    ///   host; `Placeholder` otherwise.
    #[must_use]
    pub fn resolve(reference: Option<&str>, placeholder: &str) -> Self {
        let usable = reference.and_then(|r| {
            let url = reqwest::Url::parse(r).ok()?;
            let web = matches!(url.scheme(), "http" | "https") && url.host_str().is_some();
            web.then(|| r.to_string())
        });
        usable.map_or_else(|| Self::Placeholder(placeholder.to_string()), Self::Remote)
    }

    /// Reference to display, whichever variant this is.
    #[must_use]
    pub fn reference(&self) -> &str {
        match self {
            Self::Remote(r) | Self::Placeholder(r) => r,
        }
    }
}

/// One table row for a visible product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    /// Product identifier.
    pub id: u64,
    /// Resolved image.
    pub image: ImageCell,
    /// Title (drawn emphasized).
    pub title: String,
    /// Description.
    pub description: String,
    /// Category name.
    pub category: String,
    /// Currency-prefixed price.
    pub price: String,
}

impl ProductRow {
    /// What: Project one product into a display row.
    ///
    /// Inputs:
    /// - `p`: Product
    /// - `display`: Currency prefix and placeholder image
    ///
    /// Output:
    /// - Row with resolved image and formatted price
    #[must_use]
    pub fn from_product(p: &Product, display: &DisplayOptions) -> Self {
        Self {
            id: p.id,
            image: ImageCell::resolve(p.image.as_deref(), &display.placeholder_image),
            title: p.title.clone(),
            description: p.description.clone(),
            category: p.category.name.clone(),
            price: format_price(&display.currency_prefix, p.price),
        }
    }
}

/// Direction indicator drawn next to a sortable header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortGlyph {
    /// Column is not the active sort.
    Neutral,
    /// Active, ascending.
    Ascending,
    /// Active, descending.
    Descending,
}

impl SortGlyph {
    /// What: Derive the glyph for `column` from the active sort.
    ///
    /// Inputs:
    /// - `sort`: Active sort state
    /// - `column`: Header being drawn
    ///
    /// Output:
    /// - Directional glyph on the active column, `Neutral` everywhere else
    #[must_use]
    pub fn for_column(sort: SortState, column: SortColumn) -> Self {
        match sort.column {
            Some(c) if c == column => {
                if sort.ascending {
                    Self::Ascending
                } else {
                    Self::Descending
                }
            }
            _ => Self::Neutral,
        }
    }

    /// Character drawn for this glyph.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Neutral => "↕",
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Page position shown in the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    /// Current page, 0 when nothing is shown.
    pub current: usize,
    /// Total pages, 0 when nothing is shown.
    pub total: usize,
}

impl PageIndicator {
    /// What: Format the indicator with a leading label.
    ///
    /// Inputs:
    /// - `label`: Word such as "Page"
    ///
    /// Output:
    /// - `"{label} {current} / {total}"`
    #[must_use]
    pub fn label(&self, label: &str) -> String {
        format!("{label} {} / {}", self.current, self.total)
    }
}

/// Enablement of the two navigation triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    /// Previous-page trigger is active.
    pub prev_enabled: bool,
    /// Next-page trigger is active.
    pub next_enabled: bool,
}

/// Table body: rows for the page, or the single "no data" row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// At least one product on the current page.
    Rows(Vec<ProductRow>),
    /// Nothing to show; one placeholder row spanning every column.
    Empty {
        /// Message shown in the placeholder row.
        message: String,
    },
}

/// Complete display derived from the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    /// Table body.
    pub body: TableBody,
    /// Page position.
    pub page: PageIndicator,
    /// Navigation enablement.
    pub nav: NavState,
    /// Glyph for the Title header.
    pub title_glyph: SortGlyph,
    /// Glyph for the Price header.
    pub price_glyph: SortGlyph,
}

/// What: Derive the full display for the current page.
///
/// Inputs:
/// - `view`: View state (filtered items, page, page size, sort)
/// - `display`: Labels, currency prefix, placeholder image
///
/// Output:
/// - [`DashboardView`] describing rows, pager label, button enablement, and glyphs.
///
/// Details:
/// - An empty current page yields the "no data" body, a `0 / 0` indicator,
///   and both navigation triggers disabled.
/// - Otherwise prev is enabled above page 1 and next below the last page.
/// - Glyphs are always derived from the sort state, so they cannot go stale.
#[must_use]
pub fn project(view: &ViewState, display: &DisplayOptions) -> DashboardView {
    let title_glyph = SortGlyph::for_column(view.sort, SortColumn::Title);
    let price_glyph = SortGlyph::for_column(view.sort, SortColumn::Price);
    let items = view.current_page_items();
    if items.is_empty() {
        return DashboardView {
            body: TableBody::Empty {
                message: display.no_data_label.clone(),
            },
            page: PageIndicator {
                current: 0,
                total: 0,
            },
            nav: NavState {
                prev_enabled: false,
                next_enabled: false,
            },
            title_glyph,
            price_glyph,
        };
    }
    let total = view.total_pages();
    DashboardView {
        body: TableBody::Rows(
            items
                .iter()
                .map(|p| ProductRow::from_product(p, display))
                .collect(),
        ),
        page: PageIndicator {
            current: view.current_page,
            total,
        },
        nav: NavState {
            prev_enabled: has_prev(view.current_page),
            next_enabled: has_next(view.current_page, total),
        },
        title_glyph,
        price_glyph,
    }
}
