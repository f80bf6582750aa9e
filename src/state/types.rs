//! Core value types used by the dashboard state.

/// Catalog category a product belongs to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Category {
    /// Backend identifier of the category, when the catalog reports one.
    pub id: Option<u64>,
    /// Human-readable category name.
    pub name: String,
}

/// A single catalog item as held by the dashboard.
///
/// Products are read-only once fetched. The image reference is stored already
/// normalized; whether it is usable is decided at render time.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    /// Unique, stable identifier assigned by the catalog.
    pub id: u64,
    /// Display title; the only field searched by the filter stage.
    pub title: String,
    /// Long description.
    pub description: String,
    /// Owning category.
    pub category: Category,
    /// Non-negative unit price.
    pub price: f64,
    /// Normalized first image reference, `None` when absent or blank.
    pub image: Option<String>,
}

/// Column the filtered set can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    /// Case-insensitive lexicographic order on the title.
    Title,
    /// Numeric order on the price.
    Price,
}

impl SortColumn {
    /// Return the key used for this column in settings and on the command line.
    ///
    /// Inputs: none
    ///
    /// Output: Static key string.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Price => "price",
        }
    }

    /// Parse a column from its key (case-insensitive).
    ///
    /// Inputs: `s` key string.
    ///
    /// Output: `Some(SortColumn)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" | "name" => Some(Self::Title),
            "price" => Some(Self::Price),
            _ => None,
        }
    }
}

/// Active sort: which column (if any) and in which direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// Column currently applied, or `None` before the first explicit sort.
    pub column: Option<SortColumn>,
    /// `true` for ascending order.
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            ascending: true,
        }
    }
}

impl SortState {
    /// What: Apply the header-click toggle rule for `column`.
    ///
    /// Inputs:
    /// - `column`: Column the user asked to sort by
    ///
    /// Output:
    /// - New sort state
    ///
    /// Details:
    /// - Same column as the active one flips the direction.
    /// - A different column becomes active and the direction resets to ascending.
    #[must_use]
    pub fn toggled(self, column: SortColumn) -> Self {
        if self.column == Some(column) {
            Self {
                column: Some(column),
                ascending: !self.ascending,
            }
        } else {
            Self {
                column: Some(column),
                ascending: true,
            }
        }
    }
}

/// Text and fallbacks used when projecting products for display.
///
/// These come from settings so the dashboard can be relabelled without code
/// changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Prefix placed before every price (e.g. `$`).
    pub currency_prefix: String,
    /// Image shown when a product's reference is missing or unusable.
    pub placeholder_image: String,
    /// Word preceding the page indicator (e.g. `Page 1 / 3`).
    pub page_label: String,
    /// Message shown in the single row rendered for an empty page.
    pub no_data_label: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency_prefix: "$".to_string(),
            placeholder_image: "https://via.placeholder.com/100".to_string(),
            page_label: "Page".to_string(),
            no_data_label: "No data found".to_string(),
        }
    }
}
