//! The single owned value that drives what the dashboard displays.

use super::types::{Product, SortState};

/// Page size used until the user (or settings) picks another one.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Session-local view state for the product table.
///
/// `all_items` is set once when the catalog arrives. Everything else is
/// mutated only by the user-facing operations in [`crate::logic`], which keep
/// `filtered_items` a subset of `all_items` and `current_page` within bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Full dataset in catalog order.
    pub all_items: Vec<Product>,
    /// Filtered and sorted subset, rebuilt on every search.
    pub filtered_items: Vec<Product>,
    /// Current search query as typed by the user.
    pub query: String,
    /// Active sort column and direction.
    pub sort: SortState,
    /// 1-based page number.
    pub current_page: usize,
    /// Rows per page, always at least 1.
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// What: Create an empty view state with the given page size.
    ///
    /// Inputs:
    /// - `page_size`: Rows per page; values below 1 are raised to 1
    ///
    /// Output:
    /// - View state with no items, no active sort, on page 1
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            all_items: Vec::new(),
            filtered_items: Vec::new(),
            query: String::new(),
            sort: SortState::default(),
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// What: Create a view state over a freshly loaded dataset.
    ///
    /// Inputs:
    /// - `items`: Products in catalog order
    /// - `page_size`: Rows per page
    ///
    /// Output:
    /// - View state whose filtered set equals the full set, on page 1
    #[must_use]
    pub fn with_items(items: Vec<Product>, page_size: usize) -> Self {
        let mut state = Self::new(page_size);
        state.filtered_items.clone_from(&items);
        state.all_items = items;
        state
    }

    /// Number of pages for the filtered set; zero when nothing matches.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        crate::logic::paginate::total_pages(self.filtered_items.len(), self.page_size)
    }

    /// Items visible on the current page.
    #[must_use]
    pub fn current_page_items(&self) -> &[Product] {
        crate::logic::paginate::page(&self.filtered_items, self.current_page, self.page_size)
    }
}
