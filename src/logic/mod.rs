//! Data-presentation pipeline: filter, sort, and paginate over [`ViewState`].
//!
//! The stage functions in the submodules are pure. The operations defined
//! here are the only code that mutates a `ViewState` after load:
//! - `load_catalog` installs the fetched dataset once.
//! - `apply_search` re-filters, reapplies the active sort, and resets to page 1.
//! - `apply_sort` toggles the sort column/direction and reorders the filtered set.
//! - `set_page_size` changes rows per page and resets to page 1.
//! - `prev_page` / `next_page` move within bounds and are no-ops at the edges.

pub mod filter;
pub mod paginate;
pub mod sort;

use crate::state::{Product, SortColumn, ViewState};

pub use filter::filter_by_title;
pub use paginate::{has_next, has_prev, page, total_pages};
pub use sort::sort_products;

/// What: Install the fetched catalog and rebuild the derived view.
///
/// Inputs:
/// - `view`: View state to populate
/// - `items`: Products returned by the data source (possibly empty)
///
/// Output:
/// - Replaces `all_items` and re-runs the search with the current query and sort.
///
/// Details:
/// - Input typed before the catalog arrived is honoured, as is a sort the user
///   already picked.
pub fn load_catalog(view: &mut ViewState, items: Vec<Product>) {
    tracing::info!(count = items.len(), "catalog loaded into view state");
    view.all_items = items;
    apply_search(view);
}

/// What: Set the query text and run the search.
///
/// Inputs:
/// - `view`: View state
/// - `query`: New query text
///
/// Output:
/// - Updates `view.query` and calls [`apply_search`].
pub fn set_query(view: &mut ViewState, query: impl Into<String>) {
    view.query = query.into();
    apply_search(view);
}

/// What: Re-filter the dataset with the current query.
///
/// Inputs:
/// - `view`: View state
///
/// Output:
/// - Rebuilds `filtered_items`, reapplies the active sort (same column and
///   direction), and resets `current_page` to 1.
pub fn apply_search(view: &mut ViewState) {
    let mut filtered = filter::filter_by_title(&view.all_items, &view.query);
    sort::apply_sort(&mut filtered, view.sort);
    view.filtered_items = filtered;
    view.current_page = 1;
    tracing::debug!(
        query = %view.query,
        matches = view.filtered_items.len(),
        sort = ?view.sort,
        "search applied"
    );
}

/// What: Sort the filtered set by `column` using the header toggle rule.
///
/// Inputs:
/// - `view`: View state
/// - `column`: Column whose header was activated
///
/// Output:
/// - Updates `view.sort` (flip on same column, ascending on a new one) and
///   reorders `filtered_items` stably.
///
/// Details:
/// - The current page number is kept, matching a table whose header was clicked
///   while browsing; it stays valid because the item count does not change.
pub fn apply_sort(view: &mut ViewState, column: SortColumn) {
    view.sort = view.sort.toggled(column);
    sort::apply_sort(&mut view.filtered_items, view.sort);
    tracing::debug!(column = column.as_key(), ascending = view.sort.ascending, "sort applied");
}

/// What: Change rows per page.
///
/// Inputs:
/// - `view`: View state
/// - `page_size`: Selected size (values below 1 are raised to 1)
///
/// Output:
/// - Updates `page_size` and resets `current_page` to 1.
pub fn set_page_size(view: &mut ViewState, page_size: usize) {
    view.page_size = page_size.max(1);
    view.current_page = 1;
    tracing::debug!(page_size = view.page_size, "page size changed");
}

/// What: Move to the previous page when one exists.
///
/// Inputs:
/// - `view`: View state
///
/// Output:
/// - `true` if the page changed; `false` (no-op) on page 1.
pub fn prev_page(view: &mut ViewState) -> bool {
    if paginate::has_prev(view.current_page) {
        view.current_page -= 1;
        true
    } else {
        false
    }
}

/// What: Move to the next page when one exists.
///
/// Inputs:
/// - `view`: View state
///
/// Output:
/// - `true` if the page changed; `false` (no-op) on the last page or when empty.
pub fn next_page(view: &mut ViewState) -> bool {
    if paginate::has_next(view.current_page, view.total_pages()) {
        view.current_page += 1;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seven_products;

    fn ids(items: &[Product]) -> Vec<u64> {
        items.iter().map(|p| p.id).collect()
    }

    #[test]
    /// What: Seven products at five per page; next twice stops at page 2
    ///
    /// - Input: 7 products, page size 5
    /// - Output: 2 pages; page 1 = 5 items; page 2 = 2 items; second next is a no-op
    fn navigation_stops_at_last_page() {
        let mut view = ViewState::with_items(seven_products(), 5);
        assert_eq!(view.total_pages(), 2);
        assert_eq!(view.current_page_items().len(), 5);
        assert!(next_page(&mut view));
        assert_eq!(view.current_page_items().len(), 2);
        assert!(!next_page(&mut view));
        assert_eq!(view.current_page, 2);
    }

    #[test]
    /// What: Prev on page 1 is a no-op
    ///
    /// - Input: Fresh view on page 1
    /// - Output: Page stays 1
    fn prev_on_first_page_is_noop() {
        let mut view = ViewState::with_items(seven_products(), 5);
        assert!(!prev_page(&mut view));
        assert_eq!(view.current_page, 1);
    }

    #[test]
    /// What: Search keeps the active sort and resets the page
    ///
    /// - Input: Sort by price descending, move to page 2, search "o"
    /// - Output: Sort state unchanged, filtered set descending by price, page 1
    fn search_after_sort_preserves_sort_and_resets_page() {
        let mut view = ViewState::with_items(seven_products(), 2);
        apply_sort(&mut view, SortColumn::Price);
        apply_sort(&mut view, SortColumn::Price);
        assert!(!view.sort.ascending);
        assert!(next_page(&mut view));

        set_query(&mut view, "o");
        assert_eq!(view.sort.column, Some(SortColumn::Price));
        assert!(!view.sort.ascending);
        assert_eq!(view.current_page, 1);
        let prices: Vec<f64> = view.filtered_items.iter().map(|p| p.price).collect();
        let mut expected = prices.clone();
        expected.sort_by(|a, b| b.total_cmp(a));
        assert_eq!(prices, expected);
        assert!(
            view.filtered_items
                .iter()
                .all(|p| p.title.to_lowercase().contains('o'))
        );
    }

    #[test]
    /// What: Toggling title sort twice reverses the ascending order exactly
    ///
    /// - Input: Products with distinct titles
    /// - Output: Descending order is the ascending order reversed
    fn title_toggle_reverses_order() {
        let mut view = ViewState::with_items(seven_products(), 5);
        apply_sort(&mut view, SortColumn::Title);
        let asc = ids(&view.filtered_items);
        apply_sort(&mut view, SortColumn::Title);
        let mut desc = ids(&view.filtered_items);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    /// What: Page size change resets to page 1
    ///
    /// - Input: On page 2 of 7 items at 5 per page; change to 10
    /// - Output: Page 1, a single page
    fn page_size_change_resets_page() {
        let mut view = ViewState::with_items(seven_products(), 5);
        next_page(&mut view);
        set_page_size(&mut view, 10);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.total_pages(), 1);
    }

    #[test]
    /// What: Catalog arriving after user input honours query and sort
    ///
    /// - Input: Empty view; user sorts by price and types "a"; then catalog loads
    /// - Output: Filtered set matches "a", sorted by price ascending, page 1
    fn load_catalog_after_early_input() {
        let mut view = ViewState::new(5);
        apply_sort(&mut view, SortColumn::Price);
        set_query(&mut view, "a");
        assert!(view.filtered_items.is_empty());

        load_catalog(&mut view, seven_products());
        assert!(!view.filtered_items.is_empty());
        assert!(
            view.filtered_items
                .iter()
                .all(|p| p.title.to_lowercase().contains('a'))
        );
        assert!(
            view.filtered_items
                .windows(2)
                .all(|w| w[0].price <= w[1].price)
        );
        assert_eq!(view.current_page, 1);
    }

    #[test]
    /// What: Filtered set is always a subset of the full set
    ///
    /// - Input: Several queries
    /// - Output: Every filtered id exists in `all_items`
    fn filtered_is_subset_of_all() {
        let mut view = ViewState::with_items(seven_products(), 3);
        for q in ["", "e", "zz", "LAMP", "o"] {
            set_query(&mut view, q);
            assert!(
                view.filtered_items
                    .iter()
                    .all(|f| view.all_items.iter().any(|a| a.id == f.id))
            );
        }
    }
}
