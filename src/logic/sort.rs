use std::cmp::Ordering;

use crate::state::{Product, SortColumn, SortState};

/// What: Compare two products on a single column in ascending order.
///
/// Inputs:
/// - `a`, `b`: Products to compare
/// - `column`: Column that supplies the key
///
/// Output:
/// - Ascending [`Ordering`] of the keys
///
/// Details:
/// - Titles compare by their lowercase form.
/// - Prices use `f64::total_cmp`, so the order is total even for unusual values.
fn compare_on(a: &Product, b: &Product, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortColumn::Price => a.price.total_cmp(&b.price),
    }
}

/// What: Order `items` in place by `column` and direction.
///
/// Inputs:
/// - `items`: Products to reorder
/// - `column`: Sort key
/// - `ascending`: `true` for ascending, `false` for descending
///
/// Output:
/// - Reorders `items` in place.
///
/// Details:
/// - The sort is stable in both directions: products with equal keys keep their
///   previous relative order, so repeated sorts paginate reproducibly.
pub fn sort_products(items: &mut [Product], column: SortColumn, ascending: bool) {
    items.sort_by(|a, b| {
        let ord = compare_on(a, b, column);
        if ascending { ord } else { ord.reverse() }
    });
}

/// What: Apply an active sort, if any.
///
/// Inputs:
/// - `items`: Products to reorder
/// - `sort`: Active sort state
///
/// Output:
/// - Reorders `items` when a column is active; leaves them untouched otherwise.
pub fn apply_sort(items: &mut [Product], sort: SortState) {
    if let Some(column) = sort.column {
        sort_products(items, column, sort.ascending);
    }
}
