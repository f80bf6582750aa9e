//! Fixed-size page slicing and page-boundary queries.

/// What: Count the pages needed to show `len` items `page_size` at a time.
///
/// Inputs:
/// - `len`: Number of items
/// - `page_size`: Rows per page (0 is treated as 1)
///
/// Output:
/// - `ceil(len / page_size)`; zero items give zero pages.
#[must_use]
pub const fn total_pages(len: usize, page_size: usize) -> usize {
    let size = if page_size == 0 { 1 } else { page_size };
    len.div_ceil(size)
}

/// What: Slice one page out of `items`.
///
/// Inputs:
/// - `items`: Ordered items
/// - `page_number`: 1-based page number (0 is treated as 1)
/// - `page_size`: Rows per page (0 is treated as 1)
///
/// Output:
/// - `items[(page-1)*size .. page*size]`, clamped to the bounds of `items`;
///   an empty slice past the end.
#[must_use]
pub fn page<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let size = page_size.max(1);
    let start = page_number.max(1).saturating_sub(1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// Whether a previous page exists.
#[must_use]
pub const fn has_prev(current_page: usize) -> bool {
    current_page > 1
}

/// Whether a next page exists.
#[must_use]
pub const fn has_next(current_page: usize, total_pages: usize) -> bool {
    current_page < total_pages
}
