use crate::state::Product;

/// What: Select the products whose title contains `query`, ignoring case.
///
/// Inputs:
/// - `all`: Full dataset in its current order
/// - `query`: Raw search text
///
/// Output:
/// - New vector holding the matching products in the same relative order as `all`.
///
/// Details:
/// - Only the title is searched; description and category are ignored.
/// - An empty query matches everything, so the result equals `all`.
/// - `all` is never modified.
#[must_use]
pub fn filter_by_title(all: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return all.to_vec();
    }
    let needle = query.to_lowercase();
    all.iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
