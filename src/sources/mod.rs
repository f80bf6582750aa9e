//! Data source adapter: retrieval and decoding of the remote product catalog.

mod catalog;
mod schema;

/// Result type alias for fallible source operations.
pub(crate) type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use catalog::{DEFAULT_CATALOG_URL, MAX_FETCHED_PRODUCTS, decode_products, fetch_products};
pub use schema::normalize_image_ref;
