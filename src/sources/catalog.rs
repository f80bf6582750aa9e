//! Remote catalog fetcher.
use serde_json::Value;
use tracing::{debug, info, warn};

use super::schema::RawProduct;
use crate::state::Product;

/// Result type alias for catalog fetching operations.
type Result<T> = super::Result<T>;

/// Catalog endpoint used when neither settings nor flags name another one.
pub const DEFAULT_CATALOG_URL: &str = "https://api.escuelajs.co/api/v1/products";

/// Upper bound on products kept from one fetch, whatever the backend returns.
pub const MAX_FETCHED_PRODUCTS: usize = 20;

/// What: Fetch the product catalog, degrading to an empty list on any failure.
///
/// Inputs:
/// - `url`: Catalog endpoint returning a JSON array of product records
///
/// Output:
/// - Up to [`MAX_FETCHED_PRODUCTS`] products in catalog order; empty when the
///   catalog is unreachable, answers with a non-success status, or sends a
///   payload that is not a product list.
///
/// Details:
/// - Failures are logged and absorbed here; callers never see an error.
/// - No timeout or retry is applied; a slow catalog only delays the first render.
pub async fn fetch_products(url: &str) -> Vec<Product> {
    match try_fetch_products(url).await {
        Ok(items) => {
            info!(count = items.len(), "catalog fetched");
            items
        }
        Err(e) => {
            warn!(error = %e, url = %url, "catalog unavailable; continuing with empty dataset");
            Vec::new()
        }
    }
}

/// What: Fetch and decode the catalog, surfacing failures.
///
/// Inputs:
/// - `url`: Catalog endpoint
///
/// Output:
/// - `Ok(Vec<Product>)` on success; `Err` on transport, status, or decoding failure.
///
/// # Errors
/// - Network fetch failures
/// - Non-success HTTP status
/// - JSON parsing failures or a payload that is not an array
async fn try_fetch_products(url: &str) -> Result<Vec<Product>> {
    let resp = reqwest::get(url).await?;
    let status = resp.status();
    let body = resp.text().await?;
    info!(
        status = status.as_u16(),
        bytes = body.len(),
        "fetched catalog response"
    );
    if !status.is_success() {
        let preview: String = body.chars().take(300).collect();
        warn!(
            status = status.as_u16(),
            preview = preview,
            "catalog returned non-success status"
        );
        return Err(format!("catalog status {status}").into());
    }
    let payload: Value = serde_json::from_str(&body)?;
    decode_products(&payload)
}

/// What: Convert a catalog payload into products.
///
/// Inputs:
/// - `payload`: Parsed JSON body
///
/// Output:
/// - `Ok(Vec<Product>)` holding at most [`MAX_FETCHED_PRODUCTS`] products;
///   `Err` when the payload is not a JSON array.
///
/// Details:
/// - The first [`MAX_FETCHED_PRODUCTS`] records are taken before decoding.
/// - Individual records that fail to decode (missing id/title, negative price)
///   are skipped rather than failing the whole catalog.
///
/// # Errors
/// - Payload is not a JSON array
pub fn decode_products(payload: &Value) -> Result<Vec<Product>> {
    let Some(records) = payload.as_array() else {
        return Err("catalog payload is not a JSON array".into());
    };
    let mut items = Vec::with_capacity(records.len().min(MAX_FETCHED_PRODUCTS));
    for (idx, record) in records.iter().take(MAX_FETCHED_PRODUCTS).enumerate() {
        match serde_json::from_value::<RawProduct>(record.clone()) {
            Ok(raw) => {
                if let Some(p) = raw.into_product() {
                    items.push(p);
                } else {
                    debug!(index = idx, "skipping catalog record with invalid price");
                }
            }
            Err(e) => debug!(index = idx, error = %e, "skipping undecodable catalog record"),
        }
    }
    Ok(items)
}
