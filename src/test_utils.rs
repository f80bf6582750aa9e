//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

#[cfg(test)]
use crate::state::{AppState, Category, Product};

#[cfg(test)]
/// What: Build a product with the given id, title, and price.
///
/// Inputs:
/// - `id`: Product identifier
/// - `title`: Title text
/// - `price`: Unit price
///
/// Output:
/// - Product with a generic description, a "Misc" category, and a valid image URL
pub fn product(id: u64, title: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        category: Category {
            id: Some(1),
            name: "Misc".to_string(),
        },
        price,
        image: Some(format!("https://img.example.com/{id}.jpg")),
    }
}

#[cfg(test)]
/// What: Provide a seven-product catalog with distinct titles and prices.
///
/// Inputs: None
///
/// Output: Products with ids 1..=7 in catalog order
pub fn seven_products() -> Vec<Product> {
    vec![
        product(1, "Wooden Chair", 45.0),
        product(2, "Steel Lamp", 30.0),
        product(3, "Cotton Shirt", 12.5),
        product(4, "Leather Wallet", 60.0),
        product(5, "Glass Vase", 22.0),
        product(6, "Running Shoe", 80.0),
        product(7, "Desk Organizer", 15.0),
    ]
}

#[cfg(test)]
/// What: Provide a baseline `AppState` for handler tests.
///
/// Inputs: None
///
/// Output: Fresh `AppState` with default values
pub fn new_app() -> AppState {
    AppState::default()
}
