//! Wire records returned by the catalog endpoint.
//!
//! These mirror the JSON payload loosely: only the fields the dashboard uses
//! are read, and the shapes that vary between catalog versions (category as
//! object or string, images as list or string) are accepted as either.

use serde::Deserialize;

use crate::state::{Category, Product};

/// One product record exactly as the catalog sends it.
#[derive(Debug, Deserialize)]
pub(super) struct RawProduct {
    /// Catalog identifier.
    pub id: u64,
    /// Title text.
    pub title: String,
    /// Description text; missing means empty.
    #[serde(default)]
    pub description: String,
    /// Category as an object or a bare name.
    #[serde(default)]
    pub category: CategoryField,
    /// Price; missing means zero.
    #[serde(default)]
    pub price: f64,
    /// Image references as a list, a single string, or nothing.
    #[serde(default)]
    pub images: ImageField,
}

/// Category object as nested in a product record.
#[derive(Debug, Default, Deserialize)]
pub(super) struct RawCategory {
    /// Category identifier, when present.
    #[serde(default)]
    pub id: Option<u64>,
    /// Category name.
    #[serde(default)]
    pub name: String,
}

/// Either shape of the `category` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum CategoryField {
    /// `{"id": 1, "name": "Clothes", ...}`
    Object(RawCategory),
    /// `"Clothes"`
    Name(String),
}

impl Default for CategoryField {
    fn default() -> Self {
        Self::Object(RawCategory::default())
    }
}

/// Either shape of the `images` field.
#[derive(Debug, Default, Deserialize)]
#[serde(untagged)]
pub(super) enum ImageField {
    /// `["https://...", ...]`
    Many(Vec<String>),
    /// `"https://..."`
    One(String),
    /// `null` or absent.
    #[default]
    Missing,
}

impl ImageField {
    /// First raw reference, if any.
    fn first(&self) -> Option<&str> {
        match self {
            Self::Many(list) => list.first().map(String::as_str),
            Self::One(s) => Some(s.as_str()),
            Self::Missing => None,
        }
    }
}

/// What: Recover a bare image reference from the catalog's raw string.
///
/// Inputs:
/// - `raw`: First image entry as sent by the catalog
///
/// Output:
/// - `Some(reference)` with decoration removed; `None` when nothing usable remains.
///
/// Details:
/// - Some catalog entries arrive as a stringified list such as `["https://x/a.jpg"]`
///   (or the first half of one). When the entry starts with `["`, every `[`, `]`,
///   and `"` character is dropped.
/// - Whether the remaining reference actually resolves is a render-time concern.
#[must_use]
pub fn normalize_image_ref(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let bare = if trimmed.starts_with("[\"") {
        trimmed.replace(['[', ']', '"'], "")
    } else {
        trimmed.to_string()
    };
    let bare = bare.trim();
    if bare.is_empty() {
        None
    } else {
        Some(bare.to_string())
    }
}

impl RawProduct {
    /// What: Convert the wire record into a dashboard [`Product`].
    ///
    /// Inputs:
    /// - `self`: Decoded record
    ///
    /// Output:
    /// - `Some(Product)`; `None` when the price is negative or not finite.
    pub fn into_product(self) -> Option<Product> {
        if !self.price.is_finite() || self.price < 0.0 {
            return None;
        }
        let image = self.images.first().and_then(normalize_image_ref);
        let category = match self.category {
            CategoryField::Object(c) => Category {
                id: c.id,
                name: c.name,
            },
            CategoryField::Name(name) => Category { id: None, name },
        };
        Some(Product {
            id: self.id,
            title: self.title,
            description: self.description,
            category,
            price: self.price,
            image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Bracket-wrapped pseudo-list references are unwrapped
    ///
    /// - Input: `["http://x/a.jpg"]` and the half-list form `["http://x/a.jpg"`
    /// - Output: `http://x/a.jpg` in both cases
    fn normalize_strips_pseudo_list() {
        assert_eq!(
            normalize_image_ref("[\"http://x/a.jpg\"]").as_deref(),
            Some("http://x/a.jpg")
        );
        assert_eq!(
            normalize_image_ref("[\"http://x/a.jpg\"").as_deref(),
            Some("http://x/a.jpg")
        );
    }

    #[test]
    /// What: Plain references pass through; blanks become None
    ///
    /// - Input: "https://x/b.png", "", "   ", `[""]`
    /// - Output: Same URL; None; None; None
    fn normalize_plain_and_blank() {
        assert_eq!(
            normalize_image_ref("https://x/b.png").as_deref(),
            Some("https://x/b.png")
        );
        assert_eq!(normalize_image_ref(""), None);
        assert_eq!(normalize_image_ref("   "), None);
        assert_eq!(normalize_image_ref("[\"\"]"), None);
    }

    #[test]
    /// What: Record decoding accepts both category and image shapes
    ///
    /// - Input: One record with object category and list images, one with string forms
    /// - Output: Both convert; category names and first images are extracted
    fn raw_product_accepts_alternate_shapes() {
        let a: RawProduct = serde_json::from_value(serde_json::json!({
            "id": 1, "title": "Shirt", "description": "d", "price": 10,
            "category": {"id": 3, "name": "Clothes", "image": "ignored"},
            "images": ["[\"https://x/1.jpg\"", "\"https://x/2.jpg\"]"]
        }))
        .expect("object shapes decode");
        let a = a.into_product().expect("valid product");
        assert_eq!(a.category.name, "Clothes");
        assert_eq!(a.category.id, Some(3));
        assert_eq!(a.image.as_deref(), Some("https://x/1.jpg"));

        let b: RawProduct = serde_json::from_value(serde_json::json!({
            "id": 2, "title": "Mug", "price": 4.5,
            "category": "Kitchen", "images": "https://x/m.jpg"
        }))
        .expect("string shapes decode");
        let b = b.into_product().expect("valid product");
        assert_eq!(b.category.name, "Kitchen");
        assert_eq!(b.description, "");
        assert_eq!(b.image.as_deref(), Some("https://x/m.jpg"));
    }

    #[test]
    /// What: Missing or null images decode to no reference; negative prices are rejected
    ///
    /// - Input: images null; images absent; price -1
    /// - Output: image None; image None; conversion None
    fn raw_product_missing_images_and_negative_price() {
        let a: RawProduct = serde_json::from_value(serde_json::json!({
            "id": 1, "title": "A", "price": 1, "images": null
        }))
        .expect("null images decode");
        assert_eq!(a.into_product().and_then(|p| p.image), None);

        let b: RawProduct =
            serde_json::from_value(serde_json::json!({"id": 2, "title": "B", "price": 1}))
                .expect("absent images decode");
        assert_eq!(b.into_product().and_then(|p| p.image), None);

        let c: RawProduct =
            serde_json::from_value(serde_json::json!({"id": 3, "title": "C", "price": -1}))
                .expect("negative price decodes");
        assert!(c.into_product().is_none());
    }
}
