//! Catalog product type.
//!
//! Products are stored by value in the cart and wishlist lists, so this is
//! also the persisted entry shape. The JSON field names are the storage
//! format and must not change.
//!
//! Only `id` and `price` are required when reading a stored entry. Entries
//! written before a field existed still load, with that field defaulted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::{CurrencyCode, Price};

/// Largest unit price accepted from storage.
///
/// Keeps cart arithmetic (price x quantity, summed over lines) far from the
/// decimal range limit.
pub const MAX_UNIT_PRICE: i64 = 1_000_000_000;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier (e.g. `product-1`).
    pub id: ProductId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Unit price in whole currency units, stored as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Primary image URL.
    #[serde(default)]
    pub image: String,
    /// Additional image URLs, in carousel order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Category label (e.g. `Clothing`).
    #[serde(default)]
    pub category: String,
    /// Average rating, 0 to 5.
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews.
    #[serde(default)]
    pub reviews: u32,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Tag labels used by search.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// The unit price in the given display currency.
    #[must_use]
    pub const fn unit_price(&self, currency_code: CurrencyCode) -> Price {
        Price::new(self.price, currency_code)
    }

    /// Returns true if the price is within `0..=MAX_UNIT_PRICE`.
    #[must_use]
    pub fn has_valid_price(&self) -> bool {
        !self.price.is_sign_negative() && self.price <= Decimal::from(MAX_UNIT_PRICE)
    }

    /// Case-insensitive substring match over name, description, and tags.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Case-insensitive substring match over the name only.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new("product-1"),
            name: "Clothing Product 1".to_string(),
            price: Decimal::from(999),
            image: "https://example.com/1.jpg".to_string(),
            images: vec!["https://example.com/1.jpg".to_string()],
            category: "Clothing".to_string(),
            rating: 4.5,
            reviews: 120,
            description: "Beautiful clothing item for your wardrobe.".to_string(),
            tags: vec!["fashion".to_string(), "Casual".to_string()],
        }
    }

    #[test]
    fn test_price_is_stored_as_json_number() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json["price"].is_number());
        assert_eq!(json["price"].as_f64(), Some(999.0));
        assert_eq!(json["id"], "product-1");
    }

    #[test]
    fn test_parses_stored_entry() {
        let raw = r#"{
            "id": "product-2",
            "name": "Ornaments Product 1",
            "price": 499,
            "image": "a.jpg",
            "images": ["a.jpg", "b.jpg"],
            "category": "Ornaments",
            "rating": 4.2,
            "reviews": 85,
            "description": "Elegant ornament.",
            "tags": ["decor"]
        }"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id, ProductId::new("product-2"));
        assert_eq!(product.price, Decimal::from(499));
        assert_eq!(product.images.len(), 2);
    }

    #[test]
    fn test_entry_missing_required_field_is_rejected() {
        let raw = r#"{"id": "product-2", "name": "Ornaments Product 1"}"#;
        assert!(serde_json::from_str::<Product>(raw).is_err());

        let raw = r#"{"name": "Ornaments Product 1", "price": 499}"#;
        assert!(serde_json::from_str::<Product>(raw).is_err());
    }

    #[test]
    fn test_older_entry_missing_optional_fields_loads() {
        let raw = r#"{"id": "product-4", "name": "Furnishing Product 1", "price": 1299, "image": "f.jpg"}"#;
        let product: Product = serde_json::from_str(raw).unwrap();

        assert_eq!(product.id, ProductId::new("product-4"));
        assert_eq!(product.price, Decimal::from(1299));
        assert_eq!(product.reviews, 0);
        assert!(product.images.is_empty());
        assert!(product.category.is_empty());
    }

    #[test]
    fn test_price_range() {
        let mut product = sample();
        assert!(product.has_valid_price());

        product.price = Decimal::from(MAX_UNIT_PRICE);
        assert!(product.has_valid_price());

        product.price = Decimal::from(MAX_UNIT_PRICE) + Decimal::ONE;
        assert!(!product.has_valid_price());

        product.price = Decimal::from(-1);
        assert!(!product.has_valid_price());
    }

    #[test]
    fn test_matches_searches_name_description_and_tags() {
        let product = sample();
        assert!(product.matches("clothing"));
        assert!(product.matches("wardrobe"));
        assert!(product.matches("casual"));
        assert!(!product.matches("furniture"));

        assert!(product.name_matches("product 1"));
        assert!(!product.name_matches("wardrobe"));
    }

    #[test]
    fn test_unit_price() {
        assert_eq!(sample().unit_price(CurrencyCode::INR).display(), "₹999.00");
    }
}
