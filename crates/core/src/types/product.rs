//! Catalog products.

use serde::{Deserialize, Serialize};

use super::{Category, Price, ProductId};

/// A product as served by the catalog API.
///
/// Fields the storefront does not use (such as `rating`) are ignored when
/// decoding. `description` and `image` may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identity, immutable once fetched.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Category tag.
    pub category: Category,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// The image URL, if one was supplied and is not blank.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|url| !url.trim().is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_catalog_payload() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price.to_string(), "$109.95");
        assert_eq!(product.category.as_str(), "men's clothing");
        assert!(product.image_url().is_some());
    }

    #[test]
    fn test_decode_without_optional_fields() {
        let json = r#"{"id": 9, "title": "Drive", "price": 64, "category": "electronics"}"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.description.is_empty());
        assert_eq!(product.image_url(), None);
    }

    #[test]
    fn test_blank_image_is_missing() {
        let json = r#"{"id": 9, "title": "Drive", "price": 64, "category": "electronics", "image": "  "}"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.image_url(), None);
    }
}
