//! Product grid rendering.

use askama::Template;
use vitrine_core::{Product, ProductId};

/// Shown in place of a product image that was not supplied.
pub const IMAGE_NOT_FOUND: &str = "https://placehold.co/600x400/cccccc/ffffff?text=Image+Not+Found";

/// Product card display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub price: String,
    pub image_url: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            category: product.category.to_string(),
            price: product.price.to_string(),
            image_url: product
                .image_url()
                .unwrap_or(IMAGE_NOT_FOUND)
                .to_string(),
        }
    }
}

/// A message shown instead of product cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub text: &'static str,
    pub is_error: bool,
}

impl Notice {
    pub const EMPTY: Self = Self {
        text: "No products found.",
        is_error: false,
    };
    pub const LOADING: Self = Self {
        text: "Loading products...",
        is_error: false,
    };
    pub const FAILED: Self = Self {
        text: "Failed to load data.",
        is_error: true,
    };
}

/// Product grid region.
#[derive(Template)]
#[template(path = "partials/products.html")]
pub struct ProductsRegion {
    pub products: Vec<ProductView>,
    pub notice: Option<Notice>,
    /// Poll for the region until the catalog has loaded.
    pub polling: bool,
    pub oob: bool,
}

/// Render a product list. An empty list renders the "no products" notice.
#[must_use]
pub fn render_products(list: &[&Product]) -> ProductsRegion {
    let products: Vec<ProductView> = list.iter().map(|p| ProductView::from(*p)).collect();
    let notice = products.is_empty().then_some(Notice::EMPTY);

    ProductsRegion {
        products,
        notice,
        polling: false,
        oob: false,
    }
}

/// Placeholder while bootstrap is in flight.
#[must_use]
pub const fn render_products_loading() -> ProductsRegion {
    ProductsRegion {
        products: Vec::new(),
        notice: Some(Notice::LOADING),
        polling: true,
        oob: false,
    }
}

/// Terminal state after bootstrap failed.
#[must_use]
pub const fn render_products_failed() -> ProductsRegion {
    ProductsRegion {
        products: Vec::new(),
        notice: Some(Notice::FAILED),
        polling: false,
        oob: false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{product, shirt_and_ring};

    #[test]
    fn test_render_products_cards() {
        let catalog = shirt_and_ring();
        let list: Vec<&Product> = catalog.iter().collect();

        let html = render_products(&list).render().unwrap();

        assert!(html.contains("id=\"products-region\""));
        assert!(html.contains("Shirt"));
        assert!(html.contains("$19.99"));
        assert!(html.contains("$99.50"));
        assert!(html.contains("name=\"product_id\" value=\"2\""));
        assert!(!html.contains("No products found."));
    }

    #[test]
    fn test_render_empty_list_shows_placeholder() {
        let html = render_products(&[]).render().unwrap();
        assert!(html.contains("No products found."));
        assert!(!html.contains("add-to-cart-btn"));
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        let mut item = product(5, "Mystery", "1", "misc");
        item.image = None;

        let view = ProductView::from(&item);
        assert_eq!(view.image_url, IMAGE_NOT_FOUND);
    }

    #[test]
    fn test_loading_polls_and_failure_does_not() {
        let html = render_products_loading().render().unwrap();
        assert!(html.contains("Loading products..."));
        assert!(html.contains("hx-get=\"/regions/products\""));

        let html = render_products_failed().render().unwrap();
        assert!(html.contains("Failed to load data."));
        assert!(!html.contains("hx-get"));
    }

    #[test]
    fn test_out_of_band_marker() {
        let mut region = render_products(&[]);
        region.oob = true;
        assert!(region.render().unwrap().contains("hx-swap-oob=\"true\""));
    }
}
