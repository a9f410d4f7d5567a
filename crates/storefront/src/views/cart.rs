//! Cart rendering.

use askama::Template;
use vitrine_core::Price;

use super::products::IMAGE_NOT_FOUND;
use crate::cart::CartLine;

/// Cart item display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub title: String,
    pub image_url: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        let product = line.product();
        Self {
            title: product.title.clone(),
            image_url: product
                .image_url()
                .unwrap_or(IMAGE_NOT_FOUND)
                .to_string(),
            quantity: line.quantity(),
            price: product.price.to_string(),
            line_price: line.subtotal().to_string(),
        }
    }
}

/// Cart contents region.
#[derive(Template)]
#[template(path = "partials/cart.html")]
pub struct CartRegion {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub total: String,
    pub oob: bool,
}

/// Cart count badge region.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountBadge {
    pub count: u32,
    pub oob: bool,
}

/// Render the cart lines with running totals.
#[must_use]
pub fn render_cart(lines: &[CartLine], total_items: u32, total_cost: Price) -> CartRegion {
    CartRegion {
        items: lines.iter().map(CartItemView::from).collect(),
        item_count: total_items,
        total: total_cost.to_string(),
        oob: false,
    }
}

/// Render the item count badge.
#[must_use]
pub const fn render_cart_count(total_items: u32) -> CartCountBadge {
    CartCountBadge {
        count: total_items,
        oob: false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::CartStore;
    use crate::catalog::fixtures::shirt_and_ring;

    #[test]
    fn test_empty_cart_placeholder() {
        let html = render_cart(&[], 0, Price::ZERO).render().unwrap();
        assert!(html.contains("Your cart is empty."));
        assert!(html.contains("$0.00"));
    }

    #[test]
    fn test_cart_rows_and_totals() {
        let catalog = shirt_and_ring();
        let mut cart = CartStore::new();
        cart.add(&catalog[0]);
        cart.add(&catalog[0]);
        cart.add(&catalog[1]);

        let region = render_cart(cart.lines(), cart.total_items(), cart.total_cost());
        assert_eq!(region.items.len(), 2);
        assert_eq!(region.items[0].line_price, "$39.98");
        assert_eq!(region.total, "$139.48");

        let html = region.render().unwrap();
        assert!(html.contains("$19.99 x 2"));
        assert!(html.contains("$99.50 x 1"));
        assert!(!html.contains("Your cart is empty."));
    }

    #[test]
    fn test_cart_count_badge() {
        let mut badge = render_cart_count(3);
        badge.oob = true;
        let html = badge.render().unwrap();
        assert!(html.contains(">3<"));
        assert!(html.contains("hx-swap-oob=\"true\""));
    }
}
