//! Cart handler.

use axum::{Form, extract::State, response::Html};
use serde::Deserialize;
use tracing::instrument;
use vitrine_core::ProductId;

use crate::error::{Result, add_breadcrumb};
use crate::shop::Action;
use crate::state::AppState;
use crate::views::render_regions;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
}

/// Add one unit of a product to the cart (HTMX).
///
/// Responds with the cart panel and the header badge. Unknown products are
/// a 404 and leave the cart untouched.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Html<String>> {
    let product_id = form.product_id.to_string();
    add_breadcrumb("cart", "Add to cart", Some(&[("product_id", product_id.as_str())]));

    let mut shop = state.shop();
    let regions = shop.dispatch(Action::AddToCart(form.product_id))?;
    Ok(Html(render_regions(&shop, &regions)?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{body_text, loaded_state, post_form};

    #[tokio::test]
    async fn test_add_updates_cart_and_badge() {
        let state = loaded_state();
        post_form(&state, "/cart/add", "product_id=1").await;
        let response = post_form(&state, "/cart/add", "product_id=2").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("id=\"cart-region\""));
        assert!(body.contains("<span id=\"cart-count\" class=\"cart-count\" hx-swap-oob=\"true\">2</span>"));
        assert!(body.contains("$119.49"));
    }

    #[tokio::test]
    async fn test_add_same_product_increments_quantity() {
        let state = loaded_state();
        post_form(&state, "/cart/add", "product_id=1").await;
        post_form(&state, "/cart/add", "product_id=1").await;

        let shop = state.shop();
        assert_eq!(shop.cart().lines().len(), 1);
        assert_eq!(shop.cart().total_items(), 2);
    }

    #[tokio::test]
    async fn test_add_unknown_product_is_not_found() {
        let state = loaded_state();
        let response = post_form(&state, "/cart/add", "product_id=99").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(state.shop().cart().is_empty());
    }

    #[tokio::test]
    async fn test_add_malformed_id_is_rejected() {
        let state = loaded_state();
        let response = post_form(&state, "/cart/add", "product_id=abc").await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
