//! Category filter handlers.

use axum::{Form, extract::State, response::Html};
use serde::Deserialize;
use tracing::instrument;
use vitrine_core::Category;

use crate::error::{AppError, Result};
use crate::shop::Action;
use crate::state::AppState;
use crate::views::render_regions;

/// Category selection form.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    pub category: String,
}

/// Show only one category (HTMX).
///
/// Switches to the products page and shows the "filtered by" indicator.
#[instrument(skip(state))]
pub async fn category(
    State(state): State<AppState>,
    Form(form): Form<CategoryForm>,
) -> Result<Html<String>> {
    if form.category.trim().is_empty() {
        return Err(AppError::BadRequest("category is required".to_string()));
    }

    let mut shop = state.shop();
    let regions = shop.dispatch(Action::SelectCategory(Category::new(form.category)))?;
    Ok(Html(render_regions(&shop, &regions)?))
}

/// Clear the active filter and the search input (HTMX).
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Html<String>> {
    let mut shop = state.shop();
    let regions = shop.dispatch(Action::ClearFilter)?;
    Ok(Html(render_regions(&shop, &regions)?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::test_support::{body_text, get, loaded_state, post_form};
    use crate::shop::Page;

    #[tokio::test]
    async fn test_category_switches_to_filtered_products() {
        let state = loaded_state();
        let response = post_form(&state, "/filter/category", "category=jewelery").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("Filtered by"));
        assert!(body.contains("Ring"));
        assert!(!body.contains("Shirt"));
        assert!(body.contains("id=\"navigation\""));
        assert_eq!(state.shop().page(), Page::Products);
    }

    #[tokio::test]
    async fn test_category_with_apostrophe() {
        let state = loaded_state();
        let body = body_text(
            post_form(&state, "/filter/category", "category=men%27s+clothing").await,
        )
        .await;
        assert!(body.contains("Shirt"));
        assert!(!body.contains("Ring"));
    }

    #[tokio::test]
    async fn test_blank_category_is_rejected() {
        let state = loaded_state();
        let response = post_form(&state, "/filter/category", "category=+").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_clear_restores_catalog_and_search_input() {
        let state = loaded_state();
        get(&state, "/products/search?q=ring").await;
        post_form(&state, "/filter/category", "category=jewelery").await;

        let body = body_text(post_form(&state, "/filter/clear", "").await).await;

        assert!(body.contains("Shirt"));
        assert!(body.contains("Ring"));
        assert!(body.contains("id=\"search-input\" name=\"q\" value=\"\""));
        assert!(!body.contains("Filtered by"));
        assert_eq!(body.matches("hx-swap-oob=\"true\"").count(), 3);
    }
}
