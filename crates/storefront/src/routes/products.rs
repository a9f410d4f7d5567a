//! Product search handler.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::shop::Action;
use crate::state::AppState;
use crate::views::render_regions;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Apply a search term (HTMX).
///
/// Responds with the products and filter indicator regions.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>> {
    let mut shop = state.shop();
    let regions = shop.dispatch(Action::Search(query.q))?;
    Ok(Html(render_regions(&shop, &regions)?))
}
