//! Full page handler.

use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::shop::{Action, Page};
use crate::state::AppState;
use crate::views::{IndexTemplate, index_page};

/// Query parameters for the full page.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<Page>,
}

/// Render the whole storefront, switching to `?page=` first if given.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<IndexTemplate> {
    let mut shop = state.shop();
    if let Some(page) = query.page {
        shop.dispatch(Action::Navigate(page))?;
    }
    Ok(index_page(&shop)?)
}
