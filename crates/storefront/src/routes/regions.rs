//! Single-region handler.

use axum::{
    extract::{Path, State},
    response::Html,
};
use tracing::instrument;

use crate::error::Result;
use crate::shop::Region;
use crate::state::AppState;
use crate::views::render_region;

/// Render one region in place.
///
/// Polled by the products and categories regions while the catalog loads;
/// once loaded the returned markup no longer polls.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(region): Path<Region>,
) -> Result<Html<String>> {
    let shop = state.shop();
    Ok(Html(render_region(&shop, region, false)?))
}
