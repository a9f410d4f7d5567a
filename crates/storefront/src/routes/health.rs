//! Health check handlers.

use axum::{extract::State, http::StatusCode};

use crate::shop::LoadState;
use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable until the catalog has loaded, and for good
/// once bootstrap has failed.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.shop().load_state() {
        LoadState::Ready => StatusCode::OK,
        LoadState::Loading | LoadState::Failed => StatusCode::SERVICE_UNAVAILABLE,
    }
}
