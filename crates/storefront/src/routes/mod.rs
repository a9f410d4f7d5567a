//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Full page (?page=home|products|categories|about)
//! GET  /health             - Liveness check
//! GET  /health/ready       - Readiness check (catalog loaded)
//!
//! # Actions (HTMX, respond with out-of-band region swaps)
//! GET  /products/search    - Apply a search term (?q=)
//! POST /filter/category    - Show one category (form: category)
//! POST /filter/clear       - Show the full catalog
//! POST /cart/add           - Add one unit of a product (form: product_id)
//!
//! # Regions (HTMX polling while the catalog loads)
//! GET  /regions/{region}   - Render a single region
//! ```
//!
//! Handlers lock the shop, dispatch one action and render the regions it
//! reports as stale before releasing the lock.

pub mod cart;
pub mod filter;
pub mod health;
pub mod home;
pub mod products;
pub mod regions;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the filter routes router.
pub fn filter_routes() -> Router<AppState> {
    Router::new()
        .route("/category", post(filter::category))
        .route("/clear", post(filter::clear))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new().route("/add", post(cart::add))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/products/search", get(products::search))
        .route("/regions/{region}", get(regions::show))
        .nest("/filter", filter_routes())
        .nest("/cart", cart_routes())
}
