//! One-time catalog load at startup.
//!
//! Products and categories are requested concurrently. Both requests must
//! settle successfully within the configured timeout; any failure is terminal
//! (there is no retry) and is reported once to Sentry.

use std::time::Duration;

use tracing::instrument;
use vitrine_core::{Category, Product};

use crate::catalog::{CatalogError, CatalogSource};

/// Everything bootstrap fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshot {
    /// Products in API order.
    pub products: Vec<Product>,
    /// Categories in API order.
    pub categories: Vec<Category>,
}

/// Fetch products and categories concurrently.
///
/// Waits for both requests to settle, then fails if either failed. The whole
/// operation is bounded by `timeout`.
///
/// # Errors
///
/// Returns the products error if that request failed, otherwise the
/// categories error, or [`CatalogError::Timeout`] if `timeout` elapsed.
#[instrument(skip(source))]
pub async fn initialize<S: CatalogSource>(
    source: &S,
    timeout: Duration,
) -> Result<CatalogSnapshot, CatalogError> {
    let fetch = async { tokio::join!(source.fetch_products(), source.fetch_categories()) };

    let (products, categories) = tokio::time::timeout(timeout, fetch)
        .await
        .map_err(|_| CatalogError::Timeout(timeout))?;

    Ok(CatalogSnapshot {
        products: products?,
        categories: categories?,
    })
}

/// Report a bootstrap failure to Sentry.
pub fn report_failure(error: &CatalogError) {
    let event_id = sentry::capture_error(error);
    tracing::error!(
        error = %error,
        sentry_event_id = %event_id,
        "Error initializing storefront"
    );
}
