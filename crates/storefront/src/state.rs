//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::bootstrap;
use crate::catalog::{CatalogClient, CatalogError};
use crate::config::StorefrontConfig;
use crate::shop::Shop;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The storefront serves a single shopper, so
/// one [`Shop`] sits behind a mutex; handlers never hold the lock across an
/// `.await`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    shop: Mutex<Shop>,
}

impl AppState {
    /// Create a new application state with an empty, loading shop.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog client cannot be built from the
    /// configuration.
    pub fn new(config: StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = CatalogClient::new(&config.catalog)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                shop: Mutex::new(Shop::new()),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Lock the shop. Poisoning is ignored.
    pub fn shop(&self) -> MutexGuard<'_, Shop> {
        self.inner
            .shop
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Spawn the one-time catalog load.
    ///
    /// Until it completes the shop stays in the loading state and the page
    /// polls for the products and categories regions.
    pub fn start_bootstrap(&self) -> JoinHandle<()> {
        let state = self.clone();
        info!("Spawning catalog bootstrap task");
        tokio::spawn(async move {
            let timeout = state.config().catalog.timeout;
            let outcome = bootstrap::initialize(state.catalog(), timeout).await;
            if let Err(e) = &outcome {
                bootstrap::report_failure(e);
            }

            let regions = state.shop().finish_bootstrap(outcome);
            if regions.is_empty() {
                error!("Bootstrap finished after the catalog was already settled");
            }
        })
    }
}
