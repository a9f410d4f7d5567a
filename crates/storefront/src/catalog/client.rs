//! Catalog API client implementation.
//!
//! Talks to a Fake Store API compatible service:
//! - `GET {base}/products` - JSON array of products
//! - `GET {base}/products/categories` - JSON array of category names

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;
use url::Url;
use vitrine_core::{Category, Product};

use crate::config::CatalogApiConfig;

/// Errors that can occur when reading the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An endpoint URL could not be built from the configured base.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The catalog did not load within the configured time.
    #[error("Catalog request timed out after {0:?}")]
    Timeout(Duration),
}

/// A source of catalog data.
///
/// Implemented by [`CatalogClient`] over HTTP; tests substitute in-memory
/// sources.
pub trait CatalogSource: Send + Sync {
    /// Fetch the full product list.
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;

    /// Fetch the category list, in the order the API defines.
    fn fetch_categories(
        &self,
    ) -> impl Future<Output = Result<Vec<Category>, CatalogError>> + Send;
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the remote catalog API.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    products_url: Url,
    categories_url: Url,
}

impl CatalogClient {
    /// Create a new catalog API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint URLs cannot be derived from the base
    /// URL or the HTTP client cannot be built.
    pub fn new(config: &CatalogApiConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("vitrine-storefront/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(CatalogClientInner {
                client,
                products_url: endpoint(&config.base_url, "products")?,
                categories_url: endpoint(&config.base_url, "products/categories")?,
            }),
        })
    }

    /// The product list endpoint.
    #[must_use]
    pub fn products_url(&self) -> &Url {
        &self.inner.products_url
    }

    /// The category list endpoint.
    #[must_use]
    pub fn categories_url(&self) -> &Url {
        &self.inner.categories_url
    }

    /// GET a URL and decode its JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, CatalogError> {
        let response = self.inner.client.get(url.clone()).send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                url = %url,
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Status {
                url: url.to_string(),
                status,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                url = %url,
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse catalog API response"
            );
            CatalogError::Parse(e)
        })
    }
}

impl CatalogSource for CatalogClient {
    #[instrument(skip(self), fields(url = %self.inner.products_url))]
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products: Vec<Product> = self.get_json(&self.inner.products_url).await?;
        tracing::debug!(count = products.len(), "Fetched products");
        Ok(products)
    }

    #[instrument(skip(self), fields(url = %self.inner.categories_url))]
    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let categories: Vec<Category> = self.get_json(&self.inner.categories_url).await?;
        tracing::debug!(count = categories.len(), "Fetched categories");
        Ok(categories)
    }
}

/// Resolve `path` below `base`, treating `base` as a directory.
fn endpoint(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    base.join(path)
}
