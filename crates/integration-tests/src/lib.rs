//! Integration test support for Vitrine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog` - Catalog API client and bootstrap over real HTTP
//! - `storefront` - The full storefront router against a fake catalog
//!
//! Every test starts its own [`FakeCatalog`] on an ephemeral port, so tests
//! run in parallel and never reach the public catalog API.

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use tokio::task::JoinHandle;
use url::Url;
use vitrine_storefront::config::StorefrontConfig;

/// What a fake endpoint answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    /// 200 with a JSON body.
    Json(Value),
    /// The given status with a plain-text body.
    Status(StatusCode),
    /// 200 with a body that is not valid JSON.
    Garbage,
}

impl Reply {
    fn into_response(self) -> Response {
        match self {
            Self::Json(value) => Json(value).into_response(),
            Self::Status(status) => (status, "catalog unavailable").into_response(),
            Self::Garbage => (StatusCode::OK, "{\"products\": [").into_response(),
        }
    }
}

/// A fake Fake Store API.
#[derive(Debug, Clone)]
pub struct FakeCatalog {
    products: Reply,
    categories: Reply,
    delay: Duration,
}

impl Default for FakeCatalog {
    fn default() -> Self {
        Self {
            products: Reply::Json(sample_products()),
            categories: Reply::Json(sample_categories()),
            delay: Duration::ZERO,
        }
    }
}

impl FakeCatalog {
    /// Override the `/products` reply.
    #[must_use]
    pub fn products(mut self, reply: Reply) -> Self {
        self.products = reply;
        self
    }

    /// Override the `/products/categories` reply.
    #[must_use]
    pub fn categories(mut self, reply: Reply) -> Self {
        self.categories = reply;
        self
    }

    /// Delay every reply.
    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Serve the catalog under `/api` on an ephemeral port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn serve(self) -> FakeCatalogServer {
        let Self {
            products,
            categories,
            delay,
        } = self;

        let api = Router::new()
            .route(
                "/products",
                get(move || async move {
                    tokio::time::sleep(delay).await;
                    products.into_response()
                }),
            )
            .route(
                "/products/categories",
                get(move || async move {
                    tokio::time::sleep(delay).await;
                    categories.into_response()
                }),
            );
        let app = Router::new().nest("/api", api);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake catalog");
        let addr = listener.local_addr().expect("Fake catalog has no address");
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        FakeCatalogServer { addr, handle }
    }
}

/// A running [`FakeCatalog`]. Stops when dropped.
#[derive(Debug)]
pub struct FakeCatalogServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl FakeCatalogServer {
    /// Base URL to configure the storefront with.
    ///
    /// # Panics
    ///
    /// Never in practice; the address always forms a valid URL.
    #[must_use]
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/api", self.addr)).expect("Invalid fake catalog URL")
    }

    /// Storefront configuration pointing at this catalog.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is rejected.
    #[must_use]
    pub fn storefront_config(&self, timeout_secs: u64) -> StorefrontConfig {
        let base_url = self.base_url().to_string();
        let timeout = timeout_secs.to_string();
        StorefrontConfig::from_lookup(|key| match key {
            "CATALOG_API_URL" => Some(base_url.clone()),
            "CATALOG_TIMEOUT_SECS" => Some(timeout.clone()),
            _ => None,
        })
        .expect("Invalid test configuration")
    }
}

impl Drop for FakeCatalogServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Products in the shape the Fake Store API returns them.
#[must_use]
pub fn sample_products() -> Value {
    json!([
        {
            "id": 1,
            "title": "Slim Fit Shirt",
            "price": 19.99,
            "description": "Cotton shirt for everyday wear",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/shirt.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        },
        {
            "id": 2,
            "title": "Silver Ring",
            "price": 99.5,
            "description": "Sterling silver with a polished finish",
            "category": "jewelery",
            "image": "https://fakestoreapi.com/img/ring.jpg",
            "rating": { "rate": 3.9, "count": 70 }
        },
        {
            "id": 3,
            "title": "Portable Drive",
            "price": 64,
            "description": "1TB external drive with USB 3.0",
            "category": "electronics",
            "image": "https://fakestoreapi.com/img/drive.jpg",
            "rating": { "rate": 3.3, "count": 203 }
        }
    ])
}

/// Categories in API order.
#[must_use]
pub fn sample_categories() -> Value {
    json!(["electronics", "jewelery", "men's clothing", "women's clothing"])
}
