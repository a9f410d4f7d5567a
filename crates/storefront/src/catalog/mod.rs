//! Product catalog: the in-memory store and the remote catalog API client.
//!
//! # Architecture
//!
//! - The remote API is the source of truth and is read exactly once, at
//!   bootstrap (see [`crate::bootstrap`])
//! - [`CatalogStore`] owns the fetched products; everything else borrows
//! - [`CatalogSource`] is the seam between bootstrap and HTTP, so bootstrap
//!   can be exercised without a network

mod client;

pub use client::{CatalogClient, CatalogError, CatalogSource};

use vitrine_core::{Category, Product, ProductId};

/// The master product list.
///
/// Filtering never mutates the master list; it returns borrowed views in
/// catalog order.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Replace the master list.
    pub fn load(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// The full catalog, in API order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by its id.
    #[must_use]
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products matching `predicate`, in catalog order.
    pub fn filter_by<F>(&self, predicate: F) -> Vec<&Product>
    where
        F: Fn(&Product) -> bool,
    {
        self.products.iter().filter(|p| predicate(p)).collect()
    }

    /// The first product in `category`, used as the category's representative.
    #[must_use]
    pub fn first_in_category(&self, category: &Category) -> Option<&Product> {
        self.products.iter().find(|p| &p.category == category)
    }

    /// Number of products loaded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty (not yet loaded, or loaded empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
