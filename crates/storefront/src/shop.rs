//! Storefront state and its command handler.
//!
//! [`Shop`] owns the catalog, the category list, the cart and the filter.
//! Every user action goes through [`Shop::dispatch`], which mutates the state
//! and returns the display [`Region`]s that are now stale. Callers must
//! re-render exactly those regions; that is what keeps the product list, the
//! filter indicator and the cart summary consistent with the last action.

use serde::Deserialize;
use thiserror::Error;
use vitrine_core::{Category, Product, ProductId};

use crate::bootstrap::CatalogSnapshot;
use crate::cart::CartStore;
use crate::catalog::{CatalogError, CatalogStore};
use crate::filter::FilterController;

/// The views of the storefront.
///
/// The storefront opens on the product listing, so the loading and failure
/// states are visible without navigating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    #[default]
    Products,
    Categories,
    About,
}

impl Page {
    /// All pages, in navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Products, Self::Categories, Self::About];

    /// URL slug.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Products => "products",
            Self::Categories => "categories",
            Self::About => "about",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Products => "Products",
            Self::Categories => "Categories",
            Self::About => "About",
        }
    }
}

/// Progress of the one-time catalog load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Independently re-renderable parts of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Products,
    Categories,
    Cart,
    CartCount,
    FilterStatus,
    Search,
    Navigation,
    Page,
}

impl Region {
    /// DOM id of the region's root element.
    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Products => "products-region",
            Self::Categories => "categories-region",
            Self::Cart => "cart-region",
            Self::CartCount => "cart-count",
            Self::FilterStatus => "filter-status",
            Self::Search => "search-region",
            Self::Navigation => "navigation",
            Self::Page => "page",
        }
    }
}

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Search text changed.
    Search(String),
    /// A category card was clicked.
    SelectCategory(Category),
    /// The clear-filter control was clicked.
    ClearFilter,
    /// An "Add to Cart" button was clicked.
    AddToCart(ProductId),
    /// A navigation link was followed.
    Navigate(Page),
}

/// Errors from [`Shop::dispatch`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShopError {
    #[error("Product {0} is not in the catalog")]
    UnknownProduct(ProductId),
}

/// The storefront's in-memory state.
#[derive(Debug, Clone, Default)]
pub struct Shop {
    catalog: CatalogStore,
    categories: Vec<Category>,
    cart: CartStore,
    filter: FilterController,
    page: Page,
    load: LoadState,
}

impl Shop {
    /// Create a shop with an empty catalog, waiting for bootstrap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of bootstrap.
    ///
    /// On success the catalog and categories are loaded and the products and
    /// categories regions are returned for their initial render. On failure
    /// the shop enters the terminal [`LoadState::Failed`] state and only the
    /// products region (now showing the failure message) is returned.
    ///
    /// Bootstrap completes once; later calls change nothing.
    pub fn finish_bootstrap(
        &mut self,
        outcome: Result<CatalogSnapshot, CatalogError>,
    ) -> Vec<Region> {
        if self.load != LoadState::Loading {
            tracing::warn!(state = ?self.load, "Ignoring repeated bootstrap completion");
            return Vec::new();
        }

        match outcome {
            Ok(snapshot) => {
                tracing::info!(
                    products = snapshot.products.len(),
                    categories = snapshot.categories.len(),
                    "Catalog loaded"
                );
                self.catalog.load(snapshot.products);
                self.categories = snapshot.categories;
                self.load = LoadState::Ready;
                vec![Region::Products, Region::Categories]
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load catalog");
                self.load = LoadState::Failed;
                vec![Region::Products]
            }
        }
    }

    /// Apply a user action and return the regions to re-render.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::UnknownProduct`] when adding a product id that is
    /// not in the catalog. The state is unchanged in that case.
    pub fn dispatch(&mut self, action: Action) -> Result<Vec<Region>, ShopError> {
        tracing::debug!(?action, "Dispatching action");

        let regions = match action {
            Action::Search(term) => {
                self.filter.apply_search(&self.catalog, &term);
                vec![Region::Products, Region::FilterStatus]
            }
            Action::SelectCategory(category) => {
                self.filter.apply_category(&self.catalog, category);
                self.page = Page::Products;
                vec![Region::Page, Region::Navigation]
            }
            Action::ClearFilter => {
                self.filter.clear(&self.catalog);
                vec![Region::Products, Region::FilterStatus, Region::Search]
            }
            Action::AddToCart(id) => {
                let product = self
                    .catalog
                    .find_by_id(id)
                    .ok_or(ShopError::UnknownProduct(id))?;
                let quantity = self.cart.add(product);
                tracing::info!(product_id = %id, quantity, "Added to cart");
                vec![Region::Cart, Region::CartCount]
            }
            Action::Navigate(page) => {
                self.page = page;
                vec![Region::Page, Region::Navigation]
            }
        };

        Ok(regions)
    }

    /// Products visible under the active filter.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.filter.visible(&self.catalog)
    }

    /// The catalog store.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Categories in API order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The filter controller.
    #[must_use]
    pub const fn filter(&self) -> &FilterController {
        &self.filter
    }

    /// The active page.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    /// Catalog load progress.
    #[must_use]
    pub const fn load_state(&self) -> LoadState {
        self.load
    }
}
