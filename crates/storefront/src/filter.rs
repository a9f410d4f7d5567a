//! Product filtering: free-text search and category selection.
//!
//! Search and category selection are mutually exclusive. The most recent
//! action wins, and [`FilterState`] holds exactly one of them (or neither).

use vitrine_core::{Category, Product};

use crate::catalog::CatalogStore;

/// The active view-narrowing criterion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterState {
    /// Full catalog.
    #[default]
    None,
    /// Case-insensitive substring search; the term is stored lowercased.
    Search(String),
    /// Exact category match.
    Category(Category),
}

impl FilterState {
    /// Whether `product` is visible under this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::None => true,
            Self::Search(term) => matches_term(product, term),
            Self::Category(category) => &product.category == category,
        }
    }
}

/// Search match on title, category or description.
///
/// `term` must already be lowercase.
fn matches_term(product: &Product, term: &str) -> bool {
    product.title.to_lowercase().contains(term)
        || product.category.as_str().to_lowercase().contains(term)
        || product.description.to_lowercase().contains(term)
}

/// Derives the visible product subset and the filter indicator.
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    state: FilterState,
    search_input: String,
}

impl FilterController {
    /// Create a controller showing the full catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active filter.
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Apply a free-text search. An empty term shows everything.
    ///
    /// Hides the category indicator.
    pub fn apply_search<'a>(&mut self, catalog: &'a CatalogStore, term: &str) -> Vec<&'a Product> {
        self.search_input = term.to_string();
        self.state = if term.is_empty() {
            FilterState::None
        } else {
            FilterState::Search(term.to_lowercase())
        };
        self.visible(catalog)
    }

    /// Show only products in `category` and display the indicator.
    pub fn apply_category<'a>(
        &mut self,
        catalog: &'a CatalogStore,
        category: Category,
    ) -> Vec<&'a Product> {
        self.state = FilterState::Category(category);
        self.visible(catalog)
    }

    /// Restore the full catalog, hide the indicator and empty the search input.
    pub fn clear<'a>(&mut self, catalog: &'a CatalogStore) -> Vec<&'a Product> {
        self.state = FilterState::None;
        self.search_input.clear();
        self.visible(catalog)
    }

    /// The products visible under the active filter, in catalog order.
    #[must_use]
    pub fn visible<'a>(&self, catalog: &'a CatalogStore) -> Vec<&'a Product> {
        catalog.filter_by(|p| self.state.matches(p))
    }

    /// The category shown in the "filtered by" indicator, if visible.
    #[must_use]
    pub const fn indicator(&self) -> Option<&Category> {
        match &self.state {
            FilterState::Category(category) => Some(category),
            FilterState::None | FilterState::Search(_) => None,
        }
    }

    /// The value displayed in the search input.
    ///
    /// Kept as typed; only [`Self::clear`] empties it.
    #[must_use]
    pub fn search_input(&self) -> &str {
        &self.search_input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{product, shirt_and_ring};

    fn catalog() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.load(shirt_and_ring());
        store
    }

    fn ids(products: &[&Product]) -> Vec<i32> {
        products.iter().map(|p| p.id.as_i32()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_on_title() {
        let catalog = catalog();
        let mut filter = FilterController::new();

        assert_eq!(ids(&filter.apply_search(&catalog, "ring")), vec![2]);
        assert_eq!(ids(&filter.apply_search(&catalog, "RING")), vec![2]);
    }

    #[test]
    fn test_search_matches_category_or_description() {
        let mut store = CatalogStore::new();
        let mut drive = product(3, "Drive", "64", "electronics");
        drive.description = "Portable SSD with USB-C".to_string();
        store.load(vec![product(1, "Shirt", "19.99", "men's clothing"), drive]);
        let mut filter = FilterController::new();

        assert_eq!(ids(&filter.apply_search(&store, "MEN'S")), vec![1]);
        assert_eq!(ids(&filter.apply_search(&store, "usb-c")), vec![3]);
    }

    #[test]
    fn test_empty_search_returns_full_catalog_in_order() {
        let catalog = catalog();
        let mut filter = FilterController::new();
        filter.apply_category(&catalog, Category::from("jewelery"));
        filter.apply_search(&catalog, "shirt");

        assert_eq!(ids(&filter.apply_search(&catalog, "")), vec![1, 2]);
        assert_eq!(filter.state(), &FilterState::None);
    }

    #[test]
    fn test_unmatched_search_is_empty() {
        let catalog = catalog();
        let mut filter = FilterController::new();
        assert!(filter.apply_search(&catalog, "zeppelin").is_empty());
    }

    #[test]
    fn test_category_sets_indicator_and_search_clears_it() {
        let catalog = catalog();
        let mut filter = FilterController::new();

        let visible = filter.apply_category(&catalog, Category::from("jewelery"));
        assert_eq!(ids(&visible), vec![2]);
        assert_eq!(filter.indicator().map(Category::as_str), Some("jewelery"));

        filter.apply_search(&catalog, "s");
        assert_eq!(filter.indicator(), None);
    }

    #[test]
    fn test_category_match_is_exact() {
        let catalog = catalog();
        let mut filter = FilterController::new();
        assert!(filter.apply_category(&catalog, Category::from("Jewelery")).is_empty());
        assert!(filter.apply_category(&catalog, Category::from("jewel")).is_empty());
    }

    #[test]
    fn test_clear_restores_catalog_and_resets_input() {
        let catalog = catalog();
        let mut filter = FilterController::new();
        filter.apply_search(&catalog, "Ring");
        assert_eq!(filter.search_input(), "Ring");

        filter.apply_category(&catalog, Category::from("jewelery"));
        let visible = filter.clear(&catalog);

        assert_eq!(ids(&visible), vec![1, 2]);
        assert_eq!(filter.indicator(), None);
        assert_eq!(filter.search_input(), "");
    }

    #[test]
    fn test_filters_on_empty_catalog() {
        let catalog = CatalogStore::new();
        let mut filter = FilterController::new();
        assert!(filter.apply_search(&catalog, "ring").is_empty());
        assert!(filter.apply_category(&catalog, Category::from("jewelery")).is_empty());
        assert!(filter.clear(&catalog).is_empty());
    }
}
