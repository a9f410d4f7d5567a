//! View rendering.
//!
//! Every function here is pure: it maps state to an askama template and keeps
//! nothing. Each region renders to a single root element whose id is
//! [`Region::dom_id`]; regions sent in response to an action are marked for an
//! HTMX out-of-band swap so one response can update several of them.

pub mod cart;
pub mod categories;
pub mod chrome;
pub mod products;

use askama::Template;
use askama_web::WebTemplate;

pub use cart::{CartCountBadge, CartRegion, render_cart, render_cart_count};
pub use categories::{CategoriesRegion, render_categories, render_categories_loading};
pub use chrome::{
    FilterStatusRegion, NavigationRegion, SearchRegion, render_filter_status,
    render_navigation, render_search_input,
};
pub use products::{
    ProductsRegion, render_products, render_products_failed, render_products_loading,
};

use crate::filters;
use crate::shop::{LoadState, Page, Region, Shop};

/// The active page's content.
#[derive(Template)]
#[template(path = "partials/page.html")]
pub struct PageRegion {
    pub page: &'static str,
    pub search_html: String,
    pub filter_status_html: String,
    pub products_html: String,
    pub categories_html: String,
    pub oob: bool,
}

/// Full storefront page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub navigation_html: String,
    pub page_html: String,
    pub cart_count_html: String,
    pub cart_html: String,
}

/// Products region for the shop's current load state and filter.
fn products_region(shop: &Shop) -> ProductsRegion {
    match shop.load_state() {
        LoadState::Loading => render_products_loading(),
        LoadState::Failed => render_products_failed(),
        LoadState::Ready => render_products(&shop.visible_products()),
    }
}

/// Categories region; left empty when bootstrap failed.
fn categories_region(shop: &Shop) -> CategoriesRegion {
    match shop.load_state() {
        LoadState::Loading => render_categories_loading(),
        LoadState::Failed | LoadState::Ready => {
            render_categories(shop.categories(), shop.catalog())
        }
    }
}

fn page_region(shop: &Shop) -> askama::Result<PageRegion> {
    let page = shop.page();
    let on_products = page == Page::Products;
    let shows_categories = matches!(page, Page::Home | Page::Categories);

    Ok(PageRegion {
        page: page.slug(),
        search_html: if on_products {
            render_search_input(shop.filter().search_input()).render()?
        } else {
            String::new()
        },
        filter_status_html: if on_products {
            render_filter_status(shop.filter().indicator()).render()?
        } else {
            String::new()
        },
        products_html: if on_products {
            products_region(shop).render()?
        } else {
            String::new()
        },
        categories_html: if shows_categories {
            categories_region(shop).render()?
        } else {
            String::new()
        },
        oob: false,
    })
}

/// Render one region of `shop`.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_region(shop: &Shop, region: Region, oob: bool) -> askama::Result<String> {
    match region {
        Region::Products => {
            let mut view = products_region(shop);
            view.oob = oob;
            view.render()
        }
        Region::Categories => {
            let mut view = categories_region(shop);
            view.oob = oob;
            view.render()
        }
        Region::Cart => {
            let cart = shop.cart();
            let mut view = render_cart(cart.lines(), cart.total_items(), cart.total_cost());
            view.oob = oob;
            view.render()
        }
        Region::CartCount => {
            let mut view = render_cart_count(shop.cart().total_items());
            view.oob = oob;
            view.render()
        }
        Region::FilterStatus => {
            let mut view = render_filter_status(shop.filter().indicator());
            view.oob = oob;
            view.render()
        }
        Region::Search => {
            let mut view = render_search_input(shop.filter().search_input());
            view.oob = oob;
            view.render()
        }
        Region::Navigation => {
            let mut view = render_navigation(shop.page());
            view.oob = oob;
            view.render()
        }
        Region::Page => {
            let mut view = page_region(shop)?;
            view.oob = oob;
            view.render()
        }
    }
}

/// Render several regions as out-of-band swaps, in order.
///
/// # Errors
///
/// Returns an error if any template fails to render.
pub fn render_regions(shop: &Shop, regions: &[Region]) -> askama::Result<String> {
    regions.iter().try_fold(String::new(), |mut html, &region| {
        html.push_str(&render_region(shop, region, true)?);
        html.push('\n');
        Ok(html)
    })
}

/// Build the full page for the shop's current state.
///
/// # Errors
///
/// Returns an error if any region fails to render.
pub fn index_page(shop: &Shop) -> askama::Result<IndexTemplate> {
    Ok(IndexTemplate {
        navigation_html: render_region(shop, Region::Navigation, false)?,
        page_html: render_region(shop, Region::Page, false)?,
        cart_count_html: render_region(shop, Region::CartCount, false)?,
        cart_html: render_region(shop, Region::Cart, false)?,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use vitrine_core::{Category, ProductId};

    use super::*;
    use crate::bootstrap::CatalogSnapshot;
    use crate::catalog::CatalogError;
    use crate::catalog::fixtures::shirt_and_ring;
    use crate::shop::Action;

    fn loaded_shop() -> Shop {
        let mut shop = Shop::new();
        shop.finish_bootstrap(Ok(CatalogSnapshot {
            products: shirt_and_ring(),
            categories: vec![Category::from("men's clothing"), Category::from("jewelery")],
        }));
        shop
    }

    #[test]
    fn test_unmatched_search_renders_placeholder() {
        let mut shop = loaded_shop();
        shop.dispatch(Action::Navigate(Page::Products)).unwrap();
        let regions = shop.dispatch(Action::Search("zeppelin".to_string())).unwrap();

        let html = render_regions(&shop, &regions).unwrap();
        assert!(html.contains("No products found."));
        assert!(html.contains("id=\"filter-status\""));
    }

    #[test]
    fn test_add_to_cart_response_updates_cart_and_badge() {
        let mut shop = loaded_shop();
        let regions = shop.dispatch(Action::AddToCart(ProductId::new(2))).unwrap();

        let html = render_regions(&shop, &regions).unwrap();
        assert!(html.contains("id=\"cart-region\""));
        assert!(html.contains("id=\"cart-count\""));
        assert!(html.contains("$99.50"));
        assert_eq!(html.matches("hx-swap-oob=\"true\"").count(), 2);
    }

    #[test]
    fn test_failed_bootstrap_page() {
        let mut shop = Shop::new();
        shop.finish_bootstrap(Err(CatalogError::Timeout(Duration::from_secs(1))));
        shop.dispatch(Action::Navigate(Page::Products)).unwrap();

        let page = index_page(&shop).unwrap().render().unwrap();
        assert!(page.contains("Failed to load data."));
        assert!(!page.contains("add-to-cart-btn"));
    }

    #[test]
    fn test_failed_bootstrap_leaves_categories_empty() {
        let mut shop = Shop::new();
        shop.finish_bootstrap(Err(CatalogError::Timeout(Duration::from_secs(1))));

        let html = render_region(&shop, Region::Categories, false).unwrap();
        assert!(!html.contains("category-card"));
        assert!(!html.contains("hx-get"));
    }

    #[test]
    fn test_category_selection_renders_products_page() {
        let mut shop = loaded_shop();
        let regions = shop
            .dispatch(Action::SelectCategory(Category::from("jewelery")))
            .unwrap();

        let html = render_regions(&shop, &regions).unwrap();
        assert!(html.contains("Ring"));
        assert!(!html.contains("Shirt"));
        assert!(html.contains("Filtered by"));
        assert!(html.contains("aria-current=\"page\">Products<"));
    }

    #[test]
    fn test_home_page_shows_categories() {
        let mut shop = loaded_shop();
        shop.dispatch(Action::Navigate(Page::Home)).unwrap();
        let page = index_page(&shop).unwrap().render().unwrap();
        assert!(page.contains("Sharp and modern styles."));
        assert!(page.contains("Your cart is empty."));
    }

    #[test]
    fn test_cart_opens_as_dismissable_modal() {
        let mut shop = loaded_shop();
        shop.dispatch(Action::AddToCart(ProductId::new(1))).unwrap();
        let page = index_page(&shop).unwrap().render().unwrap();

        assert!(page.contains("href=\"#cart\" class=\"cart-button\""));
        assert!(page.contains("<aside id=\"cart\" class=\"cart-modal\">"));
        assert!(page.contains("class=\"cart-close\" aria-label=\"Close cart\""));
        assert!(page.contains("href=\"#\" class=\"cart-backdrop\""));

        // The cart region stays swappable inside the dialog
        let dialog = &page[page.find("class=\"cart-dialog\"").unwrap()..];
        assert!(dialog.contains("id=\"cart-region\""));
        assert!(dialog.contains("$19.99"));
    }

    #[test]
    fn test_landing_page_lists_products() {
        let page = index_page(&loaded_shop()).unwrap().render().unwrap();
        assert!(page.contains("add-to-cart-btn"));
        assert!(page.contains("aria-current=\"page\">Products<"));
    }

    #[test]
    fn test_landing_page_after_failed_bootstrap_shows_error() {
        let mut shop = Shop::new();
        shop.finish_bootstrap(Err(CatalogError::Timeout(Duration::from_secs(1))));

        let page = index_page(&shop).unwrap().render().unwrap();
        assert!(page.contains("Failed to load data."));
        assert!(!page.contains("hx-trigger=\"every 1s\""));
    }
}
