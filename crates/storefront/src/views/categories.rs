//! Category card rendering.

use askama::Template;
use vitrine_core::{Category, Product};

use crate::catalog::CatalogStore;

/// Representative image for a category with no products.
pub const CATEGORY_PLACEHOLDER: &str = "https://placehold.co/600x400";

/// Short blurb shown on a category card.
#[must_use]
pub fn category_description(category: &Category) -> &'static str {
    match category.as_str() {
        "electronics" => "The latest gadgets and tech.",
        "jewelery" => "Elegant and sparkling accessories.",
        "men's clothing" => "Sharp and modern styles.",
        "women's clothing" => "Chic and trendy apparel.",
        _ => "Explore our collection.",
    }
}

/// Category card display data for templates.
#[derive(Debug, Clone)]
pub struct CategoryView {
    pub name: String,
    pub image_url: String,
    pub description: &'static str,
}

/// Category cards region.
#[derive(Template)]
#[template(path = "partials/categories.html")]
pub struct CategoriesRegion {
    pub categories: Vec<CategoryView>,
    pub polling: bool,
    pub oob: bool,
}

/// Render category cards in the order given.
///
/// Each card's image comes from the first product of `catalog` in that
/// category, falling back to [`CATEGORY_PLACEHOLDER`] (also used when that
/// product has no image).
#[must_use]
pub fn render_categories(categories: &[Category], catalog: &CatalogStore) -> CategoriesRegion {
    let categories = categories
        .iter()
        .map(|category| {
            let image_url = catalog
                .first_in_category(category)
                .and_then(Product::image_url)
                .unwrap_or(CATEGORY_PLACEHOLDER);

            CategoryView {
                name: category.to_string(),
                image_url: image_url.to_string(),
                description: category_description(category),
            }
        })
        .collect();

    CategoriesRegion {
        categories,
        polling: false,
        oob: false,
    }
}

/// Empty region that polls until the catalog has loaded.
#[must_use]
pub const fn render_categories_loading() -> CategoriesRegion {
    CategoriesRegion {
        categories: Vec::new(),
        polling: true,
        oob: false,
    }
}
