//! Search input, filter indicator and navigation.

use askama::Template;
use vitrine_core::Category;

use crate::shop::Page;

/// "Filtered by" indicator with its clear action. Hidden when `category` is
/// `None`.
#[derive(Template)]
#[template(path = "partials/filter_status.html")]
pub struct FilterStatusRegion {
    pub category: Option<String>,
    pub oob: bool,
}

/// Search input.
#[derive(Template)]
#[template(path = "partials/search.html")]
pub struct SearchRegion {
    pub value: String,
    pub oob: bool,
}

/// A navigation link.
#[derive(Debug, Clone)]
pub struct NavLinkView {
    pub href: String,
    pub label: &'static str,
    pub active: bool,
}

/// Navigation bar.
#[derive(Template)]
#[template(path = "partials/navigation.html")]
pub struct NavigationRegion {
    pub links: Vec<NavLinkView>,
    pub oob: bool,
}

#[must_use]
pub fn render_filter_status(indicator: Option<&Category>) -> FilterStatusRegion {
    FilterStatusRegion {
        category: indicator.map(ToString::to_string),
        oob: false,
    }
}

#[must_use]
pub fn render_search_input(value: &str) -> SearchRegion {
    SearchRegion {
        value: value.to_string(),
        oob: false,
    }
}

#[must_use]
pub fn render_navigation(active: Page) -> NavigationRegion {
    let links = Page::ALL
        .iter()
        .map(|&page| NavLinkView {
            href: format!("/?page={}", page.slug()),
            label: page.label(),
            active: page == active,
        })
        .collect();

    NavigationRegion { links, oob: false }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_status_hidden_without_category() {
        let html = render_filter_status(None).render().unwrap();
        assert!(html.contains("hidden"));
        assert!(!html.contains("Filtered by"));
    }

    #[test]
    fn test_filter_status_shows_category() {
        let category = Category::from("jewelery");
        let html = render_filter_status(Some(&category)).render().unwrap();
        assert!(html.contains("Filtered by"));
        assert!(html.contains("jewelery"));
        assert!(html.contains("hx-post=\"/filter/clear\""));
    }

    #[test]
    fn test_search_input_value_is_escaped() {
        let html = render_search_input("<b>").render().unwrap();
        assert!(html.contains("value=\"&#60;b&#62;\"") || html.contains("value=\"&lt;b&gt;\""));
    }

    #[test]
    fn test_navigation_marks_active_page() {
        let region = render_navigation(Page::Products);
        let active: Vec<&str> = region
            .links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.label)
            .collect();
        assert_eq!(active, vec!["Products"]);
        assert_eq!(region.links.len(), Page::ALL.len());
    }
}
