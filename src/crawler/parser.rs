//! HTML parser for extracting links
//!
//! Link extraction returns `href` values exactly as written in the markup.
//! Resolving them against the page URL is left to the caller
//! (see [`crate::url::resolve_link`]).

use scraper::{Html, Selector};

/// Extracts the raw `href` of every anchor element
///
/// Order follows the document; duplicates are kept.
///
/// # Example
///
/// ```
/// use recipe_harvest::crawler::extract_links;
///
/// let html = r#"<a href="/recipe/1/">One</a><a href="/recipe/1/">Again</a><a>None</a>"#;
/// assert_eq!(extract_links(html), vec!["/recipe/1/", "/recipe/1/"]);
/// ```
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    extract_links_from(&document)
}

/// Extracts anchor hrefs from an already parsed document
pub fn extract_links_from(document: &Html) -> Vec<String> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
