//! URL handling module for Recipe-Harvest
//!
//! This module provides the recipe URL filter and resolution of raw `href`
//! values against the page they were found on.

mod filter;

pub use filter::UrlFilter;

use url::Url;

/// Resolves a raw link href to an absolute URL
///
/// Uses standard base-relative resolution against the page the link was found
/// on. Returns None if the href cannot be resolved or does not resolve to an
/// HTTP(S) URL; such links are dropped by the crawler without logging.
///
/// # Examples
///
/// ```
/// use recipe_harvest::url::resolve_link;
/// use url::Url;
///
/// let base = Url::parse("https://www.allrecipes.com/recipes/").unwrap();
/// assert_eq!(
///     resolve_link("/recipe/1/soup/", &base),
///     Some("https://www.allrecipes.com/recipe/1/soup/".to_string())
/// );
/// assert_eq!(resolve_link("mailto:chef@example.com", &base), None);
/// ```
pub fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let absolute_url = base_url.join(href.trim()).ok()?;

    match absolute_url.scheme() {
        "http" | "https" => Some(absolute_url.to_string()),
        _ => None,
    }
}
