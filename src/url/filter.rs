use crate::config::CrawlerConfig;

/// Decides whether a candidate URL is an in-scope recipe detail page
///
/// A URL passes when it:
/// - is non-empty
/// - contains the allowed-domain token
/// - contains the recipe-path marker
/// - has no query string (`?`)
/// - has no fragment (`#`)
///
/// The check is a plain substring test on the absolute URL string; it performs
/// no parsing and no network access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFilter {
    allowed_domain: String,
    recipe_path_marker: String,
}

impl UrlFilter {
    /// Creates a filter for the given domain token and recipe-path marker
    pub fn new(allowed_domain: impl Into<String>, recipe_path_marker: impl Into<String>) -> Self {
        Self {
            allowed_domain: allowed_domain.into(),
            recipe_path_marker: recipe_path_marker.into(),
        }
    }

    /// Builds the filter from the crawl scope configuration
    pub fn from_config(config: &CrawlerConfig) -> Self {
        Self::new(&config.allowed_domain, &config.recipe_path_marker)
    }

    /// Returns the domain token this filter requires
    pub fn allowed_domain(&self) -> &str {
        &self.allowed_domain
    }

    /// Returns the recipe-path marker this filter requires
    pub fn recipe_path_marker(&self) -> &str {
        &self.recipe_path_marker
    }

    /// Checks if a URL is an in-scope recipe URL
    ///
    /// # Examples
    ///
    /// ```
    /// use recipe_harvest::url::UrlFilter;
    ///
    /// let filter = UrlFilter::new("allrecipes.com", "/recipe/");
    /// assert!(filter.is_valid_recipe_url("https://www.allrecipes.com/recipe/12345/foo/"));
    /// assert!(!filter.is_valid_recipe_url("https://www.allrecipes.com/recipe/12345/foo/?clickid=1"));
    /// assert!(!filter.is_valid_recipe_url("https://example.com/recipe/1/"));
    /// ```
    pub fn is_valid_recipe_url(&self, url: &str) -> bool {
        !url.is_empty()
            && url.contains(self.allowed_domain.as_str())
            && url.contains(self.recipe_path_marker.as_str())
            && !url.contains('?')
            && !url.contains('#')
    }
}
