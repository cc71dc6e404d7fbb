use serde::Deserialize;

/// Seed page used when no start URLs are configured
pub const DEFAULT_START_URL: &str = "https://www.allrecipes.com/";

/// Token every in-scope URL must contain
pub const DEFAULT_ALLOWED_DOMAIN: &str = "allrecipes.com";

/// Path segment that marks a recipe detail page
pub const DEFAULT_RECIPE_PATH_MARKER: &str = "/recipe/";

/// Browser-like identification sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Main configuration structure for Recipe-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// Crawl scope configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Pages the frontier is seeded with
    #[serde(rename = "start-urls")]
    pub start_urls: Vec<String>,

    /// Substring a candidate URL must contain to be in scope
    #[serde(rename = "allowed-domain")]
    pub allowed_domain: String,

    /// Path segment identifying recipe detail pages
    #[serde(rename = "recipe-path-marker")]
    pub recipe_path_marker: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            start_urls: vec![DEFAULT_START_URL.to_string()],
            allowed_domain: DEFAULT_ALLOWED_DOMAIN.to_string(),
            recipe_path_marker: DEFAULT_RECIPE_PATH_MARKER.to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Delay applied before every request (milliseconds)
    #[serde(rename = "politeness-delay")]
    pub politeness_delay: u64,

    /// Per-request timeout (seconds)
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            politeness_delay: 1000,
            request_timeout: 10,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the text file the recipes are written to
    #[serde(rename = "recipes-path")]
    pub recipes_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            recipes_path: "recipes.txt".to_string(),
        }
    }
}
