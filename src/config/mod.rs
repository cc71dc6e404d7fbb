//! Configuration module for Recipe-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a built-in default, so the crawler also runs without a file.
//!
//! # Example
//!
//! ```no_run
//! use recipe_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Crawling within: {}", config.crawler.allowed_domain);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, HttpConfig, OutputConfig, DEFAULT_ALLOWED_DOMAIN,
    DEFAULT_RECIPE_PATH_MARKER, DEFAULT_START_URL, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
