//! Crawler module for recipe discovery
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a politeness delay
//! - Link extraction from anchor elements
//! - Title and sectioned content extraction from recipe pages
//! - The breadth-first crawl engine

mod content;
mod engine;
mod fetcher;
mod parser;

pub use content::{
    extract_recipe, extract_title_and_content, heading_marker, split_sentences, RecipeMap,
    RecipeRecord, NO_HEADING, NO_TITLE,
};
pub use engine::{CrawlEngine, CrawlReport};
pub use fetcher::{build_http_client, fetch_url, FetchResult, HttpFetcher, PageFetcher};
pub use parser::{extract_links, extract_links_from};

use crate::config::Config;
use crate::output::{ResultSink, TextSink};
use crate::HarvestError;
use std::path::Path;

/// Runs a complete crawl and persists the results
///
/// This is the main entry point used by the binary. It will:
/// 1. Build the HTTP fetcher
/// 2. Crawl until `target` recipes are found or the frontier is exhausted,
///    reporting each recipe on stdout
/// 3. Write every recipe to the configured output file
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `target` - Number of recipes to collect
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl finished and results were written
/// * `Err(HarvestError)` - The output file could not be written, or setup failed
///
/// # Example
///
/// ```no_run
/// use recipe_harvest::config::Config;
/// use recipe_harvest::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = crawl(&Config::default(), 5).await?;
/// println!("Found {} recipes", report.recipes_found);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config, target: usize) -> Result<CrawlReport, HarvestError> {
    let fetcher = HttpFetcher::new(&config.http)?;
    let mut engine = CrawlEngine::new(&config.crawler, target, fetcher, TextSink::stdout())?;

    let report = engine.run().await?;

    let destination = Path::new(&config.output.recipes_path);
    let (results, mut sink) = engine.into_parts();
    sink.persist(&results, destination)?;

    tracing::info!(
        "Saved {} recipes to {}",
        results.len(),
        destination.display()
    );

    Ok(report)
}
