//! Crawl engine - breadth-first crawl orchestration
//!
//! This module contains the main crawl loop. It owns:
//! - The frontier queue (FIFO, in discovery order)
//! - The set of visited pages whose links have been scanned
//! - The result map of discovered recipes
//!
//! and drives fetching, link extraction, filtering and content extraction until
//! the target recipe count is reached or the frontier runs dry.

use crate::config::CrawlerConfig;
use crate::crawler::content::{extract_recipe, RecipeMap};
use crate::crawler::fetcher::{FetchResult, PageFetcher};
use crate::crawler::parser::extract_links;
use crate::output::ResultSink;
use crate::state::CrawlState;
use crate::url::{resolve_link, UrlFilter};
use crate::HarvestError;
use chrono::{DateTime, Utc};
use std::collections::{HashSet, VecDeque};
use url::Url;

/// Summary of a finished crawl run
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// Terminal state the run ended in
    pub state: CrawlState,

    /// Number of recipes in the result map
    pub recipes_found: usize,

    /// Number of frontier pages whose links were scanned
    pub pages_crawled: usize,

    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl CrawlReport {
    /// Returns the wall-clock duration of the run in seconds
    pub fn duration_seconds(&self) -> i64 {
        (self.finished_at - self.started_at).num_seconds()
    }
}

/// Breadth-first recipe crawler
///
/// All crawl state lives in this struct; nothing is shared between runs.
pub struct CrawlEngine<F, S> {
    fetcher: F,
    sink: S,
    filter: UrlFilter,
    target: usize,
    state: CrawlState,
    frontier: VecDeque<String>,
    visited: HashSet<String>,
    results: RecipeMap,
}

impl<F, S> CrawlEngine<F, S>
where
    F: PageFetcher,
    S: ResultSink,
{
    /// Creates a new engine with the frontier seeded from the start URLs
    ///
    /// # Arguments
    ///
    /// * `config` - Crawl scope (start URLs, domain token, path marker)
    /// * `target` - Number of recipes to collect; must be positive
    /// * `fetcher` - Page source used for both link scanning and content
    /// * `sink` - Receives a progress report for every discovered recipe
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlEngine)` - Engine in the `Idle` state
    /// * `Err(HarvestError::InvalidTarget)` - `target` was zero
    pub fn new(
        config: &CrawlerConfig,
        target: usize,
        fetcher: F,
        sink: S,
    ) -> Result<Self, HarvestError> {
        if target == 0 {
            return Err(HarvestError::InvalidTarget(target));
        }

        Ok(Self {
            fetcher,
            sink,
            filter: UrlFilter::from_config(config),
            target,
            state: CrawlState::Idle,
            frontier: config.start_urls.iter().cloned().collect(),
            visited: HashSet::new(),
            results: RecipeMap::new(),
        })
    }

    /// Returns the current crawl state
    pub fn state(&self) -> CrawlState {
        self.state
    }

    /// Returns the recipes discovered so far, in discovery order
    pub fn results(&self) -> &RecipeMap {
        &self.results
    }

    /// Returns the pages whose links have been scanned
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    /// Returns the number of URLs waiting in the frontier
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Returns the sink the engine reports to
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the engine, returning the result map
    pub fn into_results(self) -> RecipeMap {
        self.results
    }

    /// Consumes the engine, returning the result map and the sink
    pub fn into_parts(self) -> (RecipeMap, S) {
        (self.results, self.sink)
    }

    fn transition(&mut self, next: CrawlState) -> Result<(), HarvestError> {
        if !self.state.can_transition_to(next) {
            return Err(HarvestError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        tracing::debug!("Crawl state {} -> {}", self.state, next);
        self.state = next;
        Ok(())
    }

    /// Runs the crawl to completion
    ///
    /// Each iteration pops the front of the frontier, skips it if already
    /// visited, then fetches it and scans its links. Every in-scope link not
    /// yet in the result map has its content extracted, is reported to the
    /// sink and, unless the target has been reached, is queued for crawling.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - The run ended `Completed` or `Exhausted`
    /// * `Err(HarvestError::InvalidTransition)` - The engine was not idle
    pub async fn run(&mut self) -> Result<CrawlReport, HarvestError> {
        self.transition(CrawlState::Running)?;

        let started_at = Utc::now();
        tracing::info!(
            "Starting crawl for {} recipes from {} start URL(s)",
            self.target,
            self.frontier.len()
        );

        while !self.target_reached() {
            let Some(current_url) = self.frontier.pop_front() else {
                break;
            };

            if !self.visited.insert(current_url.clone()) {
                tracing::debug!("Skipping already visited {}", current_url);
                continue;
            }

            tracing::info!("Crawling: {}", current_url);
            let links = self.fetch_links(&current_url).await;
            self.process_links(&current_url, &links).await;
        }

        let final_state = if self.target_reached() {
            CrawlState::Completed
        } else {
            CrawlState::Exhausted
        };
        self.transition(final_state)?;

        let report = CrawlReport {
            state: final_state,
            recipes_found: self.results.len(),
            pages_crawled: self.visited.len(),
            started_at,
            finished_at: Utc::now(),
        };

        tracing::info!(
            "Crawl {}: {} recipes found, {} pages crawled in {}s",
            report.state,
            report.recipes_found,
            report.pages_crawled,
            report.duration_seconds()
        );

        Ok(report)
    }

    fn target_reached(&self) -> bool {
        self.results.len() >= self.target
    }

    /// Fetches a frontier page and returns its raw link hrefs
    ///
    /// A failed fetch yields no links.
    async fn fetch_links(&self, url: &str) -> Vec<String> {
        match self.fetcher.fetch_page(url).await {
            FetchResult::Success { body, .. } => extract_links(&body),
            _ => Vec::new(),
        }
    }

    /// Screens the links of one page and records new recipes
    async fn process_links(&mut self, page_url: &str, links: &[String]) {
        let base_url = match Url::parse(page_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Cannot resolve links against {}: {}", page_url, e);
                return;
            }
        };

        for href in links {
            let Some(candidate) = resolve_link(href, &base_url) else {
                continue;
            };

            if !self.filter.is_valid_recipe_url(&candidate)
                || self.results.contains_key(&candidate)
            {
                continue;
            }

            let record = extract_recipe(&self.fetcher, &candidate).await;
            if let Err(e) = self.sink.report(&candidate, &record) {
                tracing::warn!("Failed to report {}: {}", candidate, e);
            }
            self.results.insert(candidate.clone(), record);

            if self.target_reached() {
                tracing::debug!("Target of {} recipes reached", self.target);
                break;
            }

            self.frontier.push_back(candidate);
        }
    }
}
