//! Output handler traits and types
//!
//! This module defines the trait interface for result sinks and the
//! associated error type.

use crate::crawler::{RecipeMap, RecipeRecord};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for result sinks
///
/// A sink receives a live report for every recipe as it is discovered and,
/// once the crawl is over, persists the whole result map in one go.
pub trait ResultSink {
    /// Reports one discovered recipe on the progress stream
    ///
    /// # Arguments
    ///
    /// * `url` - The recipe URL
    /// * `record` - The extracted (or degraded) record
    fn report(&mut self, url: &str, record: &RecipeRecord) -> OutputResult<()>;

    /// Writes every recipe to durable storage
    ///
    /// # Arguments
    ///
    /// * `results` - Recipes in discovery order
    /// * `destination` - Path of the output file
    fn persist(&mut self, results: &RecipeMap, destination: &Path) -> OutputResult<()>;
}
