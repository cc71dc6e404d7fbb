//! Output module for recipe results
//!
//! This module handles:
//! - The live progress stream shown while crawling
//! - Writing the collected recipes to a text file
//! - Printing the end-of-run summary

mod text;
mod traits;

pub use text::{
    format_progress, format_recipes, write_recipes_file, TextSink, FILE_SEPARATOR_WIDTH,
    PROGRESS_SEPARATOR_WIDTH,
};
pub use traits::{OutputError, OutputResult, ResultSink};

use crate::crawler::CrawlReport;
use std::path::Path;

/// Prints the end-of-run summary to stdout
///
/// # Arguments
///
/// * `report` - The finished crawl report
/// * `destination` - Where the recipes were saved
pub fn print_summary(report: &CrawlReport, destination: &Path) {
    println!("=== Crawl Summary ===\n");
    println!("  Outcome: {}", report.state);
    println!("  Pages crawled: {}", report.pages_crawled);
    println!("  Duration: {}s", report.duration_seconds());
    println!(
        "\n✓ Saved {} recipes to {}\n",
        report.recipes_found,
        destination.display()
    );
}
