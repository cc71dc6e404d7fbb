//! Plain-text recipe output
//!
//! This module renders recipes for two audiences: the progress stream shown
//! while crawling, and the UTF-8 text file written at the end of the run.

use crate::crawler::{RecipeMap, RecipeRecord};
use crate::output::traits::{OutputError, OutputResult, ResultSink};
use std::io::{self, Write};
use std::path::Path;

/// Separator closing each record in the output file
pub const FILE_SEPARATOR_WIDTH: usize = 50;

/// Separator closing each record on the progress stream
pub const PROGRESS_SEPARATOR_WIDTH: usize = 80;

/// Result sink writing progress to a stream and recipes to a text file
pub struct TextSink<W: Write> {
    progress: W,
}

impl TextSink<io::Stdout> {
    /// Creates a sink reporting progress on standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextSink<W> {
    /// Creates a sink reporting progress to the given writer
    pub fn new(progress: W) -> Self {
        Self { progress }
    }

    /// Returns the progress writer
    pub fn progress(&self) -> &W {
        &self.progress
    }

    /// Consumes the sink, returning the progress writer
    pub fn into_progress(self) -> W {
        self.progress
    }
}

impl<W: Write> ResultSink for TextSink<W> {
    fn report(&mut self, url: &str, record: &RecipeRecord) -> OutputResult<()> {
        self.progress
            .write_all(format_progress(url, record).as_bytes())?;
        self.progress.flush()?;
        Ok(())
    }

    fn persist(&mut self, results: &RecipeMap, destination: &Path) -> OutputResult<()> {
        write_recipes_file(results, destination)
    }
}

/// Formats one recipe for the progress stream
///
/// Title and URL header, every content line, then an 80-character separator.
pub fn format_progress(url: &str, record: &RecipeRecord) -> String {
    let mut out = format!("\n✓ {} - {}\n\n", record.title, url);
    for line in &record.sections {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&"=".repeat(PROGRESS_SEPARATOR_WIDTH));
    out.push_str("\n\n");
    out
}

/// Formats every recipe in the layout of the output file
///
/// ```text
/// <title>
/// <url>
///
/// <content line>...
///
/// ==================================================
///
/// ```
///
/// # Example
///
/// ```
/// use recipe_harvest::crawler::{RecipeMap, RecipeRecord};
/// use recipe_harvest::output::format_recipes;
///
/// let mut results = RecipeMap::new();
/// results.insert(
///     "https://www.allrecipes.com/recipe/1/".to_string(),
///     RecipeRecord::new("Toast", vec!["Toast bread.".to_string(), String::new()]),
/// );
///
/// let text = format_recipes(&results);
/// assert!(text.starts_with("Toast\nhttps://www.allrecipes.com/recipe/1/\n\nToast bread.\n"));
/// ```
pub fn format_recipes(results: &RecipeMap) -> String {
    let separator = "=".repeat(FILE_SEPARATOR_WIDTH);
    let mut out = String::new();

    for (url, record) in results {
        out.push_str(&record.title);
        out.push('\n');
        out.push_str(url);
        out.push_str("\n\n");
        for line in &record.sections {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&separator);
        out.push_str("\n\n");
    }

    out
}

/// Writes all recipes to `destination` in a single write
///
/// Missing parent directories are created. Nothing is written unless the
/// whole file can be rendered first.
pub fn write_recipes_file(results: &RecipeMap, destination: &Path) -> OutputResult<()> {
    let contents = format_recipes(results);

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| OutputError::Write {
                path: parent.display().to_string(),
                source,
            })?;
        }
    }

    std::fs::write(destination, contents).map_err(|source| OutputError::Write {
        path: destination.display().to_string(),
        source,
    })?;

    tracing::debug!(
        "Wrote {} recipes to {}",
        results.len(),
        destination.display()
    );
    Ok(())
}
