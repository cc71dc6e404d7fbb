//! Recipe content extraction
//!
//! Turns a recipe detail page into a [`RecipeRecord`]: the first `<h1>` becomes
//! the title, and every `<p>` is split into sentence lines grouped under
//! `=== heading ===` markers taken from the nearest preceding `<h2>`.

use crate::crawler::fetcher::{FetchResult, PageFetcher};
use crate::HarvestError;
use indexmap::IndexMap;
use scraper::{ElementRef, Html, Selector};

/// Title used when the page has no `<h1>`
pub const NO_TITLE: &str = "No Title Found";

/// Heading tracked before the first `<h2>` is seen
pub const NO_HEADING: &str = "No Heading";

/// Recipes keyed by URL, in discovery order
pub type RecipeMap = IndexMap<String, RecipeRecord>;

/// Title and structured body text of one recipe page
///
/// Each entry of `sections` is a heading marker (`=== heading ===`), a
/// sentence terminated by `.`, or an empty separator line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRecord {
    pub title: String,
    pub sections: Vec<String>,
}

impl RecipeRecord {
    /// Creates a record from extracted content
    pub fn new(title: impl Into<String>, sections: Vec<String>) -> Self {
        Self {
            title: title.into(),
            sections,
        }
    }

    /// Creates a degraded record for a page that could not be loaded
    ///
    /// The title carries the failure reason and there are no sections.
    pub fn degraded(reason: impl std::fmt::Display) -> Self {
        Self {
            title: format!("Failed to load ({})", reason),
            sections: Vec::new(),
        }
    }

    /// Returns true if this record was produced from a failed page
    pub fn is_degraded(&self) -> bool {
        self.sections.is_empty() && self.title.starts_with("Failed to load (")
    }
}

/// Formats a heading marker line
pub fn heading_marker(heading: &str) -> String {
    format!("=== {} ===", heading)
}

/// Extracts the title and sectioned content of a recipe page
///
/// # Rules
///
/// 1. Title is the trimmed text of the first `<h1>`, or [`NO_TITLE`].
/// 2. For each `<p>` in document order, the nearest `<h2>` before it (in
///    document order) is compared with the current heading, initially
///    [`NO_HEADING`]. A different heading emits a marker line and becomes
///    current. A paragraph with no `<h2>` before it emits no marker.
/// 3. The paragraph text is split on `.`; empty fragments are dropped and
///    each remaining fragment is emitted as `fragment.`.
/// 4. A blank line follows every paragraph.
///
/// # Example
///
/// ```
/// use recipe_harvest::crawler::extract_title_and_content;
///
/// let html = "<h1> Soup </h1><h2>Steps</h2><p>Boil. Serve.</p>";
/// let (title, sections) = extract_title_and_content(html).unwrap();
/// assert_eq!(title, "Soup");
/// assert_eq!(sections, vec!["=== Steps ===", "Boil.", "Serve.", ""]);
/// ```
pub fn extract_title_and_content(html: &str) -> Result<(String, Vec<String>), HarvestError> {
    let document = Html::parse_document(html);

    let title = extract_title(&document)?;
    let sections = extract_sections(&document);

    Ok((title, sections))
}

/// Extracts the text of the first `<h1>`
fn extract_title(document: &Html) -> Result<String, HarvestError> {
    let h1_selector =
        Selector::parse("h1").map_err(|e| HarvestError::HtmlParse(format!("{:?}", e)))?;

    Ok(document
        .select(&h1_selector)
        .next()
        .map(|element| element_text(&element))
        .unwrap_or_else(|| NO_TITLE.to_string()))
}

/// Walks the document in order, tracking the latest `<h2>` for each `<p>`
fn extract_sections(document: &Html) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current_heading = NO_HEADING.to_string();
    let mut nearest_h2: Option<String> = None;

    for node in document.root_element().descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };

        match element.value().name() {
            "h2" => nearest_h2 = Some(element_text(&element)),
            "p" => {
                if let Some(heading) = &nearest_h2 {
                    if *heading != current_heading {
                        current_heading = heading.clone();
                        sections.push(heading_marker(&current_heading));
                    }
                }

                sections.extend(split_sentences(&element_text(&element)));
                sections.push(String::new());
            }
            _ => {}
        }
    }

    sections
}

/// Splits paragraph text into `.`-terminated sentence lines
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split('.')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| format!("{}.", fragment))
        .collect()
}

fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Fetches a recipe page and extracts its record
///
/// Never fails: a fetch failure or extraction error produces a degraded
/// record, which still counts as a discovered recipe.
pub async fn extract_recipe<F>(fetcher: &F, url: &str) -> RecipeRecord
where
    F: PageFetcher + ?Sized,
{
    match fetcher.fetch_page(url).await {
        FetchResult::Success { body, .. } => match extract_title_and_content(&body) {
            Ok((title, sections)) => RecipeRecord::new(title, sections),
            Err(e) => {
                tracing::warn!("Failed to extract content from {}: {}", url, e);
                RecipeRecord::degraded(e)
            }
        },
        failed => {
            let reason = failed
                .failure_reason()
                .unwrap_or_else(|| "unknown error".to_string());
            RecipeRecord::degraded(reason)
        }
    }
}
