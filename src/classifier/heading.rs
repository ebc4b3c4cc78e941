//! The availability heuristic: an unclaimed handle's profile page renders
//! a placeholder banner as its primary heading. The heading text is
//! normalized (whitespace collapsed, lowercased) and must contain both
//! sentinel phrases to count as unclaimed.

use scraper::{Html, Selector};

/// Both phrases must appear in the normalized heading text.
const SENTINEL_PHRASES: [&str; 2] = ["nothing to see", "yet"];

/// Classifies a full HTML page body.
///
/// A page without any `h1` is classified as taken; a real profile page
/// always has a heading, and being conservative here matches the
/// fail-closed policy everywhere else.
pub fn classify_page(html: &str) -> bool {
    match extract_heading(html) {
        Some(heading) => is_unclaimed_banner(&heading),
        None => false,
    }
}

/// Extracts the text of the page's first `h1`, if any.
pub fn extract_heading(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("h1").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
        .filter(|text| !text.trim().is_empty())
}

/// Collapses runs of whitespace to single spaces and lowercases.
pub fn normalize_heading(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// True iff the normalized heading contains every sentinel phrase.
pub fn is_unclaimed_banner(heading: &str) -> bool {
    let normalized = normalize_heading(heading);
    SENTINEL_PHRASES
        .iter()
        .all(|phrase| normalized.contains(phrase))
}
