// src/search/html.rs
// =============================================================================
// This module pulls anchor links out of HTML documents.
//
// Both search result pages and theHarvester's HTML report are parsed here.
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever and tolerates broken markup
//
// Links are returned exactly as written in the href attribute. Search engines
// wrap many results in relative redirect links ("/url?q=..."), and those
// still carry the target domain in their text, which is all the relevance
// filter needs.
// =============================================================================

use crate::error::ReconError;
use scraper::{Html, Selector};

// Extracts the href of every <a> element, in document order
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: the raw href values, or a Parse error if the selector is rejected
//
// Example:
//   html = "<a href='/docs'>Docs</a><a>no href</a>"
//   result = ["/docs"]
pub fn extract_anchor_links(html: &str) -> Result<Vec<String>, ReconError> {
    let document = Html::parse_document(html);

    // "a[href]" means "all <a> tags that have an href attribute"
    let selector = Selector::parse("a[href]")
        .map_err(|e| ReconError::Parse(format!("invalid anchor selector: {:?}", e)))?;

    let links = document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect();

    Ok(links)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why is Html never held across an .await?
//    - scraper's Html type is not Send, so a future holding it could not be
//      moved between tokio worker threads
//    - Keeping the parse inside this synchronous function means callers only
//      ever see the resulting Vec<String>
//
// 2. What does .value() do?
//    - element is an ElementRef (reference to an HTML element)
//    - .value() gets the underlying Element
//    - .attr("href") gets the value of the href attribute
// -----------------------------------------------------------------------------
