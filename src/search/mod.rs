// src/search/mod.rs
// =============================================================================
// This module contains everything needed to query search engines for an
// email address.
//
// Submodules:
// - query: Email and SearchEngineTemplate types
// - fetch: the shared HTTP fetcher with rotating browser identity
// - html: anchor link extraction from HTML pages
// - filter: the domain/extension relevance filter
// - engine: the per-email loop over every search engine
// =============================================================================

mod engine;
mod fetch;
mod filter;
mod html;
mod query;

pub use engine::EngineRunner;
pub use fetch::Fetcher;
pub use filter::LinkFilter;
pub use html::extract_anchor_links;
pub use query::{parse_email_list, Email, SearchEngineTemplate};
