// src/search/engine.rs
// =============================================================================
// Runs one email through every configured search engine.
//
// How it works, per email:
// 1. Build the query URL from the engine template
// 2. Fetch the results page (failures come back as None)
// 3. Pull out every <a href>, keep the ones the LinkFilter accepts
// 4. Record them in the shared ResultSet
// 5. Sleep for the pacing delay, then move on to the next engine
//
// Engines for one email are queried strictly one after another. Different
// emails are run concurrently by the scraper.
// =============================================================================

use crate::pacing::Pacer;
use crate::report::ResultSet;
use crate::search::{extract_anchor_links, Email, Fetcher, LinkFilter, SearchEngineTemplate};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct EngineRunner {
    fetcher: Fetcher,
    engines: Vec<SearchEngineTemplate>,
    pacer: Pacer,
    results: Arc<ResultSet>,
}

impl EngineRunner {
    pub fn new(
        fetcher: Fetcher,
        engines: Vec<SearchEngineTemplate>,
        pacer: Pacer,
        results: Arc<ResultSet>,
    ) -> Self {
        EngineRunner {
            fetcher,
            engines,
            pacer,
            results,
        }
    }

    // Queries every engine for one email
    //
    // Returns: how many links were recorded for this email by this loop
    //
    // Never fails: a bad engine is logged and skipped.
    pub async fn search_email(&self, email: &Email) -> usize {
        // Make sure the key exists even if every engine fails
        self.results.record(email, Vec::new());

        let filter = match LinkFilter::for_email(email) {
            Ok(filter) => filter,
            Err(e) => {
                tracing::warn!(%email, error = %e, "skipping search engines");
                return 0;
            }
        };

        let mut recorded = 0;

        for (index, engine) in self.engines.iter().enumerate() {
            // Pace every engine after the first; the delay grows with the
            // number of links recorded so far across all emails
            if index > 0 {
                let delay = self.pacer.next_delay(self.results.total_links());
                tracing::debug!(%email, delay_ms = delay.as_millis() as u64, "pacing");
                tokio::time::sleep(delay).await;
            }

            // Build the query URL, e.g. https://www.bing.com/search?q=alice%40example.com
            let url = engine.format(email);
            tracing::debug!(%email, url = %url, "querying engine");

            // The fetcher already logged why it came back empty
            let Some(html) = self.fetcher.fetch(&url).await else {
                continue;
            };

            // Parse, filter and record; a page we can't parse is skipped
            match relevant_links(&html, &filter) {
                Ok(links) => {
                    tracing::info!(%email, engine = engine.as_str(), found = links.len(), "engine results");
                    recorded += links.len();
                    self.results.record(email, links);
                }
                Err(e) => {
                    tracing::warn!(%email, url = %url, error = %e, "could not parse results page");
                }
            }
        }

        recorded
    }
}

// Anchors on a results page that point at something for this email
fn relevant_links(html: &str, filter: &LinkFilter) -> Result<Vec<String>, crate::error::ReconError> {
    let links = extract_anchor_links(html)?
        .into_iter()
        .filter(|link| filter.is_relevant(link))
        .collect();
    Ok(links)
}
