// src/pipeline.rs
// =============================================================================
// Drives a whole run: search engines first, then each enabled recon tool.
//
// Phases, in order:
// 1. Search engines  - every email concurrently, engines in sequence per email
// 2. theHarvester    - if enabled, every email concurrently
// 3. userrecon       - if enabled, every email concurrently
// 4. Web search      - if enabled, every email concurrently
//
// A phase only starts once the previous one has finished for every email.
// Everything lands in one shared ResultSet.
// =============================================================================

use crate::config::ScraperConfig;
use crate::error::ReconError;
use crate::pacing::Pacer;
use crate::report::ResultSet;
use crate::search::{Email, EngineRunner, Fetcher};
use crate::tools::{HarvesterTool, ReconTool, UserReconTool, WebSearchTool};
use futures::stream::{self, StreamExt};
use std::sync::Arc;

pub struct SiteScraper {
    emails: Vec<Email>,
    config: ScraperConfig,
    results: Arc<ResultSet>,
    engines: EngineRunner,
    tools: Vec<ReconTool>,
}

impl SiteScraper {
    pub fn new(emails: Vec<Email>, config: ScraperConfig) -> Result<Self, ReconError> {
        let results = Arc::new(ResultSet::new(&emails));

        // One client, one connection pool, shared by every request of the run
        let fetcher = Fetcher::new(config.request_timeout)?;

        let engines = EngineRunner::new(
            fetcher.clone(),
            config.engines.clone(),
            Pacer::new(config.pacing.clone()),
            Arc::clone(&results),
        );

        // Tool phases run in this fixed order, whichever were enabled
        let mut tools = Vec::new();
        if config.harvester_enabled {
            tools.push(ReconTool::Harvester(HarvesterTool::new(config.tools.clone())));
        }
        if config.userrecon_enabled {
            tools.push(ReconTool::UserRecon(UserReconTool::new(config.tools.clone())));
        }
        if config.web_search_enabled {
            tools.push(ReconTool::WebSearch(WebSearchTool::new(fetcher, &config.tools)));
        }

        Ok(SiteScraper {
            emails,
            config,
            results,
            engines,
            tools,
        })
    }

    /// Handle to the shared results, still readable if the run is cancelled
    pub fn results(&self) -> Arc<ResultSet> {
        Arc::clone(&self.results)
    }

    pub async fn run(&self) {
        // How many emails may be in flight at once within a phase
        let concurrency = self.config.effective_concurrency(self.emails.len());

        // Phase 1: search engines
        if self.config.search_engines_enabled && !self.config.engines.is_empty() {
            tracing::info!(
                emails = self.emails.len(),
                engines = self.config.engines.len(),
                "querying search engines"
            );
            self.search_engines(concurrency).await;
        }

        // Phases 2-4: each tool gets every email before the next tool starts
        for tool in &self.tools {
            tracing::info!(tool = tool.name(), emails = self.emails.len(), "running recon tool");
            self.run_tool(tool, concurrency).await;
        }

        tracing::info!(links = self.results.total_links(), "run finished");
    }

    async fn search_engines(&self, concurrency: usize) {
        // stream::iter turns the email list into a stream of futures,
        // buffer_unordered polls up to `concurrency` of them at once
        stream::iter(&self.emails)
            .map(|email| self.engines.search_email(email))
            .buffer_unordered(concurrency)
            .collect::<Vec<usize>>()
            .await;
    }

    async fn run_tool(&self, tool: &ReconTool, concurrency: usize) {
        stream::iter(&self.emails)
            .map(|email| async move {
                // A failed tool loses this email's links from this tool only
                match tool.collect(email).await {
                    Ok(links) => {
                        tracing::info!(tool = tool.name(), %email, found = links.len(), "tool results");
                        self.results.record(email, links);
                    }
                    Err(e) => {
                        tracing::warn!(tool = tool.name(), %email, error = %e, "recon tool failed");
                    }
                }
            })
            .buffer_unordered(concurrency)
            .collect::<Vec<()>>()
            .await;
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why buffer_unordered and not tokio::spawn?
//    - The futures borrow `self` and the email list, which spawned tasks
//      could not do without cloning everything into 'static data
//    - All the futures still run concurrently on the current task, and
//      cancelling run() (Ctrl+C) drops every one of them at once
//
// 2. Why does the order of results not depend on which email finishes first?
//    - ResultSet::new seeds one entry per email in input order, and record()
//      appends to the existing entry instead of pushing a new one
// -----------------------------------------------------------------------------
