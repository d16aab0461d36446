// src/tools/mod.rs
// =============================================================================
// External reconnaissance adapters.
//
// Each adapter turns some outside source into a list of links for an email:
// - harvester: theHarvester, run as a subprocess, HTML report
// - userrecon: userrecon, run as a subprocess, text report
// - web_search: a search service queried over HTTP
//
// The scraper runs them as separate phases, one after the other, each phase
// fanned out across all emails. Their links are recorded unfiltered.
// =============================================================================

mod harvester;
mod process;
mod userrecon;
mod web_search;

pub use harvester::HarvesterTool;
pub use userrecon::UserReconTool;
pub use web_search::WebSearchTool;

use crate::error::ReconError;
use crate::search::Email;

/// One adapter phase of a run
#[derive(Debug, Clone)]
pub enum ReconTool {
    Harvester(HarvesterTool),
    UserRecon(UserReconTool),
    WebSearch(WebSearchTool),
}

impl ReconTool {
    pub fn name(&self) -> &'static str {
        match self {
            ReconTool::Harvester(_) => "theHarvester",
            ReconTool::UserRecon(_) => "userrecon",
            ReconTool::WebSearch(_) => "web search",
        }
    }

    pub async fn collect(&self, email: &Email) -> Result<Vec<String>, ReconError> {
        match self {
            ReconTool::Harvester(tool) => tool.collect(email).await,
            ReconTool::UserRecon(tool) => tool.collect(email).await,
            ReconTool::WebSearch(tool) => tool.collect(email).await,
        }
    }
}
