// src/config.rs
// =============================================================================
// Everything that changes how a run behaves, in one place.
//
// The CLI (src/cli.rs) and the interactive prompts build a ScraperConfig;
// the rest of the program only ever reads it.
// =============================================================================

use crate::search::SearchEngineTemplate;
use std::path::PathBuf;
use std::time::Duration;

/// Default DuckDuckGo endpoint that serves results without JavaScript
pub const DEFAULT_WEB_SEARCH_URL: &str = "https://html.duckduckgo.com/html/";

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    /// Search engine templates, queried in order for every email
    pub engines: Vec<SearchEngineTemplate>,
    pub search_engines_enabled: bool,
    /// Adapter A: theHarvester
    pub harvester_enabled: bool,
    /// Adapter B: userrecon
    pub userrecon_enabled: bool,
    /// Adapter C: web search API
    pub web_search_enabled: bool,
    /// Per-request timeout for the shared HTTP client
    pub request_timeout: Duration,
    /// How many emails are processed at once; None means all of them
    pub concurrency: Option<usize>,
    pub pacing: PacingConfig,
    pub tools: ToolConfig,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        ScraperConfig {
            engines: SearchEngineTemplate::defaults(),
            search_engines_enabled: true,
            harvester_enabled: false,
            userrecon_enabled: false,
            web_search_enabled: false,
            request_timeout: Duration::from_secs(10),
            concurrency: None,
            pacing: PacingConfig::default(),
            tools: ToolConfig::default(),
        }
    }
}

impl ScraperConfig {
    /// Number of emails to keep in flight for a run over `email_count` emails
    pub fn effective_concurrency(&self, email_count: usize) -> usize {
        self.concurrency.unwrap_or(email_count).max(1)
    }
}

// Pacing delay = base + min(total_links / links_per_unit, cap), in time units
//
// base is drawn uniformly from [base_min, base_max) on every call.
#[derive(Debug, Clone)]
pub struct PacingConfig {
    pub base_min: f64,
    pub base_max: f64,
    pub cap: f64,
    pub links_per_unit: f64,
    pub time_unit: Duration,
}

impl Default for PacingConfig {
    fn default() -> Self {
        PacingConfig {
            base_min: 1.0,
            base_max: 2.0,
            cap: 3.0,
            links_per_unit: 10.0,
            time_unit: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ToolConfig {
    pub harvester_bin: String,
    pub userrecon_bin: String,
    pub web_search_url: String,
    /// How many results the web search adapter keeps per email
    pub web_search_results: usize,
    /// Directory the external tools write their reports into
    pub work_dir: PathBuf,
    /// Keep report files after they have been parsed
    pub keep_output: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            harvester_bin: "theHarvester".to_string(),
            userrecon_bin: "userrecon".to_string(),
            web_search_url: DEFAULT_WEB_SEARCH_URL.to_string(),
            web_search_results: 5,
            work_dir: PathBuf::from("."),
            keep_output: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScraperConfig::default();
        assert_eq!(config.engines.len(), 4);
        assert!(config.search_engines_enabled);
        assert!(!config.harvester_enabled && !config.userrecon_enabled && !config.web_search_enabled);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.tools.web_search_results, 5);
    }

    #[test]
    fn test_effective_concurrency() {
        let mut config = ScraperConfig::default();
        assert_eq!(config.effective_concurrency(7), 7);
        assert_eq!(config.effective_concurrency(0), 1);

        config.concurrency = Some(2);
        assert_eq!(config.effective_concurrency(7), 2);
    }
}
