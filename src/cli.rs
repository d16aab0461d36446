// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two ways to run the tool:
// - With emails on the command line: everything else comes from flags
//     email-recon alice@example.com,bob@example.org --web-search --output out.txt
// - With no emails: the tool asks for them, and for the tool toggles,
//   interactively (see src/prompt.rs)
// =============================================================================

use crate::config::{ScraperConfig, ToolConfig, DEFAULT_WEB_SEARCH_URL};
use crate::error::ReconError;
use crate::report::ReportFormat;
use crate::search::{parse_email_list, Email, SearchEngineTemplate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "email-recon",
    version,
    about = "Find web pages that mention an email address",
    long_about = "email-recon queries several search engines, and optionally theHarvester, userrecon \
                  and a web search service, for pages that reference each email address. \
                  Run it without arguments to be prompted for everything."
)]
pub struct Cli {
    /// Email addresses to investigate, comma-separated and/or space-separated
    ///
    /// Leave empty to be prompted interactively.
    pub emails: Vec<String>,

    /// Custom search engine URL template with one '{}' for the email (repeatable)
    ///
    /// Replaces the default list of Google, Bing, Yahoo and DuckDuckGo.
    #[arg(long = "engine", value_name = "TEMPLATE")]
    pub engines: Vec<String>,

    /// Skip the search engine phase
    #[arg(long)]
    pub no_engines: bool,

    /// Run theHarvester against each email's domain
    #[arg(long)]
    pub harvester: bool,

    /// Run userrecon against each email
    #[arg(long)]
    pub userrecon: bool,

    /// Ask a web search service for each email
    #[arg(long)]
    pub web_search: bool,

    /// Save the report to this file (no save prompt is shown)
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10, value_name = "SECS")]
    pub timeout: u64,

    /// Maximum number of emails processed at once (default: all of them)
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Directory where external tools write their reports
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub work_dir: PathBuf,

    /// Keep the external tools' report files after parsing them
    #[arg(long)]
    pub keep_tool_output: bool,

    /// Command used to run theHarvester
    #[arg(long, default_value = "theHarvester", value_name = "CMD")]
    pub harvester_bin: String,

    /// Command used to run userrecon
    #[arg(long, default_value = "userrecon", value_name = "CMD")]
    pub userrecon_bin: String,

    /// Search endpoint used by --web-search
    #[arg(long, default_value = DEFAULT_WEB_SEARCH_URL, value_name = "URL")]
    pub web_search_url: String,

    /// How many web search results to keep per email
    #[arg(long, default_value_t = 5, value_name = "N")]
    pub web_search_results: usize,
}

impl Cli {
    /// No emails on the command line means we prompt for them
    pub fn is_interactive(&self) -> bool {
        self.emails.is_empty()
    }

    pub fn email_list(&self) -> Result<Vec<Email>, ReconError> {
        parse_email_list(&self.emails.join(","))
    }

    pub fn report_format(&self) -> ReportFormat {
        if self.json {
            ReportFormat::Json
        } else {
            ReportFormat::Text
        }
    }

    pub fn to_config(&self) -> Result<ScraperConfig, ReconError> {
        let engines = if self.engines.is_empty() {
            SearchEngineTemplate::defaults()
        } else {
            self.engines
                .iter()
                .map(|template| SearchEngineTemplate::parse(template))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(ScraperConfig {
            engines,
            search_engines_enabled: !self.no_engines,
            harvester_enabled: self.harvester,
            userrecon_enabled: self.userrecon,
            web_search_enabled: self.web_search,
            request_timeout: Duration::from_secs(self.timeout),
            concurrency: self.concurrency,
            tools: ToolConfig {
                harvester_bin: self.harvester_bin.clone(),
                userrecon_bin: self.userrecon_bin.clone(),
                web_search_url: self.web_search_url.clone(),
                web_search_results: self.web_search_results,
                work_dir: self.work_dir.clone(),
                keep_output: self.keep_tool_output,
            },
            ..ScraperConfig::default()
        })
    }
}
