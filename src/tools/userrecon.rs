// src/tools/userrecon.rs
// =============================================================================
// Adapter for userrecon, a username/email reconnaissance tool that checks
// a long list of sites and writes the hits to a plain text report.
//
// Command: userrecon -e <email> -o <work_dir>/userrecon-<email>.txt
//
// The report format isn't structured, so links are found by scanning the
// text for anything that looks like an http(s) URL.
// =============================================================================

use crate::config::ToolConfig;
use crate::error::ReconError;
use crate::search::Email;
use crate::tools::process::{output_path, run_for_report};
use regex::Regex;

const TOOL: &str = "userrecon";

#[derive(Debug, Clone)]
pub struct UserReconTool {
    config: ToolConfig,
}

impl UserReconTool {
    pub fn new(config: ToolConfig) -> Self {
        UserReconTool { config }
    }

    fn args(&self, email: &Email, report: &str) -> Vec<String> {
        vec![
            "-e".to_string(),
            email.as_str().to_string(),
            "-o".to_string(),
            report.to_string(),
        ]
    }

    pub async fn collect(&self, email: &Email) -> Result<Vec<String>, ReconError> {
        let report = output_path(&self.config.work_dir, "userrecon", email, "txt");
        let args = self.args(email, &report.to_string_lossy());

        let text = run_for_report(
            TOOL,
            &self.config.userrecon_bin,
            &args,
            &report,
            self.config.keep_output,
        )
        .await?;

        extract_urls(&text)
    }
}

/// Every `http://` or `https://` run of non-whitespace, in order of appearance
pub fn extract_urls(text: &str) -> Result<Vec<String>, ReconError> {
    let pattern = Regex::new(r"https?://\S+")
        .map_err(|e| ReconError::Parse(format!("invalid URL pattern: {}", e)))?;

    Ok(pattern.find_iter(text).map(|m| m.as_str().to_string()).collect())
}
