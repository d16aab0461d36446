// src/tools/harvester.rs
// =============================================================================
// Adapter for theHarvester, which searches many public sources for a domain
// and writes an HTML report full of links.
//
// Command: theHarvester -d <domain> -b all -f <work_dir>/theharvester-<email>.html
// =============================================================================

use crate::config::ToolConfig;
use crate::error::ReconError;
use crate::search::{extract_anchor_links, Email};
use crate::tools::process::{output_path, run_for_report};

const TOOL: &str = "theHarvester";

#[derive(Debug, Clone)]
pub struct HarvesterTool {
    config: ToolConfig,
}

impl HarvesterTool {
    pub fn new(config: ToolConfig) -> Self {
        HarvesterTool { config }
    }

    fn args(&self, email: &Email, report: &str) -> Vec<String> {
        vec![
            "-d".to_string(),
            email.domain().to_string(),
            "-b".to_string(),
            "all".to_string(),
            "-f".to_string(),
            report.to_string(),
        ]
    }

    // Every anchor in the report is returned, with no relevance filtering
    pub async fn collect(&self, email: &Email) -> Result<Vec<String>, ReconError> {
        let report = output_path(&self.config.work_dir, "theharvester", email, "html");
        let args = self.args(email, &report.to_string_lossy());

        let html = run_for_report(
            TOOL,
            &self.config.harvester_bin,
            &args,
            &report,
            self.config.keep_output,
        )
        .await?;

        extract_anchor_links(&html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_use_domain() {
        let tool = HarvesterTool::new(ToolConfig::default());
        let args = tool.args(&Email::parse("alice@example.com").unwrap(), "out.html");
        assert_eq!(args, vec!["-d", "example.com", "-b", "all", "-f", "out.html"]);
    }

    // A stand-in for theHarvester: writes an HTML report to the -f argument
    #[cfg(unix)]
    #[tokio::test]
    async fn test_collect_reads_html_report() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fake-harvester.sh");
        std::fs::write(
            &script,
            "#!/bin/sh\n\
             [ \"$2\" = \"example.com\" ] || exit 3\n\
             printf '<a href=\"https://example.com/staff\">s</a><a href=\"https://unrelated.net/\">u</a>' > \"$6\"\n",
        )
        .unwrap();

        let tool = HarvesterTool::new(ToolConfig {
            harvester_bin: format!("sh {}", script.display()),
            work_dir: dir.path().to_path_buf(),
            ..ToolConfig::default()
        });

        let email = Email::parse("alice@example.com").unwrap();
        let links = tool.collect(&email).await.unwrap();
        assert_eq!(links, vec!["https://example.com/staff", "https://unrelated.net/"]);
        assert!(!output_path(dir.path(), "theharvester", &email, "html").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_collect_fails_on_non_zero_exit() {
        let tool = HarvesterTool::new(ToolConfig {
            harvester_bin: "false".to_string(),
            ..ToolConfig::default()
        });

        let err = tool.collect(&Email::parse("alice@example.com").unwrap()).await.unwrap_err();
        assert!(matches!(err, ReconError::ToolFailed { .. }));
    }
}
