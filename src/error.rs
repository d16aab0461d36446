// src/error.rs
// =============================================================================
// Error types shared by the scraping modules.
//
// Every failure the pipeline can hit has a variant here. Almost all of them
// are recovered locally (logged, then the source is skipped); only invalid
// input makes it all the way out to main.rs, where anyhow takes over.
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconError {
    /// Input that is not a usable email address
    #[error("invalid email address '{0}': expected exactly one '@' with text on both sides")]
    InvalidEmail(String),

    /// Search engine template without exactly one `{{}}` slot
    #[error("invalid search engine template '{0}': expected exactly one '{{}}' placeholder")]
    InvalidTemplate(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("parse error: {0}")]
    Parse(String),

    /// The external command could not be started at all
    #[error("failed to start {tool}: {source}")]
    ToolSpawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The external command ran but exited unsuccessfully
    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: &'static str,
        status: String,
        stderr: String,
    },

    /// The external command succeeded but its report could not be read
    #[error("could not read {tool} output {path}: {source}")]
    ToolOutput {
        tool: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_failed_message() {
        let err = ReconError::ToolFailed {
            tool: "userrecon",
            status: "exit status: 1".to_string(),
            stderr: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "userrecon exited with exit status: 1: boom");
    }

    #[test]
    fn test_template_message_shows_placeholder() {
        let err = ReconError::InvalidTemplate("https://x.test/".to_string());
        assert!(err.to_string().contains("'{}'"));
    }
}
