// src/report/output.rs
// =============================================================================
// Turns a ResultSet snapshot into the text or JSON report, prints it, and
// writes it to disk.
//
// Text layout, per email:
//
//   <blank line>
//   Sites associated with the email address alice@example.com:
//   https://example.com/team
//   https://forum.example.com/u/alice
//
// or, when nothing was found, the same heading followed by
// "Unable to retrieve search results."
// =============================================================================

use crate::error::ReconError;
use crate::report::results::EmailResults;
use std::fmt::Write as _;
use std::path::Path;

pub const NO_RESULTS: &str = "Unable to retrieve search results.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn heading(email: &str) -> String {
    format!("Sites associated with the email address {}:", email)
}

pub fn render_text(results: &[EmailResults]) -> String {
    let mut out = String::new();

    for entry in results {
        // Writing into a String can't fail
        let _ = writeln!(out, "\n{}", heading(entry.email.as_str()));

        if entry.links.is_empty() {
            let _ = writeln!(out, "{}", NO_RESULTS);
        } else {
            for link in &entry.links {
                let _ = writeln!(out, "{}", link);
            }
        }
    }

    out
}

pub fn render(results: &[EmailResults], format: ReportFormat) -> Result<String, ReconError> {
    match format {
        ReportFormat::Text => Ok(render_text(results)),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(results)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Prints the report to stdout
pub fn display(results: &[EmailResults], format: ReportFormat) -> Result<(), ReconError> {
    print!("{}", render(results, format)?);
    Ok(())
}

// Writes the report to `path`, replacing whatever was there
//
// A failure halfway through the write can leave a truncated file behind.
pub fn persist(results: &[EmailResults], path: &Path, format: ReportFormat) -> Result<(), ReconError> {
    let report = render(results, format)?;
    std::fs::write(path, report)?;
    tracing::info!(path = %path.display(), emails = results.len(), "results saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Email;

    fn sample() -> Vec<EmailResults> {
        vec![
            EmailResults {
                email: Email::parse("a@x.com").unwrap(),
                links: vec!["http://x.com/page".into(), "http://x.com/about".into()],
            },
            EmailResults {
                email: Email::parse("b@y.com").unwrap(),
                links: vec![],
            },
        ]
    }

    // Reads a text report back into (email, lines) sections
    fn parse_text(report: &str) -> Vec<(String, Vec<String>)> {
        let mut sections: Vec<(String, Vec<String>)> = Vec::new();
        for line in report.lines().filter(|l| !l.is_empty()) {
            match line
                .strip_prefix("Sites associated with the email address ")
                .and_then(|rest| rest.strip_suffix(':'))
            {
                Some(email) => sections.push((email.to_string(), Vec::new())),
                None => sections.last_mut().unwrap().1.push(line.to_string()),
            }
        }
        sections
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample());
        assert_eq!(
            text,
            "\nSites associated with the email address a@x.com:\n\
             http://x.com/page\n\
             http://x.com/about\n\
             \nSites associated with the email address b@y.com:\n\
             Unable to retrieve search results.\n"
        );
    }

    #[test]
    fn test_render_json() {
        let json = render(&sample(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["email"], "a@x.com");
        assert_eq!(value[0]["links"][1], "http://x.com/about");
        assert_eq!(value[1]["links"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_persist_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search_results.txt");
        std::fs::write(&path, "old content that must disappear").unwrap();

        persist(&sample(), &path, ReportFormat::Text).unwrap();

        let sections = parse_text(&std::fs::read_to_string(&path).unwrap());
        assert_eq!(
            sections,
            vec![
                ("a@x.com".to_string(), vec!["http://x.com/page".to_string(), "http://x.com/about".to_string()]),
                ("b@y.com".to_string(), vec![NO_RESULTS.to_string()]),
            ]
        );
    }

    #[test]
    fn test_persist_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/out.txt");

        let err = persist(&sample(), &path, ReportFormat::Text).unwrap_err();
        assert!(matches!(err, ReconError::Io(_)));
        assert!(!path.exists());
    }
}
