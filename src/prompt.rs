// src/prompt.rs
// =============================================================================
// Interactive questions, used when no emails are given on the command line.
//
// Before the run: the email list, then one yes/no per recon tool that wasn't
// already switched on with a flag.
// After the run: whether to save, and where.
// =============================================================================

use crate::config::ScraperConfig;
use crate::search::{parse_email_list, Email};
use anyhow::{Context, Result};
use dialoguer::{Confirm, Input};
use std::path::PathBuf;

pub const DEFAULT_REPORT_FILE: &str = "search_results.txt";

pub fn emails() -> Result<Vec<Email>> {
    let input: String = Input::new()
        .with_prompt("Enter email addresses separated by commas")
        .validate_with(|input: &String| -> Result<(), String> {
            match parse_email_list(input) {
                Ok(list) if list.is_empty() => Err("enter at least one email address".to_string()),
                Ok(_) => Ok(()),
                Err(e) => Err(e.to_string()),
            }
        })
        .interact_text()
        .context("failed to read email addresses")?;

    Ok(parse_email_list(&input)?)
}

fn yes_no(question: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(question)
        .default(false)
        .interact()
        .with_context(|| format!("failed to read answer to '{}'", question))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toggle {
    Harvester,
    UserRecon,
    WebSearch,
}

impl Toggle {
    const ALL: [Toggle; 3] = [Toggle::Harvester, Toggle::UserRecon, Toggle::WebSearch];

    fn question(self) -> &'static str {
        match self {
            Toggle::Harvester => "Use theHarvester tool?",
            Toggle::UserRecon => "Use userrecon tool?",
            Toggle::WebSearch => "Use additional tools (web search)?",
        }
    }

    fn enabled(self, config: &ScraperConfig) -> bool {
        match self {
            Toggle::Harvester => config.harvester_enabled,
            Toggle::UserRecon => config.userrecon_enabled,
            Toggle::WebSearch => config.web_search_enabled,
        }
    }

    fn slot(self, config: &mut ScraperConfig) -> &mut bool {
        match self {
            Toggle::Harvester => &mut config.harvester_enabled,
            Toggle::UserRecon => &mut config.userrecon_enabled,
            Toggle::WebSearch => &mut config.web_search_enabled,
        }
    }
}

// Tools not already switched on with a command-line flag
fn unanswered(config: &ScraperConfig) -> Vec<Toggle> {
    Toggle::ALL
        .into_iter()
        .filter(|toggle| !toggle.enabled(config))
        .collect()
}

/// Asks about each recon tool that wasn't already enabled by a flag
pub fn tool_toggles(config: &mut ScraperConfig) -> Result<()> {
    for toggle in unanswered(config) {
        *toggle.slot(config) = yes_no(toggle.question())?;
    }
    Ok(())
}

// Returns the file to save to, or None if the user doesn't want to save
pub fn save_path() -> Result<Option<PathBuf>> {
    if !yes_no("Do you want to save the results to a file?")? {
        return Ok(None);
    }

    let filename: String = Input::new()
        .with_prompt("Enter the filename to save the results")
        .default(DEFAULT_REPORT_FILE.to_string())
        .interact_text()
        .context("failed to read filename")?;

    Ok(Some(PathBuf::from(filename.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asks_about_every_tool_by_default() {
        assert_eq!(unanswered(&ScraperConfig::default()), Toggle::ALL.to_vec());
    }

    #[test]
    fn test_flagged_tools_are_not_asked_again() {
        let config = ScraperConfig {
            harvester_enabled: true,
            web_search_enabled: true,
            ..ScraperConfig::default()
        };
        assert_eq!(unanswered(&config), vec![Toggle::UserRecon]);
    }
}
