// src/search/query.rs
// =============================================================================
// The two inputs of a search: the email being investigated and the search
// engine URL templates it gets plugged into.
//
// Rust concepts:
// - Newtypes: `Email` wraps a String but can only be built through `parse`,
//   so every Email in the program is known to be valid
// - Traits: Display lets us use an Email directly in format! and println!
// =============================================================================

use crate::error::ReconError;
use serde::Serialize;
use std::fmt;

/// Engines queried when the user doesn't supply their own list
pub const DEFAULT_ENGINES: &[&str] = &[
    "https://www.google.com/search?q={}",
    "https://www.bing.com/search?q={}",
    "https://www.yahoo.com/search?q={}",
    "https://duckduckgo.com/search?q={}",
];

const PLACEHOLDER: &str = "{}";

/// An email address with exactly one '@' and text on both sides of it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(input: &str) -> Result<Self, ReconError> {
        let trimmed = input.trim();

        let mut parts = trimmed.split('@');
        let valid = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
            _ => false,
        };

        if valid && !trimmed.chars().any(char::is_whitespace) {
            Ok(Email(trimmed.to_string()))
        } else {
            Err(ReconError::InvalidEmail(trimmed.to_string()))
        }
    }

    /// The part after the '@', used for relevance filtering
    pub fn domain(&self) -> &str {
        // parse() guarantees exactly one '@'
        self.0.split_once('@').map(|(_, domain)| domain).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Parses a comma-separated list such as "a@x.com, b@y.com"
//
// Empty items are skipped (a trailing comma is fine), repeated addresses keep
// their first position, and a single invalid address rejects the whole list.
pub fn parse_email_list(input: &str) -> Result<Vec<Email>, ReconError> {
    let mut emails: Vec<Email> = Vec::new();

    for item in input.split(',') {
        if item.trim().is_empty() {
            continue;
        }

        let email = Email::parse(item)?;
        if !emails.contains(&email) {
            emails.push(email);
        }
    }

    Ok(emails)
}

/// A search URL pattern with a single `{}` slot for the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngineTemplate(String);

impl SearchEngineTemplate {
    pub fn parse(template: &str) -> Result<Self, ReconError> {
        if template.matches(PLACEHOLDER).count() == 1 {
            Ok(SearchEngineTemplate(template.to_string()))
        } else {
            Err(ReconError::InvalidTemplate(template.to_string()))
        }
    }

    /// The built-in engine list
    pub fn defaults() -> Vec<Self> {
        DEFAULT_ENGINES
            .iter()
            .map(|template| SearchEngineTemplate(template.to_string()))
            .collect()
    }

    /// Builds the concrete query URL, percent-encoding the email
    ///
    /// Example: "https://www.bing.com/search?q={}" + "a@x.com"
    ///       -> "https://www.bing.com/search?q=a%40x.com"
    pub fn format(&self, email: &Email) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(email.as_str().as_bytes()).collect();
        self.0.replacen(PLACEHOLDER, &encoded, 1)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
