// src/search/fetch.rs
// =============================================================================
// This module performs the outbound HTTP requests.
//
// Key functionality:
// - One shared reqwest Client (connection pooling) for the whole run
// - A fresh, randomly chosen browser User-Agent on every request
// - Browser-like headers so results pages look like they would in a browser
// - Failures are logged and turned into None; callers never see an error
//
// TLS certificates are NOT verified. Reaching the page matters more to this
// tool than proving who served it.
// =============================================================================

use crate::error::ReconError;
use rand::seq::SliceRandom;
use reqwest::header::{ACCEPT_LANGUAGE, CONNECTION, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Realistic browser User-Agent strings, one picked per request
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.1 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36 Edg/131.0.0.0",
];

/// Picks a User-Agent at random; there is no identity kept between requests
pub fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}

// Shared HTTP fetcher
//
// Cloning a Fetcher is cheap: reqwest::Client is a reference-counted handle
// to one connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self, ReconError> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(|e| ReconError::Http(format!("failed to build HTTP client: {}", e)))?;

        Ok(Fetcher { client })
    }

    // Fetches one URL and returns the response body
    //
    // Exactly one attempt. Any transport, timeout or decoding error is logged
    // and comes back as None. The body is returned whatever the status code:
    // a "please slow down" page is still a page.
    //
    // Accept-Encoding is left to reqwest, which sets it from the enabled
    // gzip/brotli/deflate features and decodes the body for us.
    pub async fn fetch(&self, url: &str) -> Option<String> {
        let request = self
            .client
            .get(url)
            .header(USER_AGENT, random_user_agent())
            .header(ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(CONNECTION, "keep-alive");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url, error = %e, "request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "non-success status");
        }

        match response.text().await {
            Ok(body) => {
                tracing::debug!(url, bytes = body.len(), "response received");
                Some(body)
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "failed to read response body");
                None
            }
        }
    }
}
