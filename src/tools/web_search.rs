// src/tools/web_search.rs
// =============================================================================
// Adapter that asks a web search service directly for the bare email string
// and keeps the first few result URLs.
//
// The default endpoint is DuckDuckGo's HTML-only results page, which needs no
// API key and no JavaScript. Result links there are wrapped in a redirect:
//
//   //duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2F&rut=...
//
// so the real target is pulled back out of the `uddg` query parameter.
// No relevance filtering is applied to what comes back.
// =============================================================================

use crate::config::ToolConfig;
use crate::error::ReconError;
use crate::search::{Email, Fetcher};
use scraper::{Html, Selector};
use url::Url;

#[derive(Debug, Clone)]
pub struct WebSearchTool {
    fetcher: Fetcher,
    endpoint: String,
    max_results: usize,
}

impl WebSearchTool {
    pub fn new(fetcher: Fetcher, config: &ToolConfig) -> Self {
        WebSearchTool {
            fetcher,
            endpoint: config.web_search_url.clone(),
            max_results: config.web_search_results,
        }
    }

    fn query_url(&self, email: &Email) -> Result<String, ReconError> {
        let url = Url::parse_with_params(&self.endpoint, &[("q", email.as_str())])
            .map_err(|e| ReconError::Parse(format!("invalid search endpoint '{}': {}", self.endpoint, e)))?;
        Ok(url.to_string())
    }

    pub async fn collect(&self, email: &Email) -> Result<Vec<String>, ReconError> {
        let url = self.query_url(email)?;

        let html = self
            .fetcher
            .fetch(&url)
            .await
            .ok_or_else(|| ReconError::Http(format!("no response from {}", self.endpoint)))?;

        parse_results(&html, self.max_results)
    }
}

// Parses a DuckDuckGo HTML results page into result URLs
//
// Kept separate from the network call so it can be tested with canned HTML.
pub fn parse_results(html: &str, max_results: usize) -> Result<Vec<String>, ReconError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a.result__a[href]")
        .map_err(|e| ReconError::Parse(format!("invalid result selector: {:?}", e)))?;

    let urls = document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(unwrap_redirect)
        .take(max_results)
        .collect();

    Ok(urls)
}

// Turns a result href into the URL it actually points at
//
// Handles protocol-relative links and DuckDuckGo's /l/?uddg= redirects;
// anything that isn't an absolute http(s) URL is dropped.
fn unwrap_redirect(href: &str) -> Option<String> {
    let full = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    };

    let parsed = Url::parse(&full).ok()?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return None;
    }

    let is_redirect = parsed
        .host_str()
        .is_some_and(|host| host.ends_with("duckduckgo.com"))
        && parsed.path().starts_with("/l/");

    if is_redirect {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned())
    } else {
        Some(full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const RESULTS_HTML: &str = r#"<!DOCTYPE html>
<html><body>
<div class="result"><a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fgithub.com%2Falice&amp;rut=abc">GitHub</a></div>
<div class="result"><a class="result__a" href="https://example.com/team">Team</a></div>
<div class="result"><a class="result__snippet" href="https://ignored.example/">snippet</a></div>
<div class="result"><a class="result__a" href="javascript:void(0)">bad</a></div>
<div class="result"><a class="result__a" href="https://forum.example.com/u/alice">Forum</a></div>
</body></html>"#;

    #[test]
    fn test_unwrap_redirect() {
        assert_eq!(
            unwrap_redirect("//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpage&rut=x"),
            Some("https://example.com/page".to_string())
        );
        assert_eq!(
            unwrap_redirect("https://example.com/direct"),
            Some("https://example.com/direct".to_string())
        );
        assert_eq!(unwrap_redirect("/relative"), None);
    }

    #[test]
    fn test_parse_results() {
        let urls = parse_results(RESULTS_HTML, 5).unwrap();
        assert_eq!(
            urls,
            vec![
                "https://github.com/alice",
                "https://example.com/team",
                "https://forum.example.com/u/alice",
            ]
        );
    }

    #[test]
    fn test_parse_results_respects_limit() {
        assert_eq!(parse_results(RESULTS_HTML, 2).unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_collect_queries_bare_email() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("q", "alice@example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS_HTML))
            .expect(1)
            .mount(&server)
            .await;

        let config = ToolConfig {
            web_search_url: format!("{}/html/", server.uri()),
            ..ToolConfig::default()
        };
        let tool = WebSearchTool::new(Fetcher::new(Duration::from_secs(5)).unwrap(), &config);

        let urls = tool.collect(&Email::parse("alice@example.com").unwrap()).await.unwrap();
        assert_eq!(urls.len(), 3);
        assert_eq!(urls[0], "https://github.com/alice");
    }

    #[tokio::test]
    async fn test_collect_without_response_is_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let config = ToolConfig {
            web_search_url: format!("http://{}/html/", listener.local_addr().unwrap()),
            ..ToolConfig::default()
        };
        drop(listener);

        let tool = WebSearchTool::new(Fetcher::new(Duration::from_secs(5)).unwrap(), &config);
        let err = tool.collect(&Email::parse("alice@example.com").unwrap()).await.unwrap_err();
        assert!(matches!(err, ReconError::Http(_)));
    }
}
