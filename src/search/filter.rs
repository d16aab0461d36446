// src/search/filter.rs
// =============================================================================
// Decides whether a link found on a search results page is worth keeping as
// evidence for an email address.
//
// The rule is a coarse heuristic:
// 1. The link must mention the email's domain as a whole word
// 2. The link must not point at an image or a PDF
//
// It will happily keep unrelated pages that happen to mention the domain and
// miss pages that only show the address as text. Good enough to cut the
// navigation noise out of a results page.
// =============================================================================

use crate::error::ReconError;
use crate::search::query::Email;
use regex::{Regex, RegexBuilder};
use url::Url;

/// Extensions that mark a link as a binary asset rather than a page
const SKIPPED_EXTENSIONS: &[&str] = &[".jpg", ".png", ".gif", ".pdf"];

/// A relevance filter bound to one email's domain
///
/// Holds the compiled domain pattern so one email's whole engine loop
/// shares it.
#[derive(Debug, Clone)]
pub struct LinkFilter {
    domain: Regex,
}

impl LinkFilter {
    pub fn for_email(email: &Email) -> Result<Self, ReconError> {
        let pattern = format!(r"\b{}\b", regex::escape(email.domain()));
        let domain = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| ReconError::Parse(format!("domain pattern for {}: {}", email, e)))?;

        Ok(LinkFilter { domain })
    }

    pub fn is_relevant(&self, link: &str) -> bool {
        self.domain.is_match(link) && !has_skipped_extension(link)
    }
}

// Checks whether the link's path ends in one of the skipped extensions
//
// For absolute URLs only the path is looked at, so
// "https://x.com/report.pdf?download=1" is still recognised as a PDF.
// Anything that doesn't parse as a URL is checked as raw text.
fn has_skipped_extension(link: &str) -> bool {
    let path = match Url::parse(link) {
        Ok(url) => url.path().to_ascii_lowercase(),
        Err(_) => link.to_ascii_lowercase(),
    };

    SKIPPED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    fn is_relevant(link: &str, email: &Email) -> bool {
        LinkFilter::for_email(email).unwrap().is_relevant(link)
    }

    #[test]
    fn test_keeps_page_on_domain() {
        assert!(is_relevant("http://x.com/page", &email("a@x.com")));
        assert!(is_relevant("https://forum.example.org/u/alice", &email("alice@example.org")));
    }

    #[test]
    fn test_rejects_other_domains() {
        assert!(!is_relevant("https://www.bing.com/account", &email("a@x.com")));
    }

    #[test]
    fn test_domain_must_be_whole_word() {
        // "example.com" inside "myexample.com" is not a word match
        assert!(!is_relevant("https://myexample.com/", &email("a@example.com")));
        // ...but a subdomain is, since '.' is a word boundary
        assert!(is_relevant("https://www.example.com/", &email("a@example.com")));
    }

    #[test]
    fn test_domain_match_ignores_case() {
        assert!(is_relevant("https://WWW.EXAMPLE.COM/about", &email("a@example.com")));
    }

    #[test]
    fn test_rejects_binary_extensions() {
        let e = email("a@x.com");
        assert!(!is_relevant("http://evil.com/x.com.jpg", &e));
        assert!(!is_relevant("http://x.com/logo.PNG", &e));
        assert!(!is_relevant("http://x.com/anim.gif", &e));
        assert!(!is_relevant("http://x.com/cv.pdf?download=1", &e));
    }

    #[test]
    fn test_relative_link_checked_as_text() {
        let e = email("a@x.com");
        assert!(is_relevant("/url?q=https://x.com/team", &e));
        assert!(!is_relevant("/img/x.com.gif", &e));
    }

    #[test]
    fn test_reused_filter() {
        let filter = LinkFilter::for_email(&email("bob@corp.io")).unwrap();
        let links = [
            "https://corp.io/people/bob",
            "https://corp.io/badge.png",
            "https://elsewhere.net/",
        ];
        let kept: Vec<_> = links.iter().filter(|l| filter.is_relevant(l)).collect();
        assert_eq!(kept, vec![&"https://corp.io/people/bob"]);
    }
}
