// src/report/results.rs
// =============================================================================
// The ResultSet: every link discovered so far, grouped by email.
//
// All the producers (engine runner, each tool adapter) write into the same
// ResultSet from different tokio tasks, possibly on different threads. The
// entries live behind a Mutex and every method takes the lock just long
// enough to read or append. The lock is never held across an .await.
//
// Order matters here:
// - Emails keep the order they were given in
// - Links keep the order they were discovered in
// - Nothing is deduplicated
// =============================================================================

use crate::search::Email;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

/// One email and everything recorded for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailResults {
    pub email: Email,
    pub links: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ResultSet {
    entries: Mutex<Vec<EmailResults>>,
}

impl ResultSet {
    /// Creates a ResultSet with an empty entry for every email
    pub fn new(emails: &[Email]) -> Self {
        let entries = emails
            .iter()
            .map(|email| EmailResults {
                email: email.clone(),
                links: Vec::new(),
            })
            .collect();

        ResultSet {
            entries: Mutex::new(entries),
        }
    }

    // A panic in another task while appending can't leave a half-written
    // Vec behind, so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<EmailResults>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // Appends links to an email's sequence
    //
    // An email that isn't known yet gets a new entry at the end, so
    // recording an empty list still guarantees the key is present.
    pub fn record(&self, email: &Email, links: Vec<String>) {
        let mut entries = self.lock();

        match entries.iter_mut().find(|entry| &entry.email == email) {
            Some(entry) => entry.links.extend(links),
            None => entries.push(EmailResults {
                email: email.clone(),
                links,
            }),
        }
    }

    #[cfg(test)]
    pub fn links(&self, email: &Email) -> Option<Vec<String>> {
        self.lock()
            .iter()
            .find(|entry| &entry.email == email)
            .map(|entry| entry.links.clone())
    }

    /// Live count of links across every email
    pub fn total_links(&self) -> usize {
        self.lock().iter().map(|entry| entry.links.len()).sum()
    }

    #[cfg(test)]
    pub fn emails(&self) -> Vec<Email> {
        self.lock().iter().map(|entry| entry.email.clone()).collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the current state, for reporting
    pub fn snapshot(&self) -> Vec<EmailResults> {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[test]
    fn test_new_seeds_every_email() {
        let results = ResultSet::new(&[email("a@x.com"), email("b@y.com")]);
        assert_eq!(results.len(), 2);
        assert!(!results.is_empty());
        assert!(ResultSet::new(&[]).is_empty());
        assert_eq!(results.links(&email("b@y.com")), Some(vec![]));
        assert_eq!(results.total_links(), 0);
    }

    #[test]
    fn test_record_appends_without_dedup() {
        let a = email("a@x.com");
        let results = ResultSet::new(&[a.clone()]);

        results.record(&a, vec!["http://x.com/1".into(), "http://x.com/2".into()]);
        results.record(&a, vec!["http://x.com/1".into()]);

        assert_eq!(
            results.links(&a).unwrap(),
            vec!["http://x.com/1", "http://x.com/2", "http://x.com/1"]
        );
        assert_eq!(results.total_links(), 3);
    }

    #[test]
    fn test_record_unknown_email_adds_key() {
        let results = ResultSet::new(&[email("a@x.com")]);
        results.record(&email("c@z.com"), vec![]);

        let emails: Vec<String> = results.emails().iter().map(|e| e.to_string()).collect();
        assert_eq!(emails, vec!["a@x.com", "c@z.com"]);
    }

    #[test]
    fn test_concurrent_records() {
        let a = email("a@x.com");
        let results = Arc::new(ResultSet::new(&[a.clone()]));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let results = Arc::clone(&results);
                let a = a.clone();
                std::thread::spawn(move || {
                    for j in 0..100 {
                        results.record(&a, vec![format!("http://x.com/{i}/{j}")]);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(results.total_links(), 800);
        assert_eq!(results.len(), 1);
    }
}
