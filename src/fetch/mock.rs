//! Mock fetcher for testing purposes.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::DorkError;
use crate::fetch::PageFetcher;

/// A fetcher that returns a predefined body or failure and records requested URLs.
#[derive(Debug, Default)]
pub struct MockFetcher {
    response: Mutex<Option<Result<String, String>>>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    /// Create a mock that returns an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that returns `body` for every request
    pub fn with_body(body: impl Into<String>) -> Self {
        let fetcher = Self::new();
        fetcher.set_body(body);
        fetcher
    }

    /// Create a mock that fails every request with `cause`
    pub fn failing(cause: impl Into<String>) -> Self {
        let fetcher = Self::new();
        *fetcher.response.lock().unwrap() = Some(Err(cause.into()));
        fetcher
    }

    /// Set the body to return.
    pub fn set_body(&self, body: impl Into<String>) {
        let mut guard = self.response.lock().unwrap();
        *guard = Some(Ok(body.into()));
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, DorkError> {
        self.requests.lock().unwrap().push(url.to_string());

        let guard = self.response.lock().unwrap();
        match &*guard {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(cause)) => Err(DorkError::Fetch(cause.clone())),
            None => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_requests() {
        let fetcher = MockFetcher::with_body("<html></html>");
        let body = tokio_test::block_on(fetcher.fetch("https://example.com/search?q=a")).unwrap();

        assert_eq!(body, "<html></html>");
        assert_eq!(fetcher.requests(), vec!["https://example.com/search?q=a"]);
    }

    #[test]
    fn test_mock_failure() {
        let fetcher = MockFetcher::failing("connection reset");
        let err = tokio_test::block_on(fetcher.fetch("https://example.com")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error fetching search results: connection reset"
        );
    }
}
