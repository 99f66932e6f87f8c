//! Fetching the search results page.
//!
//! The pipeline only needs "GET this URL, give me the body", expressed by the
//! [`PageFetcher`] trait. [`GoogleFetcher`] performs the real request with
//! reqwest; [`MockFetcher`] returns a canned body for tests.

mod google;
pub mod mock;

pub use google::GoogleFetcher;
pub use mock::MockFetcher;

use async_trait::async_trait;

use crate::error::DorkError;

/// Something that can fetch a results page.
///
/// Implementations make exactly one attempt: transport failures, non-2xx
/// statuses and unreadable bodies are all reported as [`DorkError::Fetch`].
#[async_trait]
pub trait PageFetcher: Send + Sync + std::fmt::Debug {
    /// Fetch the page at `url` and return its body
    async fn fetch(&self, url: &str) -> Result<String, DorkError>;
}
