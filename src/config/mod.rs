//! Run configuration.
//!
//! Everything a run needs travels in [`RunConfig`]: the positional arguments,
//! where results are written and how the search engine is reached. The binary
//! builds one from its command line; tests build one directly.

use std::path::PathBuf;
use std::time::Duration;

use crate::utils::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// Results file written in the current directory by default
pub const DEFAULT_OUTPUT_PATH: &str = "results.txt";

/// Search endpoint the escaped query is appended to
pub const GOOGLE_SEARCH_URL: &str = "https://www.google.com/search";

/// Configuration for one dorking run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Positional arguments: selector, query arguments, operators
    pub args: Vec<String>,

    /// File the result lines are written to (truncated each run)
    pub output_path: PathBuf,

    /// Search endpoint, `?q=<query>` is appended
    pub search_endpoint: String,

    /// User agent for the HTTP request
    pub user_agent: String,

    /// Request timeout
    pub timeout: Duration,
}

impl RunConfig {
    /// Create a configuration with default settings for the given arguments
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            search_endpoint: GOOGLE_SEARCH_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the output file path
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the search endpoint
    pub fn search_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.search_endpoint = endpoint.into();
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::new(["1", "admin"]);
        assert_eq!(config.args, vec!["1", "admin"]);
        assert_eq!(config.output_path, PathBuf::from("results.txt"));
        assert_eq!(config.search_endpoint, "https://www.google.com/search");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_setters() {
        let config = RunConfig::new(Vec::<String>::new())
            .output_path("/tmp/out.txt")
            .search_endpoint("http://127.0.0.1:8080/search")
            .user_agent("Lynx/2.8.9")
            .timeout(Duration::from_secs(5));

        assert_eq!(config.output_path, PathBuf::from("/tmp/out.txt"));
        assert_eq!(config.search_endpoint, "http://127.0.0.1:8080/search");
        assert_eq!(config.user_agent, "Lynx/2.8.9");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
