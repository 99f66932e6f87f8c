//! Utility modules supporting the dork pipeline.
//!
//! - [`HttpClient`]: shared reqwest client configured with a user agent and timeouts

mod http;

pub use http::{HttpClient, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
