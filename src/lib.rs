//! # Dork Master
//!
//! Build a Google dork from a numbered list of query templates, fetch the
//! results page once, and collect the result links it points at.
//!
//! ## Architecture
//!
//! - [`query`]: turns a dork option and its arguments into a query string
//! - [`extract`]: pulls `/url?q=` result links out of a results page
//! - [`fetch`]: the page fetching capability and its reqwest implementation
//! - [`output`]: the results file
//! - [`pipeline`]: the end-to-end run tying the pieces together
//! - [`config`]: run configuration
//! - [`models`]: dork options, queries and result links

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod query;
pub mod utils;

// Re-export commonly used types
pub use config::RunConfig;
pub use error::DorkError;
pub use models::{DorkOption, Query, ResultLink};
pub use pipeline::{run, RunSummary};
pub use query::build_query;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
