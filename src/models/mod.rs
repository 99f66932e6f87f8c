//! Data models for dork queries and extracted results.

mod dork;
mod link;

pub use dork::{usage_text, DorkOption, Template};
pub use link::{Query, ResultLink};
