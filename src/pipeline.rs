//! The end-to-end dorking run.
//!
//! Arguments are split and turned into a query, the query is escaped into the
//! search URL, the page is fetched once, and every extracted link is echoed to
//! the console and written to the results file as it is found.

use std::io::Write;
use std::path::PathBuf;

use crate::config::RunConfig;
use crate::error::DorkError;
use crate::extract::{extract_links, HtmlDocument};
use crate::fetch::PageFetcher;
use crate::models::Query;
use crate::output::ResultsFile;
use crate::query::{search_url, DorkArgs};

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// The query that was searched
    pub query: Query,

    /// The URL that was fetched
    pub url: String,

    /// Number of result lines written
    pub links_written: usize,

    /// Where the result lines were written
    pub output_path: PathBuf,
}

/// Run one search with the given configuration.
///
/// Result lines go to `console` and to the configured output file. The first
/// error stops the run; nothing is retried.
pub async fn run<W: Write>(
    config: &RunConfig,
    fetcher: &dyn PageFetcher,
    console: &mut W,
) -> Result<RunSummary, DorkError> {
    let query = DorkArgs::from_positional(&config.args)?.build()?;
    let url = search_url(&config.search_endpoint, &query);
    tracing::debug!(url = %url, "Search URL");

    let body = fetcher.fetch(&url).await?;
    let document = HtmlDocument::parse(&body);

    writeln!(console, "Google Dorking Results for: {}", query)?;

    let mut results = ResultsFile::create(&config.output_path)?;
    let mut links_written = 0;
    for link in extract_links(&document) {
        writeln!(console, "{}", link)?;
        results.write_link(&link)?;
        links_written += 1;
    }
    let output_path = results.finish()?;

    if links_written == 0 {
        tracing::warn!("No result links found on the page");
    } else {
        tracing::info!(count = links_written, "Extracted result links");
    }

    writeln!(console, "Results saved to {}", output_path.display())?;

    Ok(RunSummary {
        query,
        url,
        links_written,
        output_path,
    })
}
