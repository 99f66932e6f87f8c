use anyhow::{Context, Result};
use clap::Parser;
use dork_master::config::{RunConfig, DEFAULT_OUTPUT_PATH, GOOGLE_SEARCH_URL};
use dork_master::fetch::GoogleFetcher;
use dork_master::models::usage_text;
use dork_master::{run, DorkError, RunSummary};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Dork Master - Build a Google dork from a canned template and save the result links
#[derive(Parser, Debug)]
#[command(name = "dork-master")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "hongkongkiwi")]
#[command(about = "Build a Google dork from a canned template and save the result links", long_about = None)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress log output except errors
    #[arg(long, short)]
    quiet: bool,

    /// File the result links are written to (overwritten each run)
    #[arg(long, short, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// User agent sent with the search request
    #[arg(long)]
    user_agent: Option<String>,

    /// Search endpoint the escaped query is appended to
    #[arg(long, hide = true, default_value = GOOGLE_SEARCH_URL)]
    search_endpoint: String,

    /// List the dork options and exit
    #[arg(long, short)]
    list: bool,

    /// <dork_option> <search_query...> [additional_operators...]
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        let config = RunConfig::new(self.args.iter().cloned())
            .output_path(&self.output)
            .search_endpoint(self.search_endpoint.as_str())
            .timeout(Duration::from_secs(self.timeout));

        match &self.user_agent {
            Some(user_agent) => config.user_agent(user_agent.as_str()),
            None => config,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("dork_master={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if cli.list {
        println!("{}", usage_text());
        return ExitCode::SUCCESS;
    }

    match execute(&cli).await {
        Ok(summary) => {
            tracing::debug!(
                query = %summary.query,
                links = summary.links_written,
                "Run complete"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.downcast_ref::<DorkError>() {
                Some(dork_err) => println!("{}", dork_err),
                None => println!("{:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> Result<RunSummary> {
    let config = cli.run_config();
    let fetcher = GoogleFetcher::with_settings(&config.user_agent, config.timeout)
        .context("Failed to set up the search client")?;

    let stdout = std::io::stdout();
    let mut console = stdout.lock();
    let summary = run(&config, &fetcher, &mut console).await?;
    Ok(summary)
}
