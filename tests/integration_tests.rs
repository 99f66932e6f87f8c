//! Integration tests for Dork Master
//!
//! These tests run the whole pipeline against a local mock search endpoint.

use dork_master::fetch::{GoogleFetcher, MockFetcher};
use dork_master::{build_query, run, DorkError, RunConfig};
use tempfile::TempDir;

const RESULTS_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>intitle:index of - Search</title></head>
<body>
  <a href="/search?q=intitle:index+of&amp;tbm=isch">Images</a>
  <div class="g">
    <a href="/url?q=http://files.example.com/&amp;sa=U&amp;ved=2ahUKE">Index of /</a>
  </div>
  <a>Empty anchor</a>
  <div class="g">
    <a href="/url?q=http://backup.example.org/old/&amp;sa=U">Index of /old</a>
  </div>
  <a href="https://accounts.google.com/ServiceLogin">Sign in</a>
</body>
</html>"#;

fn config_for(server: &mockito::Server, dir: &TempDir, args: &[&str]) -> RunConfig {
    RunConfig::new(args.iter().copied())
        .output_path(dir.path().join("results.txt"))
        .search_endpoint(format!("{}/search", server.url()))
}

/// Test a full run against a mock search endpoint
#[tokio::test]
async fn test_full_run_against_mock_server() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search")
        .match_query(mockito::Matcher::UrlEncoded(
            "q".into(),
            "intitle:index of".into(),
        ))
        .with_status(200)
        .with_header("content-type", "text/html; charset=UTF-8")
        .with_body(RESULTS_PAGE)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir, &["1", "index of"]);
    let fetcher = GoogleFetcher::new().unwrap();
    let mut console = Vec::new();

    let summary = run(&config, &fetcher, &mut console).await.unwrap();
    mock.assert_async().await;

    assert_eq!(summary.query, "intitle:index of");
    assert_eq!(summary.links_written, 2);

    let expected_lines = "2. http://files.example.com/&sa=U&ved=2ahUKE\n4. http://backup.example.org/old/&sa=U\n";
    assert_eq!(
        std::fs::read_to_string(dir.path().join("results.txt")).unwrap(),
        expected_lines
    );

    let printed = String::from_utf8(console).unwrap();
    assert!(printed.starts_with("Google Dorking Results for: intitle:index of\n"));
    assert!(printed.contains(expected_lines));
    assert!(printed.ends_with("results.txt\n"));
}

/// Test that a blocked request surfaces as a fetch error
#[tokio::test]
async fn test_blocked_request() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/search")
        .match_query(mockito::Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir, &["13", "x"]);
    let fetcher = GoogleFetcher::new().unwrap();
    let mut console = Vec::new();

    let err = run(&config, &fetcher, &mut console).await.unwrap_err();

    assert!(matches!(err, DorkError::Fetch(_)));
    assert!(!dir.path().join("results.txt").exists());
}

/// Test that repeated runs overwrite the results file
#[tokio::test]
async fn test_results_file_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let config = RunConfig::new(["3", "example.com"]).output_path(dir.path().join("results.txt"));

    let first = MockFetcher::with_body(RESULTS_PAGE);
    run(&config, &first, &mut Vec::new()).await.unwrap();

    let second = MockFetcher::with_body(r#"<a href="/url?q=http://only.example.net">x</a>"#);
    run(&config, &second, &mut Vec::new()).await.unwrap();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("results.txt")).unwrap(),
        "1. http://only.example.net\n"
    );
}

/// Test the search URL carries the trailing operators
#[tokio::test]
async fn test_operators_reach_search_url() {
    let dir = TempDir::new().unwrap();
    let config = RunConfig::new(["4", "pdf", "confidential"])
        .output_path(dir.path().join("results.txt"))
        .search_endpoint("https://www.google.com/search");
    let fetcher = MockFetcher::new();

    let summary = run(&config, &fetcher, &mut Vec::new()).await.unwrap();

    assert_eq!(summary.query, "filetype:pdf confidential confidential");
    assert_eq!(
        fetcher.requests(),
        vec!["https://www.google.com/search?q=filetype%3Apdf+confidential+confidential"]
    );
}

/// Test argument errors stop the run before any request
#[tokio::test]
async fn test_argument_errors() {
    let dir = TempDir::new().unwrap();
    let fetcher = MockFetcher::with_body(RESULTS_PAGE);

    let cases: [(&[&str], &str); 3] = [
        (&["5"], "Usage:"),
        (&["8", "target.com"], "Custom targeted search requires"),
        (&["30", "x"], "Invalid dork option. Please choose a valid option."),
    ];

    for (args, message) in cases {
        let config = RunConfig::new(args.iter().copied()).output_path(dir.path().join("results.txt"));
        let err = run(&config, &fetcher, &mut Vec::new()).await.unwrap_err();
        assert!(
            err.to_string().starts_with(message),
            "unexpected message for {:?}: {}",
            args,
            err
        );
    }

    assert!(fetcher.requests().is_empty());
    assert!(!dir.path().join("results.txt").exists());
}

/// Test every option builds when given a target and a search term
#[test]
fn test_all_options_build() {
    for selector in 1..=25 {
        let selector = selector.to_string();
        let result = build_query(&selector, &["term", "more"], &[]);
        assert!(result.is_ok(), "option {} failed: {:?}", selector, result);
    }
}
