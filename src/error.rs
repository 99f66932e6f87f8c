//! Error types shared by the query builder, fetcher and run pipeline.

use std::io;
use std::path::PathBuf;

use crate::models::usage_text;

/// Errors that terminate a dorking run
///
/// Every variant is terminal: the binary prints its message and exits with
/// status 1.
#[derive(Debug, thiserror::Error)]
pub enum DorkError {
    /// Too few command-line arguments were supplied
    #[error("{}", usage_text())]
    Usage,

    /// The selected option needs more free-text arguments
    #[error("{0}")]
    InsufficientArgs(String),

    /// The selector is not one of the known dork options
    #[error("Invalid dork option. Please choose a valid option.")]
    InvalidOption(String),

    /// Network, transport or HTTP status error while fetching the results page
    #[error("Error fetching search results: {0}")]
    Fetch(String),

    /// The output file could not be created
    #[error("Error creating file: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A result line could not be written to the output file
    #[error("Error writing file: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the console failed
    #[error("Error writing output: {0}")]
    Console(#[from] io::Error),
}

impl From<reqwest::Error> for DorkError {
    fn from(err: reqwest::Error) -> Self {
        DorkError::Fetch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DorkError::InvalidOption("26".to_string()).to_string(),
            "Invalid dork option. Please choose a valid option."
        );
        assert_eq!(
            DorkError::Fetch("connection refused".to_string()).to_string(),
            "Error fetching search results: connection refused"
        );

        let err = DorkError::FileCreate {
            path: PathBuf::from("results.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(err.to_string(), "Error creating file: permission denied");
    }

    #[test]
    fn test_usage_lists_options() {
        let message = DorkError::Usage.to_string();
        assert!(message.starts_with("Usage:"));
        assert!(message.contains("25. Search for Google Cloud"));
    }
}
