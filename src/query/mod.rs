//! Query construction from a dork option and free-text arguments.
//!
//! The builder is a pure function: it never touches the network or the file
//! system. [`DorkArgs::from_positional`] splits raw command-line arguments into
//! the selector, the query arguments and the trailing operator tokens, and
//! [`build_query`] expands the selected template.

use crate::error::DorkError;
use crate::models::{DorkOption, Query, Template};

/// Minimum number of positional arguments (selector plus one search term)
pub const MIN_POSITIONAL_ARGS: usize = 2;

/// Operators start at this index of the positional arguments
const OPERATOR_OFFSET: usize = 2;

/// Positional arguments split into their roles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DorkArgs {
    /// First argument, selecting the template
    pub selector: String,

    /// Everything after the selector
    pub query_args: Vec<String>,

    /// Tokens appended after the expanded template
    pub operators: Vec<String>,
}

impl DorkArgs {
    /// Split positional arguments (program name excluded).
    ///
    /// Operators are taken positionally from index 2 onward, whatever the
    /// selector consumes, so with more than one query argument every token
    /// after the first also lands in the operators.
    pub fn from_positional(args: &[String]) -> Result<Self, DorkError> {
        if args.len() < MIN_POSITIONAL_ARGS {
            return Err(DorkError::Usage);
        }

        let operators = if args.len() > OPERATOR_OFFSET {
            args[OPERATOR_OFFSET..].to_vec()
        } else {
            Vec::new()
        };

        Ok(Self {
            selector: args[0].clone(),
            query_args: args[1..].to_vec(),
            operators,
        })
    }

    /// Build the query these arguments describe
    pub fn build(&self) -> Result<Query, DorkError> {
        build_query(&self.selector, &self.query_args, &self.operators)
    }
}

/// Build a search query from a selector, its arguments and trailing operators.
pub fn build_query<S: AsRef<str>>(
    selector: &str,
    query_args: &[S],
    operators: &[S],
) -> Result<Query, DorkError> {
    let option: DorkOption = selector.parse()?;
    let mut query = expand(option, query_args)?;

    if !operators.is_empty() {
        query.push(' ');
        query.push_str(&join(operators));
    }

    tracing::debug!(option = option.number(), query = %query, "Built dork query");
    Ok(Query::new(query))
}

fn expand<S: AsRef<str>>(option: DorkOption, args: &[S]) -> Result<String, DorkError> {
    let query = match option.template() {
        Template::Operator(operator) => format!("{}:{}", operator, join(args)),
        Template::Verbatim => join(args),
        Template::Canned(query) => query.to_string(),
        Template::TargetedSite => match args {
            [target, terms @ ..] if !terms.is_empty() => {
                format!("site:{} {}", target.as_ref(), join(terms))
            }
            _ => {
                return Err(DorkError::InsufficientArgs(
                    "Custom targeted search requires a target and at least one search term."
                        .to_string(),
                ))
            }
        },
        Template::Advanced => {
            if args.is_empty() {
                return Err(DorkError::InsufficientArgs(
                    "Advanced Google Dorking requires at least one search term.".to_string(),
                ));
            }
            join(args)
        }
    };
    Ok(query)
}

fn join<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape a query into the `q` parameter of a search endpoint.
///
/// Uses form encoding, so spaces become `+`.
pub fn search_url(endpoint: &str, query: &Query) -> String {
    let escaped: String = url::form_urlencoded::byte_serialize(query.as_str().as_bytes()).collect();
    format!("{}?q={}", endpoint, escaped)
}
