//! Built queries and the links extracted from a results page.

use std::fmt;

/// A finished search query, ready to be escaped into a search URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Query {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A link pulled out of a `/url?q=` redirect anchor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLink {
    /// 1-based position of the anchor among every anchor in the document
    pub index: usize,

    /// Target of the redirect, with the prefix stripped and nothing decoded
    pub url: String,
}

impl ResultLink {
    pub fn new(index: usize, url: impl Into<String>) -> Self {
        Self {
            index,
            url: url.into(),
        }
    }
}

impl fmt::Display for ResultLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.index, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_line_format() {
        let link = ResultLink::new(3, "http://b.com&sa=U");
        assert_eq!(link.to_string(), "3. http://b.com&sa=U");
    }

    #[test]
    fn test_query_compares_with_str() {
        let query = Query::new("intitle:foo");
        assert_eq!(query, "intitle:foo");
        assert_eq!(query.as_str(), "intitle:foo");
    }
}
