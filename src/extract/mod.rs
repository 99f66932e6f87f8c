//! Result link extraction from a search results page.
//!
//! The extractor only needs the `href` of every anchor in document order, so
//! it works against the [`AnchorDocument`] trait. [`HtmlDocument`] implements
//! it on top of `scraper`; [`AnchorList`] is an in-memory document for tests
//! and callers that already hold the hrefs.

use scraper::{Html, Selector};

use crate::models::ResultLink;

/// Prefix of the redirect anchors that point at search results
pub const REDIRECT_PREFIX: &str = "/url?q=";

/// A document that can list the `href` attribute of each anchor it contains
pub trait AnchorDocument {
    /// The `href` of every anchor in document order, `None` where missing
    fn anchor_hrefs(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_>;
}

/// Extract result links from a document.
///
/// Each link keeps the 1-based position of its anchor among all anchors, so
/// indices skip over anchors that were filtered out.
pub fn extract_links<D>(document: &D) -> impl Iterator<Item = ResultLink> + '_
where
    D: AnchorDocument + ?Sized,
{
    document
        .anchor_hrefs()
        .enumerate()
        .filter_map(|(i, href)| {
            let url = href?.strip_prefix(REDIRECT_PREFIX)?;
            Some(ResultLink::new(i + 1, url))
        })
}

/// An HTML page parsed with `scraper`
#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
    anchors: Selector,
}

impl HtmlDocument {
    /// Parse a full HTML document. Malformed markup is recovered, never rejected.
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
            anchors: anchor_selector(),
        }
    }
}

fn anchor_selector() -> Selector {
    Selector::parse("a").expect("anchor selector is valid")
}

impl AnchorDocument for HtmlDocument {
    fn anchor_hrefs(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_> {
        Box::new(
            self.html
                .select(&self.anchors)
                .map(|element| element.value().attr("href")),
        )
    }
}

/// Anchors held in memory as their optional `href` values
#[derive(Debug, Clone, Default)]
pub struct AnchorList(pub Vec<Option<String>>);

impl AnchorList {
    /// Build a list where every anchor carries an href
    pub fn from_hrefs<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(hrefs.into_iter().map(|h| Some(h.into())).collect())
    }
}

impl AnchorDocument for AnchorList {
    fn anchor_hrefs(&self) -> Box<dyn Iterator<Item = Option<&str>> + '_> {
        Box::new(self.0.iter().map(|href| href.as_deref()))
    }
}
