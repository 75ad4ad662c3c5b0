//! Supported search engines: URL templates and markup parsers.
//!
//! Engine dispatch is a closed enum resolved once at the request boundary,
//! so "unsupported engine" is a single early check and the rest of the
//! pipeline works with an already-validated variant. Each engine module owns
//! its selector set; adding an engine means adding one variant and one
//! module.

mod bing;
mod google;

use std::str::FromStr;

use scraper::{Html, Selector};

use crate::{Result, SearchError, SearchResult};

/// A supported search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Engine {
    /// Bing web search (the default).
    #[default]
    Bing,
    /// Google web search.
    Google,
}

impl Engine {
    /// Canonical lowercase engine name, echoed in responses.
    pub fn name(&self) -> &'static str {
        match self {
            Engine::Bing => "bing",
            Engine::Google => "google",
        }
    }

    /// Builds the fully qualified results-page URL for a query.
    ///
    /// Pure template fill; the query is URL-encoded.
    pub fn search_url(&self, query: &str) -> String {
        let encoded = urlencoding::encode(query);
        match self {
            Engine::Bing => format!("https://www.bing.com/search?q={}", encoded),
            Engine::Google => format!("https://www.google.com/search?q={}", encoded),
        }
    }

    /// Parses a rendered results page into raw records, in document order.
    pub fn parse(&self, html: &str) -> Result<Vec<SearchResult>> {
        match self {
            Engine::Bing => bing::parse(html),
            Engine::Google => google::parse(html),
        }
    }
}

impl FromStr for Engine {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bing" => Ok(Engine::Bing),
            "google" => Ok(Engine::Google),
            other => Err(SearchError::UnsupportedEngine(other.to_string())),
        }
    }
}

/// CSS selectors describing one engine's result markup.
///
/// Selector values are coupled to the engines' current page structure and
/// will drift; keeping them as per-engine data rather than inline logic
/// confines that drift to one place per engine.
#[derive(Debug, Clone, Copy)]
pub struct SelectorSet {
    /// Matches one candidate result block.
    pub container: &'static str,
    /// Matches the title element within a block.
    pub title: &'static str,
    /// Matches the anchor carrying the outbound link.
    pub link: &'static str,
    /// Matches the descriptive snippet element.
    pub snippet: &'static str,
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| SearchError::Parse(format!("Failed to parse selector '{}': {:?}", css, e)))
}

/// Shared selector-driven extractor.
///
/// Blocks without a title are skipped entirely; a missing link or snippet
/// degrades the record to a `None` field rather than dropping it.
pub(crate) fn parse_records(html: &str, selectors: &SelectorSet) -> Result<Vec<SearchResult>> {
    let document = Html::parse_document(html);

    let container_selector = compile(selectors.container)?;
    let title_selector = compile(selectors.title)?;
    let link_selector = compile(selectors.link)?;
    let snippet_selector = compile(selectors.snippet)?;

    let mut records = Vec::new();

    for element in document.select(&container_selector) {
        let title = match element.select(&title_selector).next() {
            Some(el) => el.text().collect::<String>().trim().to_string(),
            None => continue,
        };
        if title.is_empty() {
            continue;
        }

        let url = element
            .select(&link_selector)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(str::to_string);

        let snippet = element
            .select(&snippet_selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty());

        records.push(SearchResult {
            title,
            url,
            snippet,
        });
    }

    Ok(records)
}
