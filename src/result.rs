//! Search result types and result normalization.

use serde::{Deserialize, Serialize};

/// Maximum number of results returned per retrieval.
pub const MAX_RESULTS: usize = 10;

/// A single extracted search result.
///
/// `title` is always non-empty; blocks without a discoverable title are
/// dropped by the parsers rather than emitted with an empty title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title.
    pub title: String,
    /// Outbound link, absolute or relative. `None` when the block carried
    /// no anchor.
    pub url: Option<String>,
    /// Descriptive excerpt. `None` when the block carried no snippet.
    pub snippet: Option<String>,
}

impl SearchResult {
    /// Creates a new result with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: None,
            snippet: None,
        }
    }

    /// Sets the outbound link.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the snippet.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

/// The response payload for a completed retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Extracted results, in document order, at most [`MAX_RESULTS`].
    pub results: Vec<SearchResult>,
    /// Upstream fetch outcome; 200 on any successful retrieval.
    pub status_code: u16,
    /// Elapsed wall-clock seconds for the whole retrieval.
    pub execution_time: f64,
    /// Canonical name of the engine that was used.
    pub engine: String,
}

/// Bounds a parser's output to the first [`MAX_RESULTS`] records, in order.
pub fn normalize(mut records: Vec<SearchResult>) -> Vec<SearchResult> {
    records.truncate(MAX_RESULTS);
    records
}
