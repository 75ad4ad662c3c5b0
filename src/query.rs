//! Search request representation.

use serde::{Deserialize, Serialize};

fn default_engine() -> String {
    "bing".to_string()
}

/// An inbound search request.
///
/// `engine` is matched case-insensitively against the supported set and
/// defaults to Bing when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The search terms.
    pub query: String,
    /// Target search engine identifier.
    #[serde(default = "default_engine")]
    pub engine: String,
}

impl SearchRequest {
    /// Creates a new request for the default engine.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            engine: default_engine(),
        }
    }

    /// Sets the target engine.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }
}
