//! Error types for the search pipeline.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during a retrieval.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The query text was rejected before any browser work began.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The requested engine is not in the supported set.
    #[error("Unsupported search engine: {0}")]
    UnsupportedEngine(String),

    /// The browser process could not be launched.
    #[error("Failed to start browser session: {0}")]
    SessionStartup(String),

    /// The target page could not be loaded or rendered in time.
    #[error("Failed to load page: {0}")]
    Navigation(String),

    /// Markup parsing failed unexpectedly.
    #[error("Failed to parse results page: {0}")]
    Parse(String),
}
