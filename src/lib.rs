//! # browser-search
//!
//! A search API that retrieves rendered result pages through a controlled
//! headless-browser session and converts the markup into a normalized,
//! bounded list of structured results.
//!
//! The pipeline for one retrieval: build the engine-specific query URL,
//! launch a fresh browser session, render the page, parse it with the
//! engine's selectors, truncate to the top 10, and terminate the session on
//! every exit path.
//!
//! ## Example
//!
//! ```rust,no_run
//! use browser_search::{Searcher, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let searcher = Searcher::new();
//!     let request = SearchRequest::new("rust programming").with_engine("bing");
//!     let response = searcher.search(&request).await?;
//!
//!     for result in &response.results {
//!         println!("{}: {:?}", result.title, result.url);
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod query;
mod result;
mod search;

pub mod engines;
pub mod server;
pub mod session;

pub use engines::Engine;
pub use error::{Result, SearchError};
pub use query::SearchRequest;
pub use result::{normalize, SearchResponse, SearchResult, MAX_RESULTS};
pub use search::Searcher;
pub use session::{BrowserSession, ChromeSessionManager, SessionConfig, SessionManager};
