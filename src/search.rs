//! Retrieval orchestration.
//!
//! One `search()` call runs the whole pipeline sequentially: validate the
//! request, build the engine URL, acquire a browser session, fetch and parse
//! the rendered page, normalize, and release the session. The session is
//! released exactly once on every path that acquired one.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::engines::Engine;
use crate::result::{normalize, SearchResponse};
use crate::session::{ChromeSessionManager, SessionManager};
use crate::{Result, SearchError, SearchRequest};

/// The retrieval orchestrator.
///
/// Holds only a session manager; every retrieval is self-contained and
/// acquires its own browser session, so one `Searcher` may serve concurrent
/// requests.
pub struct Searcher {
    manager: Arc<dyn SessionManager>,
}

impl Searcher {
    /// Creates a searcher backed by a default Chrome session manager.
    pub fn new() -> Self {
        Self::with_manager(Arc::new(ChromeSessionManager::default()))
    }

    /// Creates a searcher backed by the given session manager.
    pub fn with_manager(manager: Arc<dyn SessionManager>) -> Self {
        Self { manager }
    }

    /// Runs one retrieval end to end.
    ///
    /// Fails fast on an empty query or unsupported engine before any browser
    /// work begins. No retries; no partial result lists on failure.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let start = Instant::now();

        if request.query.trim().is_empty() {
            return Err(SearchError::InvalidQuery(
                "query must not be empty".to_string(),
            ));
        }

        let engine: Engine = request.engine.parse()?;
        let url = engine.search_url(&request.query);
        debug!(engine = engine.name(), url = %url, "Dispatching search");

        let mut session = self.manager.acquire().await?;

        // Fetch and parse before releasing; the release itself is
        // unconditional, whatever the outcome.
        let outcome = match session.fetch(&url).await {
            Ok(html) => engine.parse(&html),
            Err(e) => Err(e),
        };
        session.release().await;

        let results = normalize(outcome?);
        debug!(
            engine = engine.name(),
            count = results.len(),
            "Search completed"
        );

        Ok(SearchResponse {
            results,
            status_code: 200,
            execution_time: start.elapsed().as_secs_f64(),
            engine: engine.name().to_string(),
        })
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::BrowserSession;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Session manager serving canned markup while counting lifecycle calls.
    struct MockManager {
        html: std::result::Result<String, String>,
        fail_acquire: bool,
        acquired: Arc<AtomicUsize>,
        released: Arc<AtomicUsize>,
    }

    impl MockManager {
        fn with_html(html: &str) -> Self {
            Self {
                html: Ok(html.to_string()),
                fail_acquire: false,
                acquired: Arc::new(AtomicUsize::new(0)),
                released: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn with_navigation_error(message: &str) -> Self {
            Self {
                html: Err(message.to_string()),
                fail_acquire: false,
                acquired: Arc::new(AtomicUsize::new(0)),
                released: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing_acquire() -> Self {
            Self {
                html: Ok(String::new()),
                fail_acquire: true,
                acquired: Arc::new(AtomicUsize::new(0)),
                released: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    struct MockSession {
        html: std::result::Result<String, String>,
        released: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SessionManager for MockManager {
        async fn acquire(&self) -> Result<Box<dyn BrowserSession>> {
            if self.fail_acquire {
                return Err(SearchError::SessionStartup(
                    "launch refused".to_string(),
                ));
            }
            self.acquired.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(MockSession {
                html: self.html.clone(),
                released: Arc::clone(&self.released),
            }))
        }
    }

    #[async_trait]
    impl BrowserSession for MockSession {
        async fn fetch(&mut self, _url: &str) -> Result<String> {
            match &self.html {
                Ok(html) => Ok(html.clone()),
                Err(message) => Err(SearchError::Navigation(message.clone())),
            }
        }

        async fn release(&mut self) {
            self.released.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn bing_page(count: usize) -> String {
        let blocks: String = (0..count)
            .map(|i| {
                format!(
                    r#"<li class="b_algo">
                        <h2><a href="https://example.com/{i}">Result {i}</a></h2>
                        <div class="b_caption"><p>Snippet {i}</p></div>
                    </li>"#
                )
            })
            .collect();
        format!(r#"<html><body><ol id="b_results">{blocks}</ol></body></html>"#)
    }

    #[tokio::test]
    async fn test_search_success_bing() {
        let manager = Arc::new(MockManager::with_html(&bing_page(3)));
        let searcher = Searcher::with_manager(Arc::clone(&manager) as Arc<dyn SessionManager>);

        let request = SearchRequest::new("weather today");
        let response = searcher.search(&request).await.unwrap();

        assert_eq!(response.results.len(), 3);
        assert_eq!(response.status_code, 200);
        assert_eq!(response.engine, "bing");
        assert!(response.execution_time >= 0.0);
        assert_eq!(manager.released.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_search_truncates_to_ten() {
        let manager = Arc::new(MockManager::with_html(&bing_page(15)));
        let searcher = Searcher::with_manager(Arc::clone(&manager) as Arc<dyn SessionManager>);

        let response = searcher.search(&SearchRequest::new("anything")).await.unwrap();

        assert_eq!(response.results.len(), 10);
        assert_eq!(response.results[0].title, "Result 0");
        assert_eq!(response.results[9].title, "Result 9");
    }

    #[tokio::test]
    async fn test_search_empty_query_rejected_before_browser_work() {
        let manager = Arc::new(MockManager::with_html(&bing_page(1)));
        let searcher = Searcher::with_manager(Arc::clone(&manager) as Arc<dyn SessionManager>);

        let err = searcher.search(&SearchRequest::new("   ")).await.unwrap_err();

        assert!(matches!(err, SearchError::InvalidQuery(_)));
        assert_eq!(manager.acquired.load(Ordering::SeqCst), 0);
        assert_eq!(manager.released.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_unsupported_engine_never_acquires_session() {
        let manager = Arc::new(MockManager::with_html(&bing_page(1)));
        let searcher = Searcher::with_manager(Arc::clone(&manager) as Arc<dyn SessionManager>);

        let request = SearchRequest::new("weather today").with_engine("altavista");
        let err = searcher.search(&request).await.unwrap_err();

        match err {
            SearchError::UnsupportedEngine(name) => assert_eq!(name, "altavista"),
            other => panic!("Expected UnsupportedEngine, got {:?}", other),
        }
        assert_eq!(manager.acquired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_navigation_failure_still_releases_session() {
        let manager = Arc::new(MockManager::with_navigation_error("timeout"));
        let searcher = Searcher::with_manager(Arc::clone(&manager) as Arc<dyn SessionManager>);

        let request = SearchRequest::new("x").with_engine("google");
        let err = searcher.search(&request).await.unwrap_err();

        assert!(matches!(err, SearchError::Navigation(_)));
        assert_eq!(manager.acquired.load(Ordering::SeqCst), 1);
        assert_eq!(manager.released.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_search_acquire_failure_surfaces_startup_error() {
        let manager = Arc::new(MockManager::failing_acquire());
        let searcher = Searcher::with_manager(Arc::clone(&manager) as Arc<dyn SessionManager>);

        let err = searcher.search(&SearchRequest::new("x")).await.unwrap_err();

        assert!(matches!(err, SearchError::SessionStartup(_)));
        assert_eq!(manager.released.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_engine_name_is_canonical() {
        let manager = Arc::new(MockManager::with_html(&bing_page(1)));
        let searcher = Searcher::with_manager(Arc::clone(&manager) as Arc<dyn SessionManager>);

        let request = SearchRequest::new("weather today").with_engine("BING");
        let response = searcher.search(&request).await.unwrap();

        assert_eq!(response.engine, "bing");
    }
}
