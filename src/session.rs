//! Browser session management.
//!
//! Each retrieval gets its own Chrome process: `acquire()` launches a fresh
//! headless browser, `fetch()` renders one URL, and `release()` terminates
//! the process. Sessions are never pooled or reused.

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{Result, SearchError};

/// Fixed launch surface for unattended headless operation.
///
/// Immutable once handed to a session manager; sessions launched from the
/// same config are identical and independent.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Browser window width in pixels.
    pub window_width: u32,
    /// Browser window height in pixels.
    pub window_height: u32,
    /// Client identification string attached to every request.
    pub user_agent: String,
    /// Additional launch arguments for Chrome.
    pub launch_args: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            window_width: 1920,
            window_height: 1080,
            // Realistic desktop UA; Chrome's headless mode injects
            // "HeadlessChrome" into the default one, which result pages
            // trivially detect and block.
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                         AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/132.0.0.0 Safari/537.36"
                .to_string(),
            launch_args: Vec::new(),
        }
    }
}

/// Acquires fresh, exclusively-owned browser sessions.
#[async_trait]
pub trait SessionManager: Send + Sync {
    /// Launches a new browser session, or fails with
    /// [`SearchError::SessionStartup`].
    async fn acquire(&self) -> Result<Box<dyn BrowserSession>>;
}

/// One live, exclusively-owned browser process instance.
#[async_trait]
pub trait BrowserSession: Send {
    /// Navigates to `url` and returns the fully rendered markup, or fails
    /// with [`SearchError::Navigation`].
    async fn fetch(&mut self, url: &str) -> Result<String>;

    /// Terminates the underlying process. Idempotent.
    async fn release(&mut self);
}

/// Session manager launching Chrome/Chromium over the DevTools protocol.
pub struct ChromeSessionManager {
    config: SessionConfig,
}

impl ChromeSessionManager {
    /// Creates a manager with the given launch configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Returns the launch configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Default for ChromeSessionManager {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[async_trait]
impl SessionManager for ChromeSessionManager {
    async fn acquire(&self) -> Result<Box<dyn BrowserSession>> {
        debug!("Launching headless browser session");

        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .arg("--headless=new")
            .arg(format!("--user-agent={}", self.config.user_agent))
            .arg(format!(
                "--window-size={},{}",
                self.config.window_width, self.config.window_height
            ))
            // Hide navigator.webdriver and other automation indicators
            .arg("--disable-blink-features=AutomationControlled")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--mute-audio")
            .arg("--no-first-run");

        for arg in &self.config.launch_args {
            builder = builder.arg(arg);
        }

        let browser_config = builder.build().map_err(|e| {
            SearchError::SessionStartup(format!("Failed to build browser config: {}", e))
        })?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| SearchError::SessionStartup(format!("Failed to launch browser: {}", e)))?;

        // The CDP event handler must be polled for the session to make progress
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!("Browser CDP handler error: {}", e);
                }
            }
            debug!("Browser CDP handler exited");
        });

        Ok(Box::new(ChromeSession {
            browser: Some(browser),
            handler_task,
        }))
    }
}

/// A live Chrome process owned by one retrieval.
///
/// The browser is held in an `Option` so `release()` is idempotent. Even if
/// a session is leaked, `chromiumoxide`'s own drop kills the child process;
/// the orchestrator never relies on that and releases explicitly.
pub struct ChromeSession {
    browser: Option<Browser>,
    handler_task: JoinHandle<()>,
}

#[async_trait]
impl BrowserSession for ChromeSession {
    async fn fetch(&mut self, url: &str) -> Result<String> {
        let browser = self
            .browser
            .as_ref()
            .ok_or_else(|| SearchError::Navigation("Session already released".to_string()))?;

        let page = browser
            .new_page(url)
            .await
            .map_err(|e| SearchError::Navigation(format!("Failed to open page: {}", e)))?;

        page.wait_for_navigation()
            .await
            .map_err(|e| SearchError::Navigation(format!("Navigation wait failed: {}", e)))?;

        let html = page
            .content()
            .await
            .map_err(|e| SearchError::Navigation(format!("Failed to get page content: {}", e)))?;

        // Best-effort; the whole process is terminated on release anyway
        if let Err(e) = page.close().await {
            warn!("Failed to close browser tab: {}", e);
        }

        Ok(html)
    }

    async fn release(&mut self) {
        if let Some(mut browser) = self.browser.take() {
            if let Err(e) = browser.close().await {
                warn!("Failed to close browser gracefully: {}", e);
                let _ = browser.kill().await;
            }
            // Reap the child so no zombie process outlives the retrieval
            let _ = browser.wait().await;
            debug!("Browser session released");
        }
        self.handler_task.abort();
    }
}
