use chromiumoxide::browser::{Browser as CrBrowser, BrowserConfig as CrBrowserConfig};
use chromiumoxide::handler::viewport::Viewport;
use futures::StreamExt;

use crate::config::{SessionBuilder, SessionConfig};
use crate::error::{Error, Result};
use crate::page::Page;

/// Chrome flags that improve performance without affecting functionality.
const PERF_ARGS: &[&str] = &[
    "disable-gpu",
    "disable-extensions",
    "metrics-recording-only",
    "mute-audio",
    "no-default-browser-check",
    "disable-client-side-phishing-detection",
    "disable-popup-blocking",
    "disable-prompt-on-repost",
];

/// A launched browser instance that the checks drive.
///
/// Call [`BrowserSession::close`] when the check is done; both pass and fail
/// paths should go through it so the Chrome process is not leaked.
pub struct BrowserSession {
    browser: CrBrowser,
    default_timeout: std::time::Duration,
    handler_task: tokio::task::JoinHandle<()>,
}

impl BrowserSession {
    /// Create a new SessionBuilder for configuring and launching a browser.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Launch a browser instance with the given configuration.
    pub async fn launch(config: SessionConfig) -> Result<Self> {
        let mut builder = CrBrowserConfig::builder();

        if config.headless {
            builder = builder.new_headless_mode().no_sandbox();
        } else {
            builder = builder.with_head().no_sandbox();
        }

        for arg in PERF_ARGS {
            builder = builder.arg(*arg);
        }

        if let Some(ref path) = config.chrome_path {
            builder = builder.chrome_executable(path);
        }

        builder = builder.viewport(Viewport {
            width: config.viewport_width,
            height: config.viewport_height,
            device_scale_factor: None,
            emulating_mobile: false,
            is_landscape: false,
            has_touch: false,
        });

        let cr_config = builder
            .build()
            .map_err(|e| Error::LaunchError(e.to_string()))?;

        let (browser, mut handler) = CrBrowser::launch(cr_config)
            .await
            .map_err(|e| Error::LaunchError(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {}
        });

        Ok(Self {
            browser,
            default_timeout: config.default_timeout,
            handler_task,
        })
    }

    /// Open a new page (tab) navigated to the given URL.
    pub async fn new_page(&self, url: &str) -> Result<Page> {
        let cr_page = self
            .browser
            .new_page(url)
            .await
            .map_err(|e| Error::NavigationError(e.to_string()))?;

        Ok(Page::new(cr_page, self.default_timeout))
    }

    /// Close the browser and stop the CDP event loop.
    pub async fn close(mut self) -> Result<()> {
        self.browser.close().await.map_err(Error::CdpError)?;
        let _ = self.browser.wait().await;
        self.handler_task.abort();
        Ok(())
    }
}
