use std::time::Duration;

use chromiumoxide::cdp::browser_protocol::input::{
    DispatchKeyEventParams, DispatchKeyEventType,
};
use chromiumoxide::page::Page as CrPage;
use serde::de::DeserializeOwned;

use crate::element::Element;
use crate::error::{Error, Result};

/// Wrapper around a chromiumoxide Page with a simplified, check-friendly API.
pub struct Page {
    inner: CrPage,
    default_timeout: Duration,
}

impl Page {
    pub(crate) fn new(inner: CrPage, default_timeout: Duration) -> Self {
        Self {
            inner,
            default_timeout,
        }
    }

    /// Returns a reference to the underlying chromiumoxide Page.
    pub fn inner(&self) -> &CrPage {
        &self.inner
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Navigate to the given URL and wait for the page to load.
    pub async fn goto(&self, url: &str) -> Result<()> {
        self.inner
            .goto(url)
            .await
            .map_err(|e| Error::NavigationError(e.to_string()))?;
        Ok(())
    }

    /// Get the current page URL.
    pub async fn url(&self) -> Result<String> {
        self.inner
            .url()
            .await
            .map_err(|e| Error::NavigationError(e.to_string()))?
            .ok_or_else(|| Error::NavigationError("No URL found".into()))
    }

    /// Get the current page title.
    pub async fn title(&self) -> Result<String> {
        let result = self
            .inner
            .evaluate("document.title")
            .await
            .map_err(|e| Error::JsError(e.to_string()))?;
        match result.into_value::<String>() {
            Ok(title) => Ok(title),
            Err(_) => Ok(String::new()),
        }
    }

    // ── Actions ─────────────────────────────────────────────────────

    /// Click on an element matching the given CSS selector.
    pub async fn click(&self, selector: &str) -> Result<()> {
        let el = self.find_element(selector).await?;
        el.click().await
    }

    /// Type text into an element matching the given CSS selector.
    pub async fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let el = self.find_element(selector).await?;
        el.click().await?;
        el.type_text(text).await
    }

    /// Press a key (e.g. "Tab", "Enter") against the page as a whole.
    ///
    /// Dispatches raw CDP key events without focusing anything first, so the
    /// browser's own focus handling applies — repeated Tab presses walk the
    /// focus ring the way a keyboard user's would.
    pub async fn press_key(&self, key: &str) -> Result<()> {
        let (code, vk) = match key {
            "Tab" => ("Tab", 9),
            "Enter" => ("Enter", 13),
            "Escape" => ("Escape", 27),
            other => {
                return Err(Error::InputError(format!("unsupported key: {other}")));
            }
        };

        let down = DispatchKeyEventParams::builder()
            .r#type(DispatchKeyEventType::RawKeyDown)
            .key(key)
            .code(code)
            .windows_virtual_key_code(vk)
            .native_virtual_key_code(vk)
            .build()
            .map_err(Error::InputError)?;
        self.inner.execute(down).await.map_err(Error::CdpError)?;

        let up = DispatchKeyEventParams::builder()
            .r#type(DispatchKeyEventType::KeyUp)
            .key(key)
            .code(code)
            .windows_virtual_key_code(vk)
            .native_virtual_key_code(vk)
            .build()
            .map_err(Error::InputError)?;
        self.inner.execute(up).await.map_err(Error::CdpError)?;

        Ok(())
    }

    /// Click the first element matching `selector` whose visible text contains
    /// `text`. Returns whether anything was clicked.
    pub async fn click_by_text(&self, selector: &str, text: &str) -> Result<bool> {
        let selector_js =
            serde_json::to_string(selector).map_err(|e| Error::JsError(e.to_string()))?;
        let text_js = serde_json::to_string(text).map_err(|e| Error::JsError(e.to_string()))?;
        let js = format!(
            r#"
            (() => {{
                const needle = {text_js};
                for (const el of document.querySelectorAll({selector_js})) {{
                    if ((el.innerText || '').trim().includes(needle)) {{
                        el.click();
                        return true;
                    }}
                }}
                return false;
            }})()
            "#,
        );
        let result = self
            .inner
            .evaluate(js)
            .await
            .map_err(|e| Error::JsError(e.to_string()))?;
        result
            .into_value::<bool>()
            .map_err(|e| Error::JsError(e.to_string()))
    }

    /// Wait for an element matching the given CSS selector to appear in the DOM.
    /// Polls every 100ms up to the configured default timeout.
    pub async fn wait_for_selector(&self, selector: &str) -> Result<Element> {
        let timeout = self.default_timeout;
        let interval = Duration::from_millis(100);
        let start = std::time::Instant::now();

        loop {
            match self.find_element(selector).await {
                Ok(el) => return Ok(el),
                Err(_) if start.elapsed() < timeout => {
                    tokio::time::sleep(interval).await;
                }
                Err(_) => {
                    return Err(Error::Timeout(format!(
                        "Timed out waiting for selector: {}",
                        selector
                    )));
                }
            }
        }
    }

    /// Wait for a navigation to complete.
    pub async fn wait_for_navigation(&self) -> Result<()> {
        self.inner
            .wait_for_navigation()
            .await
            .map_err(|e| Error::NavigationError(e.to_string()))?;
        Ok(())
    }

    // ── Observations ────────────────────────────────────────────────

    /// Get the full HTML content of the page.
    pub async fn html(&self) -> Result<String> {
        self.inner
            .content()
            .await
            .map_err(|e| Error::JsError(e.to_string()))
    }

    /// Get the class attribute of the currently focused element.
    pub async fn focused_class(&self) -> Result<String> {
        let result = self
            .inner
            .evaluate("document.activeElement ? document.activeElement.className : ''")
            .await
            .map_err(|e| Error::JsError(e.to_string()))?;
        result
            .into_value::<String>()
            .map_err(|e| Error::JsError(e.to_string()))
    }

    /// Whether an element matching `selector` exists and is rendered
    /// (attached, not display:none/visibility:hidden, non-empty box).
    pub async fn is_visible(&self, selector: &str) -> Result<bool> {
        let selector_js =
            serde_json::to_string(selector).map_err(|e| Error::JsError(e.to_string()))?;
        let js = format!(
            r#"
            (() => {{
                const el = document.querySelector({selector_js});
                if (!el) return false;
                const style = window.getComputedStyle(el);
                if (style.display === 'none' || style.visibility === 'hidden') return false;
                return el.getClientRects().length > 0;
            }})()
            "#,
        );
        let result = self
            .inner
            .evaluate(js)
            .await
            .map_err(|e| Error::JsError(e.to_string()))?;
        result
            .into_value::<bool>()
            .map_err(|e| Error::JsError(e.to_string()))
    }

    /// Whether some element matching `selector` is visible and its text
    /// contains `text`.
    pub async fn text_visible(&self, selector: &str, text: &str) -> Result<bool> {
        let selector_js =
            serde_json::to_string(selector).map_err(|e| Error::JsError(e.to_string()))?;
        let text_js = serde_json::to_string(text).map_err(|e| Error::JsError(e.to_string()))?;
        let js = format!(
            r#"
            (() => {{
                const needle = {text_js};
                for (const el of document.querySelectorAll({selector_js})) {{
                    if (!(el.innerText || '').includes(needle)) continue;
                    const style = window.getComputedStyle(el);
                    if (style.display === 'none' || style.visibility === 'hidden') continue;
                    if (el.getClientRects().length > 0) return true;
                }}
                return false;
            }})()
            "#,
        );
        let result = self
            .inner
            .evaluate(js)
            .await
            .map_err(|e| Error::JsError(e.to_string()))?;
        result
            .into_value::<bool>()
            .map_err(|e| Error::JsError(e.to_string()))
    }

    /// Run a JS expression that produces `JSON.stringify(...)` output and
    /// deserialize it. Serializing inside the page keeps structured reads to
    /// one round trip instead of one CDP call per element.
    pub async fn extract<T: DeserializeOwned>(&self, js: &str) -> Result<T> {
        let result = self
            .inner
            .evaluate(js)
            .await
            .map_err(|e| Error::JsError(e.to_string()))?;
        let json_str: String = result
            .into_value()
            .map_err(|e| Error::JsError(e.to_string()))?;
        serde_json::from_str(&json_str).map_err(|e| Error::JsError(e.to_string()))
    }

    // ── Element Queries ─────────────────────────────────────────────

    /// Find an element matching the given CSS selector.
    pub async fn find_element(&self, selector: &str) -> Result<Element> {
        let el = self
            .inner
            .find_element(selector)
            .await
            .map_err(|e| Error::ElementNotFound(e.to_string()))?;
        Ok(Element::new(el))
    }

    /// Find all elements matching the given CSS selector.
    pub async fn find_elements(&self, selector: &str) -> Result<Vec<Element>> {
        let els = self
            .inner
            .find_elements(selector)
            .await
            .map_err(|e| Error::ElementNotFound(e.to_string()))?;
        Ok(els.into_iter().map(Element::new).collect())
    }
}
