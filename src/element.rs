use chromiumoxide::element::Element as CrElement;

use crate::error::{Error, Result};

/// Wrapper around a chromiumoxide Element, providing a simplified API.
pub struct Element {
    inner: CrElement,
}

impl Element {
    pub(crate) fn new(inner: CrElement) -> Self {
        Self { inner }
    }

    /// Returns a reference to the underlying chromiumoxide Element.
    pub fn inner(&self) -> &CrElement {
        &self.inner
    }

    /// Click this element (scrolls into view first).
    pub async fn click(&self) -> Result<()> {
        self.inner.click().await.map_err(Error::CdpError)?;
        Ok(())
    }

    /// Type text into this element (wraps type_str).
    pub async fn type_text(&self, text: &str) -> Result<()> {
        self.inner.type_str(text).await.map_err(Error::CdpError)?;
        Ok(())
    }

    /// Press a key on this element (e.g. "Enter", "Tab").
    pub async fn press_key(&self, key: &str) -> Result<()> {
        self.inner.press_key(key).await.map_err(Error::CdpError)?;
        Ok(())
    }

    /// Get the inner text of this element.
    pub async fn inner_text(&self) -> Result<String> {
        self.inner
            .inner_text()
            .await
            .map_err(Error::CdpError)?
            .ok_or_else(|| Error::ElementNotFound("inner text is empty".into()))
    }

    /// Get the value of an attribute on this element.
    pub async fn get_attribute(&self, name: &str) -> Result<Option<String>> {
        self.inner.attribute(name).await.map_err(Error::CdpError)
    }
}
