use serde::{Deserialize, Serialize};

/// A fetched web page awaiting link extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// URL the page was fetched from
    pub url: String,

    /// Raw markup as text
    pub content: String,
}

impl Page {
    /// Create a new page record
    pub fn new(url: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content: content.into(),
        }
    }

    /// Borrow the raw markup
    pub fn content(&self) -> &str {
        &self.content
    }
}
