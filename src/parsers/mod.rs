pub mod html;

#[cfg(test)]
mod tests;

use thiserror::Error;

/// Failure raised by the markup extraction primitive.
///
/// html5ever parses arbitrary input best-effort, so malformed markup does
/// not fail here; the remaining failure mode is compiling the anchor
/// selector.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// CSS selector failed to compile
    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

impl ExtractError {
    /// Create a selector compilation error
    pub fn selector(selector: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }
}
