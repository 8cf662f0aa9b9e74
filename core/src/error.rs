//! Common error types for XPM.

use thiserror::Error;

/// Errors raised while building core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A variable name is not well formed.
    #[error("Invalid variable '{source_text}': {reason}")]
    InvalidVariable { source_text: String, reason: String },
}

impl CoreError {
    pub fn invalid_variable(source_text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVariable {
            source_text: source_text.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
