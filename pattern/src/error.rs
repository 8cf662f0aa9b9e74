//! Pattern error types.

use crate::Span;
use thiserror::Error;
use xpm_core::CoreError;

/// Errors that can occur while building or matching patterns.
#[derive(Debug, Error)]
pub enum PatternError {
    /// Syntax error in pattern or text source.
    #[error("Parse error at {span}: {message}")]
    Parse { message: String, span: Span },

    /// Variable referenced but never bound during matching.
    #[error("Unbound variable '{name}'")]
    UnboundVariable { name: String },

    /// Malformed variable name.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PatternError {
    pub fn parse(message: impl Into<String>, span: Span) -> Self {
        Self::Parse {
            message: message.into(),
            span,
        }
    }

    pub fn unexpected_token(span: Span, expected: &str, found: &str) -> Self {
        Self::parse(format!("expected {}, found {}", expected, found), span)
    }

    pub fn unbound_variable(name: impl Into<String>) -> Self {
        Self::UnboundVariable { name: name.into() }
    }
}

/// Result type for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;
