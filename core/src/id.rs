//! Identity types for XPM.
//!
//! Texts are identified by 64-bit ids assigned by the corpus. Variables are
//! identified by name; two variables with the same name are the same variable.

use crate::{CoreError, CoreResult};
use std::fmt;
use std::sync::Arc;

/// Unique identifier for a text stored in a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextId(pub u64);

impl TextId {
    /// Create a new TextId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A free variable of a pattern.
///
/// Cloning is cheap: the name is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(Arc<str>);

impl Variable {
    /// Create a variable from a bare name (without the `$` sigil).
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Parse a variable from its source form, with or without the `$` sigil.
    pub fn parse(source: &str) -> CoreResult<Self> {
        let name = source.strip_prefix('$').unwrap_or(source);
        let mut chars = name.chars();
        match chars.next() {
            None => return Err(CoreError::invalid_variable(source, "empty name")),
            Some(c) if !(c.is_alphabetic() || c == '_') => {
                return Err(CoreError::invalid_variable(
                    source,
                    "name must start with a letter or '_'",
                ))
            }
            Some(_) => {}
        }
        if let Some(bad) = chars.find(|c| !(c.is_alphanumeric() || *c == '_')) {
            return Err(CoreError::invalid_variable(
                source,
                format!("unexpected character '{}'", bad),
            ));
        }
        Ok(Self::new(name))
    }

    /// The bare name of this variable.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Variable::new(name.strip_prefix('$').unwrap_or(name))
    }
}
