//! Texts stored in the corpus.

use std::fmt;
use xpm_core::{TextId, Value};

/// A relational fact: `relation(arg0, arg1, ...)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text {
    /// Unique identifier for this text.
    pub id: TextId,
    /// Relation name.
    pub relation: String,
    /// Ordered arguments.
    pub args: Vec<Value>,
}

impl Text {
    /// Create a new text.
    pub fn new(id: TextId, relation: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            id,
            relation: relation.into(),
            args,
        }
    }

    /// Number of arguments.
    pub fn arity(&self) -> usize {
        self.args.len()
    }

    /// Get the argument at a specific position.
    pub fn arg(&self, position: usize) -> Option<&Value> {
        self.args.get(position)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.relation)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}
