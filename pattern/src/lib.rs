//! XPM Pattern
//!
//! Conjunctive patterns over corpus texts, and the reference matching
//! engine used to compute their satisfying sets.
//!
//! Responsibilities:
//! - Represent patterns as conjunctions of relational clauses
//! - List a pattern's free variables in first-occurrence order
//! - Decompose a pattern into variable-connected component patterns
//! - Find all matches of a pattern against a corpus
//! - Parse the small textual syntax for patterns and texts

mod binding;
mod error;
mod matcher;
mod parser;
mod pattern;

pub use binding::Bindings;
pub use error::{PatternError, PatternResult};
pub use matcher::Matcher;
pub use parser::{parse_corpus, parse_pattern, parse_texts, Span};
pub use pattern::{Clause, Pattern, Term};
