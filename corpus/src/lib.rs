//! XPM Corpus
//!
//! In-memory storage for the texts that patterns are matched against.
//!
//! Responsibilities:
//! - Store relational texts `relation(arg, ...)` with stable ids
//! - Index texts by relation and by (relation, position, value)
//! - Serve candidate texts to the matcher in insertion order

mod corpus;
mod index;
mod text;

pub use corpus::Corpus;
pub use index::{ArgumentIndex, RelationIndex};
pub use text::Text;
