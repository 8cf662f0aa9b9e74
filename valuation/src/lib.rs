//! XPM Valuation
//!
//! Records, for a pattern with free variables, every tuple of bindings that
//! makes the pattern match a corpus, partitioned by the connected components
//! of the pattern's variables.
//!
//! Responsibilities:
//! - Build a composite valuation from a pattern and a corpus, one
//!   satisfying-set query per component
//! - Eliminate variables one at a time without re-querying the corpus
//! - Look up the component that owns a variable
//!
//! Every reduction returns a new value; the source valuation stays usable by
//! other branches of the search.

mod base;
mod component;
mod composite;
mod config;
mod engine;
mod error;

pub use base::ValuationsBase;
pub use component::ScValuations;
pub use composite::{render_map, Eliminations, Valuations, ValuationsMap};
pub use config::ValuationConfig;
pub use engine::{MatchEngine, PatternEngine};
pub use error::{ValuationError, ValuationResult};
