//! XPM Integration Test Framework
//!
//! Provides a fluent API for driving a valuation through a chain of
//! eliminations and checking every snapshot.
//!
//! # Example
//!
//! ```
//! use xpm_tests::prelude::*;
//!
//! Scenario::new("colors")
//!     .corpus("color(red). color(blue).")
//!     .pattern("color($c)")
//!     .initially(|a| a.variables(&["c"]).rows("c", 2))
//!     .erase_front(|a| a.empty())
//!     .run()
//!     .unwrap();
//! ```

mod assertion;

pub use assertion::{Assertion, AssertionBuilder};
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{Action, Scenario, Step};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::assertion::{Assertion, AssertionBuilder};
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::scenario::Scenario;
    pub use crate::sym;
    pub use xpm_core::{tuple, Value};
    pub use xpm_valuation::ValuationConfig;
}

/// Shorthand for a symbol value.
pub fn sym(name: &str) -> xpm_core::Value {
    xpm_core::Value::symbol(name)
}
