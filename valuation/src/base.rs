//! Variable queries shared by component and composite valuations.

use crate::{ValuationError, ValuationResult};
use xpm_core::{Variable, Variables};

/// Read-only queries over the variable set held by a valuation.
pub trait ValuationsBase {
    /// The variable set, in column order.
    fn variables(&self) -> &Variables;

    /// True iff there are no variables left.
    fn is_empty(&self) -> bool {
        self.variables().is_empty()
    }

    /// Number of variables.
    fn variable_count(&self) -> usize {
        self.variables().len()
    }

    /// The first variable.
    fn front_variable(&self) -> ValuationResult<&Variable> {
        self.variables().first().ok_or(ValuationError::NoVariables)
    }

    /// The i-th variable.
    fn variable(&self, i: usize) -> ValuationResult<&Variable> {
        let vars = self.variables();
        vars.get(i)
            .ok_or_else(|| ValuationError::index_out_of_range(i, vars.len()))
    }

    /// Check whether `var` is one of the variables.
    fn contains_variable(&self, var: &Variable) -> bool {
        self.variables().contains(var)
    }
}
