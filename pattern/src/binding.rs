//! Variable bindings for pattern matching.

use crate::{PatternError, PatternResult};
use std::collections::HashMap;
use xpm_core::{Row, Tuple, Value, Variable, Variables};

/// A set of variable bindings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    map: HashMap<Variable, Value>,
}

impl Bindings {
    /// Create new empty bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create bindings with a single entry.
    pub fn with(var: impl Into<Variable>, value: impl Into<Value>) -> Self {
        let mut bindings = Self::new();
        bindings.insert(var, value);
        bindings
    }

    /// Insert a binding.
    pub fn insert(&mut self, var: impl Into<Variable>, value: impl Into<Value>) {
        self.map.insert(var.into(), value.into());
    }

    /// Get a binding by variable.
    pub fn get(&self, var: &Variable) -> Option<&Value> {
        self.map.get(var)
    }

    /// Check if a variable is bound.
    pub fn contains(&self, var: &Variable) -> bool {
        self.map.contains_key(var)
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &Value)> {
        self.map.iter()
    }

    /// Values of `vars`, in that order.
    pub fn project(&self, vars: &Variables) -> PatternResult<Tuple> {
        vars.iter()
            .map(|var| {
                self.get(var)
                    .cloned()
                    .ok_or_else(|| PatternError::unbound_variable(var.name()))
            })
            .collect()
    }

    /// Raw row for `vars`: a bare value for a single variable, a tuple
    /// otherwise.
    pub fn to_row(&self, vars: &Variables) -> PatternResult<Row> {
        let mut tuple = self.project(vars)?;
        if tuple.len() == 1 {
            if let Some(value) = tuple.pop() {
                return Ok(Row::Single(value));
            }
        }
        Ok(Row::Tuple(tuple))
    }
}
