//! Valuations of one connected component of variables.

use crate::{ValuationError, ValuationResult, ValuationsBase};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use xpm_core::{Row, Tuple, Value, Variable, Variables};

/// Binding tuples of a single connected component of variables.
///
/// Rows keep the order produced by the matching engine, duplicates included:
/// how often a tuple occurs matters to the miner. Column `i` of every row is
/// the value of variable `i`.
///
/// Equality and ordering compare variable sets only, which identifies a
/// component within a composite valuation. Use [`ScValuations::rows`] to
/// compare contents.
#[derive(Debug, Clone)]
pub struct ScValuations {
    variables: Variables,
    values: Vec<Tuple>,
}

impl ScValuations {
    /// Build from a raw satisfying set.
    ///
    /// `None` means the engine found no match: the component keeps its
    /// variables and holds zero rows.
    pub fn new(variables: Variables, satset: Option<Vec<Row>>) -> ValuationResult<Self> {
        let rows = satset.unwrap_or_default();
        let values = rows.into_iter().map(Row::into_tuple).collect();
        Self::from_tuples(variables, values)
    }

    /// Build from already normalized tuples.
    pub fn from_tuples(variables: Variables, values: Vec<Tuple>) -> ValuationResult<Self> {
        if let Some(bad) = values.iter().find(|t| t.len() != variables.len()) {
            return Err(ValuationError::row_arity(variables.len(), bad.len()));
        }
        Ok(Self { variables, values })
    }

    /// A component with the given variables and no rows.
    pub fn with_variables(variables: Variables) -> Self {
        Self {
            variables,
            values: Vec::new(),
        }
    }

    /// Drop the first variable.
    pub fn erase_front(&self) -> ValuationResult<Self> {
        let var = self.front_variable()?;
        Ok(self.erase(var))
    }

    /// Drop the column of `var`.
    ///
    /// A variable outside this component leaves it unchanged. Row count and
    /// order are preserved exactly, even when rows become duplicates. Once
    /// the last variable is gone the result carries no rows; callers must
    /// test [`ValuationsBase::is_empty`], not the row count.
    pub fn erase(&self, var: &Variable) -> Self {
        let Some(dst) = self.variables.position(var) else {
            return self.clone();
        };

        let variables = self.variables.without(var);
        if variables.is_empty() {
            return Self::with_variables(variables);
        }

        let values = self
            .values
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.remove(dst);
                row
            })
            .collect();
        Self { variables, values }
    }

    /// Keep only the variables in `keep`, dropping every other column.
    pub fn project(&self, keep: &Variables) -> Self {
        self.variables
            .iter()
            .filter(|var| !keep.contains(var))
            .fold(self.clone(), |acc, var| acc.erase(var))
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    /// True if no row was recorded.
    pub fn has_no_rows(&self) -> bool {
        self.values.is_empty()
    }

    /// The rows in engine order.
    pub fn rows(&self) -> &[Tuple] {
        &self.values
    }

    /// Values taken by `var`, row by row, or `None` if `var` is not here.
    pub fn column(&self, var: &Variable) -> Option<impl Iterator<Item = &Value> + '_> {
        let dst = self.variables.position(var)?;
        Some(self.values.iter().map(move |row| &row[dst]))
    }

    /// Distinct values taken by `var`.
    pub fn distinct_values(&self, var: &Variable) -> Option<BTreeSet<&Value>> {
        Some(self.column(var)?.collect())
    }

    /// Occurrence count of each distinct row.
    pub fn frequency(&self) -> BTreeMap<&Tuple, usize> {
        let mut counts = BTreeMap::new();
        for row in &self.values {
            *counts.entry(row).or_insert(0) += 1;
        }
        counts
    }

    pub(crate) fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        writeln!(f, "{}variables: {}", indent, self.variables)?;
        writeln!(f, "{}rows = {}", indent, self.values.len())?;
        for row in &self.values {
            write!(f, "{}  (", indent)?;
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

impl ValuationsBase for ScValuations {
    fn variables(&self) -> &Variables {
        &self.variables
    }
}

impl PartialEq for ScValuations {
    fn eq(&self, other: &Self) -> bool {
        self.variables == other.variables
    }
}

impl Eq for ScValuations {}

impl PartialOrd for ScValuations {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScValuations {
    fn cmp(&self, other: &Self) -> Ordering {
        self.variables.cmp(&other.variables)
    }
}

impl fmt::Display for ScValuations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, "")
    }
}
