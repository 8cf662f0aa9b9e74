//! Raw matching rows and binding tuples.

use crate::Value;

/// A binding tuple: one value per variable, in variable order.
pub type Tuple = Vec<Value>;

/// One item of a raw satisfying set, as produced by a matching engine.
///
/// A pattern with a single free variable yields bare values; any other
/// pattern yields tuples in the pattern's variable order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Row {
    Single(Value),
    Tuple(Tuple),
}

impl Row {
    /// Number of values carried by this row.
    pub fn arity(&self) -> usize {
        match self {
            Row::Single(_) => 1,
            Row::Tuple(values) => values.len(),
        }
    }

    /// Convert into a binding tuple.
    pub fn into_tuple(self) -> Tuple {
        match self {
            Row::Single(value) => vec![value],
            Row::Tuple(values) => values,
        }
    }
}

impl From<Value> for Row {
    fn from(value: Value) -> Self {
        Row::Single(value)
    }
}

impl From<Tuple> for Row {
    fn from(values: Tuple) -> Self {
        Row::Tuple(values)
    }
}
