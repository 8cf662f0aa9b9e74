//! Ordered variable sets.

use crate::Variable;
use std::fmt;

/// An ordered sequence of distinct variables.
///
/// The order is meaningful: column `i` of a binding tuple corresponds to
/// variable `i`. Equality and ordering compare the sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variables {
    varseq: Vec<Variable>,
}

impl Variables {
    /// Create an empty variable set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.varseq.len()
    }

    /// Check if there are no variables.
    pub fn is_empty(&self) -> bool {
        self.varseq.is_empty()
    }

    /// Get the variable at position `i`.
    pub fn get(&self, i: usize) -> Option<&Variable> {
        self.varseq.get(i)
    }

    /// Get the first variable.
    pub fn first(&self) -> Option<&Variable> {
        self.varseq.first()
    }

    /// Check whether `var` belongs to this set.
    pub fn contains(&self, var: &Variable) -> bool {
        self.varseq.contains(var)
    }

    /// Position of `var` within the order, if present.
    pub fn position(&self, var: &Variable) -> Option<usize> {
        self.varseq.iter().position(|v| v == var)
    }

    /// Iterate over the variables in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.varseq.iter()
    }

    /// The variables as a slice.
    pub fn as_slice(&self) -> &[Variable] {
        &self.varseq
    }

    /// Append `var` unless it is already present. Returns true if appended.
    pub fn push(&mut self, var: Variable) -> bool {
        if self.contains(&var) {
            return false;
        }
        self.varseq.push(var);
        true
    }

    /// Remove `var` in place. Returns its former position.
    pub fn erase(&mut self, var: &Variable) -> Option<usize> {
        let pos = self.position(var)?;
        self.varseq.remove(pos);
        Some(pos)
    }

    /// Copy of this set with `var` removed. The receiver is untouched.
    pub fn without(&self, var: &Variable) -> Self {
        let mut copy = self.clone();
        copy.erase(var);
        copy
    }

    /// Check that no variable is shared with `other`.
    pub fn is_disjoint(&self, other: &Variables) -> bool {
        self.varseq.iter().all(|v| !other.contains(v))
    }

    /// Canonical key: the variables in sorted order.
    pub fn key(&self) -> VarKey {
        let mut sorted = self.varseq.clone();
        sorted.sort();
        VarKey(sorted)
    }
}

impl FromIterator<Variable> for Variables {
    /// Collect variables, keeping the first occurrence of each.
    fn from_iter<I: IntoIterator<Item = Variable>>(iter: I) -> Self {
        let mut vars = Variables::new();
        for var in iter {
            vars.push(var);
        }
        vars
    }
}

impl<'a> IntoIterator for &'a Variables {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.varseq.iter()
    }
}

impl From<Vec<Variable>> for Variables {
    fn from(vars: Vec<Variable>) -> Self {
        vars.into_iter().collect()
    }
}

impl fmt::Display for Variables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, var) in self.varseq.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", var)?;
        }
        write!(f, ")")
    }
}

/// Order-independent identity of a variable set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarKey(Vec<Variable>);

impl VarKey {
    /// The sorted variables.
    pub fn variables(&self) -> &[Variable] {
        &self.0
    }
}

/// Build a [`Variables`] from bare names.
///
/// ```
/// use xpm_core::vars;
/// let v = vars!["x", "y"];
/// assert_eq!(v.len(), 2);
/// ```
#[macro_export]
macro_rules! vars {
    () => {
        $crate::Variables::new()
    };
    ($($name:expr),+ $(,)?) => {
        [$($crate::Variable::from($name)),+]
            .into_iter()
            .collect::<$crate::Variables>()
    };
}
