//! Pattern representation and component decomposition.

use std::fmt;
use xpm_core::{Value, Variable, Variables};

/// An argument position of a clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Free variable, bound by matching.
    Var(Variable),
    /// Constant that the text argument must equal.
    Const(Value),
}

impl Term {
    /// Get as variable if this is a Var term.
    pub fn as_var(&self) -> Option<&Variable> {
        match self {
            Term::Var(var) => Some(var),
            Term::Const(_) => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(var) => write!(f, "{}", var),
            Term::Const(value) => write!(f, "{}", value),
        }
    }
}

/// A single relational clause: `relation(term, ...)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    pub relation: String,
    pub terms: Vec<Term>,
}

impl Clause {
    pub fn new(relation: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            relation: relation.into(),
            terms,
        }
    }

    /// Variables of this clause, in order of first occurrence.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.terms.iter().filter_map(Term::as_var)
    }

    /// True if the clause has no variables.
    pub fn is_ground(&self) -> bool {
        self.variables().next().is_none()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.relation)?;
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", term)?;
        }
        write!(f, ")")
    }
}

/// A conjunction of clauses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    clauses: Vec<Clause>,
}

impl Pattern {
    /// Create a pattern from its clauses.
    pub fn new(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }

    /// The clauses in order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Free variables, in order of first occurrence.
    pub fn variables(&self) -> Variables {
        self.clauses
            .iter()
            .flat_map(Clause::variables)
            .cloned()
            .collect()
    }

    /// Check if the pattern has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Split into variable-connected components.
    ///
    /// Two clauses belong to the same component when they share a variable,
    /// directly or through other clauses. Components are ordered by the
    /// position of their first variable in [`Pattern::variables`], and each
    /// keeps its clauses in pattern order. Ground clauses go with the first
    /// component. A pattern without variables has no components.
    pub fn component_patterns(&self) -> Vec<Pattern> {
        let vars = self.variables();
        if vars.is_empty() {
            return Vec::new();
        }

        let mut sets = DisjointSets::new(vars.len());
        for clause in &self.clauses {
            let mut positions = clause.variables().filter_map(|v| vars.position(v));
            if let Some(first) = positions.next() {
                for other in positions {
                    sets.union(first, other);
                }
            }
        }

        // Component slot per root, numbered by first variable position.
        let mut slot_of_root = vec![None; vars.len()];
        let mut components: Vec<Vec<Clause>> = Vec::new();
        for position in 0..vars.len() {
            let root = sets.find(position);
            if slot_of_root[root].is_none() {
                slot_of_root[root] = Some(components.len());
                components.push(Vec::new());
            }
        }

        for clause in &self.clauses {
            let slot = match clause.variables().next() {
                Some(var) => vars
                    .position(var)
                    .and_then(|position| slot_of_root[sets.find(position)])
                    .unwrap_or(0),
                None => 0,
            };
            components[slot].push(clause.clone());
        }

        components.into_iter().map(Pattern::new).collect()
    }
}

impl From<Vec<Clause>> for Pattern {
    fn from(clauses: Vec<Clause>) -> Self {
        Pattern::new(clauses)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

/// Union-find over variable positions.
struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        // Keep the smaller position as root.
        if ra < rb {
            self.parent[rb] = ra;
        } else if rb < ra {
            self.parent[ra] = rb;
        }
    }
}
