//! Pattern matching against the corpus.

use crate::{Bindings, Clause, Pattern, PatternResult, Term};
use tracing::debug;
use xpm_core::{Row, Value};
use xpm_corpus::{Corpus, Text};

/// Pattern matcher that finds all matches in a corpus.
///
/// Clauses are joined left to right; each clause scans the candidate texts
/// of its relation, narrowed by whatever arguments are already known.
pub struct Matcher<'c> {
    corpus: &'c Corpus,
    limit: Option<usize>,
}

impl<'c> Matcher<'c> {
    /// Create a new matcher.
    pub fn new(corpus: &'c Corpus) -> Self {
        Self {
            corpus,
            limit: None,
        }
    }

    /// Stop after `limit` matches.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Find all matches of the pattern.
    pub fn find_all(&self, pattern: &Pattern) -> Vec<Bindings> {
        self.find_all_with_initial(pattern, Bindings::new())
    }

    /// Check if any match exists.
    pub fn exists(&self, pattern: &Pattern) -> bool {
        let mut out = Vec::new();
        Matcher {
            corpus: self.corpus,
            limit: Some(1),
        }
        .extend(pattern.clauses(), Bindings::new(), &mut out);
        !out.is_empty()
    }

    /// Find all matches starting with initial bindings.
    pub fn find_all_with_initial(&self, pattern: &Pattern, initial: Bindings) -> Vec<Bindings> {
        let mut matches = Vec::new();
        self.extend(pattern.clauses(), initial, &mut matches);
        debug!(
            pattern = %pattern,
            matches = matches.len(),
            "matched pattern"
        );
        matches
    }

    /// Satisfying set of the pattern: one row per match, in match order.
    ///
    /// Returns `None` when nothing matches.
    pub fn satisfying_set(&self, pattern: &Pattern) -> PatternResult<Option<Vec<Row>>> {
        let vars = pattern.variables();
        let matches = self.find_all(pattern);
        if matches.is_empty() {
            return Ok(None);
        }
        let rows = matches
            .iter()
            .map(|bindings| bindings.to_row(&vars))
            .collect::<PatternResult<Vec<_>>>()?;
        Ok(Some(rows))
    }

    fn limit_reached(&self, matches: &[Bindings]) -> bool {
        self.limit.is_some_and(|limit| matches.len() >= limit)
    }

    fn extend(&self, clauses: &[Clause], bindings: Bindings, out: &mut Vec<Bindings>) {
        if self.limit_reached(out) {
            return;
        }
        let Some((clause, rest)) = clauses.split_first() else {
            out.push(bindings);
            return;
        };

        let known: Vec<(usize, &Value)> = clause
            .terms
            .iter()
            .enumerate()
            .filter_map(|(i, term)| match term {
                Term::Const(value) => Some((i, value)),
                Term::Var(var) => bindings.get(var).map(|value| (i, value)),
            })
            .collect();

        for text in self.corpus.candidates(&clause.relation, &known) {
            if let Some(next) = unify(clause, text, &bindings) {
                self.extend(rest, next, out);
                if self.limit_reached(out) {
                    return;
                }
            }
        }
    }
}

/// Extend `bindings` so that `clause` matches `text`, if possible.
fn unify(clause: &Clause, text: &Text, bindings: &Bindings) -> Option<Bindings> {
    if clause.relation != text.relation || clause.terms.len() != text.arity() {
        return None;
    }
    let mut next = bindings.clone();
    for (term, arg) in clause.terms.iter().zip(&text.args) {
        match term {
            Term::Const(value) => {
                if value != arg {
                    return None;
                }
            }
            Term::Var(var) => match next.get(var) {
                Some(bound) if bound != arg => return None,
                Some(_) => {}
                None => next.insert(var.clone(), arg.clone()),
            },
        }
    }
    Some(next)
}
