//! The seam between the valuation index and the matching engine.

use xpm_core::{Row, Variables};
use xpm_corpus::Corpus;
use xpm_pattern::{Matcher, Pattern, PatternError};

/// What the valuation index needs from a pattern matcher.
pub trait MatchEngine {
    type Pattern;
    type Corpus: ?Sized;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Free variables of `pattern`, in a fixed order.
    fn variables(&self, pattern: &Self::Pattern) -> Variables;

    /// Variable-disjoint component patterns whose variables together are
    /// those of `pattern`.
    fn component_patterns(&self, pattern: &Self::Pattern) -> Vec<Self::Pattern>;

    /// Raw satisfying set of `pattern` against `corpus`, `None` when
    /// nothing matches.
    fn satisfying_set(
        &self,
        pattern: &Self::Pattern,
        corpus: &Self::Corpus,
    ) -> Result<Option<Vec<Row>>, Self::Error>;
}

/// [`MatchEngine`] over conjunctive patterns and an in-memory corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternEngine {
    limit: Option<usize>,
}

impl PatternEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of rows of each satisfying set.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl MatchEngine for PatternEngine {
    type Pattern = Pattern;
    type Corpus = Corpus;
    type Error = PatternError;

    fn variables(&self, pattern: &Pattern) -> Variables {
        pattern.variables()
    }

    fn component_patterns(&self, pattern: &Pattern) -> Vec<Pattern> {
        pattern.component_patterns()
    }

    fn satisfying_set(
        &self,
        pattern: &Pattern,
        corpus: &Corpus,
    ) -> Result<Option<Vec<Row>>, PatternError> {
        let matcher = Matcher::new(corpus);
        match self.limit {
            Some(limit) => matcher.with_limit(limit).satisfying_set(pattern),
            None => matcher.satisfying_set(pattern),
        }
    }
}
