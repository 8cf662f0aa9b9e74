//! Core corpus storage implementation.

use crate::index::{ArgumentIndex, RelationIndex};
use crate::Text;
use tracing::trace;
use xpm_core::{TextId, Value};

/// The in-memory corpus of texts.
///
/// Texts are append-only: once inserted a text keeps its id and content.
#[derive(Debug, Default)]
pub struct Corpus {
    /// Text storage, indexed by `id - 1`
    texts: Vec<Text>,
    /// Relation index
    relation_index: RelationIndex,
    /// Argument index
    arg_index: ArgumentIndex,
}

impl Corpus {
    /// Create a new empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a text and return its id.
    pub fn insert(&mut self, relation: impl Into<String>, args: Vec<Value>) -> TextId {
        let id = TextId::new(self.texts.len() as u64 + 1);
        let text = Text::new(id, relation, args);

        self.relation_index.insert(&text.relation, id);
        self.arg_index.insert(&text.relation, &text.args, id);
        trace!(%id, text = %text, "inserted text");

        self.texts.push(text);
        id
    }

    /// Get a text by id.
    pub fn get(&self, id: TextId) -> Option<&Text> {
        let slot = usize::try_from(id.raw()).ok()?.checked_sub(1)?;
        self.texts.get(slot)
    }

    /// Number of texts.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Check if the corpus holds no texts.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Iterate over all texts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Text> {
        self.texts.iter()
    }

    /// Texts of a relation, in insertion order.
    pub fn texts_with_relation<'a>(&'a self, relation: &str) -> impl Iterator<Item = &'a Text> {
        self.resolve(self.relation_index.get(relation))
    }

    /// Texts of a relation whose argument at `position` equals `value`.
    pub fn texts_matching<'a>(
        &'a self,
        relation: &str,
        position: usize,
        value: &Value,
    ) -> impl Iterator<Item = &'a Text> {
        self.resolve(self.arg_index.get(relation, position, value))
    }

    /// Candidate texts for a relation given some already known arguments.
    ///
    /// Picks the shortest posting list among the known arguments; the
    /// caller still has to check every argument of each candidate.
    pub fn candidates<'a>(
        &'a self,
        relation: &str,
        known: &[(usize, &Value)],
    ) -> impl Iterator<Item = &'a Text> {
        let mut best = self.relation_index.get(relation);
        for (position, value) in known {
            let postings = self.arg_index.get(relation, *position, value);
            if postings.len() < best.len() {
                best = postings;
            }
        }
        self.resolve(best)
    }

    /// Number of texts with a given relation.
    pub fn relation_count(&self, relation: &str) -> usize {
        self.relation_index.count(relation)
    }

    fn resolve<'a>(&'a self, ids: &'a [TextId]) -> impl Iterator<Item = &'a Text> {
        ids.iter().filter_map(move |id| self.get(*id))
    }
}

impl FromIterator<(String, Vec<Value>)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Value>)>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for (relation, args) in iter {
            corpus.insert(relation, args);
        }
        corpus
    }
}
