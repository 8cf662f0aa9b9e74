//! Indexes for efficient corpus lookups.
//!
//! Posting lists are kept in insertion order so that matching is
//! deterministic.

use std::collections::HashMap;
use xpm_core::{TextId, Value};

/// Relation index: relation name -> texts
#[derive(Debug, Default)]
pub struct RelationIndex {
    index: HashMap<String, Vec<TextId>>,
}

impl RelationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, relation: &str, text_id: TextId) {
        self.index
            .entry(relation.to_string())
            .or_default()
            .push(text_id);
    }

    pub fn get(&self, relation: &str) -> &[TextId] {
        self.index.get(relation).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, relation: &str) -> usize {
        self.get(relation).len()
    }

    pub fn relations(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(|s| s.as_str())
    }
}

/// Key for the argument index: (relation, position, value)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ArgKey {
    relation: String,
    position: usize,
    value: Value,
}

/// Argument index: (relation, position, value) -> texts
#[derive(Debug, Default)]
pub struct ArgumentIndex {
    index: HashMap<ArgKey, Vec<TextId>>,
}

impl ArgumentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, relation: &str, args: &[Value], text_id: TextId) {
        for (position, value) in args.iter().enumerate() {
            let key = ArgKey {
                relation: relation.to_string(),
                position,
                value: value.clone(),
            };
            self.index.entry(key).or_default().push(text_id);
        }
    }

    pub fn get(&self, relation: &str, position: usize, value: &Value) -> &[TextId] {
        let key = ArgKey {
            relation: relation.to_string(),
            position,
            value: value.clone(),
        };
        self.index.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }
}
