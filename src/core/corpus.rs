use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::core::types::DocId;

/// Owns document bodies for the engine's lifetime and interns the words
/// found in them into a shared, content-addressed pool.
///
/// Handing out borrowed references into a growing `HashMap` would require
/// self-referential lifetimes, so words are interned instead: each becomes
/// an `Arc<str>` handle, shared by content rather than by address, and both
/// indices store handles rather than raw string slices. Document bodies are
/// retained for the engine's lifetime — removal never reclaims a body, only
/// the index entries that reference it.
pub struct CorpusStore {
    bodies: HashMap<DocId, Box<str>>,
    words: HashSet<Arc<str>>,
}

impl CorpusStore {
    pub fn new() -> Self {
        CorpusStore {
            bodies: HashMap::new(),
            words: HashSet::new(),
        }
    }

    /// Admits a document body, returning a borrow of the stored copy for
    /// tokenization. Does nothing if the id is already present.
    pub fn admit(&mut self, id: DocId, text: String) -> &str {
        self.bodies.entry(id).or_insert_with(|| text.into_boxed_str())
    }

    pub fn body(&self, id: DocId) -> Option<&str> {
        self.bodies.get(&id).map(|b| b.as_ref())
    }

    /// Returns the shared handle for `word`, interning it on first sight.
    pub fn intern(&mut self, word: &str) -> Arc<str> {
        if let Some(existing) = self.words.get(word) {
            return existing.clone();
        }
        let arc: Arc<str> = Arc::from(word);
        self.words.insert(arc.clone());
        arc
    }
}

impl Default for CorpusStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_shares_identical_words() {
        let mut corpus = CorpusStore::new();
        let a = corpus.intern("cat");
        let b = corpus.intern("cat");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn body_survives_after_being_orphaned_by_the_index() {
        let mut corpus = CorpusStore::new();
        corpus.admit(DocId(1), "cat in the city".to_string());
        assert_eq!(corpus.body(DocId(1)), Some("cat in the city"));
    }
}
