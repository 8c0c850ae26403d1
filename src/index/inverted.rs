use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::core::types::DocId;

/// word → (doc id → tf). The source of truth for which documents contain a
/// word and at what term frequency.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: HashMap<Arc<str>, BTreeMap<DocId, f64>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
        }
    }

    /// Records that `word` occurs in `id` with the given term frequency.
    pub fn add(&mut self, word: Arc<str>, id: DocId, tf: f64) {
        self.postings.entry(word).or_default().insert(id, tf);
    }

    /// Removes `id` from `word`'s posting list. The word entry itself is
    /// retained even if this empties its posting list; nothing observable
    /// depends on whether empty word entries are ever garbage-collected.
    pub fn remove(&mut self, word: &str, id: DocId) {
        if let Some(postings) = self.postings.get_mut(word) {
            postings.remove(&id);
        }
    }

    pub fn postings(&self, word: &str) -> Option<&BTreeMap<DocId, f64>> {
        self.postings.get(word)
    }

    pub fn doc_freq(&self, word: &str) -> usize {
        self.postings.get(word).map_or(0, |p| p.len())
    }

    pub fn contains_doc(&self, word: &str, id: DocId) -> bool {
        self.postings
            .get(word)
            .is_some_and(|postings| postings.contains_key(&id))
    }

    /// Number of distinct words ever seen, including ones with empty
    /// posting lists left behind by removal.
    pub fn word_count(&self) -> usize {
        self.postings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(s: &str) -> Arc<str> {
        Arc::from(s)
    }

    #[test]
    fn add_then_remove_leaves_an_empty_but_present_entry() {
        let mut index = InvertedIndex::new();
        index.add(term("cat"), DocId(1), 0.5);
        assert_eq!(index.doc_freq("cat"), 1);

        index.remove("cat", DocId(1));
        assert_eq!(index.doc_freq("cat"), 0);
        assert!(index.postings("cat").is_some());
        assert_eq!(index.word_count(), 1);
    }

    #[test]
    fn removing_unknown_doc_is_a_no_op() {
        let mut index = InvertedIndex::new();
        index.add(term("cat"), DocId(1), 1.0);
        index.remove("cat", DocId(99));
        assert_eq!(index.doc_freq("cat"), 1);
    }

    #[test]
    fn postings_are_ordered_by_doc_id() {
        let mut index = InvertedIndex::new();
        index.add(term("cat"), DocId(5), 1.0);
        index.add(term("cat"), DocId(1), 1.0);
        index.add(term("cat"), DocId(3), 1.0);
        let ids: Vec<DocId> = index.postings("cat").unwrap().keys().copied().collect();
        assert_eq!(ids, vec![DocId(1), DocId(3), DocId(5)]);
    }
}
