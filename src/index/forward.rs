use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::core::types::DocId;

const EMPTY_FREQS: BTreeMap<Arc<str>, f64> = BTreeMap::new();

/// doc id → (word → tf), the mutual inverse of [`crate::index::inverted::InvertedIndex`].
#[derive(Debug, Default)]
pub struct ForwardIndex {
    entries: HashMap<DocId, BTreeMap<Arc<str>, f64>>,
}

impl ForwardIndex {
    pub fn new() -> Self {
        ForwardIndex {
            entries: HashMap::new(),
        }
    }

    pub fn add(&mut self, id: DocId, word: Arc<str>, tf: f64) {
        self.entries.entry(id).or_default().insert(word, tf);
    }

    /// Removes and returns the full word → tf map for `id`, or `None` if the
    /// id was never admitted or was already removed.
    pub fn remove(&mut self, id: DocId) -> Option<BTreeMap<Arc<str>, f64>> {
        self.entries.remove(&id)
    }

    /// Reference to `id`'s word frequencies, or a shared empty map for an
    /// unknown id (never allocates).
    pub fn word_frequencies(&self, id: DocId) -> &BTreeMap<Arc<str>, f64> {
        self.entries.get(&id).unwrap_or(&EMPTY_FREQS)
    }

    pub fn contains(&self, id: DocId) -> bool {
        self.entries.contains_key(&id)
    }
}
