use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use crate::core::engine::SearchEngine;
use crate::core::types::DocId;

/// Two documents are duplicates iff the set of words they contain (ignoring
/// frequency) is identical. Walks ids in ascending order so the lowest id of
/// each duplicate group is the one retained; every later id with the same
/// word set is removed from `engine` and returned.
pub fn remove_duplicates(engine: &mut SearchEngine) -> Vec<DocId> {
    let mut seen: HashSet<BTreeSet<Arc<str>>> = HashSet::new();
    let mut duplicates = Vec::new();

    for id in engine.iter() {
        let word_set: BTreeSet<Arc<str>> = engine.word_frequencies(id).keys().cloned().collect();
        if !seen.insert(word_set) {
            duplicates.push(id);
        }
    }

    for &id in &duplicates {
        eprintln!("found duplicate document id {id}");
        engine.remove_document(id);
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocumentStatus;

    #[test]
    fn keeps_the_lowest_id_of_each_duplicate_group() {
        let mut engine = SearchEngine::new();
        engine
            .add_document(DocId(0), "cat dog", DocumentStatus::Actual, &[1])
            .unwrap();
        engine
            .add_document(DocId(1), "dog cat", DocumentStatus::Actual, &[1])
            .unwrap();
        engine
            .add_document(DocId(2), "cat dog cat", DocumentStatus::Actual, &[1])
            .unwrap();
        engine
            .add_document(DocId(3), "fox", DocumentStatus::Actual, &[1])
            .unwrap();

        let removed = remove_duplicates(&mut engine);
        assert_eq!(removed, vec![DocId(1), DocId(2)]);
        assert_eq!(engine.document_count(), 2);
        let remaining: Vec<i64> = engine.iter().map(|id| id.value()).collect();
        assert_eq!(remaining, vec![0, 3]);
    }

    #[test]
    fn no_duplicates_removes_nothing() {
        let mut engine = SearchEngine::new();
        engine
            .add_document(DocId(0), "cat", DocumentStatus::Actual, &[1])
            .unwrap();
        engine
            .add_document(DocId(1), "dog", DocumentStatus::Actual, &[1])
            .unwrap();
        assert!(remove_duplicates(&mut engine).is_empty());
        assert_eq!(engine.document_count(), 2);
    }
}
