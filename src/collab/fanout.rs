use rayon::prelude::*;

use crate::core::engine::SearchEngine;
use crate::core::error::Result;
use crate::core::types::ScoredDocument;

/// Runs `find_top_documents_default` for every query in parallel, returning
/// one result vector per query in input order.
pub fn process_queries(
    engine: &SearchEngine,
    queries: &[String],
) -> Vec<Result<Vec<ScoredDocument>>> {
    queries
        .par_iter()
        .map(|query| engine.find_top_documents_default(query))
        .collect()
}

/// Same as [`process_queries`], flattened into one vector. Queries that
/// failed to parse contribute nothing; order among successful queries is
/// preserved.
pub fn process_queries_joined(engine: &SearchEngine, queries: &[String]) -> Vec<ScoredDocument> {
    process_queries(engine, queries)
        .into_iter()
        .filter_map(Result::ok)
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DocId, DocumentStatus};

    fn sample_engine() -> SearchEngine {
        let mut engine = SearchEngine::new();
        engine
            .add_document(DocId(0), "cat in the city", DocumentStatus::Actual, &[1])
            .unwrap();
        engine
            .add_document(DocId(1), "dog in the park", DocumentStatus::Actual, &[1])
            .unwrap();
        engine
    }

    #[test]
    fn results_preserve_query_order() {
        let engine = sample_engine();
        let queries = vec!["cat".to_string(), "dog".to_string()];
        let results = process_queries(&engine, &queries);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].as_ref().unwrap()[0].id, DocId(0));
        assert_eq!(results[1].as_ref().unwrap()[0].id, DocId(1));
    }

    #[test]
    fn joined_concatenates_in_order() {
        let engine = sample_engine();
        let queries = vec!["cat".to_string(), "dog".to_string()];
        let joined = process_queries_joined(&engine, &queries);
        let ids: Vec<i64> = joined.iter().map(|d| d.id.value()).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn invalid_query_is_dropped_from_joined_results() {
        let engine = sample_engine();
        let queries = vec!["cat --".to_string(), "dog".to_string()];
        let joined = process_queries_joined(&engine, &queries);
        let ids: Vec<i64> = joined.iter().map(|d| d.id.value()).collect();
        assert_eq!(ids, vec![1]);
    }
}
