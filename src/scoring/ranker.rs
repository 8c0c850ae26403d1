use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use rayon::prelude::*;

use crate::core::types::{DocId, DocumentMeta, DocumentStatus, ScoredDocument, RELEVANCE_EPSILON};
use crate::index::inverted::InvertedIndex;
use crate::parallel::sharded_map::ShardedMap;
use crate::query::parser::Query;

/// `idf(w) = ln(total_docs / doc_freq(w))`, using the current number of
/// admitted documents rather than the number that contain `w`.
pub fn compute_idf(total_docs: usize, doc_freq: usize) -> f64 {
    (total_docs as f64) / (doc_freq as f64)
}

fn idf(total_docs: usize, doc_freq: usize) -> f64 {
    compute_idf(total_docs, doc_freq).ln()
}

/// Accumulates TF-IDF relevance for every document touched by `query` on
/// the calling thread. A document is excluded outright if any minus word
/// matches it; otherwise it contributes only if `predicate` accepts it,
/// consulted during accumulation so rejected documents never affect the sum
/// (IDF itself still uses the unfiltered document count).
pub fn find_all_documents_sequential<F>(
    inverted: &InvertedIndex,
    metadata: &BTreeMap<DocId, DocumentMeta>,
    query: &Query<'_>,
    predicate: F,
) -> Vec<ScoredDocument>
where
    F: Fn(DocId, DocumentStatus, i64) -> bool,
{
    let total_docs = metadata.len();
    let mut relevance: HashMap<DocId, f64> = HashMap::new();

    for &word in &query.plus_words {
        let Some(postings) = inverted.postings(word) else {
            continue;
        };
        if postings.is_empty() {
            continue;
        }
        let word_idf = idf(total_docs, postings.len());
        for (&id, &tf) in postings {
            if let Some(meta) = metadata.get(&id) {
                if predicate(id, meta.status, meta.rating) {
                    *relevance.entry(id).or_insert(0.0) += tf * word_idf;
                }
            }
        }
    }

    for &word in &query.minus_words {
        if let Some(postings) = inverted.postings(word) {
            for &id in postings.keys() {
                relevance.remove(&id);
            }
        }
    }

    to_scored_documents(relevance, metadata)
}

/// Same contract as [`find_all_documents_sequential`], scattering plus-word
/// accumulation and minus-word erasure across the `rayon` global pool via a
/// sharded accumulator. The two-phase scatter-then-erase order means the
/// result's surviving id set matches the sequential pass regardless of how
/// the pool interleaves individual words.
pub fn find_all_documents_parallel<F>(
    inverted: &InvertedIndex,
    metadata: &BTreeMap<DocId, DocumentMeta>,
    query: &Query<'_>,
    predicate: F,
    bucket_count: usize,
) -> Vec<ScoredDocument>
where
    F: Fn(DocId, DocumentStatus, i64) -> bool + Sync,
{
    let total_docs = metadata.len();
    let accumulator: ShardedMap<f64> = ShardedMap::new(bucket_count);

    query.plus_words.par_iter().for_each(|&word| {
        let Some(postings) = inverted.postings(word) else {
            return;
        };
        if postings.is_empty() {
            return;
        }
        let word_idf = idf(total_docs, postings.len());
        for (&id, &tf) in postings {
            if let Some(meta) = metadata.get(&id) {
                if predicate(id, meta.status, meta.rating) {
                    *accumulator.access(id) += tf * word_idf;
                }
            }
        }
    });

    query.minus_words.par_iter().for_each(|&word| {
        if let Some(postings) = inverted.postings(word) {
            for &id in postings.keys() {
                accumulator.erase(id);
            }
        }
    });

    to_scored_documents(
        accumulator.build_ordinary_map().into_iter().collect(),
        metadata,
    )
}

fn to_scored_documents(
    relevance: HashMap<DocId, f64>,
    metadata: &BTreeMap<DocId, DocumentMeta>,
) -> Vec<ScoredDocument> {
    relevance
        .into_iter()
        .filter_map(|(id, relevance)| {
            metadata.get(&id).map(|meta| ScoredDocument {
                id,
                relevance,
                rating: meta.rating,
            })
        })
        .collect()
}

/// Sorts by relevance descending, breaking ties within `RELEVANCE_EPSILON`
/// by rating descending, then truncates to `max_results`.
pub fn ranked(mut documents: Vec<ScoredDocument>, max_results: usize) -> Vec<ScoredDocument> {
    documents.sort_by(compare_results);
    documents.truncate(max_results);
    documents
}

fn compare_results(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    if (a.relevance - b.relevance).abs() < RELEVANCE_EPSILON {
        b.rating.cmp(&a.rating)
    } else {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn meta(rating: i64, status: DocumentStatus) -> DocumentMeta {
        DocumentMeta { rating, status }
    }

    #[test]
    fn idf_uses_total_docs_not_matching_docs() {
        assert!((compute_idf(4, 2) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn minus_word_excludes_regardless_of_predicate() {
        let mut inverted = InvertedIndex::new();
        inverted.add(Arc::from("cat"), DocId(1), 0.5);
        inverted.add(Arc::from("dog"), DocId(1), 0.5);
        inverted.add(Arc::from("dog"), DocId(2), 0.5);

        let mut metadata = BTreeMap::new();
        metadata.insert(DocId(1), meta(5, DocumentStatus::Actual));
        metadata.insert(DocId(2), meta(5, DocumentStatus::Actual));

        let query = Query {
            plus_words: vec!["dog"],
            minus_words: vec!["cat"],
        };

        let results = find_all_documents_sequential(&inverted, &metadata, &query, |_, _, _| true);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, DocId(2));
    }

    #[test]
    fn sort_breaks_ties_by_rating() {
        let docs = vec![
            ScoredDocument {
                id: DocId(1),
                relevance: 1.0,
                rating: 3,
            },
            ScoredDocument {
                id: DocId(2),
                relevance: 1.0 + 1e-9,
                rating: 9,
            },
        ];
        let sorted = ranked(docs, 5);
        assert_eq!(sorted[0].id, DocId(2));
    }

    #[test]
    fn truncates_to_max_results() {
        let docs: Vec<ScoredDocument> = (0..10)
            .map(|i| ScoredDocument {
                id: DocId(i),
                relevance: i as f64,
                rating: 0,
            })
            .collect();
        let sorted = ranked(docs, 5);
        assert_eq!(sorted.len(), 5);
        assert_eq!(sorted[0].id, DocId(9));
    }
}
