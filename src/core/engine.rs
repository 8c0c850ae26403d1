use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use rayon::prelude::*;

use crate::analysis::stopwords::StopWords;
use crate::analysis::tokenizer::is_valid_word;
use crate::analysis::tokenizer::split_ascii_whitespace;
use crate::core::config::EngineConfig;
use crate::core::corpus::CorpusStore;
use crate::core::error::{Error, Result};
use crate::core::types::{DocId, DocumentMeta, DocumentStatus, ScoredDocument};
use crate::index::forward::ForwardIndex;
use crate::index::inverted::InvertedIndex;
use crate::query::parser::{parse_query_basic, parse_query_no_duplicates};
use crate::scoring::ranker::{find_all_documents_parallel, find_all_documents_sequential, ranked};

/// The whole retrieval engine: corpus, coupled indices, metadata and
/// configuration. A single-writer/multi-reader structure — concurrent
/// queries are safe, but callers mixing queries with `add_document` /
/// `remove_document` from different threads must synchronize externally.
pub struct SearchEngine {
    stop_words: StopWords,
    corpus: CorpusStore,
    forward: ForwardIndex,
    inverted: InvertedIndex,
    metadata: BTreeMap<DocId, DocumentMeta>,
    config: EngineConfig,
}

impl SearchEngine {
    /// An engine with no stop words and default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        SearchEngine {
            stop_words: StopWords::default(),
            corpus: CorpusStore::new(),
            forward: ForwardIndex::new(),
            inverted: InvertedIndex::new(),
            metadata: BTreeMap::new(),
            config,
        }
    }

    /// Builds an engine whose stop words come from any collection of
    /// strings. Fails if any of them is invalid.
    pub fn with_stop_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut engine = Self::new();
        engine.stop_words = StopWords::from_iter(words)?;
        Ok(engine)
    }

    /// Builds an engine whose stop words are a single whitespace-separated
    /// string.
    pub fn with_stop_words_str(text: &str) -> Result<Self> {
        let mut engine = Self::new();
        engine.stop_words = StopWords::from_str(text)?;
        Ok(engine)
    }

    // ---- mutation -----------------------------------------------------

    /// Admits a new document. Fails, leaving the engine unchanged, if `id`
    /// is negative, already present, contains an invalid word, or `ratings`
    /// is empty. All validation happens before any index is touched.
    pub fn add_document(
        &mut self,
        id: DocId,
        text: &str,
        status: DocumentStatus,
        ratings: &[i64],
    ) -> Result<()> {
        if id.is_negative() || self.metadata.contains_key(&id) {
            return Err(Error::invalid_argument(format!(
                "document id {id} is invalid or already present"
            )));
        }
        if ratings.is_empty() {
            return Err(Error::invalid_argument("ratings must not be empty"));
        }

        let mut kept_words = Vec::new();
        for token in split_ascii_whitespace(text) {
            if !is_valid_word(token) {
                return Err(Error::invalid_argument(format!(
                    "word {token:?} in document {id} is invalid"
                )));
            }
            if !self.stop_words.contains(token) {
                kept_words.push(token);
            }
        }

        let rating = average_rating(ratings);

        self.corpus.admit(id, text.to_string());

        if !kept_words.is_empty() {
            let inv_count = 1.0 / kept_words.len() as f64;
            let mut term_tf: std::collections::HashMap<&str, f64> = std::collections::HashMap::new();
            for word in &kept_words {
                *term_tf.entry(word).or_insert(0.0) += inv_count;
            }
            for (word, tf) in term_tf {
                let term = self.corpus.intern(word);
                self.forward.add(id, term.clone(), tf);
                self.inverted.add(term, id, tf);
            }
        }

        self.metadata.insert(id, DocumentMeta { rating, status });
        Ok(())
    }

    /// Removes `id`, walking its forward-index entry to erase it from every
    /// word's posting list. A no-op for an unknown id.
    pub fn remove_document(&mut self, id: DocId) {
        if let Some(words) = self.forward.remove(id) {
            for word in words.keys() {
                self.inverted.remove(word, id);
            }
        }
        self.metadata.remove(&id);
    }

    /// Semantically identical to [`remove_document`](Self::remove_document),
    /// performing the per-word erasure via `rayon`. The inverted index's
    /// postings map is a single `HashMap` shared across every word rather
    /// than one container per word, so the erasures are serialized behind
    /// one lock while still being dispatched through the parallel iterator.
    pub fn remove_document_parallel(&mut self, id: DocId) {
        let Some(words) = self.forward.remove(id) else {
            self.metadata.remove(&id);
            return;
        };
        let word_list: Vec<Arc<str>> = words.keys().cloned().collect();
        let inverted = Mutex::new(&mut self.inverted);
        word_list.par_iter().for_each(|word| {
            inverted.lock().remove(word, id);
        });
        self.metadata.remove(&id);
    }

    // ---- queries --------------------------------------------------------

    /// Parses `query_text`, finds every document with at least one matching
    /// plus word and no matching minus word, keeps those `predicate`
    /// accepts, and returns the top
    /// [`EngineConfig::max_results`](crate::core::config::EngineConfig)
    /// by relevance (ties broken by rating).
    pub fn find_top_documents<F>(&self, query_text: &str, predicate: F) -> Result<Vec<ScoredDocument>>
    where
        F: Fn(DocId, DocumentStatus, i64) -> bool,
    {
        let query = parse_query_no_duplicates(&self.stop_words, query_text)?;
        let docs = find_all_documents_sequential(&self.inverted, &self.metadata, &query, predicate);
        Ok(ranked(docs, self.config.max_results))
    }

    pub fn find_top_documents_with_status(
        &self,
        query_text: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents(query_text, move |_, doc_status, _| doc_status == status)
    }

    pub fn find_top_documents_default(&self, query_text: &str) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_with_status(query_text, DocumentStatus::Actual)
    }

    pub fn find_top_documents_parallel<F>(
        &self,
        query_text: &str,
        predicate: F,
    ) -> Result<Vec<ScoredDocument>>
    where
        F: Fn(DocId, DocumentStatus, i64) -> bool + Sync,
    {
        let query = parse_query_no_duplicates(&self.stop_words, query_text)?;
        let docs = find_all_documents_parallel(
            &self.inverted,
            &self.metadata,
            &query,
            predicate,
            self.config.bucket_count,
        );
        Ok(ranked(docs, self.config.max_results))
    }

    pub fn find_top_documents_with_status_parallel(
        &self,
        query_text: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_parallel(query_text, move |_, doc_status, _| doc_status == status)
    }

    pub fn find_top_documents_default_parallel(&self, query_text: &str) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_with_status_parallel(query_text, DocumentStatus::Actual)
    }

    /// Returns every plus word of `query_text` present in `id`, deduplicated
    /// and sorted, and `id`'s status — or an empty word list if any minus
    /// word is present. Fails if `id` is negative or unknown.
    pub fn match_document(
        &self,
        query_text: &str,
        id: DocId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let meta = self.require_document(id)?;
        let query = parse_query_no_duplicates(&self.stop_words, query_text)?;

        if query
            .minus_words
            .iter()
            .any(|word| self.inverted.contains_doc(word, id))
        {
            return Ok((Vec::new(), meta.status));
        }

        let matched = query
            .plus_words
            .iter()
            .filter(|word| self.inverted.contains_doc(word, id))
            .map(|word| word.to_string())
            .collect();
        Ok((matched, meta.status))
    }

    /// Same contract as [`match_document`](Self::match_document), using
    /// `parse_query_basic` (order- and duplicate-preserving) and a parallel
    /// filter, then deduplicating the result afterward — the two routes
    /// produce the same set.
    pub fn match_document_parallel(
        &self,
        query_text: &str,
        id: DocId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let meta = self.require_document(id)?;
        let query = parse_query_basic(&self.stop_words, query_text)?;

        let excluded = query
            .minus_words
            .par_iter()
            .any(|word| self.inverted.contains_doc(word, id));
        if excluded {
            return Ok((Vec::new(), meta.status));
        }

        let mut matched: Vec<String> = query
            .plus_words
            .par_iter()
            .filter(|word| self.inverted.contains_doc(word, id))
            .map(|word| word.to_string())
            .collect();
        matched.sort_unstable();
        matched.dedup();
        Ok((matched, meta.status))
    }

    fn require_document(&self, id: DocId) -> Result<&DocumentMeta> {
        if id.is_negative() {
            return Err(Error::invalid_argument(format!(
                "document id {id} is negative"
            )));
        }
        self.metadata
            .get(&id)
            .ok_or_else(|| Error::not_found(format!("document id {id} is unknown")))
    }

    // ---- introspection --------------------------------------------------

    pub fn document_count(&self) -> usize {
        self.metadata.len()
    }

    pub fn word_frequencies(&self, id: DocId) -> &BTreeMap<Arc<str>, f64> {
        self.forward.word_frequencies(id)
    }

    /// Admitted ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = DocId> + '_ {
        self.metadata.keys().copied()
    }

    pub fn document_status(&self, id: DocId) -> Option<DocumentStatus> {
        self.metadata.get(&id).map(|meta| meta.status)
    }

    pub fn document_rating(&self, id: DocId) -> Option<i64> {
        self.metadata.get(&id).map(|meta| meta.rating)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// `sum(ratings) / ratings.len()`, truncated toward zero — Rust's integer
/// division already truncates toward zero, so this is a plain `sum / len`.
fn average_rating(ratings: &[i64]) -> i64 {
    let sum: i64 = ratings.iter().sum();
    sum / ratings.len() as i64
}
