use std::collections::VecDeque;

use crate::core::engine::SearchEngine;
use crate::core::error::Result;
use crate::core::types::{DocId, DocumentStatus, ScoredDocument};

const WINDOW: i64 = 1440;

/// Wraps a [`SearchEngine`] and remembers, over a trailing window of the
/// last 1440 calls to `add_find_request`, how many of them returned no
/// results.
pub struct RequestQueue<'a> {
    engine: &'a SearchEngine,
    no_result_timestamps: VecDeque<i64>,
    current_time: i64,
}

impl<'a> RequestQueue<'a> {
    pub fn new(engine: &'a SearchEngine) -> Self {
        RequestQueue {
            engine,
            no_result_timestamps: VecDeque::new(),
            current_time: 0,
        }
    }

    /// Runs `query_text` through the wrapped engine with `predicate`,
    /// records whether it came back empty, and advances the clock by one.
    /// A query that fails to parse leaves the window and clock untouched.
    pub fn add_find_request<F>(&mut self, query_text: &str, predicate: F) -> Result<Vec<ScoredDocument>>
    where
        F: Fn(DocId, DocumentStatus, i64) -> bool,
    {
        if let Some(&oldest) = self.no_result_timestamps.front() {
            if WINDOW <= self.current_time - oldest {
                self.no_result_timestamps.pop_front();
            }
        }

        let results = self.engine.find_top_documents(query_text, predicate)?;
        if results.is_empty() {
            self.no_result_timestamps.push_back(self.current_time);
        }
        self.current_time += 1;
        Ok(results)
    }

    pub fn add_find_request_with_status(
        &mut self,
        query_text: &str,
        status: DocumentStatus,
    ) -> Result<Vec<ScoredDocument>> {
        self.add_find_request(query_text, move |_, doc_status, _| doc_status == status)
    }

    pub fn add_find_request_default(&mut self, query_text: &str) -> Result<Vec<ScoredDocument>> {
        self.add_find_request_with_status(query_text, DocumentStatus::Actual)
    }

    /// Count of no-result requests currently within the trailing window.
    pub fn no_result_requests(&self) -> usize {
        self.no_result_timestamps.len()
    }
}
