/// Tunables for a [`crate::core::engine::SearchEngine`].
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of buckets in the sharded accumulator used by the parallel
    /// ranker. Fixed at 1000 by default; exposed here mainly so tests can
    /// shrink it to exercise bucket collisions cheaply.
    pub bucket_count: usize,

    /// Maximum number of results `find_top_documents` returns after sorting.
    pub max_results: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            bucket_count: 1000,
            max_results: 5,
        }
    }
}
