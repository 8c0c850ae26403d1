use std::fmt;

/// Document identifier. Negative values are never admitted, but the type
/// itself does not enforce that — callers go through
/// [`crate::core::engine::SearchEngine::add_document`] for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocId(pub i64);

impl DocId {
    pub fn new(id: i64) -> Self {
        DocId(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl From<i64> for DocId {
    fn from(id: i64) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status tag carried alongside every admitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentStatus {
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// Per-document metadata retained outside the indices.
#[derive(Debug, Clone, Copy)]
pub struct DocumentMeta {
    pub rating: i64,
    pub status: DocumentStatus,
}

/// A single ranked result from `find_top_documents`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDocument {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i64,
}

/// Tolerance used when comparing relevance scores for tie-breaking and in tests.
pub const RELEVANCE_EPSILON: f64 = 1e-6;
