//! An in-memory text search engine over a dynamic corpus of short
//! documents: add a document (id, text, status, ratings), query it with
//! plus/minus terms, get back a TF-IDF-ranked top-K. See [`SearchEngine`]
//! for the entry point; [`collab`] holds the out-of-core helpers built on
//! top of it (deduplication, pagination, the trailing request counter,
//! and query fan-out).

pub mod analysis;
pub mod collab;
pub mod core;
pub mod index;
pub mod parallel;
pub mod query;
pub mod scoring;

pub use crate::core::config::EngineConfig;
pub use crate::core::engine::SearchEngine;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{DocId, DocumentMeta, DocumentStatus, ScoredDocument};
