//! Exercises the parallel ranking and removal paths against a larger corpus,
//! and shows `EngineConfig` tuning the accumulator's bucket count.

use searchcore::core::types::{DocId, DocumentStatus};
use searchcore::{EngineConfig, SearchEngine};

fn main() {
    let config = EngineConfig {
        bucket_count: 64,
        max_results: 3,
    };
    let mut engine = SearchEngine::with_config(config);

    let vocabulary = ["quick", "brown", "fox", "lazy", "dog", "cat", "city", "park"];
    for id in 0..2000i64 {
        let text = vocabulary
            .iter()
            .cycle()
            .skip(id as usize % vocabulary.len())
            .take(12)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");
        engine
            .add_document(DocId(id), &text, DocumentStatus::Actual, &[(id % 5) - 2])
            .unwrap();
    }
    println!("indexed {} documents", engine.document_count());

    let sequential = engine.find_top_documents_default("quick fox -lazy").unwrap();
    let parallel = engine.find_top_documents_default_parallel("quick fox -lazy").unwrap();
    println!(
        "sequential top id {:?}, parallel top id {:?}",
        sequential.first().map(|d| d.id),
        parallel.first().map(|d| d.id),
    );

    engine.remove_document_parallel(DocId(0));
    println!("after parallel removal: {} documents", engine.document_count());
}
