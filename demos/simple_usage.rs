//! Walks through the core API end to end: construction, indexing, ranked
//! search, matching, removal and the collaborator helpers.

use searchcore::collab::dedup::remove_duplicates;
use searchcore::collab::fanout::process_queries_joined;
use searchcore::collab::paginator::Paginator;
use searchcore::collab::request_queue::RequestQueue;
use searchcore::core::types::{DocId, DocumentStatus};
use searchcore::SearchEngine;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = SearchEngine::with_stop_words_str("и в на")?;

    engine.add_document(DocId(0), "белый кот и модный ошейник", DocumentStatus::Actual, &[2, 8, -3])?;
    engine.add_document(DocId(1), "пушистый кот пушистый хвост", DocumentStatus::Actual, &[3, 7, 2, 7])?;
    engine.add_document(DocId(2), "ухоженный пёс выразительные глаза", DocumentStatus::Actual, &[4, 5, -12, 2, 1])?;
    engine.add_document(DocId(3), "ухоженный скворец евгений", DocumentStatus::Banned, &[9])?;
    println!("indexed {} documents", engine.document_count());

    let top = engine.find_top_documents_default("пушистый ухоженный кот")?;
    for doc in &top {
        println!("doc {} relevance {:.6} rating {}", doc.id, doc.relevance, doc.rating);
    }

    let (matched_words, status) = engine.match_document("пушистый кот", DocId(1))?;
    println!("document 1 matched {matched_words:?}, status {status:?}");

    let mut queue = RequestQueue::new(&engine);
    for query in ["ничего", "пушистый", "снег"] {
        queue.add_find_request_default(query)?;
    }
    println!("no-result requests so far: {}", queue.no_result_requests());

    let queries = vec!["кот".to_string(), "ухоженный".to_string()];
    let joined = process_queries_joined(&engine, &queries);
    println!("process_queries_joined returned {} results", joined.len());

    let paginator = Paginator::new(&joined, 2);
    for (index, page) in paginator.iter().enumerate() {
        println!("page {index}: {} results", page.len());
    }

    engine.remove_document(DocId(1));
    println!("after removal: {} documents", engine.document_count());

    let removed = remove_duplicates(&mut engine);
    println!("removed {} duplicate documents", removed.len());

    Ok(())
}
