//! Shared test utilities and fixtures.

#![allow(dead_code)]

use concordance::{Collection, CollectionConfig, SearchEngine, SearchOptions, SearchResponse};
use serde_json::Value;

// Re-export canonical fixtures from concordance::testing
pub use concordance::testing::{
    genesis_collection, make_book, make_book_with_description, make_chapter, make_character,
    sample_engine, sample_library,
};

// ============================================================================
// ENGINES
// ============================================================================

/// An engine over the given collections with default config.
pub fn engine_with(collections: Vec<Collection>) -> SearchEngine {
    let mut engine = SearchEngine::default();
    engine.initialize_indices(collections);
    engine
}

/// An engine with a single books collection.
pub fn books_engine(records: Vec<Value>) -> SearchEngine {
    engine_with(vec![Collection::new("books", records, CollectionConfig::books())])
}

/// `count` books named "Scroll 1".."Scroll N", all matching "scroll".
pub fn scroll_engine(count: usize) -> SearchEngine {
    books_engine(
        (1..=count)
            .map(|n| make_book(&format!("Scroll {n}"), "Old Testament"))
            .collect(),
    )
}

// ============================================================================
// QUERY HELPERS
// ============================================================================

pub fn search(engine: &SearchEngine, query: &str) -> SearchResponse {
    engine.search(query, &SearchOptions::default())
}

pub fn titles(response: &SearchResponse) -> Vec<&str> {
    response.results.iter().map(|r| r.title.as_str()).collect()
}

pub fn suggestion_texts(response: &SearchResponse) -> Vec<&str> {
    response.suggestions.iter().map(|s| s.text.as_str()).collect()
}

/// (title, score) pairs, the shape compared by determinism tests.
pub fn ranking(response: &SearchResponse) -> Vec<(String, u32)> {
    response
        .results
        .iter()
        .map(|r| (r.title.clone(), r.score))
        .collect()
}
