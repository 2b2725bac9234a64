//! Inputs that should never break a search.

use crate::common::*;
use concordance::{Collection, CollectionConfig, MatchType};
use serde_json::json;

#[test]
fn test_regex_metacharacters_in_query() {
    let engine = sample_engine();
    for query in ["a.b", "(genesis)", "mos*s", "[exodus]", "^psalms$", "\\d+", "moses|aaron"] {
        let response = search(&engine, query);
        assert!(response.stats.total <= engine.indexed_count(), "query {:?}", query);
    }
    assert_eq!(titles(&search(&engine, "(genesis)"))[0], "Genesis");
}

#[test]
fn test_stop_word_query_matches_nothing() {
    let engine = sample_engine();
    let response = search(&engine, "the");
    assert!(response.results.is_empty());
    // still a real query: it is recorded
    assert_eq!(engine.search_history()[0].query, "the");
}

#[test]
fn test_stop_words_do_not_block_content_words() {
    let engine = sample_engine();
    let response = search(&engine, "the book of psalms");
    assert_eq!(response.results[0].title, "Psalms");
}

#[test]
fn test_malformed_records_are_skipped() {
    let mut engine = concordance::SearchEngine::default();
    let stats = engine.initialize_indices(vec![Collection::new(
        "books",
        vec![
            json!(42),
            json!("Genesis"),
            json!({"name": ""}),
            json!({"testament": "Old Testament"}),
            json!({"name": "Ruth", "testament": "Old Testament"}),
        ],
        CollectionConfig::books(),
    )]);
    assert_eq!(stats[0].records, 1);
    assert_eq!(stats[0].skipped, 4);
    assert_eq!(titles(&search(&engine, "ruth")), vec!["Ruth"]);
}

#[test]
fn test_array_fields_are_searchable() {
    let engine = engine_with(vec![Collection::new(
        "characters",
        vec![json!({"name": "Peter", "aliases": ["Simon", "Cephas"], "books": ["Matthew", "Acts"]})],
        CollectionConfig::characters(),
    )]);
    for query in ["cephas", "simon", "acts"] {
        let response = search(&engine, query);
        assert_eq!(titles(&response), vec!["Peter"], "query {:?}", query);
        assert_eq!(response.results[0].match_type, MatchType::Exact);
    }
}

#[test]
fn test_very_long_query() {
    let engine = sample_engine();
    let query = "moses ".repeat(500);
    let response = search(&engine, &query);
    assert_eq!(response.results[0].title, "Moses");
}

#[test]
fn test_punctuation_is_a_separator() {
    let engine = sample_engine();
    let response = search(&engine, "moses,aaron");
    let found = titles(&response);
    assert!(found.contains(&"Moses"));
    assert!(found.contains(&"Aaron"));
}

#[test]
fn test_long_description_snippet_is_windowed() {
    let description = format!("{} the burning bush {}", "lorem ".repeat(100), "ipsum ".repeat(100));
    let engine = books_engine(vec![make_book_with_description("Exodus", "Old Testament", &description)]);
    let response = search(&engine, "burning");
    let snippet = &response.results[0].snippet;
    assert!(snippet.starts_with("..."));
    assert!(snippet.ends_with("..."));
    assert!(snippet.contains("<mark>burning</mark>"));
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_diacritics_are_folded() {
    let engine = engine_with(vec![Collection::new(
        "chapters",
        vec![json!({"title": "Jérusalem", "book": "Nehemiah", "chapter": 3})],
        CollectionConfig::chapters(),
    )]);
    let response = search(&engine, "jerusalem");
    assert_eq!(titles(&response), vec!["Jérusalem"]);
    assert_eq!(response.results[0].match_type, MatchType::Exact);
    assert_eq!(titles(&search(&engine, "JÉRUSALEM")), vec!["Jérusalem"]);
}
