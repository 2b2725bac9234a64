//! End-to-end search scenarios over small fixed libraries.

use crate::common::*;
use concordance::index::is_stop_word;
use concordance::util::{char_len, normalize, tokenize};
use concordance::{Collection, CollectionConfig, MatchType, SearchOptions};

#[test]
fn test_exact_title_match() {
    let engine = engine_with(vec![genesis_collection()]);
    let response = search(&engine, "genesis");

    assert_eq!(response.results.len(), 1);
    let result = &response.results[0];
    assert_eq!(result.title, "Genesis");
    assert_eq!(result.match_type, MatchType::Exact);
    assert!(result.score >= 120, "score {} below 120", result.score);
    assert_eq!(result.url, "/books/genesis/");
    assert_eq!(result.type_tag, "book");
    assert_eq!(result.collection, "books");
}

#[test]
fn test_partial_word_is_fuzzy() {
    let engine = engine_with(vec![genesis_collection()]);
    let response = search(&engine, "genes");

    assert_eq!(response.results.len(), 1);
    let result = &response.results[0];
    assert_eq!(result.title, "Genesis");
    assert_eq!(result.match_type, MatchType::Fuzzy);
    assert!(
        (30..=60).contains(&result.score),
        "fuzzy score {} outside 30..=60",
        result.score
    );
}

#[test]
fn test_typo_finds_record() {
    let engine = sample_engine();
    let response = search(&engine, "exodos");
    assert!(titles(&response).contains(&"Exodus"));
}

#[test]
fn test_exact_results_rank_above_fuzzy() {
    let engine = sample_engine();
    let response = search(&engine, "genes moses");

    let exact: Vec<u32> = response
        .results
        .iter()
        .filter(|r| r.match_type == MatchType::Exact)
        .map(|r| r.score)
        .collect();
    let fuzzy: Vec<u32> = response
        .results
        .iter()
        .filter(|r| r.match_type == MatchType::Fuzzy)
        .map(|r| r.score)
        .collect();

    assert!(!exact.is_empty() && !fuzzy.is_empty());
    assert!(exact.iter().min() > fuzzy.iter().max());

    let first_fuzzy = response
        .results
        .iter()
        .position(|r| r.match_type == MatchType::Fuzzy)
        .unwrap();
    assert!(response.results[first_fuzzy..]
        .iter()
        .all(|r| r.match_type == MatchType::Fuzzy));
}

#[test]
fn test_ranking_across_collections() {
    let engine = sample_engine();
    let response = search(&engine, "moses");
    // Moses carries the title boost; the rest tie and keep collection order
    assert_eq!(
        titles(&response),
        vec!["Moses", "Exodus", "Aaron", "The Ten Commandments"]
    );
}

#[test]
fn test_title_tokens_find_their_record_exactly() {
    let engine = sample_engine();
    for collection in sample_library() {
        let title_field = collection.config.title_field.clone();
        for record in &collection.records {
            let title = record[&title_field].as_str().unwrap();
            let normalized = normalize(title);
            for token in tokenize(&normalized).filter(|t| char_len(t) >= 2 && !is_stop_word(t)) {
                let options = SearchOptions::new().types([collection.config.type_tag.clone()]);
                let response = engine.search(token, &options);
                assert!(
                    response
                        .results
                        .iter()
                        .any(|r| r.title == title && r.match_type == MatchType::Exact),
                    "token {:?} did not find {:?} exactly",
                    token,
                    title
                );
            }
        }
    }
}

#[test]
fn test_type_filter() {
    let engine = sample_engine();
    let options = SearchOptions::new().types(["character"]);
    let response = engine.search("moses", &options);

    assert_eq!(titles(&response), vec!["Moses", "Aaron"]);
    assert_eq!(response.stats.total, 2);
    assert!(response.results.iter().all(|r| r.type_tag == "character"));
}

#[test]
fn test_chapter_urls_use_book_and_number() {
    let engine = sample_engine();
    let options = SearchOptions::new().types(["chapter"]);
    let response = engine.search("commandments", &options);
    assert_eq!(response.results[0].url, "/books/exodus/20/");
}

#[test]
fn test_empty_collection_is_searchable() {
    let engine = books_engine(vec![]);
    assert_eq!(engine.indexed_count(), 0);
    let response = search(&engine, "genesis");
    assert!(response.results.is_empty());
    assert_eq!(response.stats.total, 0);
}

#[test]
fn test_short_queries_return_nothing() {
    let engine = sample_engine();
    for query in ["", "a", " g ", "!!", "é"] {
        let response = search(&engine, query);
        assert!(response.results.is_empty(), "query {:?}", query);
        assert!(response.suggestions.is_empty(), "query {:?}", query);
        assert_eq!(response.stats.total, 0);
    }
    assert!(engine.search_history().is_empty());
}

#[test]
fn test_no_match_is_a_valid_response() {
    let engine = sample_engine();
    let response = search(&engine, "zzqqxx");
    assert!(response.results.is_empty());
    assert_eq!(response.stats.total, 0);
    assert_eq!(response.stats.normalized_query, "zzqqxx");
    assert_eq!(engine.search_history()[0].result_count, 0);
}

#[test]
fn test_stats_echo_queries() {
    let engine = sample_engine();
    let response = search(&engine, "  The EXODUS!  ");
    assert_eq!(response.stats.query, "  The EXODUS!  ");
    assert_eq!(response.stats.normalized_query, "the exodus");
    assert!(response.stats.elapsed_ms >= 0.0);
    assert_eq!(response.stats.total, response.results.len());
}

#[test]
fn test_snippet_highlights_query() {
    let engine = sample_engine();
    let response = search(&engine, "egypt");
    assert!(!response.results.is_empty());
    for result in &response.results {
        assert!(
            result.snippet.contains("<mark>egypt</mark>"),
            "snippet {:?}",
            result.snippet
        );
    }
}

#[test]
fn test_popularity_breaks_equal_evidence() {
    let engine = engine_with(vec![Collection::new(
        "books",
        vec![
            make_book("Scroll Alpha", "Old Testament"),
            serde_json::json!({"name": "Scroll Omega", "testament": "Old Testament", "popularity": 100}),
        ],
        CollectionConfig::books(),
    )]);
    let response = search(&engine, "scroll");
    assert_eq!(titles(&response), vec!["Scroll Omega", "Scroll Alpha"]);
    assert_eq!(response.results[0].score, response.results[1].score + 10);
}
