//! Same input, same output: ordering, scores and suggestions.

use crate::common::*;
use concordance::{Collection, CollectionConfig, SearchOptions, SuggestionKind};
use serde_json::json;

#[test]
fn test_repeated_search_is_identical() {
    let engine = sample_engine();
    for query in ["moses", "genes moses", "exodos", "god", "israel"] {
        let first = search(&engine, query);
        let second = search(&engine, query);
        assert_eq!(ranking(&first), ranking(&second), "query {:?}", query);
        assert_eq!(first.suggestions, second.suggestions, "query {:?}", query);
    }
}

#[test]
fn test_fresh_engines_agree() {
    let a = sample_engine();
    let b = sample_engine();
    for query in ["moses", "genesis", "the lord", "revelatoin"] {
        let ra = search(&a, query);
        let rb = search(&b, query);
        assert_eq!(ranking(&ra), ranking(&rb), "query {:?}", query);
        assert_eq!(ra.suggestions, rb.suggestions, "query {:?}", query);
    }
}

#[test]
fn test_cache_does_not_change_suggestions() {
    let engine = sample_engine();
    let cached = search(&engine, "genisis").suggestions;
    engine.clear_suggestion_cache();
    let fresh = search(&engine, "genisis").suggestions;
    assert_eq!(cached, fresh);
}

#[test]
fn test_ties_follow_registration_order() {
    let book = Collection::new(
        "books",
        vec![json!({"name": "Ruth", "testament": "Old"})],
        CollectionConfig::books(),
    );
    let character = Collection::new(
        "characters",
        vec![json!({"name": "Ruth", "role": "Widow"})],
        CollectionConfig::characters(),
    );

    let books_first = engine_with(vec![book.clone(), character.clone()]);
    let response = search(&books_first, "ruth");
    let types: Vec<&str> = response.results.iter().map(|r| r.type_tag.as_str()).collect();
    assert_eq!(types, vec!["book", "character"]);
    assert_eq!(response.results[0].score, response.results[1].score);

    let characters_first = engine_with(vec![character, book]);
    let response = search(&characters_first, "ruth");
    let types: Vec<&str> = response.results.iter().map(|r| r.type_tag.as_str()).collect();
    assert_eq!(types, vec!["character", "book"]);
}

#[test]
fn test_ties_within_collection_follow_record_order() {
    let engine = scroll_engine(9);
    let response = search(&engine, "scroll");
    let expected: Vec<String> = (1..=9).map(|n| format!("Scroll {n}")).collect();
    assert_eq!(titles(&response), expected);
}

#[test]
fn test_filtered_suggestions_do_not_depend_on_earlier_searches() {
    let engine = engine_with(vec![
        Collection::new("books", vec![make_book("Genesis", "Old Testament")], CollectionConfig::books()),
        Collection::new(
            "characters",
            vec![
                make_character("Moses", "Prophet", "Led the exodus"),
                make_character("Moses", "Lawgiver", "Received the law"),
                make_character("Moses", "Shepherd", "Kept flocks in Midian"),
            ],
            CollectionConfig::characters(),
        ),
    ]);
    let books_only = SearchOptions::new().types(["book"]);
    let has_correction = |response: &concordance::SearchResponse| {
        response
            .suggestions
            .iter()
            .any(|s| s.kind == SuggestionKind::Correction && s.text == "moses")
    };

    let cold = engine.search("mosis", &books_only);
    assert!(cold.stats.total < 3);
    assert!(has_correction(&cold));

    let unfiltered = engine.search("mosis", &SearchOptions::default());
    assert!(unfiltered.stats.total >= 3);
    assert!(!has_correction(&unfiltered));

    let warm = engine.search("mosis", &books_only);
    assert_eq!(warm.stats.total, cold.stats.total);
    assert_eq!(warm.suggestions, cold.suggestions);
}
