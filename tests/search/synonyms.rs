//! Synonym expansion on the exact path.

use crate::common::*;
use concordance::{Collection, CollectionConfig, MatchType, SearchEngine, SynonymTable};
use serde_json::json;

fn lord_engine() -> SearchEngine {
    engine_with(vec![Collection::new(
        "characters",
        vec![
            json!({"name": "LORD", "description": "Ruler of heaven and earth"}),
            json!({"name": "Pharaoh", "role": "King of Egypt"}),
        ],
        CollectionConfig::characters(),
    )])
}

#[test]
fn test_synonym_is_symmetric() {
    let engine = lord_engine();
    for query in ["god", "lord"] {
        let response = search(&engine, query);
        assert_eq!(titles(&response), vec!["LORD"], "query {:?}", query);
        assert_eq!(response.results[0].match_type, MatchType::Exact);
    }
}

#[test]
fn test_alternate_reaches_siblings_through_canonical() {
    let engine = lord_engine();
    // "almighty" is listed under "god", which also lists "lord"
    let response = search(&engine, "almighty");
    assert_eq!(titles(&response), vec!["LORD"]);
}

#[test]
fn test_synonym_only_match_has_plain_snippet() {
    let engine = lord_engine();
    let response = search(&engine, "god");
    let snippet = &response.results[0].snippet;
    assert!(!snippet.contains("<mark>"));
    assert!(snippet.starts_with("lord"));
}

#[test]
fn test_custom_synonym_table() {
    let engine = lord_engine().with_synonyms(SynonymTable::from_entries([(
        "monarch",
        vec!["king"],
    )]));
    assert_eq!(titles(&search(&engine, "monarch")), vec!["Pharaoh"]);
    // the bundled table is gone
    assert!(search(&engine, "god").results.is_empty());
}

#[test]
fn test_synonym_hit_scores_as_exact() {
    let engine = lord_engine();
    let response = search(&engine, "god");
    // base 100, no title or phrase evidence, short text bonus
    assert_eq!(response.results[0].score, 110);
}

#[test]
fn test_covenant_synonyms_do_not_match_testament_field() {
    let engine = books_engine(vec![
        make_book("Genesis", "Old Testament"),
        make_book("Exodus", "Old Testament"),
        make_book("Matthew", "New Testament"),
        make_book_with_description("Jeremiah", "Old Testament", "The new covenant"),
    ]);
    for query in ["promise", "pact", "covenant"] {
        let response = search(&engine, query);
        assert_eq!(titles(&response), vec!["Jeremiah"], "query {:?}", query);
        assert_eq!(response.results[0].match_type, MatchType::Exact);
    }
}
