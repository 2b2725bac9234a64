//! Offset/limit over the merged ranked list.

use crate::common::*;
use concordance::{SearchOptions, SuggestionKind};

#[test]
fn test_default_limit_is_fifty() {
    let engine = scroll_engine(60);
    let response = search(&engine, "scroll");
    assert_eq!(response.results.len(), 50);
    assert_eq!(response.stats.total, 60);
}

#[test]
fn test_limit_and_offset() {
    let engine = scroll_engine(30);
    let page = engine.search("scroll", &SearchOptions::new().limit(10).offset(25));
    assert_eq!(page.results.len(), 5);
    assert_eq!(page.stats.total, 30);
}

#[test]
fn test_offset_past_end_is_empty_but_counted() {
    let engine = scroll_engine(30);
    let page = engine.search("scroll", &SearchOptions::new().offset(40));
    assert!(page.results.is_empty());
    assert_eq!(page.stats.total, 30);
}

#[test]
fn test_pages_concatenate_to_full_list() {
    let engine = scroll_engine(23);
    let full = engine.search("scroll", &SearchOptions::new().limit(100));

    let mut paged = Vec::new();
    for offset in (0..23).step_by(7) {
        let page = engine.search("scroll", &SearchOptions::new().limit(7).offset(offset));
        paged.extend(page.results.into_iter().map(|r| r.title));
    }

    let all: Vec<String> = full.results.into_iter().map(|r| r.title).collect();
    assert_eq!(paged, all);
}

#[test]
fn test_zero_limit_still_counts() {
    let engine = scroll_engine(5);
    let page = engine.search("scroll", &SearchOptions::new().limit(0));
    assert!(page.results.is_empty());
    assert_eq!(page.stats.total, 5);
}

#[test]
fn test_suggestions_use_unpaginated_count() {
    let engine = scroll_engine(10);
    // "scrol" fuzzy-matches all ten; an empty page must not trigger corrections
    let page = engine.search("scrol", &SearchOptions::new().offset(100));
    assert!(page.results.is_empty());
    assert_eq!(page.stats.total, 10);
    assert!(page
        .suggestions
        .iter()
        .all(|s| s.kind != SuggestionKind::Correction));
}

#[test]
fn test_history_records_unpaginated_count() {
    let engine = scroll_engine(12);
    engine.search("scroll", &SearchOptions::new().limit(2));
    assert_eq!(engine.search_history()[0].result_count, 12);
}
