// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query suggestions: typo corrections, related terms, autocomplete.
//!
//! Three independent strategies, each capped, merged in that order and
//! deduplicated by text:
//!
//! | Strategy     | When                    | Source                          | Cap |
//! |--------------|-------------------------|---------------------------------|-----|
//! | Correction   | fewer than 3 results    | indexed words within 2 edits    | 3   |
//! | Related      | always                  | synonyms + 2 rotating topics    | 3+2 |
//! | Autocomplete | always                  | indexed words with query prefix | 5   |
//!
//! Everything here is deterministic. The topical picks rotate by a CRC32 of
//! the normalized query, so the same query always suggests the same topics.

mod cache;

pub use cache::{CacheKey, SuggestionCache};

use std::collections::BTreeSet;
use std::sync::{Arc, LazyLock};

use crate::fuzzy::bounded_distance;
use crate::index::{is_stop_word, CollectionIndex};
use crate::search::ParsedQuery;
use crate::synonyms::SynonymTable;
use crate::types::{Suggestion, SuggestionKind};
use crate::util::{char_len, normalize};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Corrections are offered only below this many results.
pub const CORRECTION_RESULT_THRESHOLD: usize = 3;
pub const MAX_CORRECTIONS: usize = 3;
pub const MAX_CORRECTION_DISTANCE: usize = 2;
/// Indexed words must be longer than this to be offered as corrections.
pub const MIN_CORRECTION_WORD_CHARS: usize = 3;
pub const MAX_RELATED_SYNONYMS: usize = 3;
pub const TOPIC_PICKS: usize = 2;
pub const MAX_AUTOCOMPLETE: usize = 5;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

static TOPICS: LazyLock<Vec<String>> = LazyLock::new(|| {
    match serde_json::from_str::<Vec<String>>(include_str!("../../data/related_topics.json")) {
        Ok(topics) => topics
            .iter()
            .map(|t| normalize(t))
            .filter(|t| !t.is_empty())
            .collect(),
        Err(e) => {
            tracing::error!("bundled topic list is invalid: {}", e);
            Vec::new()
        }
    }
});

/// Builds suggestions against a set of indices and a synonym table.
#[derive(Debug, Clone, Copy)]
pub struct Suggester<'a> {
    indices: &'a [Arc<CollectionIndex>],
    synonyms: &'a SynonymTable,
    max: usize,
}

impl<'a> Suggester<'a> {
    pub fn new(indices: &'a [Arc<CollectionIndex>], synonyms: &'a SynonymTable) -> Self {
        Self {
            indices,
            synonyms,
            max: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    pub fn max_suggestions(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    /// All strategies merged: corrections, related, autocomplete.
    ///
    /// `result_count` is the unpaginated number of matches for the query.
    pub fn suggest(&self, query: &ParsedQuery, result_count: usize) -> Vec<Suggestion> {
        if query.normalized.is_empty() {
            return Vec::new();
        }

        let vocabulary = self.vocabulary();
        let mut merged: Vec<Suggestion> = Vec::with_capacity(self.max);

        let corrections = if result_count < CORRECTION_RESULT_THRESHOLD {
            self.corrections_in(query, &vocabulary)
        } else {
            Vec::new()
        };

        let strategies = corrections
            .into_iter()
            .chain(self.related(query))
            .chain(self.autocomplete_in(query, &vocabulary));

        for suggestion in strategies {
            if merged.len() >= self.max {
                break;
            }
            if suggestion.text == query.normalized || merged.iter().any(|s| s.text == suggestion.text) {
                continue;
            }
            merged.push(suggestion);
        }

        merged
    }

    /// Query rewrites with one misspelled token replaced by an indexed word.
    pub fn corrections(&self, query: &ParsedQuery) -> Vec<Suggestion> {
        self.corrections_in(query, &self.vocabulary())
    }

    fn corrections_in(&self, query: &ParsedQuery, vocabulary: &BTreeSet<&str>) -> Vec<Suggestion> {
        let mut found: Vec<(usize, &str, usize)> = Vec::new();

        for (slot, term) in query.terms.iter().enumerate() {
            if is_stop_word(term) {
                continue;
            }
            for &word in vocabulary {
                if char_len(word) <= MIN_CORRECTION_WORD_CHARS {
                    continue;
                }
                if let Some(distance) = bounded_distance(term, word, MAX_CORRECTION_DISTANCE) {
                    if distance > 0 {
                        found.push((distance, word, slot));
                    }
                }
            }
        }

        found.sort();

        let mut out: Vec<Suggestion> = Vec::new();
        for (_, word, slot) in found {
            let text = query
                .terms
                .iter()
                .enumerate()
                .map(|(i, t)| if i == slot { word } else { t.as_str() })
                .collect::<Vec<_>>()
                .join(" ");
            if out.iter().any(|s| s.text == text) {
                continue;
            }
            out.push(Suggestion::new(text, SuggestionKind::Correction));
            if out.len() == MAX_CORRECTIONS {
                break;
            }
        }
        out
    }

    /// Synonym alternates of the query tokens, then two topical picks.
    pub fn related(&self, query: &ParsedQuery) -> Vec<Suggestion> {
        let mut out: Vec<Suggestion> = Vec::new();

        'tokens: for token in &query.tokens {
            for term in self.synonyms.related(token) {
                if out.len() == MAX_RELATED_SYNONYMS {
                    break 'tokens;
                }
                if query.terms.contains(&term) || out.iter().any(|s| s.text == term) {
                    continue;
                }
                out.push(Suggestion::new(term, SuggestionKind::Related));
            }
        }

        for topic in topic_picks(&query.normalized, &query.terms) {
            if !out.iter().any(|s| s.text == topic) {
                out.push(Suggestion::new(topic, SuggestionKind::Related));
            }
        }

        out
    }

    /// Indexed words that extend the whole normalized query.
    pub fn autocomplete(&self, query: &ParsedQuery) -> Vec<Suggestion> {
        self.autocomplete_in(query, &self.vocabulary())
    }

    fn autocomplete_in(&self, query: &ParsedQuery, vocabulary: &BTreeSet<&str>) -> Vec<Suggestion> {
        let prefix = query.normalized.as_str();
        if prefix.is_empty() {
            return Vec::new();
        }

        // The vocabulary iterates alphabetically; the stable sort keeps that
        // order within each length.
        let mut words: Vec<&str> = vocabulary
            .range(prefix..)
            .take_while(|w| w.starts_with(prefix))
            .filter(|w| **w != prefix)
            .copied()
            .collect();
        words.sort_by_key(|w| char_len(w));
        words.truncate(MAX_AUTOCOMPLETE);

        words
            .into_iter()
            .map(|w| Suggestion::new(w, SuggestionKind::Autocomplete))
            .collect()
    }

    /// Indexed words across every collection, sorted and deduplicated.
    fn vocabulary(&self) -> BTreeSet<&'a str> {
        self.indices
            .iter()
            .flat_map(|index| index.vocabulary())
            .collect()
    }
}

/// Two topics from the fixed list, starting at `crc32(query) % len` and
/// skipping topics the query already contains.
fn topic_picks(normalized: &str, terms: &[String]) -> Vec<String> {
    let topics = &*TOPICS;
    if topics.is_empty() {
        return Vec::new();
    }

    let start = crc32fast::hash(normalized.as_bytes()) as usize % topics.len();
    (0..topics.len())
        .map(|step| &topics[(start + step) % topics.len()])
        .filter(|topic| !terms.contains(topic))
        .take(TOPIC_PICKS)
        .cloned()
        .collect()
}
