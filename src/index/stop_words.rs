// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! English function words kept out of the word index.
//!
//! These words are too common to rank anything, and their trigrams ("the",
//! "and") would drag unrelated records into fuzzy results.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::util::normalize;

/// Stop words loaded from data/stop_words.json.
static STOP_WORDS: LazyLock<HashSet<String>> =
    LazyLock::new(|| parse_stop_words(include_str!("../../data/stop_words.json")));

/// Parse a JSON array of words, normalizing each one the same way indexed
/// text is normalized.
fn parse_stop_words(json: &str) -> HashSet<String> {
    match serde_json::from_str::<Vec<String>>(json) {
        Ok(words) => words
            .iter()
            .map(|w| normalize(w))
            .filter(|w| !w.is_empty())
            .collect(),
        Err(e) => {
            tracing::error!("bundled stop word list is invalid: {}", e);
            HashSet::new()
        }
    }
}

/// Check if a normalized token is a stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Number of bundled stop words.
pub fn stop_word_count() -> usize {
    STOP_WORDS.len()
}
