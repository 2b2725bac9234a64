// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two-phase candidate matching: exact first, then fuzzy.
//!
//! Phase 1 (exact) looks every query token and its synonyms up in the word
//! index. Any hit makes the record an exact candidate. Phase 2 (fuzzy) runs
//! only over tokens of three or more characters: every record reachable
//! through one of the token's trigrams gets an overlap similarity
//!
//! ```text
//! similarity = |token trigrams present in the record| / |token trigrams|
//! ```
//!
//! Records at or above the threshold become fuzzy candidates, unless they are
//! already exact. The measure is asymmetric on purpose: "genes" against
//! "genesis" scores 1.0, because all of the query's trigrams are there.
//!
//! # Invariants
//!
//! - Exact and fuzzy candidate sets are disjoint.
//! - Both lists are in ascending position order, so the engine's stable
//!   ranking sort breaks ties the same way on every call.
//! - Every fuzzy candidate has at least one similarity sample ≥ threshold.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::{Duration, Instant};

use crate::index::{trigrams, CollectionIndex, TRIGRAM_LEN};
use crate::synonyms::SynonymTable;
use crate::types::Candidate;
use crate::util::char_len;

/// Default minimum overlap for a fuzzy candidate.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.3;

/// Knobs for one matching pass.
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions<'a> {
    pub synonyms: &'a SynonymTable,
    pub fuzzy_threshold: f64,
    /// Stop the fuzzy phase once this much time has passed. Exact matching is
    /// never cut short.
    pub fuzzy_budget: Option<Duration>,
}

impl<'a> MatchOptions<'a> {
    pub fn new(synonyms: &'a SynonymTable) -> Self {
        Self {
            synonyms,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            fuzzy_budget: None,
        }
    }
}

/// Candidates from one index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchSet {
    pub exact: Vec<Candidate>,
    pub fuzzy: Vec<Candidate>,
}

impl MatchSet {
    pub fn len(&self) -> usize {
        self.exact.len() + self.fuzzy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.fuzzy.is_empty()
    }

    /// Exact candidates first, then fuzzy, each in position order.
    pub fn into_candidates(self) -> impl Iterator<Item = Candidate> {
        self.exact.into_iter().chain(self.fuzzy)
    }
}

/// Find exact and fuzzy candidates for `tokens` in one index.
///
/// `tokens` are normalized, stop-word-free query tokens.
pub fn match_index(index: &CollectionIndex, tokens: &[String], options: &MatchOptions<'_>) -> MatchSet {
    let exact = exact_positions(index, tokens, options.synonyms);
    let fuzzy = fuzzy_candidates(index, tokens, &exact, options);

    MatchSet {
        exact: exact.into_iter().map(|p| Candidate::exact(p as usize)).collect(),
        fuzzy,
    }
}

/// Union of word postings over every token and its synonym expansion.
fn exact_positions(index: &CollectionIndex, tokens: &[String], synonyms: &SynonymTable) -> BTreeSet<u32> {
    let mut positions = BTreeSet::new();
    for token in tokens {
        for term in synonyms.expand(token) {
            if let Some(list) = index.word_postings(&term) {
                positions.extend(list.iter().copied());
            }
        }
    }
    positions
}

fn fuzzy_candidates(
    index: &CollectionIndex,
    tokens: &[String],
    exact: &BTreeSet<u32>,
    options: &MatchOptions<'_>,
) -> Vec<Candidate> {
    let started = Instant::now();
    let mut samples: BTreeMap<u32, Vec<f64>> = BTreeMap::new();

    for token in tokens.iter().filter(|t| char_len(t) >= TRIGRAM_LEN) {
        if let Some(budget) = options.fuzzy_budget {
            if started.elapsed() >= budget {
                tracing::debug!(
                    collection = index.name(),
                    token = %token,
                    "fuzzy budget exhausted, skipping remaining tokens"
                );
                break;
            }
        }

        for (position, similarity) in token_overlaps(index, token) {
            if similarity >= options.fuzzy_threshold && !exact.contains(&position) {
                samples.entry(position).or_default().push(similarity);
            }
        }
    }

    samples
        .into_iter()
        .map(|(position, sims)| Candidate::fuzzy(position as usize, sims))
        .collect()
}

/// Overlap similarity of `token` against every record sharing a trigram.
///
/// Trigram windows are counted with repetition, so a token like "aaaa"
/// contributes the window "aaa" twice.
fn token_overlaps(index: &CollectionIndex, token: &str) -> HashMap<u32, f64> {
    let grams = trigrams(token);
    if grams.is_empty() {
        return HashMap::new();
    }

    let mut hits: HashMap<u32, usize> = HashMap::new();
    for gram in &grams {
        if let Some(list) = index.trigram_postings(gram) {
            for &position in list {
                *hits.entry(position).or_insert(0) += 1;
            }
        }
    }

    let total = grams.len() as f64;
    hits.into_iter()
        .map(|(position, count)| (position, count as f64 / total))
        .collect()
}

/// Overlap similarity of one token against one record, 0.0 when unrelated.
#[cfg(test)]
fn overlap_similarity(index: &CollectionIndex, token: &str, position: usize) -> f64 {
    token_overlaps(index, token)
        .get(&(position as u32))
        .copied()
        .unwrap_or(0.0)
}
