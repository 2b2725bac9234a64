// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Match type dominates. An exact hit starts at 100, a fuzzy hit at most at 60,
//! and the boosts on top are identical for both, so with the same evidence the
//! exact hit always wins.
//!
//! # Score components
//!
//! | Component   | Value                                      |
//! |-------------|--------------------------------------------|
//! | Exact base  | 100                                        |
//! | Fuzzy base  | `round(60 × average similarity)`           |
//! | Title       | +20 per query token inside the title       |
//! | Phrase      | +50 if the whole query appears in the text |
//! | Length      | +10 under 200 chars, +5 under 500          |
//! | Popularity  | `+min(popularity × 0.1, 10)`               |
//!
//! A fuzzy total never exceeds the fuzzy base ceiling (60). Boosts reorder
//! fuzzy hits among themselves only when their bases differ; they can never
//! lift a fuzzy hit into exact territory.
//!
//! # Constants (DO NOT CHANGE WITHOUT UPDATING THE ORDERING TESTS)

use crate::index::IndexedRecord;
use crate::types::{Candidate, MatchType};
use crate::util::char_len;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Base score for exact (word index or synonym) matches.
pub const EXACT_BASE_SCORE: u32 = 100;

/// Fuzzy base at similarity 1.0, and the ceiling for any fuzzy total.
pub const FUZZY_BASE_SCORE: u32 = 60;

/// Added per query token found inside the record title.
pub const TITLE_TOKEN_BOOST: u32 = 20;

/// Added when the whole normalized query occurs verbatim in the text.
pub const PHRASE_BOOST: u32 = 50;

/// Text shorter than this many characters gets [`SHORT_TEXT_BONUS`].
pub const SHORT_TEXT_CHARS: usize = 200;
pub const SHORT_TEXT_BONUS: u32 = 10;

/// Text shorter than this many characters gets [`MEDIUM_TEXT_BONUS`].
pub const MEDIUM_TEXT_CHARS: usize = 500;
pub const MEDIUM_TEXT_BONUS: u32 = 5;

/// Multiplier applied to a record's numeric popularity.
pub const POPULARITY_FACTOR: f64 = 0.1;

/// Cap on the popularity bonus.
pub const MAX_POPULARITY_BONUS: f64 = 10.0;

/// Everything the scorer looks at for one candidate.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput<'a> {
    pub match_type: MatchType,
    pub average_similarity: f64,
    /// Normalized record title.
    pub title: &'a str,
    /// Normalized searchable text.
    pub text: &'a str,
    pub popularity: Option<f64>,
    /// Normalized query tokens.
    pub tokens: &'a [String],
    /// Normalized query, tokens joined by single spaces.
    pub phrase: &'a str,
}

impl<'a> ScoreInput<'a> {
    pub fn new(
        candidate: &Candidate,
        record: &'a IndexedRecord,
        text: &'a str,
        tokens: &'a [String],
        phrase: &'a str,
    ) -> Self {
        Self {
            match_type: candidate.match_type,
            average_similarity: candidate.average_similarity(),
            title: &record.normalized_title,
            text,
            popularity: record.popularity,
            tokens,
            phrase,
        }
    }
}

/// Base score: 100 for exact, `round(60 × similarity)` for fuzzy.
pub fn base_score(match_type: MatchType, average_similarity: f64) -> f64 {
    match match_type {
        MatchType::Exact => f64::from(EXACT_BASE_SCORE),
        MatchType::Fuzzy => {
            (f64::from(FUZZY_BASE_SCORE) * average_similarity.clamp(0.0, 1.0)).round()
        }
    }
}

/// +20 for every query token that occurs inside the title.
pub fn title_boost(title: &str, tokens: &[String]) -> f64 {
    let hits = tokens.iter().filter(|t| title.contains(t.as_str())).count();
    f64::from(TITLE_TOKEN_BOOST) * hits as f64
}

/// +50 when the whole query appears verbatim in the text.
pub fn phrase_boost(text: &str, phrase: &str) -> f64 {
    if !phrase.is_empty() && text.contains(phrase) {
        f64::from(PHRASE_BOOST)
    } else {
        0.0
    }
}

/// Shorter records are more likely to be "about" the query.
pub fn length_bonus(text: &str) -> f64 {
    let len = char_len(text);
    if len < SHORT_TEXT_CHARS {
        f64::from(SHORT_TEXT_BONUS)
    } else if len < MEDIUM_TEXT_CHARS {
        f64::from(MEDIUM_TEXT_BONUS)
    } else {
        0.0
    }
}

/// `min(popularity × 0.1, 10)`, never negative.
pub fn popularity_bonus(popularity: Option<f64>) -> f64 {
    match popularity {
        Some(p) if p.is_finite() => (p * POPULARITY_FACTOR).clamp(0.0, MAX_POPULARITY_BONUS),
        _ => 0.0,
    }
}

/// Final integer score. Pure and deterministic.
pub fn compute_score(input: &ScoreInput<'_>) -> u32 {
    let total = base_score(input.match_type, input.average_similarity)
        + title_boost(input.title, input.tokens)
        + phrase_boost(input.text, input.phrase)
        + length_bonus(input.text)
        + popularity_bonus(input.popularity);

    let total = match input.match_type {
        MatchType::Exact => total,
        MatchType::Fuzzy => total.min(f64::from(FUZZY_BASE_SCORE)),
    };

    total.round().max(0.0) as u32
}
