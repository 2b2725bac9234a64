// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character trigrams for approximate matching.
//!
//! Windows are taken over characters, not bytes, so "naïve" without the
//! unicode feature still produces whole-character grams.

/// Gram width.
pub const TRIGRAM_LEN: usize = 3;

/// Every contiguous 3-character window of `token`, in order, duplicates kept.
///
/// Tokens shorter than [`TRIGRAM_LEN`] produce nothing.
pub fn trigrams(token: &str) -> Vec<String> {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() < TRIGRAM_LEN {
        return Vec::new();
    }
    chars
        .windows(TRIGRAM_LEN)
        .map(|w| w.iter().collect())
        .collect()
}
