// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy helpers: typo tolerance via edit distance.
//!
//! Trigram overlap handles fuzzy *matching*; edit distance is only used to
//! propose spelling corrections.

mod levenshtein;

pub use levenshtein::*;
