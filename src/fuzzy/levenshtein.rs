// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded edit distance for spelling corrections.
//!
//! Corrections compare every query term against every indexed word, so the
//! common case is a pair that is obviously too far apart. Two cheap bounds
//! settle most of those before the full table is filled: the length gap, and
//! the smallest value in the current row.

/// Edit distance between `word` and `candidate`, or `None` if it exceeds `max`.
///
/// Distances are counted in characters. Neither bound rejects a pair whose
/// true distance is within `max`.
pub fn bounded_distance(word: &str, candidate: &str, max: usize) -> Option<usize> {
    let word: Vec<char> = word.chars().collect();
    let candidate: Vec<char> = candidate.chars().collect();

    if word.len().abs_diff(candidate.len()) > max {
        return None;
    }

    // previous[j]: distance between the consumed prefix of `word` and candidate[..j]
    let mut previous: Vec<usize> = (0..=candidate.len()).collect();
    let mut current: Vec<usize> = vec![0; candidate.len() + 1];

    for (i, &wc) in word.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cc) in candidate.iter().enumerate() {
            let substitute = previous[j] + usize::from(wc != cc);
            let delete = previous[j + 1] + 1;
            let insert = current[j] + 1;
            current[j + 1] = substitute.min(delete).min(insert);
        }

        if current.iter().min().is_some_and(|&best| best > max) {
            return None;
        }
        std::mem::swap(&mut previous, &mut current);
    }

    let distance = previous[candidate.len()];
    (distance <= max).then_some(distance)
}
