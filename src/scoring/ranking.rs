// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Higher score first. Equal scores keep the order in which they were
//! produced (collection registration order, then exact before fuzzy, then
//! record position), which `sort_by` preserves because it is stable.

use std::cmp::Ordering;

/// Compare two scores for ranking: descending.
#[inline]
pub fn compare_scores(a: u32, b: u32) -> Ordering {
    b.cmp(&a)
}

/// Sort in place, best first, ties in inspection order.
pub fn rank_by_score<T, F>(items: &mut [T], score: F)
where
    F: Fn(&T) -> u32,
{
    items.sort_by(|a, b| compare_scores(score(a), score(b)));
}
