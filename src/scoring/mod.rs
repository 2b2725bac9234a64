// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! The key insight is that match type dominates everything else. An exact
//! match with no boosts still outranks the best possible fuzzy match.

mod core;
pub mod ranking;

pub use core::*;
