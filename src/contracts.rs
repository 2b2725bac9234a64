// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for index and scoring invariants.
//!
//! [`verify_index`] walks a built index and reports the first broken
//! invariant. [`check_index_well_formed`] wraps it in `debug_assert!`, so the
//! walk costs nothing in release builds.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Check                    | Guarantees                                  |
//! |--------------------------|---------------------------------------------|
//! | `MismatchedRecordsTexts` | one searchable text per record              |
//! | `PostingOutOfBounds`     | postings only reference valid positions     |
//! | `UnsortedPostingList`    | postings strictly increasing, no duplicates |
//! | `EmptyPostingList`       | every key has at least one posting          |

use thiserror::Error;

use crate::index::{CollectionIndex, Postings};
use crate::scoring::{EXACT_BASE_SCORE, FUZZY_BASE_SCORE};

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

// INVARIANT: exact beats fuzzy. The best fuzzy base (similarity 1.0) must stay
// below the exact base, otherwise identical evidence could rank fuzzy first.
const _: () = assert!(FUZZY_BASE_SCORE < EXACT_BASE_SCORE);

/// A broken index invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("records.len() {records} != texts.len() {texts}")]
    MismatchedRecordsTexts { records: usize, texts: usize },

    #[error("{map} posting for {key:?} references position {position} >= {len}")]
    PostingOutOfBounds {
        map: &'static str,
        key: String,
        position: u32,
        len: usize,
    },

    #[error("{map} posting list for {key:?} not strictly increasing at {at}")]
    UnsortedPostingList {
        map: &'static str,
        key: String,
        at: usize,
    },

    #[error("{map} posting list for {key:?} is empty")]
    EmptyPostingList { map: &'static str, key: String },
}

/// Check every structural invariant of a built index.
pub fn verify_index(index: &CollectionIndex) -> Result<(), InvariantError> {
    if index.len() != index.texts().len() {
        return Err(InvariantError::MismatchedRecordsTexts {
            records: index.len(),
            texts: index.texts().len(),
        });
    }

    verify_postings("word", index.words(), index.len())?;
    verify_postings("trigram", index.trigram_map(), index.len())
}

fn verify_postings(map: &'static str, postings: &Postings, len: usize) -> Result<(), InvariantError> {
    for (key, list) in postings {
        if list.is_empty() {
            return Err(InvariantError::EmptyPostingList {
                map,
                key: key.clone(),
            });
        }

        for (i, &position) in list.iter().enumerate() {
            if position as usize >= len {
                return Err(InvariantError::PostingOutOfBounds {
                    map,
                    key: key.clone(),
                    position,
                    len,
                });
            }
            if i > 0 && list[i - 1] >= position {
                return Err(InvariantError::UnsortedPostingList {
                    map,
                    key: key.clone(),
                    at: i,
                });
            }
        }
    }

    Ok(())
}

/// Debug-only: panic if the index is malformed.
#[inline]
pub fn check_index_well_formed(index: &CollectionIndex) {
    debug_assert!(
        verify_index(index).is_ok(),
        "Contract violation in index {:?}: {:?}",
        index.name(),
        verify_index(index).err()
    );
}
