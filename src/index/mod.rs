// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structures that make search fast.
//!
//! Two posting maps per collection:
//! - **Word index**: O(log n) exact token lookup, synonym-aware at query time
//! - **Trigram index**: overlap scoring for typo-tolerant lookup

pub mod builder;
pub mod ngram;
pub mod stop_words;

pub use builder::{
    prepare_record, render_url, slugify, CollectionIndex, IndexStats, IndexedRecord, Postings,
};
pub use ngram::{trigrams, TRIGRAM_LEN};
pub use stop_words::is_stop_word;
