// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms: turning a query into candidates and excerpts.
//!
//! Matching runs in two phases (exact word lookup with synonyms, then trigram
//! overlap for typos). Snippets are cut from the matched record's searchable
//! text once a page of results has been chosen.

pub mod matcher;
pub mod snippet;
pub mod utils;

pub use matcher::{match_index, MatchOptions, MatchSet, DEFAULT_FUZZY_THRESHOLD};
pub use snippet::{generate_snippet, SnippetStyle};
pub use utils::{parse_query, ParsedQuery};
