// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing shared by matching, scoring and suggestions.

use crate::index::is_stop_word;
use crate::util::{normalize, tokenize};

/// A query after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub raw: String,
    /// Normalized query; also the phrase checked by the phrase boost.
    pub normalized: String,
    /// Every normalized term, stop words included, in query order.
    pub terms: Vec<String>,
    /// Terms that can match: stop words removed.
    pub tokens: Vec<String>,
}

/// Parse a query string into normalized terms and matchable tokens.
///
/// # Example
///
/// ```ignore
/// let parsed = parse_query("The Book of Ruth");
/// assert_eq!(parsed.terms, vec!["the", "book", "of", "ruth"]);
/// assert_eq!(parsed.tokens, vec!["book", "ruth"]);
/// ```
pub fn parse_query(query: &str) -> ParsedQuery {
    let normalized = normalize(query);
    let terms: Vec<String> = tokenize(&normalized).map(str::to_string).collect();
    let tokens = terms
        .iter()
        .filter(|t| !is_stop_word(t))
        .cloned()
        .collect();

    ParsedQuery {
        raw: query.to_string(),
        normalized,
        terms,
        tokens,
    }
}
