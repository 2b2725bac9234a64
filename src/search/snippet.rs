// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighted excerpts around the first query hit.
//!
//! The window is measured in characters, never bytes, so multi-byte text is
//! never split mid-character. Tokens are regex-escaped before they reach the
//! pattern: a query like `a.b` highlights the literal text `a.b` only.

use regex::{Regex, RegexBuilder};

/// How to cut and mark an excerpt.
#[derive(Debug, Clone, Copy)]
pub struct SnippetStyle<'a> {
    /// Target excerpt length in characters.
    pub length: usize,
    pub open: &'a str,
    pub close: &'a str,
}

impl Default for SnippetStyle<'static> {
    fn default() -> Self {
        Self {
            length: 200,
            open: "<mark>",
            close: "</mark>",
        }
    }
}

const ELLIPSIS: &str = "...";

/// Build an excerpt of `text` centered on the earliest occurrence of any
/// token, with every token occurrence inside it wrapped in markers.
///
/// With no occurrence (a synonym-only match, say) the result is a plain
/// leading excerpt without markers.
pub fn generate_snippet(text: &str, tokens: &[String], style: &SnippetStyle<'_>) -> String {
    let Some(pattern) = token_pattern(tokens) else {
        return leading_excerpt(text, style.length);
    };
    let Some(first) = pattern.find(text) else {
        return leading_excerpt(text, style.length);
    };

    let total = text.chars().count();
    let hit = text[..first.start()].chars().count();

    let mut start = hit.saturating_sub(style.length / 2);
    let end = (start + style.length).min(total);
    start = end.saturating_sub(style.length).min(start);

    let excerpt = char_slice(text, start, end);
    let marked = pattern.replace_all(excerpt, |caps: &regex::Captures<'_>| {
        format!("{}{}{}", style.open, &caps[0], style.close)
    });

    let mut out = String::with_capacity(marked.len() + 2 * ELLIPSIS.len());
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.push_str(&marked);
    if end < total {
        out.push_str(ELLIPSIS);
    }
    out
}

/// Case-insensitive alternation of the escaped tokens, longest first so the
/// longer token wins when two start at the same place.
fn token_pattern(tokens: &[String]) -> Option<Regex> {
    let mut sorted: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|t| !t.is_empty())
        .collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    sorted.dedup();

    let alternation = sorted
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&alternation).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!("snippet highlighting disabled for this query: {}", e);
            None
        }
    }
}

fn leading_excerpt(text: &str, length: usize) -> String {
    let total = text.chars().count();
    if total <= length {
        return text.to_string();
    }
    let mut out = char_slice(text, 0, length).to_string();
    out.push_str(ELLIPSIS);
    out
}

/// `text[start..end]` in character offsets.
fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let byte_at = |n: usize| {
        text.char_indices()
            .nth(n)
            .map(|(i, _)| i)
            .unwrap_or(text.len())
    };
    &text[byte_at(start)..byte_at(end)]
}
