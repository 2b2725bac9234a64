// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by indexing and querying.
//!
//! Both sides of a match have to go through the same function, otherwise
//! "Moses," in a record never meets "moses" in a query. The rules are small:
//! lowercase, punctuation becomes a space, whitespace runs collapse, ends trim.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: lowercase, strip diacritics, turn punctuation
/// into spaces, and collapse whitespace.
///
/// - "Genesis 1:1" → "genesis 1 1"
/// - "Aaron's rod" → "aaron s rod"
/// - "Élie" → "elie"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Map every non-alphanumeric character to a space
/// 5. Collapse whitespace and trim
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    let stripped: String = value.nfd().filter(|c| !is_combining_mark(*c)).collect();
    collapse(&stripped)
}

/// Normalization without diacritic stripping.
/// Lowercases, removes punctuation and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    collapse(value)
}

fn collapse(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_space = false;

    for c in value.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Split normalized text into tokens.
///
/// Expects output of [`normalize`], so a single space is the only separator.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized.split(' ').filter(|t| !t.is_empty())
}

/// Length in characters, not bytes.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
