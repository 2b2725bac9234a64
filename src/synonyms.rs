// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Static bidirectional thesaurus for the exact-match path.
//!
//! Each entry maps a canonical term to a set of alternates. Lookup works in
//! both directions: "god" expands to its alternates, and "lord" expands to
//! its set plus the canonical "god". Fuzzy matching never sees synonyms.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::error::{EngineError, Result};
use crate::util::normalize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymTable {
    /// canonical → alternates
    entries: BTreeMap<String, Vec<String>>,
    /// alternate → canonicals that list it
    reverse: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// The bundled table (data/synonyms.json).
    pub fn builtin() -> Self {
        Self::from_json(include_str!("../data/synonyms.json")).unwrap_or_else(|e| {
            tracing::error!("bundled synonym table is invalid: {}", e);
            Self::default()
        })
    }

    /// Parse `{"canonical": ["alt", ...], ...}`. Terms are normalized.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> =
            serde_json::from_str(json).map_err(EngineError::Synonyms)?;
        Ok(Self::from_entries(raw))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
        Self::from_json(&content)
    }

    pub fn from_entries<I, K, V, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = SynonymTable::default();

        for (canonical, alternates) in entries {
            let canonical = normalize(canonical.as_ref());
            if canonical.is_empty() {
                continue;
            }
            let list = table.entries.entry(canonical.clone()).or_default();
            for alt in alternates {
                let alt = normalize(alt.as_ref());
                if alt.is_empty() || alt == canonical || list.contains(&alt) {
                    continue;
                }
                list.push(alt.clone());
                table
                    .reverse
                    .entry(alt)
                    .or_default()
                    .push(canonical.clone());
            }
        }

        table
    }

    /// The token, plus every set it belongs to, deduplicated in first-seen order.
    pub fn expand(&self, token: &str) -> Vec<String> {
        let mut out = vec![token.to_string()];
        let mut push = |term: &str| {
            if !out.iter().any(|t| t == term) {
                out.push(term.to_string());
            }
        };

        if let Some(alternates) = self.entries.get(token) {
            for alt in alternates {
                push(alt);
            }
        }

        if let Some(canonicals) = self.reverse.get(token) {
            for canonical in canonicals {
                push(canonical);
                if let Some(alternates) = self.entries.get(canonical) {
                    for alt in alternates {
                        push(alt);
                    }
                }
            }
        }

        out
    }

    /// Everything [`expand`](Self::expand) returns except the token itself.
    pub fn related(&self, token: &str) -> Vec<String> {
        let mut expanded = self.expand(token);
        expanded.remove(0);
        expanded
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
