// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collection index construction.
//!
//! One pass over the records produces everything a search needs:
//!
//! | Structure     | Key         | Value                     | Used by        |
//! |---------------|-------------|---------------------------|----------------|
//! | `texts`       | position    | normalized searchable text| scorer, snippet|
//! | `words`       | token       | sorted positions          | exact matching |
//! | `trigrams`    | 3-char gram | sorted positions          | fuzzy matching |
//!
//! # Invariants
//!
//! 1. **ALIGNED**: `records.len() == texts.len()`
//! 2. **POSTINGS_IN_BOUNDS**: every posting is `< records.len()`
//! 3. **POSTINGS_SORTED**: every posting list is strictly increasing
//!
//! Records are processed in input order, so appending a position only when it
//! differs from the list's last entry gives (2) and (3) for free.
//! `contracts::check_index_well_formed` verifies them in debug builds.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::contracts::check_index_well_formed;
use crate::error::RecordError;
use crate::index::ngram::trigrams;
use crate::index::stop_words::is_stop_word;
use crate::types::{CollectionConfig, Record};
use crate::util::{normalize, tokenize};

/// Posting map: key → strictly increasing record positions.
pub type Postings = BTreeMap<String, Vec<u32>>;

/// A validated record with its display fields resolved.
#[derive(Debug, Clone)]
pub struct IndexedRecord {
    pub record: Arc<Record>,
    pub title: String,
    /// `title` run through the normalizer, for title boosts.
    pub normalized_title: String,
    pub url: String,
    pub popularity: Option<f64>,
}

/// Summary numbers for one built index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub name: String,
    pub type_tag: String,
    pub records: usize,
    pub skipped: usize,
    pub words: usize,
    pub trigrams: usize,
}

/// Immutable search index over one collection snapshot.
#[derive(Debug, Clone)]
pub struct CollectionIndex {
    name: String,
    config: CollectionConfig,
    records: Vec<IndexedRecord>,
    texts: Vec<String>,
    words: Postings,
    trigrams: Postings,
    skipped: usize,
}

impl CollectionIndex {
    /// Build an index from raw records.
    ///
    /// Records that fail validation are logged and skipped. The surviving
    /// records get consecutive positions in input order.
    pub fn build(name: impl Into<String>, records: Vec<Value>, config: CollectionConfig) -> Self {
        let name = name.into();
        let mut index = CollectionIndex {
            name,
            config,
            records: Vec::with_capacity(records.len()),
            texts: Vec::with_capacity(records.len()),
            words: BTreeMap::new(),
            trigrams: BTreeMap::new(),
            skipped: 0,
        };

        for (input_idx, value) in records.into_iter().enumerate() {
            match prepare_record(value, &index.config) {
                Ok((indexed, text)) => index.push(indexed, text),
                Err(e) => {
                    index.skipped += 1;
                    tracing::debug!(
                        collection = %index.name,
                        record = input_idx,
                        "skipping record: {}",
                        e
                    );
                }
            }
        }

        check_index_well_formed(&index);

        tracing::info!(
            collection = %index.name,
            records = index.records.len(),
            skipped = index.skipped,
            words = index.words.len(),
            trigrams = index.trigrams.len(),
            "built collection index"
        );

        index
    }

    fn push(&mut self, indexed: IndexedRecord, text: String) {
        let position = self.records.len() as u32;

        for token in tokenize(&text) {
            if token.is_empty() || is_stop_word(token) {
                continue;
            }
            append_posting(&mut self.words, token, position);
            for gram in trigrams(token) {
                append_posting(&mut self.trigrams, &gram, position);
            }
        }

        self.records.push(indexed);
        self.texts.push(text);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &CollectionConfig {
        &self.config
    }

    pub fn type_tag(&self) -> &str {
        &self.config.type_tag
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn record(&self, position: usize) -> Option<&IndexedRecord> {
        self.records.get(position)
    }

    pub(crate) fn text(&self, position: usize) -> Option<&str> {
        self.texts.get(position).map(String::as_str)
    }

    pub(crate) fn texts(&self) -> &[String] {
        &self.texts
    }

    pub(crate) fn word_postings(&self, token: &str) -> Option<&[u32]> {
        self.words.get(token).map(Vec::as_slice)
    }

    pub(crate) fn trigram_postings(&self, gram: &str) -> Option<&[u32]> {
        self.trigrams.get(gram).map(Vec::as_slice)
    }

    pub(crate) fn words(&self) -> &Postings {
        &self.words
    }

    pub(crate) fn trigram_map(&self) -> &Postings {
        &self.trigrams
    }

    /// Indexed words in sorted order.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            name: self.name.clone(),
            type_tag: self.config.type_tag.clone(),
            records: self.records.len(),
            skipped: self.skipped,
            words: self.words.len(),
            trigrams: self.trigrams.len(),
        }
    }
}

fn append_posting(postings: &mut Postings, key: &str, position: u32) {
    // Avoid allocating the key when it already exists (the common case).
    if let Some(list) = postings.get_mut(key) {
        if list.last() != Some(&position) {
            list.push(position);
        }
    } else {
        postings.insert(key.to_string(), vec![position]);
    }
}

/// Validate one raw record and compute its searchable text.
pub fn prepare_record(
    value: Value,
    config: &CollectionConfig,
) -> Result<(IndexedRecord, String), RecordError> {
    let record = Record::from_value(value)?;

    let title = record
        .field_text(&config.title_field)
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| RecordError::MissingTitle {
            field: config.title_field.clone(),
        })?;

    let raw: Vec<String> = config
        .searchable_fields
        .iter()
        .filter_map(|field| record.field_text(field))
        .collect();
    let text = normalize(&raw.join(" "));
    if text.is_empty() {
        return Err(RecordError::EmptyText);
    }

    let url = render_url(&config.url_template, &record);
    let popularity = record.popularity();

    Ok((
        IndexedRecord {
            record: Arc::new(record),
            normalized_title: normalize(&title),
            title,
            url,
            popularity,
        },
        text,
    ))
}

/// Substitute `{field}` and `{field:slug}` placeholders.
///
/// Missing fields render as empty strings; an unclosed `{` is copied through.
pub fn render_url(template: &str, record: &Record) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let placeholder = &after[..close];
        let (field, slug) = match placeholder.split_once(':') {
            Some((field, "slug")) => (field, true),
            _ => (placeholder, false),
        };
        let value = record.field_text(field).unwrap_or_default();
        if slug {
            out.push_str(&slugify(&value));
        } else {
            out.push_str(value.trim());
        }

        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// "1 Samuel" → "1-samuel"
pub fn slugify(value: &str) -> String {
    normalize(value).replace(' ', "-")
}
