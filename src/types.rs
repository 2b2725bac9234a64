// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search engine.
//!
//! Records come in as loose JSON objects, get validated once when an index is
//! built, and leave as [`SearchResult`]s carrying a shared handle to the
//! original record. Positions inside an index never leak out of the crate.
//!
//! # Invariants
//!
//! - **Candidate**: `position < index.len()`; exact candidates carry no
//!   similarity samples, fuzzy candidates carry at least one.
//! - **SearchResult**: `score` is a non-negative integer by construction (`u32`).
//! - **HistoryEntry**: stored most-recent-first.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RecordError;

// =============================================================================
// RECORDS
// =============================================================================

/// One item from a collection: a book, a character, a chapter.
///
/// The engine does not know record shapes ahead of time. Each collection's
/// [`CollectionConfig`] names the fields to read, and those fields are pulled
/// out once at index-build time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Record(fields)
    }

    /// Accept any JSON value, rejecting anything that is not an object.
    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(fields) => Ok(Record(fields)),
            _ => Err(RecordError::NotAnObject),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Render a field as text.
    ///
    /// Strings, numbers and booleans render directly, arrays are space-joined
    /// (nested arrays and objects inside them are skipped). Missing, null,
    /// object-valued and empty fields yield `None`.
    pub fn field_text(&self, field: &str) -> Option<String> {
        let text = match self.0.get(field)? {
            Value::Array(items) => items
                .iter()
                .filter_map(scalar_text)
                .collect::<Vec<_>>()
                .join(" "),
            other => scalar_text(other)?,
        };

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Numeric `popularity` attribute, if the record has one.
    pub fn popularity(&self) -> Option<f64> {
        self.0.get("popularity").and_then(Value::as_f64)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Record(fields)
    }
}

// =============================================================================
// COLLECTION CONFIGURATION
// =============================================================================

/// How to read records of one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionConfig {
    /// Fields concatenated (in this order) into the searchable text.
    pub searchable_fields: Vec<String>,
    /// Field rendered as the result title. Records without it are skipped.
    pub title_field: String,
    /// Result URL with `{field}` or `{field:slug}` placeholders.
    pub url_template: String,
    /// Type tag copied onto every result ("book", "character", ...).
    pub type_tag: String,
}

impl CollectionConfig {
    pub fn new(
        searchable_fields: &[&str],
        title_field: &str,
        url_template: &str,
        type_tag: &str,
    ) -> Self {
        Self {
            searchable_fields: searchable_fields.iter().map(|f| f.to_string()).collect(),
            title_field: title_field.to_string(),
            url_template: url_template.to_string(),
            type_tag: type_tag.to_string(),
        }
    }

    pub fn books() -> Self {
        Self::new(
            &["name", "testament", "category", "author", "description"],
            "name",
            "/books/{name:slug}/",
            "book",
        )
    }

    pub fn characters() -> Self {
        Self::new(
            &["name", "aliases", "role", "description", "books"],
            "name",
            "/characters/{name:slug}/",
            "character",
        )
    }

    pub fn chapters() -> Self {
        Self::new(
            &["title", "book", "summary", "themes"],
            "title",
            "/books/{book:slug}/{chapter}/",
            "chapter",
        )
    }

    /// Built-in configuration for the reference collections.
    pub fn builtin(collection: &str) -> Option<Self> {
        match collection {
            "books" => Some(Self::books()),
            "characters" => Some(Self::characters()),
            "chapters" => Some(Self::chapters()),
            _ => None,
        }
    }
}

/// A named collection snapshot handed to the engine.
///
/// Records stay raw JSON until the index builder validates them.
#[derive(Debug, Clone)]
pub struct Collection {
    pub name: String,
    pub records: Vec<Value>,
    pub config: CollectionConfig,
}

impl Collection {
    pub fn new(name: impl Into<String>, records: Vec<Value>, config: CollectionConfig) -> Self {
        Self {
            name: name.into(),
            records,
            config,
        }
    }
}

// =============================================================================
// MATCHING
// =============================================================================

/// How a record matched the query.
///
/// **Gotcha**: the derived `Ord` puts `Exact` before `Fuzzy`, which is the
/// inspection order within one index. Ranking uses scores, not this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Fuzzy,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Fuzzy => "fuzzy",
        }
    }
}

/// A record position plus the evidence that put it there.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub position: usize,
    pub match_type: MatchType,
    /// One overlap-similarity sample per fuzzy-matching query token.
    pub similarities: Vec<f64>,
}

impl Candidate {
    pub fn exact(position: usize) -> Self {
        Self {
            position,
            match_type: MatchType::Exact,
            similarities: Vec::new(),
        }
    }

    pub fn fuzzy(position: usize, similarities: Vec<f64>) -> Self {
        Self {
            position,
            match_type: MatchType::Fuzzy,
            similarities,
        }
    }

    /// Mean of the similarity samples, 0.0 when there are none.
    pub fn average_similarity(&self) -> f64 {
        if self.similarities.is_empty() {
            return 0.0;
        }
        self.similarities.iter().sum::<f64>() / self.similarities.len() as f64
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// What callers get back for one matching record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub record: Arc<Record>,
    pub score: u32,
    pub match_type: MatchType,
    pub title: String,
    pub url: String,
    pub snippet: String,
    /// Source collection name.
    pub collection: String,
    #[serde(rename = "type")]
    pub type_tag: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Correction,
    Related,
    Autocomplete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub kind: SuggestionKind,
}

impl Suggestion {
    pub fn new(text: impl Into<String>, kind: SuggestionKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub elapsed_ms: f64,
    /// Matches before pagination.
    pub total: usize,
    pub query: String,
    pub normalized_query: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub suggestions: Vec<Suggestion>,
    pub stats: SearchStats,
}

/// Pagination and filtering for a search call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Page size; `None` uses the engine's configured default (50).
    pub limit: Option<usize>,
    pub offset: usize,
    /// Keep only results whose type tag is listed.
    pub types: Option<Vec<String>>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Whether results of this type tag pass the `types` filter.
    pub fn accepts_type(&self, type_tag: &str) -> bool {
        match &self.types {
            Some(types) => types.iter().any(|t| t == type_tag),
            None => true,
        }
    }
}

// =============================================================================
// HISTORY
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub query: String,
    pub result_count: usize,
    pub timestamp: DateTime<Utc>,
}
