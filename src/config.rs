// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration and on-disk collection manifests.
//!
//! Everything here is plain serde JSON with camelCase keys. Every
//! `EngineConfig` field has a default, so `{}` is a valid config file.
//!
//! A data directory looks like:
//!
//! ```text
//! data/
//! ├── manifest.json      {"collections": [{"name": "books", "records": "books.json"}]}
//! ├── books.json         [{"name": "Genesis", "testament": "Old Testament"}, ...]
//! └── history.json       written by JsonFileStore (optional)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EngineError, Result};
use crate::types::{Collection, CollectionConfig};

/// Tunables for indexing, searching, suggestions and history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Page size when `SearchOptions::limit` is unset.
    pub default_limit: usize,
    /// Queries shorter than this (after normalization) return nothing.
    pub min_query_length: usize,
    /// History entries retained in memory and handed to the store.
    pub history_capacity: usize,
    /// History entries returned by `search_history()`.
    pub history_display_limit: usize,
    /// Distinct raw queries whose suggestions are cached.
    pub suggestion_cache_capacity: usize,
    /// Total suggestions returned per query.
    pub max_suggestions: usize,
    /// Target snippet length in characters.
    pub snippet_length: usize,
    pub highlight_open: String,
    pub highlight_close: String,
    /// Minimum trigram overlap for a fuzzy candidate.
    pub fuzzy_threshold: f64,
    /// Optional wall-clock budget for the fuzzy phase of one index.
    pub fuzzy_budget_ms: Option<u64>,
    /// Replace the built-in synonym table with this JSON file.
    pub synonyms_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_limit: 50,
            min_query_length: 2,
            history_capacity: 100,
            history_display_limit: 10,
            suggestion_cache_capacity: 64,
            max_suggestions: 5,
            snippet_length: 200,
            highlight_open: "<mark>".to_string(),
            highlight_close: "</mark>".to_string(),
            fuzzy_threshold: 0.3,
            fuzzy_budget_ms: None,
            synonyms_path: None,
        }
    }
}

impl EngineConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| EngineError::json(path, e))
    }
}

/// One collection entry in `manifest.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    pub name: String,
    /// Record file, relative to the manifest's directory.
    pub records: PathBuf,
    /// Falls back to [`CollectionConfig::builtin`] when absent.
    #[serde(default)]
    pub config: Option<CollectionConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub collections: Vec<ManifestEntry>,
    #[serde(default)]
    pub engine: Option<EngineConfig>,
}

impl Manifest {
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join("manifest.json");
        let content = fs::read_to_string(&path).map_err(|e| EngineError::io(&path, e))?;
        serde_json::from_str(&content).map_err(|e| EngineError::json(&path, e))
    }

    /// Read every listed record file into a [`Collection`].
    ///
    /// Individual malformed records are left for the index builder to skip;
    /// only unreadable files or a non-array top level fail here.
    pub fn load_collections(&self, dir: impl AsRef<Path>) -> Result<Vec<Collection>> {
        let dir = dir.as_ref();
        self.collections
            .iter()
            .map(|entry| {
                let config = entry
                    .config
                    .clone()
                    .or_else(|| CollectionConfig::builtin(&entry.name))
                    .ok_or_else(|| EngineError::MissingCollectionConfig(entry.name.clone()))?;

                let path = dir.join(&entry.records);
                let content = fs::read_to_string(&path).map_err(|e| EngineError::io(&path, e))?;
                let value: Value =
                    serde_json::from_str(&content).map_err(|e| EngineError::json(&path, e))?;

                match value {
                    Value::Array(records) => Ok(Collection::new(&entry.name, records, config)),
                    _ => Err(EngineError::NotAnArray {
                        collection: entry.name.clone(),
                    }),
                }
            })
            .collect()
    }
}
