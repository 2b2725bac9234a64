// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where search history goes between runs.
//!
//! The engine hands the whole history to [`HistoryStore::save`] after every
//! recorded query and ignores the outcome beyond logging it. A store that
//! fails (quota, disk full, bad permissions) never breaks a search.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::StoreError;
use crate::types::HistoryEntry;

/// Persistence collaborator for search history.
pub trait HistoryStore: Send + Sync {
    /// Previously saved history, most recent first.
    fn load(&self) -> Result<Vec<HistoryEntry>, StoreError>;

    /// Replace the saved history.
    fn save(&self, entries: &[HistoryEntry]) -> Result<(), StoreError>;
}

/// In-process store, optionally limited to a number of serialized bytes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<HistoryEntry>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects saves whose JSON form exceeds `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            quota: Some(bytes),
        }
    }

    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries.lock().clone()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            let needed = serde_json::to_vec(entries)?.len();
            if needed > quota {
                return Err(StoreError::QuotaExceeded { needed, quota });
            }
        }
        *self.entries.lock() = entries.to_vec();
        Ok(())
    }
}

/// History kept as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl HistoryStore for JsonFileStore {
    /// A missing file is an empty history.
    fn load(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes a sibling temp file and renames it over the target, so an
    /// interrupted save leaves the previous history intact.
    fn save(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(entries)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, json)?;

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        Ok(())
    }
}
