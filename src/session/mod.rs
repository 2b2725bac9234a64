// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mutable per-engine state: query history and the suggestion cache.
//!
//! Indices are immutable and shared; everything that changes between
//! searches lives here, behind the engine's mutex.

mod history;
mod store;

pub use history::SearchHistory;
pub use store::{HistoryStore, JsonFileStore, MemoryStore};

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::suggest::SuggestionCache;
use crate::types::HistoryEntry;

pub struct SearchSession {
    pub(crate) history: SearchHistory,
    pub(crate) cache: SuggestionCache,
    store: Option<Arc<dyn HistoryStore>>,
}

impl std::fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("history", &self.history.len())
            .field("cache", &self.cache.len())
            .field("store", &self.store.is_some())
            .finish()
    }
}

impl SearchSession {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            history: SearchHistory::new(config.history_capacity),
            cache: SuggestionCache::new(config.suggestion_cache_capacity),
            store: None,
        }
    }

    /// Attach a store and restore history from it. A failed load leaves the
    /// history empty.
    pub fn attach_store(&mut self, store: Arc<dyn HistoryStore>) {
        match store.load() {
            Ok(entries) => {
                tracing::debug!(entries = entries.len(), "restored search history");
                self.history.restore(entries);
            }
            Err(e) => tracing::warn!("could not load search history: {}", e),
        }
        self.store = Some(store);
    }

    /// Record a query and hand the history to the store.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.history.record(entry);
        self.persist();
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.persist();
    }

    fn persist(&self) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.save(&self.history.entries()) {
            tracing::warn!("could not save search history: {}", e);
        }
    }
}
