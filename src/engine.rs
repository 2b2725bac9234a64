// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: registered indices plus session state.
//!
//! One `search` call goes through these steps:
//!
//! ```text
//! query ─▶ normalize ─▶ match (every index, registration order)
//!                         │
//!                         ▼
//!                 score every candidate ─▶ stable rank ─▶ paginate
//!                         │                                  │
//!                         ▼                                  ▼
//!              suggestions (full count)              snippets (page only)
//!                         │
//!                         ▼
//!                  record history ─▶ store.save (failures logged)
//! ```
//!
//! Indices are immutable once built and shared behind `Arc`. The only mutable
//! state (history, suggestion cache) sits behind a mutex, so `search` takes
//! `&self` and an engine can be shared between threads.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use parking_lot::Mutex;
use serde_json::Value;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::index::{CollectionIndex, IndexStats};
use crate::scoring::ranking::rank_by_score;
use crate::scoring::{compute_score, ScoreInput};
use crate::search::{generate_snippet, match_index, parse_query, MatchOptions, ParsedQuery, SnippetStyle};
use crate::session::{HistoryStore, SearchSession};
use crate::suggest::{CacheKey, Suggester};
use crate::synonyms::SynonymTable;
use crate::types::{
    Collection, CollectionConfig, HistoryEntry, MatchType, SearchOptions, SearchResponse, SearchResult,
    SearchStats,
};
use crate::util::char_len;

/// A scored candidate that has not been turned into a result yet.
struct Hit<'a> {
    index: &'a CollectionIndex,
    position: usize,
    match_type: MatchType,
    score: u32,
}

#[derive(Debug)]
pub struct SearchEngine {
    config: EngineConfig,
    synonyms: SynonymTable,
    indices: Vec<Arc<CollectionIndex>>,
    session: Mutex<SearchSession>,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::with_parts(EngineConfig::default(), SynonymTable::builtin())
    }
}

impl SearchEngine {
    /// Create an engine with no collections. Fails only if
    /// `config.synonyms_path` is set and cannot be read.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let synonyms = match &config.synonyms_path {
            Some(path) => SynonymTable::from_file(path)?,
            None => SynonymTable::builtin(),
        };
        Ok(Self::with_parts(config, synonyms))
    }

    fn with_parts(config: EngineConfig, synonyms: SynonymTable) -> Self {
        let session = SearchSession::new(&config);
        Self {
            config,
            synonyms,
            indices: Vec::new(),
            session: Mutex::new(session),
        }
    }

    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self.session.get_mut().cache.clear();
        self
    }

    /// Attach a history store and restore history from it.
    pub fn with_store(mut self, store: Arc<dyn HistoryStore>) -> Self {
        self.session.get_mut().attach_store(store);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // =========================================================================
    // INDEXING
    // =========================================================================

    /// Build one index per collection, replacing anything registered before.
    ///
    /// Malformed records are skipped and logged; this never fails.
    pub fn initialize_indices(&mut self, collections: Vec<Collection>) -> Vec<IndexStats> {
        self.indices = build_indices(collections);
        self.session.get_mut().cache.clear();
        self.index_stats()
    }

    /// Rebuild a single registered collection from a new snapshot.
    pub fn replace_collection(
        &mut self,
        name: &str,
        records: Vec<Value>,
        config: CollectionConfig,
    ) -> Result<IndexStats> {
        let slot = self
            .indices
            .iter()
            .position(|index| index.name() == name)
            .ok_or_else(|| EngineError::UnknownCollection(name.to_string()))?;

        let index = CollectionIndex::build(name, records, config);
        let stats = index.stats();
        self.indices[slot] = Arc::new(index);
        self.session.get_mut().cache.clear();
        Ok(stats)
    }

    pub fn index_stats(&self) -> Vec<IndexStats> {
        self.indices.iter().map(|index| index.stats()).collect()
    }

    /// Records indexed across every collection.
    pub fn indexed_count(&self) -> usize {
        self.indices.iter().map(|index| index.len()).sum()
    }

    pub fn collection_names(&self) -> Vec<&str> {
        self.indices.iter().map(|index| index.name()).collect()
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Run a query. Never fails: a query that matches nothing is an empty
    /// response, and a query shorter than the minimum touches nothing.
    pub fn search(&self, query: &str, options: &SearchOptions) -> SearchResponse {
        let started = Instant::now();
        let parsed = parse_query(query);

        if char_len(&parsed.normalized) < self.config.min_query_length {
            tracing::debug!(query, "query below minimum length");
            return SearchResponse {
                stats: SearchStats {
                    query: parsed.raw,
                    normalized_query: parsed.normalized,
                    ..SearchStats::default()
                },
                ..SearchResponse::default()
            };
        }

        let mut hits = self.collect_hits(&parsed, options);
        rank_by_score(&mut hits, |hit| hit.score);

        let total = hits.len();
        let limit = options.limit.unwrap_or(self.config.default_limit);
        let results: Vec<SearchResult> = hits
            .iter()
            .skip(options.offset)
            .take(limit)
            .filter_map(|hit| self.materialize(hit, &parsed))
            .collect();

        let suggestions = {
            let mut session = self.session.lock();
            let key = CacheKey::new(query, options);
            let suggestions = match session.cache.get(&key) {
                Some(cached) => cached,
                None => {
                    let fresh = Suggester::new(&self.indices, &self.synonyms)
                        .max_suggestions(self.config.max_suggestions)
                        .suggest(&parsed, total);
                    session.cache.insert(key, fresh.clone());
                    fresh
                }
            };
            session.record(HistoryEntry {
                query: query.to_string(),
                result_count: total,
                timestamp: Utc::now(),
            });
            suggestions
        };

        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(
            query,
            total,
            returned = results.len(),
            elapsed_ms,
            "search complete"
        );

        SearchResponse {
            results,
            suggestions,
            stats: SearchStats {
                elapsed_ms,
                total,
                query: parsed.raw,
                normalized_query: parsed.normalized,
            },
        }
    }

    /// Score every candidate from every accepted index, in inspection order.
    fn collect_hits<'a>(&'a self, parsed: &ParsedQuery, options: &SearchOptions) -> Vec<Hit<'a>> {
        let match_options = MatchOptions {
            synonyms: &self.synonyms,
            fuzzy_threshold: self.config.fuzzy_threshold,
            fuzzy_budget: self.config.fuzzy_budget_ms.map(Duration::from_millis),
        };

        let mut hits = Vec::new();
        let accepted = self
            .indices
            .iter()
            .map(|index| &**index)
            .filter(|index| options.accepts_type(index.type_tag()));
        for index in accepted {
            for candidate in match_index(index, &parsed.tokens, &match_options).into_candidates() {
                let (Some(record), Some(text)) =
                    (index.record(candidate.position), index.text(candidate.position))
                else {
                    continue;
                };
                let score = compute_score(&ScoreInput::new(
                    &candidate,
                    record,
                    text,
                    &parsed.tokens,
                    &parsed.normalized,
                ));
                hits.push(Hit {
                    index,
                    position: candidate.position,
                    match_type: candidate.match_type,
                    score,
                });
            }
        }
        hits
    }

    fn materialize(&self, hit: &Hit<'_>, parsed: &ParsedQuery) -> Option<SearchResult> {
        let record = hit.index.record(hit.position)?;
        let text = hit.index.text(hit.position)?;
        let style = SnippetStyle {
            length: self.config.snippet_length,
            open: &self.config.highlight_open,
            close: &self.config.highlight_close,
        };

        Some(SearchResult {
            record: Arc::clone(&record.record),
            score: hit.score,
            match_type: hit.match_type,
            title: record.title.clone(),
            url: record.url.clone(),
            snippet: generate_snippet(text, &parsed.tokens, &style),
            collection: hit.index.name().to_string(),
            type_tag: hit.index.type_tag().to_string(),
        })
    }

    // =========================================================================
    // SESSION
    // =========================================================================

    /// Recent queries, newest first, capped at the display limit.
    pub fn search_history(&self) -> Vec<HistoryEntry> {
        self.session
            .lock()
            .history
            .recent(self.config.history_display_limit)
    }

    pub fn clear_history(&self) {
        self.session.lock().clear_history();
    }

    pub fn clear_suggestion_cache(&self) {
        self.session.lock().cache.clear();
    }

    /// History and suggestion cache both.
    pub fn clear_session(&self) {
        let mut session = self.session.lock();
        session.clear_history();
        session.cache.clear();
    }
}

#[cfg(feature = "parallel")]
fn build_indices(collections: Vec<Collection>) -> Vec<Arc<CollectionIndex>> {
    collections
        .into_par_iter()
        .map(|c| Arc::new(CollectionIndex::build(c.name, c.records, c.config)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn build_indices(collections: Vec<Collection>) -> Vec<Arc<CollectionIndex>> {
    collections
        .into_iter()
        .map(|c| Arc::new(CollectionIndex::build(c.name, c.records, c.config)))
        .collect()
}
