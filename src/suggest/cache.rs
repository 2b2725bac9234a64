// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded least-recently-used cache of suggestions.
//!
//! Entries are keyed by the raw query plus the type filter, because the
//! filter changes the result count and the result count decides whether
//! corrections are offered.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::types::{SearchOptions, Suggestion};

/// Raw query and the (sorted, deduplicated) type filter it ran under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    query: String,
    types: Option<Vec<String>>,
}

impl CacheKey {
    pub fn new(query: &str, options: &SearchOptions) -> Self {
        let types = options.types.as_ref().map(|types| {
            let mut types = types.clone();
            types.sort();
            types.dedup();
            types
        });
        Self {
            query: query.to_string(),
            types,
        }
    }

    /// Key for an unfiltered search.
    pub fn unfiltered(query: &str) -> Self {
        Self {
            query: query.to_string(),
            types: None,
        }
    }
}

#[derive(Debug)]
pub struct SuggestionCache {
    /// `None` when the configured capacity is zero: nothing is ever stored.
    entries: Option<LruCache<CacheKey, Vec<Suggestion>>>,
}

impl SuggestionCache {
    /// A cache holding at most `capacity` keys. Zero disables caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(LruCache::new),
        }
    }

    /// Cached suggestions for `key`, marking it as recently used.
    pub fn get(&mut self, key: &CacheKey) -> Option<Vec<Suggestion>> {
        self.entries.as_mut()?.get(key).cloned()
    }

    pub fn insert(&mut self, key: CacheKey, suggestions: Vec<Suggestion>) {
        if let Some(entries) = self.entries.as_mut() {
            entries.put(key, suggestions);
        }
    }

    pub fn clear(&mut self) {
        if let Some(entries) = self.entries.as_mut() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, LruCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| entries.cap().get())
    }
}
