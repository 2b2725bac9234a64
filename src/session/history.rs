// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded, most-recent-first record of past queries.

use std::collections::VecDeque;

use crate::types::HistoryEntry;

#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl SearchHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    /// Seed from persisted entries (most recent first), keeping the newest.
    pub fn restore(&mut self, entries: Vec<HistoryEntry>) {
        self.entries = entries.into_iter().take(self.capacity).collect();
    }

    /// Add an entry at the front, dropping the oldest past capacity.
    pub fn record(&mut self, entry: HistoryEntry) {
        if self.capacity == 0 {
            return;
        }
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Up to `limit` entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<HistoryEntry> {
        self.entries.iter().take(limit).cloned().collect()
    }

    /// Everything retained, newest first.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
