// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory fuzzy search over a small reference library.
//!
//! Collections of loose JSON records (books, characters, chapters) are
//! indexed into per-collection word and trigram posting maps. A query is
//! normalized, matched exactly (with synonyms) and fuzzily (trigram overlap),
//! scored, ranked and paginated, then returned with highlighted snippets and
//! suggestions.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   types.rs   │────▶│   index/     │────▶│   search/    │
//! │ (Record,     │     │ (word +      │     │ (matcher,    │
//! │  Collection) │     │  trigram)    │     │  snippet)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                    │                    │
//!        ▼                    ▼                    ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                       engine.rs                         │
//! │   scoring/ ─ ranking ─ suggest/ ─ session/ (history)    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module map
//!
//! | Module      | Responsibility                                  |
//! |-------------|-------------------------------------------------|
//! | `util`      | text normalization and tokenization             |
//! | `index`     | record validation, posting maps, stop words     |
//! | `synonyms`  | bidirectional thesaurus for exact matching      |
//! | `search`    | query parsing, candidate matching, snippets     |
//! | `scoring`   | integer scores and stable ranking               |
//! | `suggest`   | corrections, related terms, autocomplete        |
//! | `session`   | bounded history, persistence stores             |
//! | `engine`    | orchestration                                   |
//! | `contracts` | debug-time index invariants                     |
//!
//! # Usage
//!
//! ```ignore
//! use concordance::{Collection, CollectionConfig, SearchEngine, SearchOptions};
//! use serde_json::json;
//!
//! let mut engine = SearchEngine::default();
//! engine.initialize_indices(vec![Collection::new(
//!     "books",
//!     vec![json!({"name": "Genesis", "testament": "Old Testament"})],
//!     CollectionConfig::books(),
//! )]);
//!
//! let response = engine.search("genesis", &SearchOptions::default());
//! assert_eq!(response.results[0].title, "Genesis");
//! ```

pub mod config;
pub mod contracts;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod session;
pub mod suggest;
pub mod synonyms;
pub mod types;
pub mod util;

#[doc(hidden)]
pub mod testing;

pub use config::{EngineConfig, Manifest, ManifestEntry};
pub use engine::SearchEngine;
pub use error::{EngineError, RecordError, Result, StoreError};
pub use index::{CollectionIndex, IndexStats};
pub use session::{HistoryStore, JsonFileStore, MemoryStore};
pub use synonyms::SynonymTable;
pub use types::{
    Collection, CollectionConfig, HistoryEntry, MatchType, Record, SearchOptions, SearchResponse,
    SearchResult, SearchStats, Suggestion, SuggestionKind,
};
pub use util::normalize;
