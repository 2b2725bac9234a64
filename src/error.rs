// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Searching never fails. The only fallible operations are loading things
//! from disk (config, manifest, record files) and talking to a history store.
//! Per-record problems during index construction are reported as
//! [`RecordError`] values that the builder logs and skips.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by engine setup and the CLI.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("collection {0:?} is not registered")]
    UnknownCollection(String),

    #[error("collection {0:?} has no configuration and no built-in default")]
    MissingCollectionConfig(String),

    #[error("record file for {collection:?} must contain a JSON array")]
    NotAnArray { collection: String },

    #[error("invalid synonym table: {0}")]
    Synonyms(#[source] serde_json::Error),

    #[error("history store: {0}")]
    Store(#[from] StoreError),

    #[error("could not serialize output: {0}")]
    Output(#[source] serde_json::Error),
}

impl EngineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        EngineError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        EngineError::Json {
            path: path.into(),
            source,
        }
    }
}

/// Why a record was left out of an index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("title field {field:?} is missing or empty")]
    MissingTitle { field: String },

    #[error("no searchable text after normalization")]
    EmptyText,
}

/// Failures of the history persistence collaborator.
///
/// These never reach `search` callers; the engine logs and moves on.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("history serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("history IO failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
