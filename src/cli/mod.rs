// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the concordance command-line interface.
//!
//! Three subcommands, all reading a data directory that holds
//! `manifest.json` (the collections to index) and `history.json` (search
//! history, created on first search): `search` to query, `inspect` to look at
//! index statistics, and `history` to list or clear past queries.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "concordance",
    about = "Fuzzy search over a reference library of books, characters and chapters",
    version
)]
pub struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search every collection in the data directory
    Search {
        /// Directory containing manifest.json
        #[arg(short, long)]
        data: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to return (default from config: 50)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Skip this many ranked results
        #[arg(short, long, default_value = "0")]
        offset: usize,

        /// Only return results of this type (repeatable: --type book --type character)
        #[arg(long = "type")]
        types: Vec<String>,

        /// Print the full response as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show per-collection index statistics
    Inspect {
        /// Directory containing manifest.json
        #[arg(short, long)]
        data: PathBuf,
    },

    /// List recent searches
    History {
        /// Directory containing history.json
        #[arg(short, long)]
        data: PathBuf,

        /// Delete the saved history instead of listing it
        #[arg(long)]
        clear: bool,
    },
}
