// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! concordance: search a reference library from the command line.

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use concordance::{
    EngineConfig, EngineError, HistoryStore, JsonFileStore, Manifest, Result, SearchEngine,
    SearchOptions,
};

mod cli;
use cli::{display, Cli, Commands};

const HISTORY_FILE: &str = "history.json";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "concordance=warn",
        1 => "concordance=debug",
        _ => "concordance=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            data,
            query,
            limit,
            offset,
            types,
            json,
        } => {
            let engine = load_engine(&data)?;
            let mut options = SearchOptions::new().offset(offset);
            if let Some(limit) = limit {
                options = options.limit(limit);
            }
            if !types.is_empty() {
                options = options.types(types);
            }

            let response = engine.search(&query, &options);

            if json {
                let out = serde_json::to_string_pretty(&response).map_err(EngineError::Output)?;
                println!("{}", out);
            } else {
                let config = engine.config();
                display::print_results(
                    &query,
                    &response.results,
                    response.stats.total,
                    offset,
                    response.stats.elapsed_ms,
                    (&config.highlight_open, &config.highlight_close),
                );
                display::print_suggestions(&response.suggestions);
            }
            Ok(())
        }

        Commands::Inspect { data } => {
            let engine = load_engine(&data)?;
            display::print_stats(&engine.index_stats());
            Ok(())
        }

        Commands::History { data, clear } => {
            let store = JsonFileStore::new(data.join(HISTORY_FILE));
            if clear {
                store.save(&[])?;
                println!("history cleared");
                return Ok(());
            }
            let config = engine_config(&data)?;
            let entries = store.load()?;
            let shown = entries.len().min(config.history_display_limit);
            display::print_history(&entries[..shown]);
            Ok(())
        }
    }
}

fn engine_config(data: &Path) -> Result<EngineConfig> {
    let manifest = Manifest::from_dir(data)?;
    Ok(manifest.engine.unwrap_or_default())
}

/// Index every collection in the manifest and attach the history file.
fn load_engine(data: &Path) -> Result<SearchEngine> {
    let manifest = Manifest::from_dir(data)?;
    let collections = manifest.load_collections(data)?;
    let mut config = manifest.engine.clone().unwrap_or_default();
    // Relative synonym paths are relative to the data directory
    if let Some(path) = config.synonyms_path.take() {
        config.synonyms_path = Some(data.join(path));
    }

    let mut engine = SearchEngine::new(config)?
        .with_store(Arc::new(JsonFileStore::new(data.join(HISTORY_FILE))));
    let stats = engine.initialize_indices(collections);

    tracing::debug!(
        collections = stats.len(),
        records = engine.indexed_count(),
        "library loaded"
    );
    Ok(engine)
}
