// Module exports for CLI subcommands.
//
// Each module handles a group of related subcommands. main.rs parses
// arguments, loads the graph once and dispatches to these handlers.

pub mod analyze;
pub mod query;
pub mod route;

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::debug;

use stadiumgraph_lib::{load_csv_files, StadiumGraph};

/// Environment variable listing distance CSV files when `--data` is absent.
pub const DATA_ENV: &str = "STADIUMGRAPH_DATA";

/// Resolve the distance files to load.
///
/// Explicit `--data` arguments win; otherwise `STADIUMGRAPH_DATA` is split
/// with the platform path-list separator.
pub fn resolve_data_paths(explicit: &[PathBuf]) -> Vec<PathBuf> {
    if !explicit.is_empty() {
        return explicit.to_vec();
    }
    env::var_os(DATA_ENV)
        .map(|value| env::split_paths(&value).collect())
        .unwrap_or_default()
}

/// Load every resolved distance file into a fresh graph.
pub fn load_graph(explicit: &[PathBuf]) -> Result<StadiumGraph> {
    let paths = resolve_data_paths(explicit);
    if paths.is_empty() {
        bail!("no distance files given; pass --data <PATH> or set {DATA_ENV}");
    }
    debug!(files = paths.len(), "loading distance files");

    let mut graph = StadiumGraph::new();
    load_csv_files(&mut graph, &paths).context("failed to load stadium distances")?;
    Ok(graph)
}
