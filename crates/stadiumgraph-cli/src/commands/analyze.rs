//! Whole-graph commands: spanning tree, traversals and health checks.

use anyhow::{Context, Result};
use clap::ValueEnum;

use stadiumgraph_lib::diagnostics::{log_connections, missing_edges};
use stadiumgraph_lib::{
    breadth_first, depth_first, minimum_spanning_tree, unreachable_stadiums, validate_integrity,
    StadiumGraph,
};

use crate::output::{
    emit, render_check, render_traversal, render_tree, CheckOutput, OutputFormat, TraversalOutput,
};

/// Traversal order selected with `--order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TraversalOrder {
    #[default]
    Dfs,
    Bfs,
}

/// Handle `mst`.
pub fn handle_mst(graph: &StadiumGraph, format: OutputFormat) -> Result<()> {
    let tree = minimum_spanning_tree(graph)
        .context("No spanning tree: some stadiums are unreachable (run `check` for details)")?;
    emit(format, &tree, || render_tree(&tree))
}

/// Handle `traverse --start`.
pub fn handle_traverse(
    graph: &StadiumGraph,
    start: &str,
    order: TraversalOrder,
    format: OutputFormat,
) -> Result<()> {
    let (kind, traversal) = match order {
        TraversalOrder::Dfs => ("dfs", depth_first(graph, start)),
        TraversalOrder::Bfs => ("bfs", breadth_first(graph, start)),
    };
    let traversal = traversal.with_context(|| format!("Unable to traverse from '{start}'"))?;

    let output = TraversalOutput {
        order_kind: kind,
        traversal: &traversal,
    };
    emit(format, &output, || render_traversal(&output))
}

/// Handle `check`.
pub fn handle_check(graph: &StadiumGraph, format: OutputFormat) -> Result<()> {
    log_connections(graph);
    let unreachable = unreachable_stadiums(graph);
    let check = CheckOutput {
        stadiums: graph.len(),
        edges: graph.edge_count(),
        connected: unreachable.is_empty(),
        unreachable,
        missing_edges: missing_edges(graph).len(),
        integrity: validate_integrity(graph),
    };
    emit(format, &check, || render_check(&check))
}
