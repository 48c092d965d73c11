//! Route and trip command handlers.

use anyhow::{Context, Result};
use clap::ValueEnum;

use stadiumgraph_lib::{plan_trip, shortest_path_with, ShortestPathAlgorithm, StadiumGraph};

use crate::output::{emit, render_route, OutputFormat, RouteOutput};

/// Shortest-path algorithm selected with `--algorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    #[default]
    Dijkstra,
    AStar,
}

impl From<AlgorithmArg> for ShortestPathAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => ShortestPathAlgorithm::Dijkstra,
            AlgorithmArg::AStar => ShortestPathAlgorithm::AStar,
        }
    }
}

/// Handle `route --from --to`.
pub fn handle_route(
    graph: &StadiumGraph,
    from: &str,
    to: &str,
    algorithm: AlgorithmArg,
    format: OutputFormat,
) -> Result<()> {
    let algorithm = ShortestPathAlgorithm::from(algorithm);
    let route = shortest_path_with(graph, algorithm, from, to)
        .with_context(|| format!("Unable to route from '{from}' to '{to}'"))?;

    let label = algorithm.to_string();
    let output = RouteOutput {
        algorithm: &label,
        route: &route,
    };
    emit(format, &output, || render_route(&output))
}

/// Handle `trip --start --stop ...`.
pub fn handle_trip(
    graph: &StadiumGraph,
    start: &str,
    stops: &[String],
    format: OutputFormat,
) -> Result<()> {
    let route = plan_trip(graph, start, stops).with_context(|| {
        format!(
            "Unable to plan a trip from '{start}' using direct edges; \
             every stop must be one hop from the previous one"
        )
    })?;

    let output = RouteOutput {
        algorithm: "greedy",
        route: &route,
    };
    emit(format, &output, || render_route(&output))
}
