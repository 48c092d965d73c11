#![allow(dead_code)]

use std::path::PathBuf;

use stadiumgraph_lib::{load_csv_files, StadiumGraph};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Graph built from both fixture files, merged in order.
pub fn fixture_graph() -> StadiumGraph {
    let mut graph = StadiumGraph::new();
    load_csv_files(
        &mut graph,
        &[
            fixtures_dir().join("al_west.csv"),
            fixtures_dir().join("expansion.csv"),
        ],
    )
    .expect("fixtures load");
    graph
}

/// Build a graph from `(from, to, distance)` triples.
pub fn graph_from(edges: &[(&str, &str, f64)]) -> StadiumGraph {
    let mut graph = StadiumGraph::new();
    for (from, to, distance) in edges {
        graph.add_edge(from, to, *distance);
    }
    graph
}

/// Sum the direct edge weights along `stops`.
pub fn path_weight(graph: &StadiumGraph, stops: &[String]) -> f64 {
    stops
        .windows(2)
        .map(|pair| {
            graph
                .distance(&pair[0], &pair[1])
                .expect("consecutive stops share an edge")
        })
        .sum()
}
