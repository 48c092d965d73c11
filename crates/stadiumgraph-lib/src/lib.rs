//! Stadium graph library entry points.
//!
//! This crate keeps an in-memory, undirected graph of stadiums keyed by
//! normalized names and runs the classic graph algorithms over it: shortest
//! path (Dijkstra and a zero-heuristic A*), Prim's minimum spanning tree,
//! depth- and breadth-first traversal, a greedy trip planner and a
//! connectivity check. CSV loading and diagnostic dumps sit alongside so the
//! CLI only depends on the functions exported here.
//!
//! Queries return typed [`Result`]s. Callers that need the historical `-1`
//! convention can collapse any result with [`or_sentinel`].

pub mod diagnostics;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod integrity;
pub mod normalize;
pub mod path;
pub mod spanning;
pub mod traversal;
pub mod trip;

pub use error::{Error, Result};
pub use graph::{or_sentinel, Edge, StadiumGraph, Weighted, NO_RESULT};
pub use ingest::{load_csv, load_csv_files, load_csv_reader, IngestReport, IngestSummary};
pub use integrity::{
    clean_adjacency, remove_empty_keys_and_neighbours, validate_integrity, CleanupReport,
    IntegrityIssue, IntegrityReport,
};
pub use normalize::normalize_name;
pub use path::{
    shortest_path, shortest_path_a_star, shortest_path_with, Route, ShortestPathAlgorithm,
};
pub use spanning::{minimum_spanning_tree, SpanningEdge, SpanningTree};
pub use traversal::{breadth_first, depth_first, is_connected, unreachable_stadiums, Traversal};
pub use trip::plan_trip;
