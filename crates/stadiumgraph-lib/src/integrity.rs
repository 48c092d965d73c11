//! Adjacency maintenance.
//!
//! Normalized insertion never produces blank keys, but entries written through
//! [`StadiumGraph::insert_arc_unchecked`] bypass every check. These routines
//! report and repair what such writes can leave behind.

use serde::Serialize;
use tracing::{debug, error};

use crate::graph::{is_valid_weight, StadiumGraph};
use crate::normalize::is_blank_key;

/// Malformed entry found by [`validate_integrity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityIssue {
    /// A stadium key that is empty or whitespace-only.
    EmptyStadium { key: String },
    /// A neighbour key that is empty or whitespace-only.
    EmptyNeighbour { stadium: String, neighbour: String },
}

/// Outcome of an integrity check. Never fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub issues: Vec<IntegrityIssue>,
}

impl IntegrityReport {
    /// True when no malformed entries were found.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Counts of entries removed by a cleanup pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    pub removed_stadiums: usize,
    pub removed_neighbours: usize,
}

impl CleanupReport {
    /// Whether the pass changed anything.
    pub fn is_noop(&self) -> bool {
        self.removed_stadiums == 0 && self.removed_neighbours == 0
    }
}

/// Report blank stadium and neighbour keys without modifying the graph.
pub fn validate_integrity(graph: &StadiumGraph) -> IntegrityReport {
    let mut report = IntegrityReport::default();

    for (stadium, neighbours) in graph.adjacency() {
        if is_blank_key(stadium) {
            error!(key_hex = %hex(stadium), "blank stadium key in adjacency");
            report.issues.push(IntegrityIssue::EmptyStadium {
                key: stadium.clone(),
            });
        }
        for neighbour in neighbours.keys().filter(|key| is_blank_key(key)) {
            error!(
                %stadium,
                key_hex = %hex(neighbour),
                "blank neighbour key in adjacency"
            );
            report.issues.push(IntegrityIssue::EmptyNeighbour {
                stadium: stadium.clone(),
                neighbour: neighbour.clone(),
            });
        }
    }

    report
}

/// Remove blank stadium keys and blank neighbour keys.
pub fn remove_empty_keys_and_neighbours(graph: &mut StadiumGraph) -> CleanupReport {
    let adjacency = graph.adjacency_mut();
    let before = adjacency.len();
    adjacency.retain(|stadium, _| !is_blank_key(stadium));

    let mut report = CleanupReport {
        removed_stadiums: before - adjacency.len(),
        ..CleanupReport::default()
    };
    for (stadium, neighbours) in adjacency.iter_mut() {
        let before = neighbours.len();
        neighbours.retain(|neighbour, _| !is_blank_key(neighbour));
        let removed = before - neighbours.len();
        if removed > 0 {
            debug!(%stadium, removed, "removed blank neighbours");
        }
        report.removed_neighbours += removed;
    }

    report
}

/// Full repair pass over the adjacency store.
///
/// Does everything [`remove_empty_keys_and_neighbours`] does, then drops arcs
/// that point at missing stadiums, self-loops, and arcs whose weight is not a
/// positive finite number.
pub fn clean_adjacency(graph: &mut StadiumGraph) -> CleanupReport {
    let mut report = remove_empty_keys_and_neighbours(graph);

    let stadiums: Vec<String> = graph.stadiums();
    for (stadium, neighbours) in graph.adjacency_mut().iter_mut() {
        let before = neighbours.len();
        neighbours.retain(|neighbour, weight| {
            neighbour != stadium
                && stadiums.binary_search(neighbour).is_ok()
                && is_valid_weight(*weight)
        });
        let removed = before - neighbours.len();
        if removed > 0 {
            debug!(%stadium, removed, "removed malformed arcs");
        }
        report.removed_neighbours += removed;
    }

    if !report.is_noop() {
        debug!(
            stadiums = report.removed_stadiums,
            neighbours = report.removed_neighbours,
            "adjacency cleaned"
        );
    }
    report
}

fn hex(value: &str) -> String {
    value.bytes().map(|b| format!("{b:02x}")).collect()
}
