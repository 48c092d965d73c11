use std::cmp::Ordering;
use std::collections::{BTreeSet, BinaryHeap, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::{is_valid_weight, StadiumGraph, Weighted};
use crate::normalize::is_blank_key;

/// Supported shortest-path algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShortestPathAlgorithm {
    /// Dijkstra's algorithm with linear-scan minimum extraction.
    #[default]
    Dijkstra,
    /// A* search over a binary heap. The heuristic is always zero.
    #[serde(rename = "a-star")]
    AStar,
}

impl fmt::Display for ShortestPathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ShortestPathAlgorithm::Dijkstra => "dijkstra",
            ShortestPathAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

impl FromStr for ShortestPathAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(ShortestPathAlgorithm::Dijkstra),
            "a-star" | "astar" | "a_star" | "a*" => Ok(ShortestPathAlgorithm::AStar),
            other => Err(format!("unknown algorithm '{other}'")),
        }
    }
}

/// Ordered list of stadiums with the total distance covered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub distance: f64,
    pub stops: Vec<String>,
}

impl Route {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}

impl Weighted for Route {
    fn weight(&self) -> f64 {
        self.distance
    }
}

/// Find the shortest route with the requested algorithm.
pub fn shortest_path_with(
    graph: &StadiumGraph,
    algorithm: ShortestPathAlgorithm,
    start: &str,
    goal: &str,
) -> Result<Route> {
    match algorithm {
        ShortestPathAlgorithm::Dijkstra => shortest_path(graph, start, goal),
        ShortestPathAlgorithm::AStar => shortest_path_a_star(graph, start, goal),
    }
}

/// Run Dijkstra's algorithm between two stadiums.
///
/// The main loop is capped at twice the stadium count and path reconstruction
/// at one more than the stadium count; tripping either cap yields
/// [`Error::BoundExceeded`] instead of looping.
pub fn shortest_path(graph: &StadiumGraph, start: &str, goal: &str) -> Result<Route> {
    let start = graph.resolve(start)?;
    let goal = graph.resolve(goal)?;
    let adjacency = graph.adjacency();

    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut previous: HashMap<&str, &str> = HashMap::new();
    let mut unvisited: BTreeSet<&str> = BTreeSet::new();

    for key in adjacency.keys() {
        if is_blank_key(key) {
            continue;
        }
        distances.insert(key.as_str(), f64::INFINITY);
        unvisited.insert(key.as_str());
    }
    distances.insert(start, 0.0);

    let max_iterations = adjacency.len() * 2;
    let mut iterations = 0;

    while !unvisited.is_empty() {
        if iterations >= max_iterations {
            warn!(
                start,
                goal,
                max_iterations,
                "dijkstra iteration cap reached"
            );
            return Err(Error::BoundExceeded {
                operation: "dijkstra",
                limit: max_iterations,
            });
        }
        iterations += 1;

        let closest = unvisited
            .iter()
            .filter_map(|&key| distances.get(key).map(|distance| (key, *distance)))
            .filter(|(_, distance)| distance.is_finite())
            .min_by(|a, b| a.1.total_cmp(&b.1));
        let Some((current, current_distance)) = closest else {
            break;
        };

        if current == goal {
            break;
        }
        unvisited.remove(current);

        let Some(neighbours) = adjacency.get(current) else {
            break;
        };
        for (next, &weight) in neighbours {
            let next = next.as_str();
            if is_blank_key(next) || !unvisited.contains(next) || !is_valid_weight(weight) {
                continue;
            }
            let Some(&known) = distances.get(next) else {
                continue;
            };

            let candidate = current_distance + weight;
            if candidate < known {
                distances.insert(next, candidate);
                previous.insert(next, current);
            }
        }
    }

    let total = distances.get(goal).copied().unwrap_or(f64::INFINITY);
    if !total.is_finite() {
        debug!(start, goal, "dijkstra found no route");
        return Err(no_path(start, goal));
    }

    let stops = reconstruct_path(&previous, start, goal, adjacency.len() + 1)?;
    Ok(Route {
        distance: total,
        stops,
    })
}

/// Run A* search between two stadiums with a zero heuristic.
///
/// Always agrees with [`shortest_path`] on the total distance; among several
/// equally short routes the chosen stops may differ.
pub fn shortest_path_a_star(graph: &StadiumGraph, start: &str, goal: &str) -> Result<Route> {
    let start = graph.resolve(start)?;
    let goal = graph.resolve(goal)?;
    let adjacency = graph.adjacency();

    let mut g_score: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut closed: HashSet<&str> = HashSet::new();
    let mut open = BinaryHeap::new();

    g_score.insert(start, 0.0);
    open.push(AStarEntry::new(start, 0.0, heuristic_distance(start, goal)));

    let max_pops = adjacency.values().map(|n| n.len()).sum::<usize>() + 1;
    let mut pops = 0;

    while let Some(entry) = open.pop() {
        pops += 1;
        if pops > max_pops {
            warn!(start, goal, max_pops, "a-star iteration cap reached");
            return Err(Error::BoundExceeded {
                operation: "a-star",
                limit: max_pops,
            });
        }
        if closed.contains(entry.node) {
            continue;
        }

        if entry.node == goal {
            let stops = reconstruct_path(&parents, start, goal, adjacency.len() + 1)?;
            return Ok(Route {
                distance: entry.cost.0,
                stops,
            });
        }
        closed.insert(entry.node);

        let Some(neighbours) = adjacency.get(entry.node) else {
            continue;
        };
        for (next, &weight) in neighbours {
            let next = next.as_str();
            if next == entry.node
                || is_blank_key(next)
                || closed.contains(next)
                || !adjacency.contains_key(next)
                || !is_valid_weight(weight)
            {
                continue;
            }

            let tentative = entry.cost.0 + weight;
            if tentative < *g_score.get(next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next, tentative);
                parents.insert(next, entry.node);
                open.push(AStarEntry::new(
                    next,
                    tentative,
                    heuristic_distance(next, goal),
                ));
            }
        }
    }

    debug!(start, goal, "a-star found no route");
    Err(no_path(start, goal))
}

/// Stadiums carry no coordinates, so the estimate is always zero.
fn heuristic_distance(_from: &str, _to: &str) -> f64 {
    0.0
}

fn no_path(start: &str, goal: &str) -> Error {
    Error::NoPath {
        start: start.to_string(),
        goal: goal.to_string(),
    }
}

/// Walk predecessor links from `goal` back to `start`.
///
/// A revisited node or more than `max_steps` links means the chain is corrupt.
fn reconstruct_path(
    parents: &HashMap<&str, &str>,
    start: &str,
    goal: &str,
    max_steps: usize,
) -> Result<Vec<String>> {
    let mut path = Vec::new();
    let mut seen = HashSet::new();
    let mut current = goal;

    while current != start {
        if path.len() >= max_steps || !seen.insert(current) {
            warn!(
                start,
                goal,
                max_steps,
                "predecessor chain is cyclic or too long"
            );
            return Err(Error::BoundExceeded {
                operation: "path reconstruction",
                limit: max_steps,
            });
        }
        path.push(current.to_string());
        current = parents
            .get(current)
            .copied()
            .ok_or_else(|| no_path(start, goal))?;
    }

    path.push(start.to_string());
    path.reverse();
    Ok(path)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry<'a> {
    node: &'a str,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl<'a> AStarEntry<'a> {
    fn new(node: &'a str, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for AStarEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{or_sentinel, NO_RESULT};

    fn triangle() -> StadiumGraph {
        let mut graph = StadiumGraph::new();
        graph.add_edge("A", "B", 5.0);
        graph.add_edge("B", "C", 3.0);
        graph.add_edge("A", "C", 10.0);
        graph
    }

    #[test]
    fn dijkstra_prefers_cheaper_two_hop_route() {
        let route = shortest_path(&triangle(), "A", "C").expect("route exists");
        assert_eq!(route.distance, 8.0);
        assert_eq!(route.stops, vec!["a", "b", "c"]);
        assert_eq!(route.hop_count(), 2);
    }

    #[test]
    fn a_star_matches_dijkstra() {
        let route = shortest_path_a_star(&triangle(), "a", "c").expect("route exists");
        assert_eq!(route.distance, 8.0);
        assert_eq!(route.stops, vec!["a", "b", "c"]);
    }

    #[test]
    fn start_equals_goal_yields_single_stop() {
        let graph = triangle();
        for algorithm in [ShortestPathAlgorithm::Dijkstra, ShortestPathAlgorithm::AStar] {
            let route = shortest_path_with(&graph, algorithm, "B", "b").expect("trivial route");
            assert_eq!(route.distance, 0.0);
            assert_eq!(route.stops, vec!["b"]);
        }
    }

    #[test]
    fn unknown_or_invalid_endpoints_fail() {
        let graph = triangle();
        assert!(matches!(
            shortest_path(&graph, "A", "Z"),
            Err(Error::StadiumNotFound { .. })
        ));
        assert!(matches!(
            shortest_path_a_star(&graph, "", "A"),
            Err(Error::InvalidName { .. })
        ));
        assert_eq!(or_sentinel(&shortest_path(&graph, "A", "Z")), NO_RESULT);
    }

    #[test]
    fn isolated_goal_has_no_path() {
        let mut graph = triangle();
        graph.add_stadium("D");
        assert!(matches!(
            shortest_path(&graph, "A", "D"),
            Err(Error::NoPath { .. })
        ));
        assert!(matches!(
            shortest_path_a_star(&graph, "A", "D"),
            Err(Error::NoPath { .. })
        ));
    }

    #[test]
    fn malformed_arcs_are_skipped_during_relaxation() {
        let mut graph = triangle();
        graph.insert_arc_unchecked("a", "c", -100.0);
        graph.insert_arc_unchecked("a", "", 1.0);
        graph.insert_arc_unchecked("a", "ghost", 1.0);

        let dijkstra = shortest_path(&graph, "A", "C").expect("route exists");
        let a_star = shortest_path_a_star(&graph, "A", "C").expect("route exists");
        assert_eq!(dijkstra.distance, 8.0);
        assert_eq!(a_star.distance, 8.0);
    }

    #[test]
    fn cyclic_predecessor_chain_is_rejected() {
        let parents = HashMap::from([("c", "b"), ("b", "c")]);
        let result = reconstruct_path(&parents, "a", "c", 10);
        assert!(matches!(result, Err(Error::BoundExceeded { .. })));
    }

    #[test]
    fn overlong_predecessor_chain_is_rejected() {
        let parents = HashMap::from([("d", "c"), ("c", "b"), ("b", "a")]);
        assert_eq!(
            reconstruct_path(&parents, "a", "d", 4).expect("chain fits"),
            vec!["a", "b", "c", "d"]
        );
        assert!(matches!(
            reconstruct_path(&parents, "a", "d", 2),
            Err(Error::BoundExceeded { limit: 2, .. })
        ));
    }

    #[test]
    fn broken_predecessor_chain_is_no_path() {
        let parents = HashMap::from([("c", "b")]);
        assert!(matches!(
            reconstruct_path(&parents, "a", "c", 10),
            Err(Error::NoPath { .. })
        ));
    }

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in [ShortestPathAlgorithm::Dijkstra, ShortestPathAlgorithm::AStar] {
            let parsed: ShortestPathAlgorithm = algorithm.to_string().parse().expect("parses");
            assert_eq!(parsed, algorithm);
        }
        assert_eq!(
            "A*".parse::<ShortestPathAlgorithm>(),
            Ok(ShortestPathAlgorithm::AStar)
        );
        assert!("bfs".parse::<ShortestPathAlgorithm>().is_err());
    }
}
