use std::collections::{HashSet, VecDeque};

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::graph::{StadiumGraph, Weighted};
use crate::normalize::is_blank_key;

/// Extra frames allowed on the depth-first stack beyond the stadium count.
const DEPTH_SLACK: usize = 10;

/// Visit order produced by a traversal and the weight of the edges used.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Traversal {
    /// Sum of the edges that led to a newly visited stadium.
    pub distance: f64,
    pub order: Vec<String>,
    /// Set when the depth bound cut the traversal short.
    pub truncated: bool,
}

impl Weighted for Traversal {
    fn weight(&self) -> f64 {
        self.distance
    }
}

/// Depth-first traversal from `start`, cheapest edge first.
///
/// Runs on an explicit stack bounded at the stadium count plus a small slack.
/// Should the bound ever trip, the traversal stops descending and
/// [`Traversal::truncated`] is set.
pub fn depth_first(graph: &StadiumGraph, start: &str) -> Result<Traversal> {
    let start = graph.resolve(start)?;
    Ok(depth_first_bounded(graph, start, graph.len() + DEPTH_SLACK))
}

struct Frame<'a> {
    neighbours: Vec<(&'a str, f64)>,
    cursor: usize,
}

impl<'a> Frame<'a> {
    fn new(graph: &'a StadiumGraph, key: &str) -> Self {
        Self {
            neighbours: graph.traversable_neighbours(key),
            cursor: 0,
        }
    }

    fn advance(&mut self) -> Option<(&'a str, f64)> {
        let step = self.neighbours.get(self.cursor).copied();
        self.cursor += 1;
        step
    }
}

fn depth_first_bounded<'a>(
    graph: &'a StadiumGraph,
    start: &'a str,
    max_depth: usize,
) -> Traversal {
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut traversal = Traversal {
        order: vec![start.to_string()],
        ..Traversal::default()
    };
    let mut stack = vec![Frame::new(graph, start)];

    while let Some(frame) = stack.last_mut() {
        let Some((next, weight)) = frame.advance() else {
            stack.pop();
            continue;
        };
        if visited.contains(next) {
            continue;
        }
        if stack.len() >= max_depth {
            warn!(
                stadium = next,
                max_depth,
                "depth-first traversal hit its depth bound"
            );
            traversal.truncated = true;
            continue;
        }

        debug!(stadium = next, weight, "depth-first visit");
        visited.insert(next);
        traversal.order.push(next.to_string());
        traversal.distance += weight;
        stack.push(Frame::new(graph, next));
    }

    traversal
}

/// Breadth-first traversal from `start`, cheapest edge first at each level.
pub fn breadth_first(graph: &StadiumGraph, start: &str) -> Result<Traversal> {
    let start = graph.resolve(start)?;

    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut traversal = Traversal {
        order: vec![start.to_string()],
        ..Traversal::default()
    };

    while let Some(current) = queue.pop_front() {
        for (next, weight) in graph.traversable_neighbours(current) {
            if visited.insert(next) {
                traversal.order.push(next.to_string());
                traversal.distance += weight;
                queue.push_back(next);
            }
        }
    }

    Ok(traversal)
}

/// Stadiums that cannot be reached from the first stadium in key order.
pub fn unreachable_stadiums(graph: &StadiumGraph) -> Vec<String> {
    let mut nodes = graph
        .adjacency()
        .keys()
        .map(String::as_str)
        .filter(|key| !is_blank_key(key));
    let Some(root) = nodes.next() else {
        return Vec::new();
    };

    let mut visited: HashSet<&str> = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);
    while let Some(current) = queue.pop_front() {
        for (next, _) in graph.traversable_neighbours(current) {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    let unreached: Vec<String> = nodes
        .filter(|key| !visited.contains(key))
        .map(str::to_string)
        .collect();
    for stadium in &unreached {
        debug!(%stadium, "stadium unreachable");
    }
    unreached
}

/// Whether every stadium is reachable from every other. Empty graphs are.
pub fn is_connected(graph: &StadiumGraph) -> bool {
    unreachable_stadiums(graph).is_empty()
}
