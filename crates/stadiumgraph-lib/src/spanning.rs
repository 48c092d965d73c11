use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{StadiumGraph, Weighted};
use crate::normalize::is_blank_key;

/// Edge selected into the spanning tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningEdge {
    pub parent: String,
    pub child: String,
    pub distance: f64,
}

/// Minimum spanning tree with edges in selection order.
///
/// The default value (weight 0, no edges) is what legacy callers receive for
/// a disconnected graph; it never describes a real tree unless the graph has
/// at most one stadium.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpanningTree {
    pub total_weight: f64,
    pub edges: Vec<SpanningEdge>,
}

impl Weighted for SpanningTree {
    fn weight(&self) -> f64 {
        self.total_weight
    }
}

/// Build a minimum spanning tree with Prim's algorithm.
///
/// Growth starts from the first stadium in key order. An empty graph yields an
/// empty tree. When some stadium can never be attached the graph is
/// disconnected and [`Error::Disconnected`] lists the stadiums left out; a
/// partial tree is never returned.
pub fn minimum_spanning_tree(graph: &StadiumGraph) -> Result<SpanningTree> {
    let nodes: Vec<&str> = graph
        .adjacency()
        .keys()
        .filter(|key| !is_blank_key(key))
        .map(String::as_str)
        .collect();
    let Some(&root) = nodes.first() else {
        return Ok(SpanningTree::default());
    };

    let mut best: HashMap<&str, f64> = nodes.iter().map(|&node| (node, f64::INFINITY)).collect();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut in_tree: HashSet<&str> = HashSet::with_capacity(nodes.len());
    best.insert(root, 0.0);

    let mut tree = SpanningTree::default();

    while in_tree.len() < nodes.len() {
        let closest = nodes
            .iter()
            .copied()
            .filter(|node| !in_tree.contains(node))
            .map(|node| (node, best.get(node).copied().unwrap_or(f64::INFINITY)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .filter(|(_, weight)| weight.is_finite());

        let Some((current, weight)) = closest else {
            let unreached: Vec<String> = nodes
                .iter()
                .filter(|node| !in_tree.contains(*node))
                .map(|node| node.to_string())
                .collect();
            debug!(
                unreached = unreached.len(),
                "spanning tree cannot reach every stadium"
            );
            return Err(Error::Disconnected { unreached });
        };

        in_tree.insert(current);
        if let Some(&parent) = parents.get(current) {
            tree.edges.push(SpanningEdge {
                parent: parent.to_string(),
                child: current.to_string(),
                distance: weight,
            });
            tree.total_weight += weight;
        }

        for (next, distance) in graph.traversable_neighbours(current) {
            if in_tree.contains(next) {
                continue;
            }
            if distance < best.get(next).copied().unwrap_or(f64::INFINITY) {
                best.insert(next, distance);
                parents.insert(next, current);
            }
        }
    }

    Ok(tree)
}
