use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::normalize::{is_blank_key, normalize_name};

/// Out-of-band "no result" value used by the sentinel accessors.
///
/// Valid distances are always strictly positive, so `-1.0` never collides with
/// a real answer. New code should prefer the `Option`/`Result` returning APIs
/// and only reach for the sentinel at presentation boundaries.
pub const NO_RESULT: f64 = -1.0;

/// Neighbour map for a single stadium, keyed by canonical key.
pub(crate) type Neighbours = BTreeMap<String, f64>;

/// Undirected edge reported by [`StadiumGraph::edges`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub distance: f64,
}

/// Results that carry a total distance and collapse to [`NO_RESULT`] on failure.
pub trait Weighted {
    /// Total distance or weight carried by the result.
    fn weight(&self) -> f64;
}

/// Collapse a typed result to the legacy sentinel contract.
///
/// Every error, whether an unknown name, a disconnected graph or a tripped
/// bound, becomes [`NO_RESULT`].
pub fn or_sentinel<T: Weighted>(result: &Result<T>) -> f64 {
    result.as_ref().map(Weighted::weight).unwrap_or(NO_RESULT)
}

/// In-memory weighted undirected graph keyed by canonical stadium names.
///
/// The adjacency store keeps every edge in both directions. Ordered maps are
/// used throughout so that "first stadium" and tie-breaking are deterministic
/// for a given set of keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StadiumGraph {
    adjacency: BTreeMap<String, Neighbours>,
}

impl StadiumGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a stadium exists. Invalid names are ignored.
    pub fn add_stadium(&mut self, name: &str) {
        if let Some(key) = normalize_name(name) {
            self.adjacency.entry(key).or_default();
        }
    }

    /// Insert or overwrite an undirected edge.
    ///
    /// Both endpoints are created when missing. The call is a no-op when either
    /// name is invalid or `distance` is not a positive finite number.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: f64) {
        let (Some(from), Some(to)) = (normalize_name(from), normalize_name(to)) else {
            return;
        };
        if !is_valid_weight(distance) {
            debug!(
                %from,
                %to,
                distance,
                "ignoring edge with non-positive distance"
            );
            return;
        }

        self.adjacency
            .entry(from.clone())
            .or_default()
            .insert(to.clone(), distance);
        self.adjacency.entry(to).or_default().insert(from, distance);
    }

    /// Store a single directed arc exactly as given.
    ///
    /// Skips normalization, weight validation and the reverse arc. Only `from`
    /// is created as a node. Used by repair tooling and tests to reproduce
    /// malformed adjacency data; see [`crate::clean_adjacency`].
    pub fn insert_arc_unchecked(&mut self, from: &str, to: &str, distance: f64) {
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), distance);
    }

    /// Direct edge weight between two stadiums, if one exists.
    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        let from = normalize_name(from)?;
        let to = normalize_name(to)?;
        self.adjacency.get(&from)?.get(&to).copied()
    }

    /// Direct edge weight, or [`NO_RESULT`] when there is none.
    pub fn distance_or_sentinel(&self, from: &str, to: &str) -> f64 {
        self.distance(from, to).unwrap_or(NO_RESULT)
    }

    /// All stadium keys in key order.
    pub fn stadiums(&self) -> Vec<String> {
        self.adjacency.keys().cloned().collect()
    }

    /// Neighbours of a stadium with their edge weights.
    ///
    /// `stadium` is looked up verbatim first so that diagnostics can inspect
    /// keys that never went through normalization; otherwise it is normalized.
    pub fn neighbours(&self, stadium: &str) -> Vec<(String, f64)> {
        let neighbours = self
            .adjacency
            .get(stadium)
            .or_else(|| normalize_name(stadium).and_then(|key| self.adjacency.get(&key)));
        neighbours
            .map(|map| map.iter().map(|(k, w)| (k.clone(), *w)).collect())
            .unwrap_or_default()
    }

    /// Whether the normalized name is a stadium in the graph.
    pub fn contains(&self, name: &str) -> bool {
        normalize_name(name).is_some_and(|key| self.adjacency.contains_key(&key))
    }

    /// Number of stadiums.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph has no stadiums.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(from, neighbours)| neighbours.keys().filter(|to| from < *to).count())
            .sum()
    }

    /// Every undirected edge once, with `from < to`.
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .flat_map(|(from, neighbours)| {
                neighbours
                    .iter()
                    .filter(move |(to, _)| from < *to)
                    .map(move |(to, distance)| Edge {
                        from: from.clone(),
                        to: to.clone(),
                        distance: *distance,
                    })
            })
            .collect()
    }

    /// Remove every stadium and edge.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    /// Resolve a raw name to the stored key, borrowing from the graph.
    pub(crate) fn resolve(&self, name: &str) -> Result<&str> {
        let key = normalize_name(name).ok_or_else(|| Error::InvalidName {
            name: name.to_string(),
        })?;
        self.adjacency
            .get_key_value(&key)
            .map(|(stored, _)| stored.as_str())
            .ok_or(Error::StadiumNotFound { name: key })
    }

    pub(crate) fn adjacency(&self) -> &BTreeMap<String, Neighbours> {
        &self.adjacency
    }

    pub(crate) fn adjacency_mut(&mut self) -> &mut BTreeMap<String, Neighbours> {
        &mut self.adjacency
    }

    /// Neighbours an algorithm may step to from `key`, in traversal order.
    ///
    /// Drops self-loops, blank keys, dangling neighbours and invalid weights,
    /// then sorts by ascending weight. Ties keep key order.
    pub(crate) fn traversable_neighbours<'a>(&'a self, key: &str) -> Vec<(&'a str, f64)> {
        let Some(neighbours) = self.adjacency.get(key) else {
            return Vec::new();
        };
        let mut steps: Vec<(&str, f64)> = neighbours
            .iter()
            .filter(|(next, weight)| {
                next.as_str() != key
                    && !is_blank_key(next)
                    && self.adjacency.contains_key(next.as_str())
                    && is_valid_weight(**weight)
            })
            .map(|(next, weight)| (next.as_str(), *weight))
            .collect();
        steps.sort_by(|a, b| compare_distance(a.1, b.1));
        steps
    }
}

pub(crate) fn is_valid_weight(distance: f64) -> bool {
    distance.is_finite() && distance > 0.0
}

pub(crate) fn compare_distance(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Greater)
}
