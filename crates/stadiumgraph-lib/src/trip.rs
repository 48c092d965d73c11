//! Greedy multi-stop trip planning.
//!
//! The planner is a nearest-neighbour heuristic over direct edges only: from
//! the current stadium it always hops to the closest remaining stop that has
//! an edge to it. It does not route through intermediate stadiums, so a stop
//! reachable only via a detour makes the whole trip fail.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{is_valid_weight, StadiumGraph};
use crate::path::Route;

/// Plan a trip from `start` visiting every stop once.
///
/// Stops are resolved up front; an invalid or unknown stop fails the plan
/// before any hop is taken. Duplicate stops, and stops equal to `start`, are
/// visited once. Ties between equally near stops go to the smaller key. The
/// returned route begins with `start` and its distance is the sum of the hops.
pub fn plan_trip<S: AsRef<str>>(graph: &StadiumGraph, start: &str, stops: &[S]) -> Result<Route> {
    let start = graph.resolve(start)?;
    if stops.is_empty() {
        return Err(Error::EmptyTrip);
    }

    let mut remaining: BTreeSet<&str> = stops
        .iter()
        .map(|stop| graph.resolve(stop.as_ref()))
        .collect::<Result<_>>()?;
    remaining.remove(start);

    let mut route = Route {
        distance: 0.0,
        stops: vec![start.to_string()],
    };
    let mut current = start;

    while !remaining.is_empty() {
        let nearest = remaining
            .iter()
            .filter_map(|&stop| direct_distance(graph, current, stop).map(|d| (stop, d)))
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let Some((next, hop)) = nearest else {
            debug!(
                from = current,
                remaining = remaining.len(),
                "no direct edge to any remaining stop"
            );
            let goal = remaining.iter().next().copied().unwrap_or_default();
            return Err(Error::NoPath {
                start: current.to_string(),
                goal: goal.to_string(),
            });
        };

        debug!(from = current, to = next, hop, "trip hop");
        remaining.remove(next);
        route.stops.push(next.to_string());
        route.distance += hop;
        current = next;
    }

    debug!(total = route.distance, "trip planned");
    Ok(route)
}

fn direct_distance(graph: &StadiumGraph, from: &str, to: &str) -> Option<f64> {
    if from == to {
        return None;
    }
    graph
        .adjacency()
        .get(from)?
        .get(to)
        .copied()
        .filter(|distance| is_valid_weight(*distance))
}
