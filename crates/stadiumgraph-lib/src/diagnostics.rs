//! Read-only dumps of the graph for troubleshooting data files.

use tracing::{debug, info};

use crate::graph::StadiumGraph;

/// Unordered stadium pairs with no direct edge, each pair once.
pub fn missing_edges(graph: &StadiumGraph) -> Vec<(String, String)> {
    let stadiums = graph.stadiums();
    let mut missing = Vec::new();
    for (index, from) in stadiums.iter().enumerate() {
        for to in &stadiums[index + 1..] {
            if graph.distance(from, to).is_none() {
                missing.push((from.clone(), to.clone()));
            }
        }
    }
    missing
}

/// Log every undirected edge.
pub fn log_edges(graph: &StadiumGraph) {
    for edge in graph.edges() {
        debug!(
            from = %edge.from,
            to = %edge.to,
            distance = edge.distance,
            "edge"
        );
    }
}

/// Log every stadium key.
pub fn log_stadiums(graph: &StadiumGraph) {
    for stadium in graph.stadiums() {
        debug!(%stadium, "stadium");
    }
}

/// Log each stadium with its neighbours and weights.
pub fn log_connections(graph: &StadiumGraph) {
    for stadium in graph.stadiums() {
        let connections = graph
            .neighbours(&stadium)
            .iter()
            .map(|(neighbour, distance)| format!("{neighbour} ({distance})"))
            .collect::<Vec<_>>()
            .join(", ");
        debug!(%stadium, %connections, "connections");
    }
}

/// Log stadium pairs lacking a direct edge and return how many there are.
pub fn log_missing_edges(graph: &StadiumGraph) -> usize {
    let missing = missing_edges(graph);
    for (from, to) in &missing {
        debug!(%from, %to, "missing direct edge");
    }
    info!(count = missing.len(), "missing direct edges");
    missing.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_pairs_without_direct_edge() {
        let mut graph = StadiumGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 1.0);

        assert_eq!(
            missing_edges(&graph),
            vec![("a".to_string(), "c".to_string())]
        );
    }

    #[test]
    fn complete_graph_has_nothing_missing() {
        let mut graph = StadiumGraph::new();
        graph.add_edge("A", "B", 1.0);
        graph.add_edge("B", "C", 1.0);
        graph.add_edge("A", "C", 1.0);

        let before = graph.clone();
        log_edges(&graph);
        log_stadiums(&graph);
        log_connections(&graph);
        assert_eq!(log_missing_edges(&graph), 0);
        assert_eq!(graph, before);
    }
}
