//! Read-only lookups: stadium listing, neighbours and direct distances.

use anyhow::{bail, Result};
use serde::Serialize;

use stadiumgraph_lib::{normalize_name, StadiumGraph};

use crate::output::{emit, format_distance, OutputFormat};

#[derive(Debug, Serialize)]
struct Neighbour<'a> {
    stadium: &'a str,
    distance: f64,
}

#[derive(Debug, Serialize)]
struct DirectDistance<'a> {
    from: &'a str,
    to: &'a str,
    distance: f64,
}

/// Handle `stadiums`.
pub fn handle_stadiums(graph: &StadiumGraph, format: OutputFormat) -> Result<()> {
    let stadiums = graph.stadiums();
    emit(format, &stadiums, || stadiums.join("\n"))
}

/// Handle `neighbours --stadium`.
pub fn handle_neighbours(graph: &StadiumGraph, stadium: &str, format: OutputFormat) -> Result<()> {
    if !graph.contains(stadium) {
        bail!("Unknown stadium '{stadium}'");
    }
    let neighbours = graph.neighbours(stadium);
    let rows: Vec<Neighbour<'_>> = neighbours
        .iter()
        .map(|(name, distance)| Neighbour {
            stadium: name,
            distance: *distance,
        })
        .collect();

    emit(format, &rows, || {
        rows.iter()
            .map(|row| {
                format!(
                    "{} ({})",
                    row.stadium,
                    format_distance(row.distance)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Handle `distance --from --to`. Only direct edges are reported.
pub fn handle_distance(
    graph: &StadiumGraph,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    let Some(distance) = graph.distance(from, to) else {
        bail!("No direct edge between '{from}' and '{to}'");
    };
    let from_key = normalize_name(from).unwrap_or_default();
    let to_key = normalize_name(to).unwrap_or_default();
    let row = DirectDistance {
        from: &from_key,
        to: &to_key,
        distance,
    };

    emit(format, &row, || {
        format!(
            "{} -> {}: {}",
            row.from,
            row.to,
            format_distance(row.distance)
        )
    })
}
