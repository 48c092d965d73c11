//! Loading stadium distances from CSV.
//!
//! Each record is `from,to,distance`. An optional header row is recognised by
//! a `Distance` or `Mileage` column title. Malformed rows are skipped and
//! counted rather than failing the load; bytes that are not valid UTF-8 are
//! replaced before the row is parsed.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ByteRecord, ReaderBuilder, Trim};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graph::StadiumGraph;
use crate::normalize::normalize_name;

const HEADER_MARKERS: [&str; 2] = ["Distance", "Mileage"];

/// Row counts for a single CSV source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Rows that produced an edge.
    pub accepted: usize,
    /// Rows ignored as malformed.
    pub skipped: usize,
}

/// Outcome of loading several CSV files into one graph.
#[derive(Debug, Default, Serialize)]
pub struct IngestSummary {
    pub loaded: Vec<(PathBuf, IngestReport)>,
    pub failed: Vec<(PathBuf, String)>,
}

impl IngestSummary {
    /// Total rows accepted across every loaded file.
    pub fn accepted(&self) -> usize {
        self.loaded.iter().map(|(_, report)| report.accepted).sum()
    }
}

/// Read edges from any CSV reader into `graph`.
///
/// Existing edges are kept; duplicates overwrite earlier weights.
pub fn load_csv_reader<R: Read>(graph: &mut StadiumGraph, reader: R) -> Result<IngestReport> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut report = IngestReport::default();
    for (index, record) in csv_reader.byte_records().enumerate() {
        let fields = decode_lossy(&record?);
        if index == 0 && is_header(&fields) {
            continue;
        }
        match parse_record(&fields) {
            Some((from, to, distance)) => {
                graph.add_edge(from, to, distance);
                report.accepted += 1;
            }
            None => {
                debug!(line = index + 1, "skipping malformed distance row");
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Load a single CSV file into `graph`.
///
/// Fails with [`Error::NoEdgesLoaded`] when the file yields no usable rows.
pub fn load_csv(graph: &mut StadiumGraph, path: &Path) -> Result<IngestReport> {
    debug!(path = %path.display(), "loading stadium distances");
    let file = fs::File::open(path)?;
    let report = load_csv_reader(graph, file)?;
    if report.accepted == 0 {
        return Err(Error::NoEdgesLoaded {
            path: path.to_path_buf(),
        });
    }
    Ok(report)
}

/// Merge several CSV files into `graph`.
///
/// Files that fail to load are recorded and logged; the call only errors when
/// no file contributed any edge.
pub fn load_csv_files<P: AsRef<Path>>(
    graph: &mut StadiumGraph,
    paths: &[P],
) -> Result<IngestSummary> {
    let mut summary = IngestSummary::default();

    for path in paths {
        let path = path.as_ref();
        match load_csv(graph, path) {
            Ok(report) => summary.loaded.push((path.to_path_buf(), report)),
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to load distance file"
                );
                summary.failed.push((path.to_path_buf(), err.to_string()));
            }
        }
    }

    if summary.loaded.is_empty() {
        let path = summary
            .failed
            .first()
            .map(|(path, _)| path.clone())
            .unwrap_or_default();
        return Err(Error::NoEdgesLoaded { path });
    }

    info!(
        files = summary.loaded.len(),
        failed = summary.failed.len(),
        stadiums = graph.len(),
        edges = graph.edge_count(),
        "loaded stadium distances"
    );
    Ok(summary)
}

/// Decode every field, replacing invalid UTF-8 rather than rejecting the row.
fn decode_lossy(record: &ByteRecord) -> Vec<String> {
    record
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect()
}

fn is_header(fields: &[String]) -> bool {
    fields
        .iter()
        .any(|field| HEADER_MARKERS.iter().any(|marker| field.contains(marker)))
}

fn parse_record(fields: &[String]) -> Option<(&str, &str, f64)> {
    let [from, to, distance, ..] = fields else {
        return None;
    };
    let distance: f64 = distance.parse().ok()?;

    if normalize_name(from).is_none() || normalize_name(to).is_none() {
        return None;
    }
    if !(distance.is_finite() && distance > 0.0) {
        return None;
    }
    Some((from.as_str(), to.as_str(), distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_header_and_malformed_rows() {
        let data = "\
Originated Stadium,Destination Stadium,Distance
Angel Stadium,Petco Park,110
Petco Park,Dodger Stadium,
Dodger Stadium,,50
Oracle Park,Petco Park,abc
Oracle Park,Petco Park,-4
Oracle Park
!!!,Petco Park,10
Dodger Stadium,Angel Stadium,31.5
";
        let mut graph = StadiumGraph::new();
        let report = load_csv_reader(&mut graph, data.as_bytes()).expect("csv parses");

        assert_eq!(
            report,
            IngestReport {
                accepted: 2,
                skipped: 6
            }
        );
        assert_eq!(graph.distance("Angel Stadium", "Petco Park"), Some(110.0));
        assert_eq!(graph.distance("angelstadium", "dodgerstadium"), Some(31.5));
        assert!(!graph.contains("Oracle Park"));
    }

    #[test]
    fn invalid_utf8_row_is_decoded_lossily() {
        let data: &[u8] = b"A,B,5\nC,D,3\nCaf\xe9 Park,B,4\nE,F,2\n";
        let mut graph = StadiumGraph::new();
        let report = load_csv_reader(&mut graph, data).expect("csv parses");

        assert_eq!(
            report,
            IngestReport {
                accepted: 4,
                skipped: 0
            }
        );
        assert_eq!(graph.distance("cafpark", "b"), Some(4.0));
        assert_eq!(graph.distance("E", "F"), Some(2.0));
    }

    #[test]
    fn undecodable_name_is_skipped_without_aborting() {
        let data: &[u8] = b"A,B,5\n\xff\xfe,B,4\nE,F,2\n";
        let mut graph = StadiumGraph::new();
        let report = load_csv_reader(&mut graph, data).expect("csv parses");

        assert_eq!(
            report,
            IngestReport {
                accepted: 2,
                skipped: 1
            }
        );
        assert!(graph.contains("E"));
    }

    #[test]
    fn first_row_without_marker_is_data() {
        let data = "Fenway Park,Yankee Stadium,215\n";
        let mut graph = StadiumGraph::new();
        let report = load_csv_reader(&mut graph, data.as_bytes()).expect("csv parses");
        assert_eq!(report.accepted, 1);
        assert_eq!(graph.distance("Fenway Park", "Yankee Stadium"), Some(215.0));
    }

    #[test]
    fn mileage_header_is_recognised() {
        let data = "From,To,Mileage\nA,B,3\n";
        let mut graph = StadiumGraph::new();
        let report = load_csv_reader(&mut graph, data.as_bytes()).expect("csv parses");
        assert_eq!(
            report,
            IngestReport {
                accepted: 1,
                skipped: 0
            }
        );
    }

    #[test]
    fn quoted_names_with_commas_are_supported() {
        let data = "\"Oriole Park at Camden Yards, Baltimore\",Nationals Park,40\n";
        let mut graph = StadiumGraph::new();
        load_csv_reader(&mut graph, data.as_bytes()).expect("csv parses");
        assert!(graph.contains("oriole park at camden yards baltimore"));
    }
}
