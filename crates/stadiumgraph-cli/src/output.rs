//! Output formatting for command results.
//!
//! Every command produces either a human-readable text block or the JSON
//! serialization of the library result types.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use stadiumgraph_lib::{IntegrityReport, Route, SpanningTree, Traversal};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `value` as JSON, or the text produced by `text`.
pub fn emit<T, F>(format: OutputFormat, value: &T, text: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce() -> String,
{
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).context("failed to encode JSON")?;
            println!("{json}");
        }
        OutputFormat::Text => println!("{}", text()),
    }
    Ok(())
}

/// Route annotated with the algorithm or planner that produced it.
#[derive(Debug, Serialize)]
pub struct RouteOutput<'a> {
    pub algorithm: &'a str,
    #[serde(flatten)]
    pub route: &'a Route,
}

/// Traversal annotated with its visit order kind.
#[derive(Debug, Serialize)]
pub struct TraversalOutput<'a> {
    pub order_kind: &'a str,
    #[serde(flatten)]
    pub traversal: &'a Traversal,
}

/// Combined health report for `check`.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub stadiums: usize,
    pub edges: usize,
    pub connected: bool,
    pub unreachable: Vec<String>,
    pub missing_edges: usize,
    pub integrity: IntegrityReport,
}

pub fn render_route(output: &RouteOutput<'_>) -> String {
    let mut lines = vec![format!(
        "Route ({}): {} stop(s), distance {}",
        output.algorithm,
        output.route.stops.len(),
        format_distance(output.route.distance)
    )];
    for (index, stop) in output.route.stops.iter().enumerate() {
        let marker = if index == 0 {
            '+'
        } else if index + 1 == output.route.stops.len() {
            '-'
        } else {
            '|'
        };
        lines.push(format!("{marker} {stop}"));
    }
    lines.join("\n")
}

pub fn render_traversal(output: &TraversalOutput<'_>) -> String {
    let mut text = format!(
        "Traversal ({}): {} stadium(s), distance {}\n{}",
        output.order_kind,
        output.traversal.order.len(),
        format_distance(output.traversal.distance),
        output.traversal.order.join(" -> ")
    );
    if output.traversal.truncated {
        text.push_str("\n(truncated at depth bound)");
    }
    text
}

pub fn render_tree(tree: &SpanningTree) -> String {
    let mut lines = vec![format!(
        "Minimum spanning tree: {} edge(s), weight {}",
        tree.edges.len(),
        format_distance(tree.total_weight)
    )];
    lines.extend(tree.edges.iter().map(|edge| {
        format!(
            "  {} -- {} ({})",
            edge.parent,
            edge.child,
            format_distance(edge.distance)
        )
    }));
    lines.join("\n")
}

pub fn render_check(check: &CheckOutput) -> String {
    let mut lines = vec![
        format!("Stadiums: {}", check.stadiums),
        format!("Edges: {}", check.edges),
        format!("Connected: {}", if check.connected { "yes" } else { "no" }),
    ];
    for stadium in &check.unreachable {
        lines.push(format!("  unreachable: {stadium}"));
    }
    lines.push(format!("Missing direct edges: {}", check.missing_edges));
    lines.push(format!(
        "Integrity: {}",
        if check.integrity.is_valid() {
            "ok".to_string()
        } else {
            format!("{} issue(s)", check.integrity.issues.len())
        }
    ));
    lines.join("\n")
}

/// Format a distance without trailing zeros for whole numbers.
pub fn format_distance(distance: f64) -> String {
    if distance.fract() == 0.0 {
        format!("{distance:.0}")
    } else {
        format!("{distance:.2}")
    }
}
