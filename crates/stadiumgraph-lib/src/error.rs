use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the stadium graph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every query failure maps onto the legacy `-1` sentinel through
/// [`crate::NO_RESULT`], so callers that only need "route or no route" can
/// ignore the variant. The variant itself is kept so that a malformed name can
/// still be told apart from a disconnected graph when it matters.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied name normalized to an empty key.
    #[error("invalid stadium name: {name:?}")]
    InvalidName { name: String },

    /// The normalized key is not present in the graph.
    #[error("unknown stadium: {name}")]
    StadiumNotFound { name: String },

    /// Both endpoints exist but no path joins them.
    #[error("no route found between {start} and {goal}")]
    NoPath { start: String, goal: String },

    /// The graph has nodes unreachable from the spanning tree root.
    #[error("graph is disconnected; {} stadium(s) unreachable", unreached.len())]
    Disconnected { unreached: Vec<String> },

    /// A defensive iteration or path-length cap tripped.
    #[error("{operation} exceeded its bound of {limit} steps")]
    BoundExceeded {
        operation: &'static str,
        limit: usize,
    },

    /// A trip was requested without any stops.
    #[error("trip requires at least one stop")]
    EmptyTrip,

    /// A CSV source produced no usable edges.
    #[error("no edges loaded from {path}")]
    NoEdgesLoaded { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
