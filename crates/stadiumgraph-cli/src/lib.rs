//! Stadium graph CLI library.
//!
//! Command handlers and output formatting for the `stadiumgraph-cli` binary.
//! The binary itself only parses arguments and dispatches here.

pub mod commands;
pub mod output;
