//! Error types for gategraph operations.
//!
//! This module provides the main error type [`GategraphError`] which wraps
//! the conditions that abort a pipeline run. Everything softer than these —
//! pin-direction lookup misses, dangling edge endpoints, a missing renderer —
//! is absorbed where it occurs and never surfaces as an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use gategraph_parser::ParseError;

/// The main error type for gategraph operations.
#[derive(Debug, Error)]
pub enum GategraphError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("format error: {0}")]
    Parse(#[from] ParseError),

    /// The cell library decoded to zero cells.
    #[error("no cells parsed from cell library: {}", .0.display())]
    EmptyLibrary(PathBuf),

    /// The graph file decoded to zero gates.
    #[error("no gates parsed from netlist graph: {}", .0.display())]
    EmptyNetlist(PathBuf),

    /// Two distinct gate instances derived the same display name, so their
    /// metadata and edges would be indistinguishable in the output.
    #[error("two gate instances share the display name `{name}`")]
    DuplicateGate { name: String },
}
