//! CLI logic for the gategraph tool.
//!
//! This module contains the core CLI logic for the gategraph tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use gategraph::{GategraphError, SemanticGraphBuilder};

/// Run the gategraph CLI application
///
/// This function resolves the two input identifiers to files, runs the
/// pipeline, and writes the node table, edge table, and DOT description
/// under the configured output directory.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `GategraphError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Library tokenization errors
/// - A library with no cells or a graph with no gates
/// - Duplicate gate display names
pub fn run(args: &Args) -> Result<(), GategraphError> {
    info!(
        library = args.lib,
        netgraph = args.dot;
        "Building semantic graph"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = SemanticGraphBuilder::new(app_config);

    let library_path = builder.config().paths().library_path(&args.lib);
    let netgraph_path = builder.config().paths().netgraph_path(&args.dot);

    // Parse the cell library; a library without cells cannot orient anything.
    let library_src = fs::read_to_string(&library_path)?;
    let directory = builder.parse_library(&library_src)?;
    if directory.is_empty() {
        return Err(GategraphError::EmptyLibrary(library_path));
    }

    // Parse the netlist graph; a graph without gates is not a netlist.
    let netgraph_src = fs::read_to_string(&netgraph_path)?;
    let netlist = builder.parse_netgraph(&netgraph_src);
    if netlist.gates.is_empty() {
        return Err(GategraphError::EmptyNetlist(netgraph_path));
    }

    let graph = builder.resolve(&directory, &netlist)?;
    let paths = builder.export(&graph, &args.out_prefix)?;

    info!(
        nodes_csv = paths.nodes_csv.display().to_string(),
        edges_csv = paths.edges_csv.display().to_string(),
        dot = paths.dot.display().to_string();
        "Semantic graph exported"
    );

    if args.render {
        // Best-effort: a missing or failing renderer already warned.
        if let Some(image) = builder.render(&paths.dot, &args.out_prefix) {
            info!(image = image.display().to_string(); "Image rendered");
        }
    }

    Ok(())
}
