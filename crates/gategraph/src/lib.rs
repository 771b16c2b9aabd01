//! Gategraph - semantic drives-graphs from gate-level netlist visualizations.
//!
//! A synthesis viewer's graph file records how a netlist was *drawn*: nets,
//! gate records with positional ports, and synthetic routing junctions, with
//! edges in drawing order. This crate turns that into what the circuit
//! *means*: a directed graph whose edges read "driver → driven", using the
//! pin directions declared in the accompanying Liberty cell library.
//!
//! The pipeline is a straight line: parse the library, parse the graph file,
//! collapse routing junctions, resolve edge directions, export.

pub mod config;

mod collapse;
mod error;
mod export;
mod resolve;
mod structure;

pub use gategraph_core::{library, netlist, semantic};

pub use collapse::collapse_routing;
pub use error::GategraphError;
pub use export::ExportPaths;
pub use structure::SemanticGraph;

use std::path::{Path, PathBuf};

use log::{debug, info};

use config::AppConfig;
use gategraph_core::library::CellDirectory;
use gategraph_core::netlist::Netlist;

/// Builder for running the netlist-to-semantic-graph pipeline.
///
/// # Examples
///
/// ```rust,no_run
/// use gategraph::{SemanticGraphBuilder, config::AppConfig};
///
/// let library_src = "cell(INV) {\n  pin(A) { direction: input; }\n}\n";
/// let graph_src = "n1 [ shape=octagon, label=\"a\" ];";
///
/// let builder = SemanticGraphBuilder::new(AppConfig::default());
///
/// let directory = builder.parse_library(library_src)
///     .expect("Failed to parse library");
/// let netlist = builder.parse_netgraph(graph_src);
///
/// let graph = builder.resolve(&directory, &netlist)
///     .expect("Failed to resolve");
/// let paths = builder.export(&graph, "demo")
///     .expect("Failed to export");
/// ```
#[derive(Default)]
pub struct SemanticGraphBuilder {
    config: AppConfig,
}

impl SemanticGraphBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder runs with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parses Liberty text into a cell directory.
    ///
    /// # Errors
    ///
    /// Returns `GategraphError::Parse` when the text cannot be tokenized into
    /// balanced blocks. An empty result is not an error here; callers decide
    /// whether zero cells is fatal for their run.
    pub fn parse_library(&self, source: &str) -> Result<CellDirectory, GategraphError> {
        info!("Parsing cell library");
        let directory = gategraph_parser::liberty::parse_library(source)?;

        let cell_count = directory.len();
        debug!(cell_count; "Cell library parsed");
        Ok(directory)
    }

    /// Parses the visualization-graph text into a raw netlist.
    pub fn parse_netgraph(&self, source: &str) -> Netlist {
        info!("Parsing netlist graph");
        let netlist = gategraph_parser::dot::parse_netgraph(source);

        let gate_count = netlist.gates.len();
        debug!(gate_count; "Netlist graph parsed");
        netlist
    }

    /// Collapses routing junctions and resolves signal-flow directions.
    ///
    /// # Errors
    ///
    /// Returns `GategraphError::DuplicateGate` when two gate instances derive
    /// the same display name.
    pub fn resolve(
        &self,
        directory: &CellDirectory,
        netlist: &Netlist,
    ) -> Result<SemanticGraph, GategraphError> {
        info!("Resolving semantic graph");

        let collapsed = collapse::collapse_routing(&netlist.edges);
        let raw_edges = netlist.edges.len();
        let collapsed_edges = collapsed.len();
        debug!(raw_edges, collapsed_edges; "Routing junctions collapsed");

        let graph = resolve::resolve(directory, netlist, &collapsed)?;
        let nodes = graph.node_count();
        let edges = graph.edge_count();
        debug!(nodes, edges; "Semantic graph resolved");

        Ok(graph)
    }

    /// Writes the node table, edge table, and DOT description under the
    /// configured output directory.
    ///
    /// # Errors
    ///
    /// Returns `GategraphError::Io` when the output directory or a file
    /// cannot be written.
    pub fn export(
        &self,
        graph: &SemanticGraph,
        prefix: &str,
    ) -> Result<ExportPaths, GategraphError> {
        info!(prefix; "Exporting semantic graph");
        let paths = export::write_exports(graph, self.config.paths().out_dir(), prefix)?;
        Ok(paths)
    }

    /// Renders the exported DOT description to an image with the configured
    /// engine.
    ///
    /// Best-effort: returns `None` when the renderer is unavailable or fails,
    /// after logging a warning.
    pub fn render(&self, dot_path: &Path, prefix: &str) -> Option<PathBuf> {
        export::render_image(
            dot_path,
            self.config.paths().out_dir(),
            prefix,
            self.config.render(),
        )
    }
}
