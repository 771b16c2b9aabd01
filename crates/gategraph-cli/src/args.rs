//! Command-line argument definitions for the gategraph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments name the two input artifacts by identifier,
//! control the output prefix, and select configuration and logging.

use clap::Parser;

/// Command-line arguments for the gategraph tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Cell-library identifier, resolved to <data>/<ID>/<ID>.lib
    #[arg(long, value_name = "ID")]
    pub lib: String,

    /// Netlist-graph identifier, resolved to <data>/<ID>/<ID>.dot
    #[arg(long, value_name = "ID")]
    pub dot: String,

    /// Prefix for the exported files, e.g. "counter"
    #[arg(long, value_name = "PREFIX")]
    pub out_prefix: String,

    /// Also render the semantic graph to an image (requires Graphviz)
    #[arg(long)]
    pub render: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
