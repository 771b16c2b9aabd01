//! Gategraph Core Types and Definitions
//!
//! This crate provides the foundational types for the gategraph semantic
//! netlist pipeline. It includes:
//!
//! - **Library**: Standard-cell pin-direction directory ([`library`] module)
//! - **Netlist**: Raw visualization-graph model — variables, gates, and raw
//!   edges as read from the synthesis viewer output ([`netlist`] module)
//! - **Semantic**: Node metadata for the resolved drives-graph
//!   ([`semantic`] module)

pub mod library;
pub mod netlist;
pub mod semantic;
