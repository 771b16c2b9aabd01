//! Input-text readers for the gategraph pipeline.
//!
//! Two readers, one per input artifact:
//!
//! - [`liberty`] reads a Liberty standard-cell library and extracts only the
//!   pin directions into a [`CellDirectory`](gategraph_core::library::CellDirectory).
//! - [`dot`] reads the synthesis viewer's graph file into a raw
//!   [`Netlist`](gategraph_core::netlist::Netlist): variables, gates with
//!   their port maps, and directionless raw edges.
//!
//! Both readers are deliberately shallow: they extract connectivity and pin
//! semantics and skip everything else the formats can carry.

pub mod dot;
pub mod liberty;

mod error;

pub use error::ParseError;
