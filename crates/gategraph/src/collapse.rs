//! Routing-junction elimination.
//!
//! The viewer inserts synthetic junction nodes (`x...`) purely to draw one
//! net fanning out to several sinks. They carry no circuit semantics, so the
//! raw edge list is rewritten to connect the real endpoints directly before
//! direction resolution.

use indexmap::{IndexMap, IndexSet};
use log::trace;

use gategraph_core::netlist::{EndpointKind, RawEdge};

/// Rewrites raw edges to eliminate routing-junction nodes.
///
/// Edges not touching a junction pass through unchanged, in order. For each
/// junction, every fan-in edge `(A, portA) -> x` is paired with every fan-out
/// edge `x -> (B, portB)` into a synthesized edge `(A, portA) -> (B, portB)`;
/// the junction's own port tags are discarded. A junction feeding several
/// sinks therefore expands one fan-in edge into one edge per sink.
///
/// Chained junctions are not resolved transitively: a synthesized edge whose
/// far endpoint is still a junction is dropped.
pub fn collapse_routing(edges: &[RawEdge]) -> Vec<RawEdge> {
    let mut fan_in: IndexMap<&str, Vec<&RawEdge>> = IndexMap::new();
    let mut fan_out: IndexMap<&str, Vec<&RawEdge>> = IndexMap::new();
    for edge in edges {
        fan_out.entry(edge.source.as_str()).or_default().push(edge);
        fan_in.entry(edge.target.as_str()).or_default().push(edge);
    }

    let mut collapsed: Vec<RawEdge> = edges
        .iter()
        .filter(|edge| !edge.touches_junction())
        .cloned()
        .collect();

    // Junctions in first-seen order, so the output is deterministic.
    let junctions: IndexSet<&str> = fan_in
        .keys()
        .chain(fan_out.keys())
        .copied()
        .filter(|id| EndpointKind::of(id) == Some(EndpointKind::Junction))
        .collect();

    for junction in junctions {
        let ins = fan_in.get(junction).map(Vec::as_slice).unwrap_or(&[]);
        let outs = fan_out.get(junction).map(Vec::as_slice).unwrap_or(&[]);

        for in_edge in ins {
            for out_edge in outs {
                // A chained junction would leave a dangling junction
                // endpoint on the synthesized edge; drop the pair.
                if EndpointKind::of(&in_edge.source) == Some(EndpointKind::Junction)
                    || EndpointKind::of(&out_edge.target) == Some(EndpointKind::Junction)
                {
                    trace!(junction; "Dropping chained-junction pair");
                    continue;
                }
                collapsed.push(RawEdge::new(
                    in_edge.source.as_str(),
                    in_edge.source_port.as_str(),
                    out_edge.target.as_str(),
                    out_edge.target_port.as_str(),
                ));
            }
        }
    }

    collapsed
}
