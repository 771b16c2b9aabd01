//! Signal-flow direction resolution.
//!
//! The drawing order of a raw edge says nothing about which endpoint drives
//! the other; the pin direction declared in the cell library does. Each
//! collapsed edge is classified by the kinds of its two endpoints and
//! oriented accordingly, falling back to a conservative default when the
//! library has no answer.

use log::debug;

use gategraph_core::library::{CellDirectory, PinDirection};
use gategraph_core::netlist::{EndpointKind, Netlist, RawEdge};
use gategraph_core::semantic::NodeMeta;

use crate::error::GategraphError;
use crate::structure::SemanticGraph;

/// Builds the semantic drives-graph from the collapsed edge list.
///
/// Every declared gate and variable is registered as a node up front, so a
/// netlist with no edges still yields its full node set. Gates are keyed by
/// display name and registered first: a variable whose label collides with a
/// gate's display name yields to the gate.
///
/// # Errors
///
/// Returns [`GategraphError::DuplicateGate`] when two distinct gate instances
/// derive the same display name — their metadata and edges would be
/// indistinguishable downstream.
pub fn resolve(
    directory: &CellDirectory,
    netlist: &Netlist,
    edges: &[RawEdge],
) -> Result<SemanticGraph, GategraphError> {
    let mut graph = SemanticGraph::new();

    for gate in netlist.gates.values() {
        let name = gate.display_name();
        if graph.contains(&name) {
            return Err(GategraphError::DuplicateGate { name });
        }
        graph.register(NodeMeta::gate(name, &gate.cell, &gate.inst));
    }
    for var in netlist.variables.values() {
        graph.register(NodeMeta::variable(&var.name));
    }

    for edge in edges {
        match orient(directory, netlist, edge) {
            Some((driver, driven)) => {
                // Both names were registered above, but an edge may still
                // name an endpoint the reader never declared.
                if !graph.connect(&driver, &driven) {
                    debug!(driver, driven; "Dropping edge with unregistered endpoint");
                }
            }
            None => {
                debug!(source = edge.source, target = edge.target; "Dropping unresolvable edge");
            }
        }
    }

    Ok(graph)
}

/// Orients one collapsed edge into (driver name, driven name).
///
/// Returns `None` for edges that cannot take part in the semantic graph: a
/// junction endpoint that slipped through, an id outside the known families,
/// or an endpoint the reader never registered.
fn orient(directory: &CellDirectory, netlist: &Netlist, edge: &RawEdge) -> Option<(String, String)> {
    use EndpointKind::*;

    match (edge.source_kind()?, edge.target_kind()?) {
        // Variable drawn into a gate pin: the pin's declared direction
        // decides who drives.
        (Variable, Gate) => {
            let var = netlist.variables.get(&edge.source)?;
            let gate = netlist.gates.get(&edge.target)?;
            let pin = gate.pin_for_port(&edge.target_port);
            let gate_name = gate.display_name();
            match directory.direction(&gate.cell, pin) {
                PinDirection::Input => Some((var.name.clone(), gate_name)),
                // The net is driven out of this pin even though the drawing
                // shows net -> gate.
                PinDirection::Output => Some((gate_name, var.name.clone())),
                // Conservative default: assume the variable is the driver.
                PinDirection::Unknown => Some((var.name.clone(), gate_name)),
            }
        }

        // Gate pin drawn into a variable.
        (Gate, Variable) => {
            let gate = netlist.gates.get(&edge.source)?;
            let var = netlist.variables.get(&edge.target)?;
            let pin = gate.pin_for_port(&edge.source_port);
            let gate_name = gate.display_name();
            match directory.direction(&gate.cell, pin) {
                PinDirection::Output => Some((gate_name, var.name.clone())),
                // The drawing shows gate -> net but the pin is a sink.
                PinDirection::Input => Some((var.name.clone(), gate_name)),
                // Default for this shape: assume the gate drives the
                // variable, the common case.
                PinDirection::Unknown => Some((gate_name, var.name.clone())),
            }
        }

        // Net-to-net: no direction semantics to resolve, keep as drawn.
        (Variable, Variable) => {
            let source = netlist.variables.get(&edge.source)?;
            let target = netlist.variables.get(&edge.target)?;
            Some((source.name.clone(), target.name.clone()))
        }

        // Gate-to-gate, possible after junction collapse: keep as drawn.
        (Gate, Gate) => {
            let source = netlist.gates.get(&edge.source)?;
            let target = netlist.gates.get(&edge.target)?;
            Some((source.display_name(), target.display_name()))
        }

        // Anything still touching a junction is not a semantic edge.
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gategraph_core::netlist::{GateNode, VarNode};
    use gategraph_core::semantic::NodeKind;
    use indexmap::IndexMap;

    fn nor2_directory() -> CellDirectory {
        let mut directory = CellDirectory::new();
        directory.set_pin("NOR2", "A", PinDirection::Input);
        directory.set_pin("NOR2", "B", PinDirection::Input);
        directory.set_pin("NOR2", "Y", PinDirection::Output);
        directory
    }

    fn netlist_with_nor2() -> Netlist {
        let mut netlist = Netlist::new();
        netlist.variables.insert(
            "n1".to_string(),
            VarNode {
                id: "n1".to_string(),
                name: "sig1".to_string(),
            },
        );
        netlist.variables.insert(
            "n2".to_string(),
            VarNode {
                id: "n2".to_string(),
                name: "sig2".to_string(),
            },
        );
        let mut ports = IndexMap::new();
        ports.insert("p0".to_string(), "A".to_string());
        ports.insert("p1".to_string(), "Y".to_string());
        netlist.gates.insert(
            "c1".to_string(),
            GateNode {
                id: "c1".to_string(),
                inst: "U1".to_string(),
                cell: "NOR2".to_string(),
                ports,
            },
        );
        netlist
    }

    #[test]
    fn test_empty_edge_list_registers_all_nodes() {
        let netlist = netlist_with_nor2();
        let graph = resolve(&nor2_directory(), &netlist, &[]).unwrap();

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node_count(), 3);
        assert!(graph.contains("sig1"));
        assert!(graph.contains("sig2"));
        assert!(graph.contains("U1 nor2"));
    }

    #[test]
    fn test_variable_into_input_pin_keeps_orientation() {
        let netlist = netlist_with_nor2();
        let edges = vec![RawEdge::new("n1", "", "c1", "p0")];
        let graph = resolve(&nor2_directory(), &netlist, &edges).unwrap();

        let edges: Vec<(&str, &str)> = graph.edges().collect();
        assert_eq!(edges, vec![("sig1", "U1 nor2")]);
    }

    #[test]
    fn test_variable_into_output_pin_reverses() {
        let netlist = netlist_with_nor2();
        let edges = vec![RawEdge::new("n2", "", "c1", "p1")];
        let graph = resolve(&nor2_directory(), &netlist, &edges).unwrap();

        let edges: Vec<(&str, &str)> = graph.edges().collect();
        assert_eq!(edges, vec![("U1 nor2", "sig2")]);
    }

    #[test]
    fn test_output_pin_into_variable_keeps_orientation() {
        let netlist = netlist_with_nor2();
        let edges = vec![RawEdge::new("c1", "p1", "n2", "")];
        let graph = resolve(&nor2_directory(), &netlist, &edges).unwrap();

        let edges: Vec<(&str, &str)> = graph.edges().collect();
        assert_eq!(edges, vec![("U1 nor2", "sig2")]);
    }

    #[test]
    fn test_input_pin_into_variable_reverses() {
        let netlist = netlist_with_nor2();
        let edges = vec![RawEdge::new("c1", "p0", "n1", "")];
        let graph = resolve(&nor2_directory(), &netlist, &edges).unwrap();

        let edges: Vec<(&str, &str)> = graph.edges().collect();
        assert_eq!(edges, vec![("sig1", "U1 nor2")]);
    }

    #[test]
    fn test_unknown_cell_defaults_differ_by_shape() {
        // Empty directory: every lookup is Unknown. The two shapes keep
        // their drawn orientation but assume different drivers.
        let directory = CellDirectory::new();
        let netlist = netlist_with_nor2();

        let graph = resolve(
            &directory,
            &netlist,
            &[RawEdge::new("n1", "", "c1", "p0")],
        )
        .unwrap();
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![("sig1", "U1 nor2")],
            "variable -> gate defaults to the variable driving"
        );

        let graph = resolve(
            &directory,
            &netlist,
            &[RawEdge::new("c1", "p1", "n2", "")],
        )
        .unwrap();
        assert_eq!(
            graph.edges().collect::<Vec<_>>(),
            vec![("U1 nor2", "sig2")],
            "gate -> variable defaults to the gate driving"
        );
    }

    #[test]
    fn test_missing_port_tag_takes_conservative_default() {
        let netlist = netlist_with_nor2();
        // p9 is not in the gate's port map: pin "" resolves to Unknown.
        let edges = vec![RawEdge::new("n1", "", "c1", "p9")];
        let graph = resolve(&nor2_directory(), &netlist, &edges).unwrap();

        let edges: Vec<(&str, &str)> = graph.edges().collect();
        assert_eq!(edges, vec![("sig1", "U1 nor2")]);
    }

    #[test]
    fn test_variable_to_variable_kept_as_drawn() {
        let netlist = netlist_with_nor2();
        let edges = vec![RawEdge::new("n1", "", "n2", "")];
        let graph = resolve(&nor2_directory(), &netlist, &edges).unwrap();

        let edges: Vec<(&str, &str)> = graph.edges().collect();
        assert_eq!(edges, vec![("sig1", "sig2")]);
    }

    #[test]
    fn test_unregistered_endpoint_dropped_silently() {
        let netlist = netlist_with_nor2();
        let edges = vec![
            RawEdge::new("n1", "", "n99", ""),
            RawEdge::new("c99", "p1", "n1", ""),
            RawEdge::new("x3", "", "n1", ""),
        ];
        let graph = resolve(&nor2_directory(), &netlist, &edges).unwrap();
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_gate_to_gate_kept_as_drawn() {
        let mut netlist = netlist_with_nor2();
        let mut ports = IndexMap::new();
        ports.insert("p0".to_string(), "A".to_string());
        netlist.gates.insert(
            "c2".to_string(),
            GateNode {
                id: "c2".to_string(),
                inst: "U2".to_string(),
                cell: "INV".to_string(),
                ports,
            },
        );
        let edges = vec![RawEdge::new("c1", "p1", "c2", "p0")];
        let graph = resolve(&nor2_directory(), &netlist, &edges).unwrap();

        let edges: Vec<(&str, &str)> = graph.edges().collect();
        assert_eq!(edges, vec![("U1 nor2", "U2 inv")]);
    }

    #[test]
    fn test_duplicate_gate_display_name_rejected() {
        let mut netlist = Netlist::new();
        for id in ["c1", "c2"] {
            netlist.gates.insert(
                id.to_string(),
                GateNode {
                    id: id.to_string(),
                    inst: "U1".to_string(),
                    cell: "NOR2".to_string(),
                    ports: IndexMap::new(),
                },
            );
        }
        let err = resolve(&CellDirectory::new(), &netlist, &[]).unwrap_err();
        match err {
            GategraphError::DuplicateGate { name } => assert_eq!(name, "U1 nor2"),
            other => panic!("expected DuplicateGate, got {other:?}"),
        }
    }

    #[test]
    fn test_variable_colliding_with_gate_name_yields_to_gate() {
        let mut netlist = netlist_with_nor2();
        netlist.variables.insert(
            "n3".to_string(),
            VarNode {
                id: "n3".to_string(),
                name: "U1 nor2".to_string(),
            },
        );
        let graph = resolve(&nor2_directory(), &netlist, &[]).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(
            graph.node("U1 nor2").map(|m| m.kind),
            Some(NodeKind::Gate)
        );
    }

    #[test]
    fn test_resolved_names_reclassify_as_passthrough() {
        // Resolver output carries display names only; feeding a resolved
        // pair back through as a net-to-net edge must be a no-op rewrite.
        let mut netlist = Netlist::new();
        netlist.variables.insert(
            "n1".to_string(),
            VarNode {
                id: "n1".to_string(),
                name: "a".to_string(),
            },
        );
        netlist.variables.insert(
            "n2".to_string(),
            VarNode {
                id: "n2".to_string(),
                name: "b".to_string(),
            },
        );
        let edges = vec![RawEdge::new("n1", "", "n2", "")];
        let graph = resolve(&CellDirectory::new(), &netlist, &edges).unwrap();
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![("a", "b")]);
    }
}
