//! Visualization-graph reader.
//!
//! The input is the line-oriented directed-graph description a synthesis
//! viewer emits: node declarations carrying shapes and labels, and edge
//! declarations between node ids. Rather than parsing the full graph grammar,
//! each line is matched against one of three structural shapes and everything
//! else (graph attributes, comments, closing braces) is ignored.
//!
//! Each shape has its own classifier arm, so every pattern is independently
//! testable against literal line samples.

use std::sync::LazyLock;

use indexmap::IndexMap;
use log::debug;
use regex::Regex;

use gategraph_core::netlist::{GateNode, Netlist, RawEdge, VarNode};

/// Variable (net) declaration: an octagon- or diamond-shaped node with a
/// quoted label.
static VAR_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(n\d+)\s*\[\s*shape=(octagon|diamond).*?label="([^"]+)""#)
        .expect("variable pattern is valid")
});

/// Gate declaration: a record-shaped node whose label carries port tags and a
/// central instance/cell segment.
static GATE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(c\d+)\s*\[\s*shape=record,\s*label="(.+?)""#)
        .expect("gate pattern is valid")
});

/// Edge declaration with optional port tags and compass points on each end.
static EDGE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^((?:n|c|x)\d+)(?::(p\d+))?(?::[nesw])?\s*->\s*((?:n|c|x)\d+)(?::(p\d+))?(?::[nesw])?",
    )
    .expect("edge pattern is valid")
});

/// `<p12> PIN` sub-patterns inside a record label.
static PORT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(p\d+)>\s*([^|}\s]+)").expect("port-tag pattern is valid"));

/// The central label segment between the two innermost pipe-brace boundaries.
static CENTRAL_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\}\|\s*([^|]+?)\s*\|\{").expect("central pattern is valid"));

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Variable(VarNode),
    Gate(GateNode),
    Edge(RawEdge),
    Ignored,
}

/// Classifies one line of the graph text into its structural shape.
pub fn classify_line(line: &str) -> Line {
    let line = line.trim();

    if let Some(caps) = VAR_DECL.captures(line) {
        return Line::Variable(VarNode {
            id: caps[1].to_string(),
            name: caps[3].trim().to_string(),
        });
    }

    if let Some(caps) = GATE_DECL.captures(line) {
        let id = caps[1].to_string();
        let label = &caps[2];
        let ports: IndexMap<String, String> = PORT_TAG
            .captures_iter(label)
            .map(|c| (c[1].to_string(), c[2].to_string()))
            .collect();
        let (inst, cell) = central_label(label, &id);
        return Line::Gate(GateNode {
            id,
            inst,
            cell,
            ports,
        });
    }

    if let Some(caps) = EDGE_DECL.captures(line) {
        let port = |i: usize| caps.get(i).map_or("", |m| m.as_str());
        return Line::Edge(RawEdge::new(&caps[1], port(2), &caps[3], port(4)));
    }

    Line::Ignored
}

/// Instance name and cell type from a record label's central segment.
///
/// The segment splits on `\n` escapes into trimmed non-empty parts:
/// two parts are (instance, CELL); one part is the cell type with the node id
/// standing in as instance name; anything else falls back to the node id and
/// the placeholder cell type `GATE`.
fn central_label(label: &str, id: &str) -> (String, String) {
    if let Some(caps) = CENTRAL_LABEL.captures(label) {
        let mid = caps[1].replace("\\n", "\n");
        let parts: Vec<&str> = mid
            .lines()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();
        match parts[..] {
            [inst, cell] => return (inst.to_string(), cell.to_uppercase()),
            [cell] => return (id.to_string(), cell.to_uppercase()),
            _ => {}
        }
    }
    (id.to_string(), "GATE".to_string())
}

/// Parses the whole graph text into a [`Netlist`].
///
/// Infallible by construction: unmatched lines are ignored. Whether a gate
/// count of zero is fatal is the caller's decision.
pub fn parse_netgraph(text: &str) -> Netlist {
    let mut netlist = Netlist::new();

    for line in text.lines() {
        match classify_line(line) {
            Line::Variable(var) => {
                netlist.variables.insert(var.id.clone(), var);
            }
            Line::Gate(gate) => {
                netlist.gates.insert(gate.id.clone(), gate);
            }
            Line::Edge(edge) => netlist.edges.push(edge),
            Line::Ignored => {}
        }
    }

    let variable_count = netlist.variables.len();
    let gate_count = netlist.gates.len();
    let edge_count = netlist.edges.len();
    debug!(variable_count, gate_count, edge_count; "Netlist graph scanned");

    netlist
}
