//! Raw visualization-graph model.
//!
//! These types mirror what the synthesis viewer's graph file actually says:
//! variable (net) nodes, gate instances with their port maps, and directionless
//! raw edges between opaque node identifiers. Signal-flow direction is only
//! assigned later, by the semantic resolver.

use indexmap::IndexMap;

/// Kind of a raw graph endpoint, distinguished by the one-character prefix of
/// its node identifier: `n` for variables, `c` for gates, `x` for the
/// routing junctions the viewer inserts for fan-out drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    /// A net/variable node.
    Variable,
    /// A gate-instance node.
    Gate,
    /// A synthetic routing junction; carries no circuit semantics.
    Junction,
}

impl EndpointKind {
    /// Classifies a raw node identifier by its kind prefix.
    ///
    /// Returns `None` for identifiers outside the three known families.
    pub fn of(id: &str) -> Option<EndpointKind> {
        match id.as_bytes().first() {
            Some(b'n') => Some(EndpointKind::Variable),
            Some(b'c') => Some(EndpointKind::Gate),
            Some(b'x') => Some(EndpointKind::Junction),
            _ => None,
        }
    }
}

/// A net/variable node as declared in the source graph.
///
/// The `id` is unique within the source graph; the display `name` is the
/// attached label and may collide across distinct ids. Names, not ids, become
/// the semantic-graph node key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarNode {
    /// Opaque source identifier (`n<digits>`).
    pub id: String,
    /// Display name from the node label.
    pub name: String,
}

/// A gate-instance node as declared in the source graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateNode {
    /// Opaque source identifier (`c<digits>`).
    pub id: String,
    /// Instance name; defaults to the source identifier when the label does
    /// not carry one.
    pub inst: String,
    /// Cell-type name, uppercased.
    pub cell: String,
    /// Port-tag (`p<digits>`) to pin-name map. Tags are only meaningful
    /// relative to this gate's own port map.
    pub ports: IndexMap<String, String>,
}

impl GateNode {
    /// Display name under which this gate appears in the semantic graph:
    /// instance name followed by the lowercased cell type.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.inst, self.cell.to_lowercase())
    }

    /// Pin name for a port tag, or `""` when the tag is absent.
    pub fn pin_for_port(&self, port: &str) -> &str {
        self.ports.get(port).map(String::as_str).unwrap_or("")
    }
}

/// A raw edge between two opaque node identifiers, with optional port tags.
///
/// Directionless with respect to signal flow: the source/target order only
/// reflects the drawing order in the source graph. An absent port tag is the
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEdge {
    pub source: String,
    pub source_port: String,
    pub target: String,
    pub target_port: String,
}

impl RawEdge {
    /// Creates a raw edge from its four components.
    pub fn new(
        source: impl Into<String>,
        source_port: impl Into<String>,
        target: impl Into<String>,
        target_port: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            source_port: source_port.into(),
            target: target.into(),
            target_port: target_port.into(),
        }
    }

    /// Kind of the source endpoint, by id prefix.
    pub fn source_kind(&self) -> Option<EndpointKind> {
        EndpointKind::of(&self.source)
    }

    /// Kind of the target endpoint, by id prefix.
    pub fn target_kind(&self) -> Option<EndpointKind> {
        EndpointKind::of(&self.target)
    }

    /// Whether either endpoint is a routing junction.
    pub fn touches_junction(&self) -> bool {
        self.source_kind() == Some(EndpointKind::Junction)
            || self.target_kind() == Some(EndpointKind::Junction)
    }
}

/// Everything the graph reader extracted from one visualization-graph file.
///
/// Variables and gates are keyed by their source identifiers in declaration
/// order; edges keep file order.
#[derive(Debug, Clone, Default)]
pub struct Netlist {
    pub variables: IndexMap<String, VarNode>,
    pub gates: IndexMap<String, GateNode>,
    pub edges: Vec<RawEdge>,
}

impl Netlist {
    /// Creates an empty netlist.
    pub fn new() -> Self {
        Self::default()
    }
}
