//! Node metadata for the resolved semantic graph.

use serde::{Deserialize, Serialize};

/// Kind of a semantic-graph node.
///
/// The string forms are stable: they appear in the exported node table and
/// define the export sort order (gates before variables).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Variable,
    Gate,
}

impl NodeKind {
    /// Stable lowercase form used in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Variable => "variable",
            NodeKind::Gate => "gate",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-node metadata, keyed by display name in the semantic graph.
///
/// `cell` and `inst` are empty for variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMeta {
    pub name: String,
    pub kind: NodeKind,
    pub cell: String,
    pub inst: String,
}

impl NodeMeta {
    /// Metadata for a variable node.
    pub fn variable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Variable,
            cell: String::new(),
            inst: String::new(),
        }
    }

    /// Metadata for a gate node.
    pub fn gate(
        name: impl Into<String>,
        cell: impl Into<String>,
        inst: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Gate,
            cell: cell.into(),
            inst: inst.into(),
        }
    }
}
