//! The resolved semantic graph.
//!
//! Nodes are variables and gates keyed by display name; every edge means
//! "source drives target". The petgraph storage keeps parallel edges (the
//! resolver never deduplicates) and iterates edges in insertion order, which
//! the exporters rely on.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use gategraph_core::semantic::NodeMeta;

/// Directed drives-graph between named variable and gate nodes.
#[derive(Debug)]
pub struct SemanticGraph {
    graph: DiGraph<NodeMeta, ()>,
    names: HashMap<String, NodeIndex>,
}

impl SemanticGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            names: HashMap::new(),
        }
    }

    /// Registers a node under its display name.
    ///
    /// When the name is already present the existing node wins and its index
    /// is returned; the caller decides whether that is acceptable (variables
    /// yielding to gates) or an integrity error (two gates).
    pub fn register(&mut self, meta: NodeMeta) -> NodeIndex {
        if let Some(&idx) = self.names.get(&meta.name) {
            return idx;
        }
        let name = meta.name.clone();
        let idx = self.graph.add_node(meta);
        self.names.insert(name, idx);
        idx
    }

    /// Whether a node with this display name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Metadata for a display name, if registered.
    pub fn node(&self, name: &str) -> Option<&NodeMeta> {
        self.names.get(name).map(|&idx| &self.graph[idx])
    }

    /// Adds a drives-edge between two registered display names.
    ///
    /// Returns `false` (edge dropped) when either endpoint is unknown.
    /// Parallel edges between the same pair are kept.
    pub fn connect(&mut self, source: &str, target: &str) -> bool {
        match (self.names.get(source), self.names.get(target)) {
            (Some(&src), Some(&dst)) => {
                self.graph.add_edge(src, dst, ());
                true
            }
            _ => false,
        }
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates over node metadata in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeMeta> {
        self.graph.node_weights()
    }

    /// Iterates over edges as (source name, target name) pairs in insertion
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].name.as_str(),
                self.graph[edge.target()].name.as_str(),
            )
        })
    }
}

impl Default for SemanticGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gategraph_core::semantic::{NodeKind, NodeMeta};

    #[test]
    fn test_register_and_lookup() {
        let mut graph = SemanticGraph::new();
        graph.register(NodeMeta::variable("sig1"));
        graph.register(NodeMeta::gate("U1 nor2", "NOR2", "U1"));

        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains("sig1"));
        assert_eq!(graph.node("U1 nor2").map(|m| m.kind), Some(NodeKind::Gate));
        assert!(graph.node("missing").is_none());
    }

    #[test]
    fn test_first_registration_wins() {
        let mut graph = SemanticGraph::new();
        let first = graph.register(NodeMeta::gate("clash", "NOR2", "U1"));
        let second = graph.register(NodeMeta::variable("clash"));

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.node("clash").map(|m| m.kind), Some(NodeKind::Gate));
    }

    #[test]
    fn test_connect_unknown_endpoint_is_dropped() {
        let mut graph = SemanticGraph::new();
        graph.register(NodeMeta::variable("a"));

        assert!(!graph.connect("a", "ghost"));
        assert!(!graph.connect("ghost", "a"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_parallel_edges_kept_in_order() {
        let mut graph = SemanticGraph::new();
        graph.register(NodeMeta::variable("a"));
        graph.register(NodeMeta::variable("b"));
        graph.register(NodeMeta::variable("c"));

        assert!(graph.connect("a", "b"));
        assert!(graph.connect("c", "b"));
        assert!(graph.connect("a", "b"));

        let edges: Vec<(&str, &str)> = graph.edges().collect();
        assert_eq!(edges, vec![("a", "b"), ("c", "b"), ("a", "b")]);
    }
}
