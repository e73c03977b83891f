//! In-memory relationship graph shared across a corpus.
//!
//! Nodes are plain string keys. Aliases, document identities and rendered
//! content all live in the same key space, so two pieces of content that
//! render to the same text are the same node. Nodes are created implicitly
//! when an edge touching them is added; nothing is ever removed.
//!
//! # Components
//!
//! - [`NoteGraph`] - petgraph-backed directed graph keyed by string
//! - [`Relationship`] - ALIAS / CHILDOF / LINKSTO edge tag
//! - [`export`] - DOT and JSON writers

pub mod export;
mod relationship;

pub use export::{to_dot, to_json, write_graph, ExportFormat};
pub use relationship::{NoteEdge, Relationship};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;

/// Directed graph of notes, content nodes and references.
///
/// Not synchronized: parallel builders should each fill their own graph and
/// combine them with [`NoteGraph::merge`].
#[derive(Debug, Clone, Default)]
pub struct NoteGraph {
    graph: DiGraph<String, Relationship>,
    node_index: HashMap<String, NodeIndex>,
}

impl NoteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    fn index_of(&mut self, key: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(key) {
            return idx;
        }
        let idx = self.graph.add_node(key.to_string());
        self.node_index.insert(key.to_string(), idx);
        idx
    }

    /// Add an edge, creating either endpoint if needed.
    ///
    /// Re-adding an identical (source, target, relationship) triple is a
    /// no-op. Returns `true` when a new edge was inserted.
    pub fn add_edge(&mut self, source: &str, target: &str, relationship: Relationship) -> bool {
        let from = self.index_of(source);
        let to = self.index_of(target);

        if self
            .graph
            .edges_connecting(from, to)
            .any(|e| *e.weight() == relationship)
        {
            return false;
        }

        self.graph.add_edge(from, to, relationship);
        true
    }

    /// Record that `alias` names the document `identity`.
    pub fn add_alias(&mut self, alias: &str, identity: &str) -> bool {
        self.add_edge(alias, identity, Relationship::Alias)
    }

    /// Record that `child` nests under `parent`. Self-loops are never stored.
    pub fn add_child_of(&mut self, child: &str, parent: &str) -> bool {
        if child == parent {
            return false;
        }
        self.add_edge(child, parent, Relationship::ChildOf)
    }

    /// Record that the content node `source` references `target`.
    pub fn add_links_to(&mut self, source: &str, target: &str) -> bool {
        self.add_edge(source, target, Relationship::LinksTo)
    }

    /// Check whether any edge runs from `source` to `target`.
    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        !self.relationships(source, target).is_empty()
    }

    /// Check for an edge with a specific relationship.
    pub fn has_relationship(&self, source: &str, target: &str, relationship: Relationship) -> bool {
        self.relationships(source, target).contains(&relationship)
    }

    /// All relationships recorded from `source` to `target`, in insertion order.
    pub fn relationships(&self, source: &str, target: &str) -> Vec<Relationship> {
        match (self.node_index.get(source), self.node_index.get(target)) {
            (Some(&from), Some(&to)) => {
                let mut rels: Vec<_> = self
                    .graph
                    .edges_connecting(from, to)
                    .map(|e| (e.id(), *e.weight()))
                    .collect();
                rels.sort_by_key(|(id, _)| *id);
                rels.into_iter().map(|(_, rel)| rel).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Check whether a node with this key exists.
    pub fn contains_node(&self, key: &str) -> bool {
        self.node_index.contains_key(key)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Node keys in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_weights().map(String::as_str)
    }

    /// Edges in insertion order as (source, target, relationship).
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, Relationship)> + '_ {
        self.graph.edge_references().map(move |e| {
            (
                self.graph[e.source()].as_str(),
                self.graph[e.target()].as_str(),
                *e.weight(),
            )
        })
    }

    /// Owned copy of every edge, in insertion order.
    pub fn edge_list(&self) -> Vec<NoteEdge> {
        self.edges()
            .map(|(s, t, r)| NoteEdge::new(s, t, r))
            .collect()
    }

    /// Union another graph into this one.
    pub fn merge(&mut self, other: &NoteGraph) {
        for node in other.nodes() {
            self.index_of(node);
        }
        for (source, target, relationship) in other.edges() {
            self.add_edge(source, target, relationship);
        }
    }

    /// Get statistics about the graph.
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count(),
            ..Default::default()
        };

        for edge in self.graph.edge_weights() {
            match edge {
                Relationship::Alias => stats.alias += 1,
                Relationship::ChildOf => stats.childof += 1,
                Relationship::LinksTo => stats.linksto += 1,
            }
        }

        stats
    }

    /// SHA-256 over the sorted edge triples.
    ///
    /// Independent of insertion order, so two builds of the same corpus
    /// produce the same fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut triples: Vec<(&str, &str, Relationship)> = self.edges().collect();
        triples.sort();

        let mut hasher = Sha256::new();
        for (source, target, relationship) in triples {
            hasher.update(source.as_bytes());
            hasher.update([0u8]);
            hasher.update(target.as_bytes());
            hasher.update([0u8]);
            hasher.update(relationship.as_str().as_bytes());
            hasher.update([b'\n']);
        }
        hex::encode(hasher.finalize())
    }
}

/// Node and edge counts, broken down by relationship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub alias: usize,
    pub childof: usize,
    pub linksto: usize,
}

impl GraphStats {
    /// Edge count for one relationship.
    pub fn count(&self, relationship: Relationship) -> usize {
        match relationship {
            Relationship::Alias => self.alias,
            Relationship::ChildOf => self.childof,
            Relationship::LinksTo => self.linksto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_created_implicitly() {
        let mut graph = NoteGraph::new();
        assert!(graph.is_empty());

        graph.add_alias("a", "foo");
        assert!(graph.contains_node("a"));
        assert!(graph.contains_node("foo"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_identical_edge_is_idempotent() {
        let mut graph = NoteGraph::new();
        assert!(graph.add_links_to("x", "y"));
        assert!(!graph.add_links_to("x", "y"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_distinct_relationships_coexist() {
        let mut graph = NoteGraph::new();
        graph.add_child_of("x", "y");
        graph.add_links_to("x", "y");
        assert_eq!(
            graph.relationships("x", "y"),
            vec![Relationship::ChildOf, Relationship::LinksTo]
        );
        assert!(!graph.has_edge("y", "x"));
    }

    #[test]
    fn test_child_of_suppresses_self_loop() {
        let mut graph = NoteGraph::new();
        assert!(!graph.add_child_of("same", "same"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_fingerprint_ignores_insertion_order() {
        let mut first = NoteGraph::new();
        first.add_alias("a", "doc");
        first.add_links_to("item", "a");

        let mut second = NoteGraph::new();
        second.add_links_to("item", "a");
        second.add_alias("a", "doc");

        assert_eq!(first.fingerprint(), second.fingerprint());

        second.add_child_of("item", "doc");
        assert_ne!(first.fingerprint(), second.fingerprint());
    }

    #[test]
    fn test_merge_unions_edges() {
        let mut left = NoteGraph::new();
        left.add_alias("a", "doc");

        let mut right = NoteGraph::new();
        right.add_alias("a", "doc");
        right.add_child_of("item", "doc");

        left.merge(&right);
        assert_eq!(left.edge_count(), 2);
        assert_eq!(left.node_count(), 3);
    }

    #[test]
    fn test_stats_by_relationship() {
        let mut graph = NoteGraph::new();
        graph.add_alias("a", "doc");
        graph.add_alias("b", "doc");
        graph.add_child_of("item", "doc");
        graph.add_links_to("item", "a");

        let stats = graph.stats();
        assert_eq!(stats.alias, 2);
        assert_eq!(stats.childof, 1);
        assert_eq!(stats.linksto, 1);
        assert_eq!(stats.edges, 4);
        assert_eq!(stats.nodes, 4);
        assert_eq!(stats.count(Relationship::Alias), 2);
        assert_eq!(stats.count(Relationship::LinksTo), 1);
    }
}
