//! Insertion-ordered edge accumulator shared by the evidence builders
//!
//! Edges are keyed by the canonical (sorted) node-id pair, so the builders
//! can process endpoints in either order and still land on the same edge.
//! Insertion order is preserved: the pruner's stable sort breaks weight
//! ties by it, which keeps the whole pipeline deterministic.

use super::edge::{canonical_pair, GraphEdge};
use super::node::{GraphNode, NodeId};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Get-or-create store for edges under construction.
pub struct EdgeAccumulator<'a> {
    nodes: &'a [GraphNode],
    node_index: HashMap<&'a NodeId, usize>,
    edge_index: HashMap<(NodeId, NodeId), usize>,
    edges: Vec<GraphEdge>,
    now: DateTime<Utc>,
}

impl<'a> EdgeAccumulator<'a> {
    /// Create an accumulator over the deduplicated node set.
    ///
    /// All edges created through this accumulator share one build
    /// timestamp.
    pub fn new(nodes: &'a [GraphNode], now: DateTime<Utc>) -> Self {
        let node_index = nodes.iter().enumerate().map(|(i, n)| (&n.id, i)).collect();
        Self {
            nodes,
            node_index,
            edge_index: HashMap::new(),
            edges: Vec::new(),
            now,
        }
    }

    /// The node set this accumulator was built over.
    pub fn nodes(&self) -> &'a [GraphNode] {
        self.nodes
    }

    /// Get the edge for an unordered pair, creating it with zero evidence
    /// on first access.
    ///
    /// Both ids must belong to the node set; an unknown id is a broken
    /// construction invariant, not an input error, and fails loudly.
    pub fn edge_mut(&mut self, a: &NodeId, b: &NodeId) -> &mut GraphEdge {
        let key = canonical_pair(a.clone(), b.clone());
        if let Some(&i) = self.edge_index.get(&key) {
            return &mut self.edges[i];
        }

        let node_a = self.lookup(a);
        let node_b = self.lookup(b);
        let edge = GraphEdge::between(node_a, node_b, self.now);

        let i = self.edges.len();
        self.edge_index.insert(key, i);
        self.edges.push(edge);
        &mut self.edges[i]
    }

    /// Consume the accumulator, yielding edges in creation order.
    pub fn into_edges(self) -> Vec<GraphEdge> {
        self.edges
    }

    fn lookup(&self, id: &NodeId) -> &'a GraphNode {
        match self.node_index.get(id) {
            Some(&i) => &self.nodes[i],
            None => panic!("edge references node id '{id}' absent from the node set"),
        }
    }
}
