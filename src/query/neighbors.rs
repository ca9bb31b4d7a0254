//! Top-k neighbor queries over the pruned edge list

use super::types::{Neighbor, NeighborResult};
use crate::graph::{GraphEdge, NodeId};
use std::cmp::Ordering;

/// Default number of neighbors returned.
pub const DEFAULT_K: usize = 5;

/// Query for a node's strongest surviving connections.
#[derive(Debug, Clone)]
pub struct NeighborQuery {
    node_id: NodeId,
    k: usize,
}

impl NeighborQuery {
    /// Create a query for the given node with the default k.
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id,
            k: DEFAULT_K,
        }
    }

    /// Limit the number of neighbors returned.
    pub fn top_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Execute the query against a pruned edge list.
    ///
    /// A node with no edges (or an id absent from the graph) yields an
    /// empty result, not an error.
    pub fn execute(&self, edges: &[GraphEdge]) -> NeighborResult {
        let mut neighbors: Vec<Neighbor> = edges
            .iter()
            .filter(|e| e.touches(&self.node_id))
            .map(|e| Neighbor {
                neighbor_id: e.other_endpoint(&self.node_id).clone(),
                weight: e.final_weight,
                edge_type: e.edge_type,
            })
            .collect();

        // Stable: equal weights keep edge-list order.
        neighbors.sort_by(|a, b| {
            b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal)
        });
        neighbors.truncate(self.k);

        NeighborResult {
            node_id: self.node_id.clone(),
            neighbors,
        }
    }
}
