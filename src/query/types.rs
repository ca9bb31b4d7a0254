//! Query result structures

use crate::graph::{EdgeType, NodeId};
use serde::{Deserialize, Serialize};

/// One neighbor of the queried node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighbor {
    pub neighbor_id: NodeId,
    /// The connecting edge's final weight.
    pub weight: f64,
    pub edge_type: EdgeType,
}

/// Result of a neighbor query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborResult {
    pub node_id: NodeId,
    /// Neighbors in non-increasing weight order, at most k of them.
    pub neighbors: Vec<Neighbor>,
}
