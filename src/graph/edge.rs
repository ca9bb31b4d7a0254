//! Edge representation with multi-channel evidence weights

use super::node::{GraphNode, NodeId};
use crate::keyword::{ArtifactRole, Orientation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Epistemic relationship between two keyword nodes.
///
/// Fixed at edge creation from the endpoints' orientation and artifact
/// role; never recomputed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// Same orientation and same artifact role.
    Reinforces,
    /// Same orientation, different artifact role.
    Extends,
    /// Different orientation, same artifact role.
    Contextualizes,
    /// Cross-orientation, cross-role tension.
    Challenges,
}

impl EdgeType {
    /// Classify the relationship between two endpoint nodes.
    pub fn between(a: &GraphNode, b: &GraphNode) -> Self {
        Self::classify(a.orientation, a.artifact_role, b.orientation, b.artifact_role)
    }

    fn classify(
        orientation_a: Orientation,
        role_a: ArtifactRole,
        orientation_b: Orientation,
        role_b: ArtifactRole,
    ) -> Self {
        let same_orientation = orientation_a == orientation_b;
        let same_role = role_a == role_b;
        match (same_orientation, same_role) {
            (true, true) => EdgeType::Reinforces,
            (true, false) => EdgeType::Extends,
            (false, true) => EdgeType::Contextualizes,
            (false, false) => EdgeType::Challenges,
        }
    }
}

/// Per-channel evidence contributing to an edge's blended weight.
///
/// `semantic`, `user_history`, and `manual` are reserved channels: they
/// stay 0 until a future signal source populates them, but remain
/// first-class fields so the edge schema never changes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeWeights {
    pub co_occurrence: f64,
    pub semantic: f64,
    pub role_prior: f64,
    pub user_history: f64,
    pub manual: f64,
}

/// An undirected, weighted relationship between two nodes.
///
/// Stored canonically: `source` is always the lexicographically smaller
/// node id, so (A,B) and (B,A) resolve to the same edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weights: EdgeWeights,
    /// Blended (and, after decay, rescaled) scalar weight.
    pub final_weight: f64,
    pub edge_type: EdgeType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GraphEdge {
    /// Create a zero-evidence edge between two nodes, canonically ordered.
    ///
    /// The edge type is inferred from the endpoints once, here.
    pub fn between(a: &GraphNode, b: &GraphNode, now: DateTime<Utc>) -> Self {
        let edge_type = EdgeType::between(a, b);
        let (source, target) = canonical_pair(a.id.clone(), b.id.clone());
        Self {
            source,
            target,
            weights: EdgeWeights::default(),
            final_weight: 0.0,
            edge_type,
            created_at: now,
            updated_at: now,
        }
    }

    /// True if this edge touches the given node.
    pub fn touches(&self, id: &NodeId) -> bool {
        self.source == *id || self.target == *id
    }

    /// The endpoint opposite to `id`. Returns `source` when `id` is not an
    /// endpoint; callers check `touches` first.
    pub fn other_endpoint(&self, id: &NodeId) -> &NodeId {
        if self.source == *id {
            &self.target
        } else {
            &self.source
        }
    }
}

/// Order a node-id pair canonically: lexicographically smaller id first.
///
/// Every edge lookup and insertion goes through this, so an unordered
/// pair maps to exactly one key.
pub fn canonical_pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a.as_str() <= b.as_str() {
        (a, b)
    } else {
        (b, a)
    }
}
