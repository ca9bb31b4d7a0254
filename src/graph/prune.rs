//! Pruning: weight threshold plus per-node degree cap
//!
//! Two-stage filter over blended (and usually decayed) edges: drop edges
//! below the minimum weight, then admit the rest greedily in descending
//! weight order while both endpoints remain under the degree cap. The
//! sort is stable, so equal-weight edges keep their creation order.
//!
//! Greedy admission is a deliberate approximation: it is not an optimal
//! degree-constrained (b-matching) selection, and a heavier edge admitted
//! early can crowd out two lighter edges that would have covered more
//! nodes. Exact parity with this behavior matters more than optimality.

use super::edge::GraphEdge;
use super::node::NodeId;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Default maximum number of surviving edges per node.
pub const MAX_EDGES_PER_NODE: usize = 8;

/// Default minimum surviving `final_weight`.
pub const MIN_FINAL_WEIGHT: f64 = 0.05;

/// Filter low-weight edges and cap per-node degree.
pub fn prune_edges(
    edges: Vec<GraphEdge>,
    max_per_node: usize,
    min_weight: f64,
) -> Vec<GraphEdge> {
    let mut filtered: Vec<GraphEdge> = edges
        .into_iter()
        .filter(|e| e.final_weight >= min_weight)
        .collect();

    // Stable: ties keep creation order.
    filtered.sort_by(|a, b| {
        b.final_weight
            .partial_cmp(&a.final_weight)
            .unwrap_or(Ordering::Equal)
    });

    let mut degree: HashMap<NodeId, usize> = HashMap::new();
    let mut admitted = Vec::with_capacity(filtered.len());

    for edge in filtered {
        let source_degree = degree.get(&edge.source).copied().unwrap_or(0);
        let target_degree = degree.get(&edge.target).copied().unwrap_or(0);
        if source_degree < max_per_node && target_degree < max_per_node {
            degree.insert(edge.source.clone(), source_degree + 1);
            degree.insert(edge.target.clone(), target_degree + 1);
            admitted.push(edge);
        }
    }

    admitted
}
