//! Role-prior evidence from shared artifact roles
//!
//! A full O(n²) scan over the node set: any two distinct nodes with the
//! same artifact role get a fixed role-prior value, whether or not they
//! ever share a source. Role equality is binary, so the value is written,
//! not accumulated.

use super::evidence::EdgeAccumulator;

/// Default role-prior evidence for same-role pairs.
pub const ROLE_PRIOR_BASE: f64 = 0.3;

/// Write role-prior evidence onto every same-role node pair.
pub fn apply_role_prior(acc: &mut EdgeAccumulator<'_>, base: f64) {
    let nodes = acc.nodes();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if nodes[i].artifact_role != nodes[j].artifact_role {
                continue;
            }
            acc.edge_mut(&nodes[i].id, &nodes[j].id).weights.role_prior = base;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::dedup::dedupe_records;
    use crate::graph::GraphEdge;
    use crate::keyword::{ArtifactRole, RawKeywordRecord};
    use chrono::Utc;

    fn record(id: &str, term: &str, role: ArtifactRole) -> RawKeywordRecord {
        RawKeywordRecord::new(id, term).with_artifact_role(role)
    }

    fn run(records: &[RawKeywordRecord], base: f64) -> Vec<GraphEdge> {
        let dedup = dedupe_records(records);
        let mut acc = EdgeAccumulator::new(&dedup.nodes, Utc::now());
        apply_role_prior(&mut acc, base);
        acc.into_edges()
    }

    #[test]
    fn same_role_pairs_get_exactly_the_base() {
        let records = vec![
            record("a1", "Trust", ArtifactRole::Probe),
            record("b1", "Privacy", ArtifactRole::Probe),
            record("c1", "Consent", ArtifactRole::Probe),
        ];
        let edges = run(&records, ROLE_PRIOR_BASE);
        // All three pairs share the role.
        assert_eq!(edges.len(), 3);
        for edge in &edges {
            assert_eq!(edge.weights.role_prior, ROLE_PRIOR_BASE);
            assert_eq!(edge.weights.co_occurrence, 0.0);
        }
    }

    #[test]
    fn differing_roles_produce_no_evidence() {
        let records = vec![
            record("a1", "Trust", ArtifactRole::Probe),
            record("b1", "Privacy", ArtifactRole::CritiqueDevice),
        ];
        assert!(run(&records, ROLE_PRIOR_BASE).is_empty());
    }

    #[test]
    fn links_nodes_that_never_share_a_source() {
        let records = vec![
            record("a1", "Trust", ArtifactRole::Probe).with_source("P1"),
            record("b1", "Privacy", ArtifactRole::Probe).with_source("P2"),
        ];
        let edges = run(&records, ROLE_PRIOR_BASE);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].weights.role_prior, ROLE_PRIOR_BASE);
    }

    #[test]
    fn base_is_configurable() {
        let records = vec![
            record("a1", "Trust", ArtifactRole::Probe),
            record("b1", "Privacy", ArtifactRole::Probe),
        ];
        let edges = run(&records, 0.7);
        assert_eq!(edges[0].weights.role_prior, 0.7);
    }

    #[test]
    fn rerunning_overwrites_instead_of_accumulating() {
        let records = vec![
            record("a1", "Trust", ArtifactRole::Probe),
            record("b1", "Privacy", ArtifactRole::Probe),
        ];
        let dedup = dedupe_records(&records);
        let mut acc = EdgeAccumulator::new(&dedup.nodes, Utc::now());
        apply_role_prior(&mut acc, ROLE_PRIOR_BASE);
        apply_role_prior(&mut acc, ROLE_PRIOR_BASE);
        let edges = acc.into_edges();
        assert_eq!(edges[0].weights.role_prior, ROLE_PRIOR_BASE);
    }
}
