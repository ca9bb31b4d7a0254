//! Co-occurrence evidence from shared provenance
//!
//! Nodes whose originating records carry the same source label co-occur.
//! Every unordered pair within a source group gains a constant increment
//! `1 / totalDistinctSources`, additively across groups, capped at 1.0
//! after each increment. The divisor counts every distinct source label in
//! the corpus, including single-member groups that produce no pairs.

use super::evidence::EdgeAccumulator;
use super::node::NodeId;
use crate::keyword::RawKeywordRecord;
use std::collections::HashMap;

/// Accumulate co-occurrence evidence onto the edge set.
///
/// `record_to_node` is the deduplicator's id map; records that were
/// skipped as malformed are absent from it and contribute nothing, as do
/// records without a source label.
pub fn apply_cooccurrence(
    records: &[RawKeywordRecord],
    record_to_node: &HashMap<String, NodeId>,
    acc: &mut EdgeAccumulator<'_>,
) {
    let groups = source_groups(records, record_to_node);
    if groups.is_empty() {
        return;
    }

    let increment = 1.0 / groups.len() as f64;

    for (_, members) in &groups {
        if members.len() < 2 {
            continue;
        }
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                let edge = acc.edge_mut(&members[i], &members[j]);
                edge.weights.co_occurrence =
                    (edge.weights.co_occurrence + increment).min(1.0);
            }
        }
    }
}

/// Group canonical node ids by source label.
///
/// Both the group list and each member list preserve first-appearance
/// order, and a node appears at most once per source even when several of
/// its records share that source.
fn source_groups(
    records: &[RawKeywordRecord],
    record_to_node: &HashMap<String, NodeId>,
) -> Vec<(String, Vec<NodeId>)> {
    let mut group_index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<NodeId>)> = Vec::new();

    for record in records {
        let Some(source) = record.source.as_deref() else {
            continue;
        };
        let Some(node_id) = record_to_node.get(&record.id) else {
            continue;
        };

        let i = match group_index.get(source) {
            Some(&i) => i,
            None => {
                group_index.insert(source, groups.len());
                groups.push((source.to_string(), Vec::new()));
                groups.len() - 1
            }
        };
        let members = &mut groups[i].1;
        if !members.contains(node_id) {
            members.push(node_id.clone());
        }
    }

    groups
}
