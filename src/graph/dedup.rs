//! Folding raw keyword occurrences into canonical graph nodes
//!
//! Records are grouped by normalized term (lowercased, whitespace
//! collapsed). The first record of each group, in input order, is the
//! canonical representative: it supplies the node id, term casing,
//! orientation, artifact role, and notes. Later records only contribute
//! to the aggregates (max weight, OR'd active, frequency, source union).

use super::node::{GraphNode, NodeId};
use crate::keyword::RawKeywordRecord;
use std::collections::HashMap;
use tracing::debug;

/// Output of node deduplication.
#[derive(Debug, Clone, Default)]
pub struct DedupResult {
    /// One node per normalized term, in first-appearance order.
    pub nodes: Vec<GraphNode>,
    /// Map from every original record id to its canonical node id.
    pub record_to_node: HashMap<String, NodeId>,
}

/// Fold raw records into canonical nodes.
///
/// Records with a blank `id` or `term` are data-quality noise from the
/// external store: skipped, not fatal.
pub fn dedupe_records(records: &[RawKeywordRecord]) -> DedupResult {
    // Group indices by normalized term, preserving first-appearance order
    // so canonical ids are stable for a given input snapshot.
    let mut group_index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<&RawKeywordRecord>> = Vec::new();

    for record in records {
        if !record.is_well_formed() {
            debug!(id = %record.id, "skipping malformed keyword record");
            continue;
        }
        let key = record.normalized_term();
        match group_index.get(&key) {
            Some(&i) => groups[i].push(record),
            None => {
                group_index.insert(key, groups.len());
                groups.push(vec![record]);
            }
        }
    }

    let mut nodes = Vec::with_capacity(groups.len());
    let mut record_to_node = HashMap::new();

    for group in &groups {
        let canonical = group[0];
        let node_id = NodeId::from_string(&canonical.id);

        let mut source_papers: Vec<String> = Vec::new();
        for record in group {
            if let Some(source) = &record.source {
                if !source_papers.contains(source) {
                    source_papers.push(source.clone());
                }
            }
        }

        nodes.push(GraphNode {
            id: node_id.clone(),
            term: canonical.term.clone(),
            orientation: canonical.orientation,
            artifact_role: canonical.artifact_role,
            weight: group.iter().map(|r| r.weight).fold(f64::NEG_INFINITY, f64::max),
            active: group.iter().any(|r| r.active),
            frequency: group.len(),
            source_papers,
            notes: canonical.notes.clone(),
        });

        for record in group {
            record_to_node.insert(record.id.clone(), node_id.clone());
        }
    }

    debug!(
        records = records.len(),
        nodes = nodes.len(),
        "deduplicated keyword records"
    );

    DedupResult { nodes, record_to_node }
}
