//! Node representation in the constellation graph

use crate::keyword::{ArtifactRole, Orientation};
use serde::{Deserialize, Serialize};

/// Unique identifier for a node.
///
/// Node ids are the record ids of canonical keyword occurrences, assigned
/// by the external store. Serializes as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from a string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A deduplicated keyword term in the constellation graph.
///
/// One node exists per normalized term. Categorical fields come from the
/// canonical (first-seen) record; `weight`, `active`, `frequency`, and
/// `source_papers` aggregate over every record folded into the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Id of the canonical record for this term.
    pub id: NodeId,
    /// Display text, original casing of the canonical record.
    pub term: String,
    pub orientation: Orientation,
    pub artifact_role: ArtifactRole,
    /// Max weight across merged records.
    pub weight: f64,
    /// True if any merged record is active.
    pub active: bool,
    /// How many records were merged into this node.
    pub frequency: usize,
    /// Deduplicated provenance labels across merged records.
    #[serde(rename = "sourcePapers")]
    pub source_papers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
