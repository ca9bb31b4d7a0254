//! Input model: raw keyword records as supplied by the external store.
//!
//! Records arrive as an ordered JSON array. Deserialization is lenient:
//! `weight` defaults to 1.0 and `active` to true when absent, matching
//! what the upstream store actually sends.

use serde::{Deserialize, Serialize};

/// Epistemic stance attached to a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Exploratory,
    Critical,
    ProblemSolving,
    Constructive,
}

impl Orientation {
    /// All orientations, in canonical order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Exploratory,
        Orientation::Critical,
        Orientation::ProblemSolving,
        Orientation::Constructive,
    ];
}

/// Kind of research artifact a keyword relates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactRole {
    Probe,
    CritiqueDevice,
    GenerativeConstruct,
    SolutionSystem,
    EpistemicMediator,
}

impl ArtifactRole {
    /// All artifact roles, in canonical order.
    pub const ALL: [ArtifactRole; 5] = [
        ArtifactRole::Probe,
        ArtifactRole::CritiqueDevice,
        ArtifactRole::GenerativeConstruct,
        ArtifactRole::SolutionSystem,
        ArtifactRole::EpistemicMediator,
    ];
}

/// Where a keyword plugs into the downstream framing pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineRole {
    RqTrigger,
    MethodBias,
    ContributionFrame,
    ToneModifier,
}

/// A single keyword occurrence from the external store.
///
/// Multiple records may share the same normalized term; the graph builder
/// folds them into one node per term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawKeywordRecord {
    /// Unique record id assigned by the store.
    pub id: String,
    /// Display text of the term.
    pub term: String,
    pub orientation: Orientation,
    pub artifact_role: ArtifactRole,
    /// Relevance weight, conventionally 0–1.
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Provenance label (e.g. a paper identifier). Records without one
    /// contribute no co-occurrence evidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_role: Option<PipelineRole>,
}

fn default_weight() -> f64 {
    1.0
}

fn default_active() -> bool {
    true
}

impl RawKeywordRecord {
    /// Create a record with the given id and term, defaults elsewhere.
    pub fn new(id: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            term: term.into(),
            orientation: Orientation::Exploratory,
            artifact_role: ArtifactRole::Probe,
            weight: 1.0,
            active: true,
            notes: None,
            source: None,
            pipeline_role: None,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_artifact_role(mut self, role: ArtifactRole) -> Self {
        self.artifact_role = role;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_pipeline_role(mut self, role: PipelineRole) -> Self {
        self.pipeline_role = Some(role);
        self
    }

    /// A record is usable when both id and term carry non-blank text.
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty() && !self.term.trim().is_empty()
    }

    /// Normalized dedup key: lowercased, with whitespace runs collapsed
    /// to single spaces and leading/trailing whitespace removed.
    pub fn normalized_term(&self) -> String {
        self.term
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_serializes_snake_case() {
        let json = serde_json::to_string(&Orientation::ProblemSolving).unwrap();
        assert_eq!(json, "\"problem_solving\"");
    }

    #[test]
    fn artifact_role_roundtrip() {
        for role in ArtifactRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            let back: ArtifactRole = serde_json::from_str(&json).unwrap();
            assert_eq!(role, back);
        }
    }

    #[test]
    fn record_defaults_applied_on_deserialize() {
        let json = r#"{
            "id": "k1",
            "term": "Trust",
            "orientation": "exploratory",
            "artifact_role": "probe"
        }"#;
        let record: RawKeywordRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.weight, 1.0);
        assert!(record.active);
        assert!(record.source.is_none());
    }

    #[test]
    fn blank_term_is_malformed() {
        let record = RawKeywordRecord::new("k1", "   ");
        assert!(!record.is_well_formed());
        assert!(RawKeywordRecord::new("k1", "Trust").is_well_formed());
        assert!(!RawKeywordRecord::new(" ", "Trust").is_well_formed());
    }

    #[test]
    fn normalized_term_lowercases_and_collapses_whitespace() {
        let record = RawKeywordRecord::new("k1", "  Participatory   Design ");
        assert_eq!(record.normalized_term(), "participatory design");
    }
}
