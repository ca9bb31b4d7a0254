//! Derived keyword profiles: orientation/role distributions and the term index
//!
//! A deterministic companion to the graph pipeline: the same raw records,
//! reduced to weight-sum distributions over the orientation and artifact
//! role axes, plus a term lookup index. Inactive records are excluded
//! before anything is computed.
//!
//! Note the index's duplicate policy differs from the graph deduplicator
//! on purpose: the index keeps the highest-weight record for a term,
//! while graph nodes take categorical fields from the first-seen record.

use crate::keyword::{ArtifactRole, Orientation, PipelineRole, RawKeywordRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DECIMALS: i32 = 4;

/// Terms grouped by orientation, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordMapByOrientation {
    pub exploratory: Vec<String>,
    pub critical: Vec<String>,
    pub problem_solving: Vec<String>,
    pub constructive: Vec<String>,
}

impl KeywordMapByOrientation {
    fn bucket_mut(&mut self, orientation: Orientation) -> &mut Vec<String> {
        match orientation {
            Orientation::Exploratory => &mut self.exploratory,
            Orientation::Critical => &mut self.critical,
            Orientation::ProblemSolving => &mut self.problem_solving,
            Orientation::Constructive => &mut self.constructive,
        }
    }
}

/// Metadata kept per term in the keyword index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordIndexEntry {
    pub orientation: Orientation,
    pub artifact_role: ArtifactRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_role: Option<PipelineRole>,
    pub weight: f64,
}

/// Fast lookup: term → metadata. Higher weight wins on duplicate terms.
pub type KeywordIndex = BTreeMap<String, KeywordIndexEntry>;

/// Normalized weight distribution over the four orientations (sums to 1).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpistemicProfile {
    pub exploratory: f64,
    pub critical: f64,
    pub problem_solving: f64,
    pub constructive: f64,
}

/// Normalized weight distribution over the five artifact roles (sums to 1).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtifactProfile {
    pub probe: f64,
    pub critique_device: f64,
    pub generative_construct: f64,
    pub solution_system: f64,
    pub epistemic_mediator: f64,
}

/// All derived fields computed from one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordProfiles {
    pub keyword_map_by_orientation: KeywordMapByOrientation,
    pub keyword_index: KeywordIndex,
    pub epistemic_profile: EpistemicProfile,
    pub artifact_profile: ArtifactProfile,
}

/// Compute keyword profiles over the active records of a snapshot.
pub fn sync_profiles(records: &[RawKeywordRecord]) -> KeywordProfiles {
    let active: Vec<&RawKeywordRecord> = records.iter().filter(|r| r.active).collect();

    let mut map = KeywordMapByOrientation::default();
    for record in &active {
        map.bucket_mut(record.orientation).push(record.term.clone());
    }

    let mut index = KeywordIndex::new();
    for record in &active {
        let replace = index
            .get(&record.term)
            .map(|existing| record.weight > existing.weight)
            .unwrap_or(true);
        if replace {
            index.insert(
                record.term.clone(),
                KeywordIndexEntry {
                    orientation: record.orientation,
                    artifact_role: record.artifact_role,
                    pipeline_role: record.pipeline_role,
                    weight: record.weight,
                },
            );
        }
    }

    let mut orientation_sums = [0.0_f64; 4];
    let mut role_sums = [0.0_f64; 5];
    for record in &active {
        orientation_sums[orientation_slot(record.orientation)] += record.weight;
        role_sums[role_slot(record.artifact_role)] += record.weight;
    }

    let orientation_dist = normalize(&orientation_sums);
    let role_dist = normalize(&role_sums);

    KeywordProfiles {
        keyword_map_by_orientation: map,
        keyword_index: index,
        epistemic_profile: EpistemicProfile {
            exploratory: orientation_dist[0],
            critical: orientation_dist[1],
            problem_solving: orientation_dist[2],
            constructive: orientation_dist[3],
        },
        artifact_profile: ArtifactProfile {
            probe: role_dist[0],
            critique_device: role_dist[1],
            generative_construct: role_dist[2],
            solution_system: role_dist[3],
            epistemic_mediator: role_dist[4],
        },
    }
}

/// Normalize raw sums so they total 1, rounded to 4 decimals; a zero total
/// falls back to the uniform distribution.
fn normalize<const N: usize>(raw: &[f64; N]) -> [f64; N] {
    let total: f64 = raw.iter().sum();
    let mut out = [0.0; N];
    if total == 0.0 {
        out.fill(round(1.0 / N as f64));
    } else {
        for (slot, value) in out.iter_mut().zip(raw) {
            *slot = round(value / total);
        }
    }
    out
}

fn round(value: f64) -> f64 {
    let factor = 10_f64.powi(DECIMALS);
    (value * factor).round() / factor
}

fn orientation_slot(orientation: Orientation) -> usize {
    match orientation {
        Orientation::Exploratory => 0,
        Orientation::Critical => 1,
        Orientation::ProblemSolving => 2,
        Orientation::Constructive => 3,
    }
}

fn role_slot(role: ArtifactRole) -> usize {
    match role {
        ArtifactRole::Probe => 0,
        ArtifactRole::CritiqueDevice => 1,
        ArtifactRole::GenerativeConstruct => 2,
        ArtifactRole::SolutionSystem => 3,
        ArtifactRole::EpistemicMediator => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        id: &str,
        term: &str,
        orientation: Orientation,
        role: ArtifactRole,
        weight: f64,
    ) -> RawKeywordRecord {
        RawKeywordRecord::new(id, term)
            .with_orientation(orientation)
            .with_artifact_role(role)
            .with_weight(weight)
    }

    #[test]
    fn groups_terms_by_orientation_in_order() {
        let records = vec![
            record("a", "Trust", Orientation::Exploratory, ArtifactRole::Probe, 1.0),
            record("b", "Power", Orientation::Critical, ArtifactRole::Probe, 1.0),
            record("c", "Repair", Orientation::Exploratory, ArtifactRole::Probe, 1.0),
        ];
        let profiles = sync_profiles(&records);
        assert_eq!(profiles.keyword_map_by_orientation.exploratory, vec!["Trust", "Repair"]);
        assert_eq!(profiles.keyword_map_by_orientation.critical, vec!["Power"]);
        assert!(profiles.keyword_map_by_orientation.constructive.is_empty());
    }

    #[test]
    fn inactive_records_excluded_everywhere() {
        let records = vec![
            record("a", "Trust", Orientation::Exploratory, ArtifactRole::Probe, 1.0),
            record("b", "Power", Orientation::Critical, ArtifactRole::Probe, 1.0).with_active(false),
        ];
        let profiles = sync_profiles(&records);
        assert!(profiles.keyword_map_by_orientation.critical.is_empty());
        assert!(!profiles.keyword_index.contains_key("Power"));
        assert_eq!(profiles.epistemic_profile.critical, 0.0);
    }

    #[test]
    fn index_keeps_highest_weight_duplicate() {
        let records = vec![
            record("a", "Trust", Orientation::Exploratory, ArtifactRole::Probe, 0.4),
            record("b", "Trust", Orientation::Critical, ArtifactRole::CritiqueDevice, 0.9),
            record("c", "Trust", Orientation::Constructive, ArtifactRole::SolutionSystem, 0.1),
        ];
        let profiles = sync_profiles(&records);
        let entry = &profiles.keyword_index["Trust"];
        assert_eq!(entry.weight, 0.9);
        assert_eq!(entry.orientation, Orientation::Critical);
        assert_eq!(entry.artifact_role, ArtifactRole::CritiqueDevice);
    }

    #[test]
    fn epistemic_profile_sums_to_one() {
        let records = vec![
            record("a", "Trust", Orientation::Exploratory, ArtifactRole::Probe, 0.6),
            record("b", "Power", Orientation::Critical, ArtifactRole::Probe, 0.2),
            record("c", "Repair", Orientation::Constructive, ArtifactRole::Probe, 0.2),
        ];
        let p = sync_profiles(&records).epistemic_profile;
        let total = p.exploratory + p.critical + p.problem_solving + p.constructive;
        assert!((total - 1.0).abs() < 1e-6);
        assert!((p.exploratory - 0.6).abs() < 1e-9);
    }

    #[test]
    fn zero_total_falls_back_to_uniform() {
        let records = vec![
            record("a", "Trust", Orientation::Exploratory, ArtifactRole::Probe, 0.0),
        ];
        let profiles = sync_profiles(&records);
        assert_eq!(profiles.epistemic_profile.exploratory, 0.25);
        assert_eq!(profiles.epistemic_profile.critical, 0.25);
        assert_eq!(profiles.artifact_profile.probe, 0.2);
        assert_eq!(profiles.artifact_profile.epistemic_mediator, 0.2);
    }

    #[test]
    fn values_rounded_to_four_decimals() {
        let records = vec![
            record("a", "A", Orientation::Exploratory, ArtifactRole::Probe, 1.0),
            record("b", "B", Orientation::Critical, ArtifactRole::Probe, 1.0),
            record("c", "C", Orientation::Constructive, ArtifactRole::Probe, 1.0),
        ];
        let p = sync_profiles(&records).epistemic_profile;
        assert_eq!(p.exploratory, 0.3333);
    }

    #[test]
    fn empty_snapshot_gets_uniform_profiles() {
        let profiles = sync_profiles(&[]);
        assert_eq!(profiles.epistemic_profile.exploratory, 0.25);
        assert_eq!(profiles.artifact_profile.probe, 0.2);
        assert!(profiles.keyword_index.is_empty());
    }
}
