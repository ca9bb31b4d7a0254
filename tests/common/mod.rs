//! Shared builders for integration scenarios

use constellation::{ArtifactRole, Orientation, RawKeywordRecord};

/// A minimal active record with the given id and term.
pub fn keyword(id: &str, term: &str) -> RawKeywordRecord {
    RawKeywordRecord::new(id, term)
}

/// A record carrying a provenance label.
pub fn sourced(id: &str, term: &str, source: &str) -> RawKeywordRecord {
    RawKeywordRecord::new(id, term).with_source(source)
}

/// A fully specified record.
pub fn record(
    id: &str,
    term: &str,
    orientation: Orientation,
    role: ArtifactRole,
    weight: f64,
    source: Option<&str>,
) -> RawKeywordRecord {
    let mut r = RawKeywordRecord::new(id, term)
        .with_orientation(orientation)
        .with_artifact_role(role)
        .with_weight(weight);
    if let Some(source) = source {
        r = r.with_source(source);
    }
    r
}
