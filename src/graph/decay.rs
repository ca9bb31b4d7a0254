//! Half-life decay of edge weights
//!
//! Rescales each edge's blended weight by `0.5 ^ (days / half_life)`,
//! where `days` is the age of the edge's `updated_at` timestamp. A pure
//! transform: input edges are left untouched and a new collection is
//! returned.
//!
//! Edges are rebuilt and timestamped fresh on every build call, so under
//! the stateless rebuild model the age is ≈0 and the factor ≈1. The decay
//! only bites when a caller persists `created_at`/`updated_at` across
//! snapshots and feeds aged edges back in.

use super::edge::GraphEdge;
use chrono::{DateTime, Utc};

/// Default half-life, in days.
pub const HALF_LIFE_DAYS: f64 = 30.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Decay every edge's `final_weight` against the current wall-clock time.
pub fn apply_decay(edges: &[GraphEdge], half_life_days: f64) -> Vec<GraphEdge> {
    apply_decay_at(edges, half_life_days, Utc::now())
}

/// Decay every edge's `final_weight` against an explicit `now`.
pub fn apply_decay_at(
    edges: &[GraphEdge],
    half_life_days: f64,
    now: DateTime<Utc>,
) -> Vec<GraphEdge> {
    edges
        .iter()
        .map(|edge| {
            let days_since =
                (now - edge.updated_at).num_milliseconds() as f64 / MILLIS_PER_DAY;
            let decay_factor = 0.5_f64.powf(days_since / half_life_days);
            GraphEdge {
                final_weight: edge.final_weight * decay_factor,
                ..edge.clone()
            }
        })
        .collect()
}
