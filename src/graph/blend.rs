//! Blending evidence channels into one scalar weight

use super::edge::{EdgeWeights, GraphEdge};
use serde::Deserialize;

/// Per-channel blend coefficients.
///
/// The blended weight is the coefficient-weighted average of the five
/// evidence channels. Coefficients are non-negative; an all-zero
/// configuration blends to 0 rather than dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlendConfig {
    pub co_occurrence: f64,
    pub semantic: f64,
    pub role_prior: f64,
    pub user_history: f64,
    pub manual: f64,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            co_occurrence: 0.4,
            semantic: 0.15,
            role_prior: 0.15,
            user_history: 0.2,
            manual: 0.1,
        }
    }
}

impl BlendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_co_occurrence(mut self, coeff: f64) -> Self {
        self.co_occurrence = coeff;
        self
    }

    pub fn with_semantic(mut self, coeff: f64) -> Self {
        self.semantic = coeff;
        self
    }

    pub fn with_role_prior(mut self, coeff: f64) -> Self {
        self.role_prior = coeff;
        self
    }

    pub fn with_user_history(mut self, coeff: f64) -> Self {
        self.user_history = coeff;
        self
    }

    pub fn with_manual(mut self, coeff: f64) -> Self {
        self.manual = coeff;
        self
    }

    /// Sum of all coefficients.
    pub fn total(&self) -> f64 {
        self.co_occurrence + self.semantic + self.role_prior + self.user_history + self.manual
    }

    /// Blend an evidence vector into one scalar: `Σ(e·c) / Σc`, or 0 when
    /// the coefficient sum is 0.
    pub fn blend(&self, weights: &EdgeWeights) -> f64 {
        let total = self.total();
        if total == 0.0 {
            return 0.0;
        }
        let weighted = weights.co_occurrence * self.co_occurrence
            + weights.semantic * self.semantic
            + weights.role_prior * self.role_prior
            + weights.user_history * self.user_history
            + weights.manual * self.manual;
        weighted / total
    }
}

/// Set every edge's `final_weight` from its evidence channels.
///
/// Runs once per edge, after evidence accumulation and before decay.
pub fn apply_blend(edges: &mut [GraphEdge], config: &BlendConfig) {
    for edge in edges {
        edge.final_weight = config.blend(&edge.weights);
    }
}
