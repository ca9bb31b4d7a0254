//! ConstellationEngine: the build pipeline entry point
//!
//! The engine is a pure function of its input snapshot: every build call
//! allocates and returns a fresh graph, mutating nothing shared. Callers
//! own fetching the snapshot (and any retry/timeout policy around it);
//! the engine itself performs no I/O.

use super::blend::{apply_blend, BlendConfig};
use super::cooccurrence::apply_cooccurrence;
use super::decay::{apply_decay_at, HALF_LIFE_DAYS};
use super::dedup::dedupe_records;
use super::edge::GraphEdge;
use super::evidence::EdgeAccumulator;
use super::node::{GraphNode, NodeId};
use super::prune::{prune_edges, MAX_EDGES_PER_NODE, MIN_FINAL_WEIGHT};
use super::role_prior::{apply_role_prior, ROLE_PRIOR_BASE};
use crate::keyword::RawKeywordRecord;
use crate::query::{NeighborQuery, NeighborResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur around the engine boundary.
///
/// The build pipeline itself is total over well-formed snapshots; these
/// cover snapshot parsing and serialization for callers.
#[derive(Debug, Error)]
pub enum ConstellationError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for constellation operations.
pub type ConstellationResult<T> = Result<T, ConstellationError>;

/// Tunable parameters for one build invocation.
///
/// Passed as a value, never read from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Blend coefficients, one per evidence channel.
    pub blend: BlendConfig,
    /// Half-life for temporal decay, in days.
    pub half_life_days: f64,
    /// Minimum `final_weight` an edge needs to survive pruning.
    pub min_final_weight: f64,
    /// Per-node degree cap applied by the pruner.
    pub max_edges_per_node: usize,
    /// Evidence value written for same-role node pairs.
    pub role_prior_base: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            blend: BlendConfig::default(),
            half_life_days: HALF_LIFE_DAYS,
            min_final_weight: MIN_FINAL_WEIGHT,
            max_edges_per_node: MAX_EDGES_PER_NODE,
            role_prior_base: ROLE_PRIOR_BASE,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blend(mut self, blend: BlendConfig) -> Self {
        self.blend = blend;
        self
    }

    pub fn with_half_life_days(mut self, days: f64) -> Self {
        self.half_life_days = days;
        self
    }

    pub fn with_min_final_weight(mut self, min: f64) -> Self {
        self.min_final_weight = min;
        self
    }

    pub fn with_max_edges_per_node(mut self, max: usize) -> Self {
        self.max_edges_per_node = max;
        self
    }

    pub fn with_role_prior_base(mut self, base: f64) -> Self {
        self.role_prior_base = base;
        self
    }
}

/// The sole output artifact: nodes plus surviving edges.
///
/// Produced fresh on every build call and never mutated afterwards;
/// "updating" the graph means re-running the pipeline over a new
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstellationGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// The constellation graph engine.
///
/// Holds only configuration; build calls share nothing, so concurrent
/// builds over the same engine are safe by construction.
#[derive(Debug, Clone, Default)]
pub struct ConstellationEngine {
    config: EngineConfig,
}

impl ConstellationEngine {
    /// Create an engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline over a snapshot: deduplicate, accumulate
    /// evidence, blend, decay, prune.
    pub fn build(&self, records: &[RawKeywordRecord]) -> ConstellationGraph {
        let now = Utc::now();

        let dedup = dedupe_records(records);

        let mut acc = EdgeAccumulator::new(&dedup.nodes, now);
        apply_cooccurrence(records, &dedup.record_to_node, &mut acc);
        apply_role_prior(&mut acc, self.config.role_prior_base);
        let mut edges = acc.into_edges();

        apply_blend(&mut edges, &self.config.blend);
        let candidate_count = edges.len();

        let edges = apply_decay_at(&edges, self.config.half_life_days, now);
        let edges = prune_edges(
            edges,
            self.config.max_edges_per_node,
            self.config.min_final_weight,
        );

        debug!(
            nodes = dedup.nodes.len(),
            candidate_edges = candidate_count,
            surviving_edges = edges.len(),
            "built constellation graph"
        );

        let graph = ConstellationGraph {
            nodes: dedup.nodes,
            edges,
        };
        debug_assert!(
            referentially_consistent(&graph),
            "pruned graph contains an edge to an unknown node"
        );
        graph
    }

    /// Build, then answer a top-k neighbor query against the pruned graph.
    pub fn neighbors(
        &self,
        records: &[RawKeywordRecord],
        node_id: &NodeId,
        k: usize,
    ) -> NeighborResult {
        let graph = self.build(records);
        NeighborQuery::new(node_id.clone()).top_k(k).execute(&graph.edges)
    }
}

/// Parse a snapshot: a JSON array of raw keyword records.
pub fn parse_snapshot(json: &str) -> ConstellationResult<Vec<RawKeywordRecord>> {
    Ok(serde_json::from_str(json)?)
}

fn referentially_consistent(graph: &ConstellationGraph) -> bool {
    let ids: std::collections::HashSet<&NodeId> = graph.nodes.iter().map(|n| &n.id).collect();
    graph
        .edges
        .iter()
        .all(|e| ids.contains(&e.source) && ids.contains(&e.target))
}
