//! Constellation: a research-keyword graph engine
//!
//! Turns a flat snapshot of weighted keyword records into a deduplicated,
//! multi-factor-weighted, degree-bounded knowledge graph, and answers
//! neighbor queries against it.
//!
//! # Core Concepts
//!
//! - **Nodes**: one per normalized keyword term, folded from all records
//!   sharing that term
//! - **Edges**: undirected relationships scored from per-channel evidence
//!   (co-occurrence, role prior, and reserved future channels), blended,
//!   decayed, and pruned under a per-node degree cap
//! - **Snapshots**: the engine is a pure function of its input; every
//!   build returns a fresh graph, nothing persists between calls
//!
//! # Example
//!
//! ```
//! use constellation::{ConstellationEngine, RawKeywordRecord};
//!
//! let records = vec![
//!     RawKeywordRecord::new("a1", "Trust").with_source("P1"),
//!     RawKeywordRecord::new("b1", "Privacy").with_source("P1"),
//! ];
//! let graph = ConstellationEngine::new().build(&records);
//! assert_eq!(graph.nodes.len(), 2);
//! ```

mod graph;
pub mod keyword;
pub mod profile;
pub mod query;

pub use graph::{
    apply_blend, apply_cooccurrence, apply_decay, apply_decay_at, apply_role_prior,
    canonical_pair, dedupe_records, parse_snapshot, prune_edges, BlendConfig,
    ConstellationEngine, ConstellationError, ConstellationGraph, ConstellationResult,
    DedupResult, EdgeAccumulator, EdgeType, EdgeWeights, EngineConfig, GraphEdge, GraphNode,
    NodeId, HALF_LIFE_DAYS, MAX_EDGES_PER_NODE, MIN_FINAL_WEIGHT, ROLE_PRIOR_BASE,
};
pub use keyword::{ArtifactRole, Orientation, PipelineRole, RawKeywordRecord};
pub use profile::{sync_profiles, KeywordIndex, KeywordProfiles};
pub use query::{Neighbor, NeighborQuery, NeighborResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
