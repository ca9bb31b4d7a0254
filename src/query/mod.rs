//! Query system for constellation graphs

mod neighbors;
mod types;

pub use neighbors::{NeighborQuery, DEFAULT_K};
pub use types::{Neighbor, NeighborResult};
