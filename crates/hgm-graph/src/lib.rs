#![deny(missing_docs)]

//! Undirected hypergraph container, 2-section projection and connectivity
//! queries used by the motif counters.

mod connectivity;
mod generators;
mod hash;
mod hypergraph;
mod ids;
mod projection;
mod serialization;

pub use generators::{gen_random_hypergraph, gen_uniform_hypergraph};
pub use hash::canonical_hash;
pub use hypergraph::{Hyperedge, Hypergraph};
pub use ids::EdgeId;
pub use projection::ProjectionGraph;

/// Re-export serialization helpers for downstream crates.
pub use serialization::{
    graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json, GRAPH_SCHEMA,
};
