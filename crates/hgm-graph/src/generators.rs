use hgm_core::errors::{ErrorInfo, MotifError};
use hgm_core::rng::RngHandle;
use rand::seq::index::sample;
use rand::Rng;

use crate::hypergraph::Hypergraph;

/// Generates a random hypergraph on vertices `0..n_vertices`.
///
/// Each of the `n_edges` hyperedges draws its arity uniformly from
/// `1..=max_edge_size` (capped at `n_vertices`) and then a uniform vertex
/// subset of that arity. Singleton and repeated hyperedges are allowed, which
/// keeps the trimming and duplicate paths of the counters exercised.
pub fn gen_random_hypergraph(
    n_vertices: usize,
    n_edges: usize,
    max_edge_size: usize,
    rng: &mut RngHandle,
) -> Result<Hypergraph<u64>, MotifError> {
    if n_vertices == 0 {
        return Err(MotifError::InvalidArgument(ErrorInfo::new(
            "empty-vertex-range",
            "random hypergraph generator requires at least one vertex",
        )));
    }
    if max_edge_size == 0 {
        return Err(MotifError::InvalidArgument(
            ErrorInfo::new("invalid-edge-size", "maximum hyperedge size must be positive")
                .with_context("max_edge_size", max_edge_size),
        ));
    }
    let cap = max_edge_size.min(n_vertices);
    let mut graph = Hypergraph::new();
    for _ in 0..n_edges {
        let size = rng.gen_range(1..=cap);
        let members = sample(rng.inner_mut(), n_vertices, size);
        graph.add_edge(members.into_iter().map(|idx| idx as u64));
    }
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        seed = rng.seed(),
        "generated random hypergraph"
    );
    Ok(graph)
}

/// Generates a hypergraph whose hyperedges all have exactly `edge_size` vertices.
pub fn gen_uniform_hypergraph(
    n_vertices: usize,
    n_edges: usize,
    edge_size: usize,
    rng: &mut RngHandle,
) -> Result<Hypergraph<u64>, MotifError> {
    if edge_size == 0 || edge_size > n_vertices {
        return Err(MotifError::InvalidArgument(
            ErrorInfo::new(
                "invalid-edge-size",
                "uniform hyperedge size must lie in 1..=n_vertices",
            )
            .with_context("edge_size", edge_size)
            .with_context("n_vertices", n_vertices),
        ));
    }
    let mut graph = Hypergraph::new();
    for _ in 0..n_edges {
        let members = sample(rng.inner_mut(), n_vertices, edge_size);
        graph.add_edge(members.into_iter().map(|idx| idx as u64));
    }
    Ok(graph)
}
