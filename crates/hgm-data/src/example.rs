use hgm_graph::Hypergraph;

/// Small overlapping hypergraph used when no dataset is available:
/// {a,b,c}, {b,c,d}, {c,d,e}, {a,d}.
pub fn example_hypergraph() -> Hypergraph<String> {
    Hypergraph::from_edges(
        [
            vec!["a", "b", "c"],
            vec!["b", "c", "d"],
            vec!["c", "d", "e"],
            vec!["a", "d"],
        ]
        .into_iter()
        .map(|edge| edge.into_iter().map(str::to_string)),
    )
}
