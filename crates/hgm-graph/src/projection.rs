use std::collections::{BTreeMap, BTreeSet};

use crate::hypergraph::Hypergraph;

/// Simple undirected graph derived from a hypergraph by clique expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionGraph<V> {
    adjacency: BTreeMap<V, BTreeSet<V>>,
}

impl<V: Ord + Clone> ProjectionGraph<V> {
    /// Builds a simple graph from a vertex list and undirected pairs.
    ///
    /// Self loops are ignored; endpoints missing from `vertices` are added.
    pub fn from_pairs<I, P>(vertices: I, pairs: P) -> Self
    where
        I: IntoIterator<Item = V>,
        P: IntoIterator<Item = (V, V)>,
    {
        let mut adjacency: BTreeMap<V, BTreeSet<V>> = vertices
            .into_iter()
            .map(|vertex| (vertex, BTreeSet::new()))
            .collect();
        for (u, v) in pairs {
            if u == v {
                adjacency.entry(u).or_default();
                continue;
            }
            adjacency.entry(u.clone()).or_default().insert(v.clone());
            adjacency.entry(v).or_default().insert(u);
        }
        Self { adjacency }
    }

    /// Iterates over the vertices in ascending order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Returns the number of vertices, isolated ones included.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Returns the neighbours of `vertex`, or `None` for an unknown vertex.
    pub fn neighbors(&self, vertex: &V) -> Option<&BTreeSet<V>> {
        self.adjacency.get(vertex)
    }

    /// Returns the number of neighbours of `vertex` (zero when unknown).
    pub fn degree(&self, vertex: &V) -> usize {
        self.adjacency.get(vertex).map_or(0, BTreeSet::len)
    }

    /// Returns whether `u` and `v` are joined by an edge.
    pub fn are_adjacent(&self, u: &V, v: &V) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbors| neighbors.contains(v))
    }

    /// Returns the underlying adjacency map.
    pub fn adjacency(&self) -> &BTreeMap<V, BTreeSet<V>> {
        &self.adjacency
    }
}

impl<V: Ord + Clone> Hypergraph<V> {
    /// Computes the 2-section: two vertices are adjacent iff some hyperedge
    /// contains both. A hyperedge of size n contributes all C(n, 2) pairs.
    pub fn projection_2_section(&self) -> ProjectionGraph<V> {
        let mut adjacency: BTreeMap<V, BTreeSet<V>> = self
            .vertices()
            .iter()
            .map(|vertex| (vertex.clone(), BTreeSet::new()))
            .collect();
        for edge in self.edges() {
            let members: Vec<&V> = edge.vertices().iter().collect();
            for (idx, u) in members.iter().enumerate() {
                for v in &members[idx + 1..] {
                    if let Some(entry) = adjacency.get_mut(*u) {
                        entry.insert((*v).clone());
                    }
                    if let Some(entry) = adjacency.get_mut(*v) {
                        entry.insert((*u).clone());
                    }
                }
            }
        }
        ProjectionGraph { adjacency }
    }
}
