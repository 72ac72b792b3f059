use std::collections::{BTreeMap, BTreeSet};

use hgm_core::errors::{ErrorInfo, MotifError};

use crate::ids::EdgeId;

/// A single hyperedge: a stable identifier plus a non-empty vertex set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperedge<V> {
    id: EdgeId,
    vertices: BTreeSet<V>,
}

impl<V: Ord> Hyperedge<V> {
    /// Returns the identifier assigned at insertion time.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the vertices of the hyperedge in ascending order.
    pub fn vertices(&self) -> &BTreeSet<V> {
        &self.vertices
    }

    /// Returns the number of vertices in the hyperedge.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; empty hyperedges are never stored.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns whether the hyperedge contains `vertex`.
    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Returns whether the two hyperedges have at least one vertex in common.
    pub fn intersects(&self, other: &Hyperedge<V>) -> bool {
        !self.vertices.is_disjoint(&other.vertices)
    }
}

/// Undirected hypergraph over vertex identifiers of type `V`.
///
/// Hyperedges are kept in insertion order. The vertex set is always the
/// union of the stored hyperedges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hypergraph<V> {
    vertices: BTreeSet<V>,
    edges: Vec<Hyperedge<V>>,
    /// `None` once the identifier space is exhausted.
    next_edge: Option<EdgeId>,
}

impl<V: Ord + Clone> Default for Hypergraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord + Clone> Hypergraph<V> {
    /// Creates an empty hypergraph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeSet::new(),
            edges: Vec::new(),
            next_edge: Some(EdgeId::from_raw(0)),
        }
    }

    /// Builds a hypergraph from a sequence of vertex collections, one hyperedge each.
    ///
    /// Empty collections are dropped.
    pub fn from_edges<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: IntoIterator<Item = V>,
    {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Appends a hyperedge and returns its identifier.
    ///
    /// Repeated vertices inside the edge collapse. An edge that ends up empty
    /// is ignored and `None` is returned, as it is once every identifier up to
    /// `u64::MAX` has been handed out. Duplicate edges are accepted.
    pub fn add_edge<E>(&mut self, edge: E) -> Option<EdgeId>
    where
        E: IntoIterator<Item = V>,
    {
        let vertices: BTreeSet<V> = edge.into_iter().collect();
        if vertices.is_empty() {
            return None;
        }
        let id = self.next_edge?;
        self.push_edge(id, vertices);
        Some(id)
    }

    pub(crate) fn push_edge(&mut self, id: EdgeId, vertices: BTreeSet<V>) {
        self.vertices.extend(vertices.iter().cloned());
        self.edges.push(Hyperedge { id, vertices });
        self.next_edge = id.next();
    }

    /// Returns the vertex set in ascending order.
    pub fn vertices(&self) -> &BTreeSet<V> {
        &self.vertices
    }

    /// Returns the hyperedges in insertion order.
    pub fn edges(&self) -> &[Hyperedge<V>] {
        &self.edges
    }

    /// Looks up a hyperedge by identifier.
    pub fn edge(&self, id: EdgeId) -> Result<&Hyperedge<V>, MotifError> {
        self.edges
            .binary_search_by_key(&id, |edge| edge.id)
            .map(|idx| &self.edges[idx])
            .map_err(|_| {
                MotifError::Graph(
                    ErrorInfo::new("unknown-edge", "edge does not exist")
                        .with_context("edge", id.as_raw()),
                )
            })
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of hyperedges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the hypergraph has no vertices (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns whether `vertex` belongs to the hypergraph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Iterates over the hyperedges with exactly `size` vertices.
    pub fn edges_of_size(&self, size: usize) -> impl Iterator<Item = &Hyperedge<V>> + '_ {
        self.edges.iter().filter(move |edge| edge.len() == size)
    }

    /// Returns a copy without the hyperedges of the given size.
    ///
    /// Remaining hyperedges keep their identifiers; the vertex set shrinks to
    /// the union of what remains.
    pub fn without_edges_of_size(&self, size: usize) -> Self {
        let mut reduced = Self::new();
        for edge in self.edges.iter().filter(|edge| edge.len() != size) {
            reduced.push_edge(edge.id, edge.vertices.clone());
        }
        reduced.next_edge = self.next_edge;
        reduced
    }

    /// Returns the sub-hypergraph induced by `subset`.
    ///
    /// Every hyperedge is trimmed to its intersection with `subset`; edges that
    /// become empty are dropped. Identifiers are reassigned from zero.
    pub fn induced_subhypergraph(&self, subset: &BTreeSet<V>) -> Self {
        let mut induced = Self::new();
        for edge in &self.edges {
            let trimmed: BTreeSet<V> = edge.vertices.intersection(subset).cloned().collect();
            induced.add_edge(trimmed);
        }
        induced
    }

    /// Relabels every vertex through `f`, keeping edge identifiers.
    pub fn map_vertices<W, F>(&self, mut f: F) -> Hypergraph<W>
    where
        W: Ord + Clone,
        F: FnMut(&V) -> W,
    {
        let mut mapped = Hypergraph::new();
        for edge in &self.edges {
            let vertices: BTreeSet<W> = edge.vertices.iter().map(&mut f).collect();
            mapped.push_edge(edge.id, vertices);
        }
        mapped.next_edge = self.next_edge;
        mapped
    }

    /// Number of hyperedges per arity.
    pub fn size_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for edge in &self.edges {
            *histogram.entry(edge.len()).or_insert(0) += 1;
        }
        histogram
    }
}
