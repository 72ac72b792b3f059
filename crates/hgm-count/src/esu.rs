use std::collections::BTreeMap;
use std::convert::Infallible;

use hgm_graph::ProjectionGraph;

/// Dense view of a [`ProjectionGraph`]: vertex `i` is the i-th smallest
/// vertex, adjacency lists are sorted.
struct IndexedGraph<'a, V> {
    vertices: Vec<&'a V>,
    adjacency: Vec<Vec<usize>>,
}

impl<'a, V: Ord + Clone> IndexedGraph<'a, V> {
    fn new(graph: &'a ProjectionGraph<V>) -> Self {
        let vertices: Vec<&V> = graph.vertices().collect();
        let index: BTreeMap<&V, usize> = vertices
            .iter()
            .enumerate()
            .map(|(idx, vertex)| (*vertex, idx))
            .collect();
        let adjacency = vertices
            .iter()
            .map(|vertex| {
                graph
                    .neighbors(vertex)
                    .into_iter()
                    .flatten()
                    .filter_map(|neighbor| index.get(neighbor).copied())
                    .collect()
            })
            .collect();
        Self {
            vertices,
            adjacency,
        }
    }

    fn adjacent(&self, a: usize, b: usize) -> bool {
        self.adjacency[a].binary_search(&b).is_ok()
    }
}

/// Calls `visit` once for every connected `k`-vertex subset of `graph`.
///
/// Each subset is passed in ascending vertex order. Nothing is emitted for
/// `k == 0`.
pub fn for_each_connected_subset<V, F>(graph: &ProjectionGraph<V>, k: usize, mut visit: F)
where
    V: Ord + Clone,
    F: FnMut(&[V]),
{
    let outcome = try_for_each_connected_subset(graph, k, |subset| {
        visit(subset);
        Ok::<(), Infallible>(())
    });
    match outcome {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Fallible variant of [`for_each_connected_subset`]; stops at the first error.
pub fn try_for_each_connected_subset<V, E, F>(
    graph: &ProjectionGraph<V>,
    k: usize,
    mut visit: F,
) -> Result<(), E>
where
    V: Ord + Clone,
    F: FnMut(&[V]) -> Result<(), E>,
{
    if k == 0 {
        return Ok(());
    }
    let indexed = IndexedGraph::new(graph);
    let mut search = Search {
        graph: &indexed,
        k,
        root: 0,
        subset: Vec::with_capacity(k),
        scratch: Vec::with_capacity(k),
    };
    for root in 0..indexed.vertices.len() {
        let extension: Vec<usize> = indexed.adjacency[root]
            .iter()
            .copied()
            .filter(|&neighbor| neighbor > root)
            .collect();
        search.root = root;
        search.subset.push(root);
        search.extend(&extension, &mut visit)?;
        search.subset.pop();
    }
    Ok(())
}

/// Collects every connected `k`-vertex subset of `graph`.
pub fn connected_subsets<V: Ord + Clone>(graph: &ProjectionGraph<V>, k: usize) -> Vec<Vec<V>> {
    let mut subsets = Vec::new();
    for_each_connected_subset(graph, k, |subset| subsets.push(subset.to_vec()));
    subsets
}

struct Search<'g, 'a, V> {
    graph: &'g IndexedGraph<'a, V>,
    k: usize,
    root: usize,
    subset: Vec<usize>,
    scratch: Vec<V>,
}

impl<V: Ord + Clone> Search<'_, '_, V> {
    // Every branch owns its extension list: the unvisited suffix of the parent
    // extension plus the exclusive neighbours of `w` above the root. Exclusive
    // means not in the subset and not adjacent to it, which is what keeps two
    // branches from reaching the same vertex set.
    fn extend<E, F>(&mut self, extension: &[usize], visit: &mut F) -> Result<(), E>
    where
        F: FnMut(&[V]) -> Result<(), E>,
    {
        if self.subset.len() == self.k {
            return self.emit(visit);
        }
        for (pos, &w) in extension.iter().enumerate() {
            let mut next: Vec<usize> = extension[pos + 1..].to_vec();
            for &u in &self.graph.adjacency[w] {
                if u > self.root
                    && !self.subset.contains(&u)
                    && !self.subset.iter().any(|&s| self.graph.adjacent(s, u))
                {
                    next.push(u);
                }
            }
            self.subset.push(w);
            let outcome = self.extend(&next, visit);
            self.subset.pop();
            outcome?;
        }
        Ok(())
    }

    fn emit<E, F>(&mut self, visit: &mut F) -> Result<(), E>
    where
        F: FnMut(&[V]) -> Result<(), E>,
    {
        let graph = self.graph;
        let mut ordered = self.subset.clone();
        ordered.sort_unstable();
        self.scratch.clear();
        self.scratch
            .extend(ordered.iter().map(|&idx| graph.vertices[idx].clone()));
        visit(&self.scratch)
    }
}
