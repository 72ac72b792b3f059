use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::hypergraph::Hypergraph;

impl<V: Ord + Clone> Hypergraph<V> {
    /// Returns whether every vertex is reachable from every other through
    /// shared hyperedges. The empty hypergraph is connected.
    pub fn is_connected(&self) -> bool {
        match self.vertices().first() {
            None => true,
            Some(start) => self.reachable_from(start).len() == self.vertex_count(),
        }
    }

    /// Splits the vertex set into hyperedge-connected components, ordered by
    /// their smallest vertex.
    pub fn connected_components(&self) -> Vec<BTreeSet<V>> {
        let mut components = Vec::new();
        let mut assigned: BTreeSet<&V> = BTreeSet::new();
        for vertex in self.vertices() {
            if assigned.contains(vertex) {
                continue;
            }
            let component = self.reachable_from(vertex);
            for member in &component {
                if let Some(stored) = self.vertices().get(member) {
                    assigned.insert(stored);
                }
            }
            components.push(component);
        }
        components
    }

    fn reachable_from(&self, start: &V) -> BTreeSet<V> {
        let mut incidence: BTreeMap<&V, Vec<usize>> = BTreeMap::new();
        for (idx, edge) in self.edges().iter().enumerate() {
            for vertex in edge.vertices() {
                incidence.entry(vertex).or_default().push(idx);
            }
        }

        let mut edge_seen = vec![false; self.edge_count()];
        let mut visited: BTreeSet<V> = BTreeSet::new();
        let mut queue: VecDeque<&V> = VecDeque::new();
        visited.insert(start.clone());
        queue.push_back(start);
        while let Some(vertex) = queue.pop_front() {
            let Some(incident) = incidence.get(vertex) else {
                continue;
            };
            for &idx in incident {
                if edge_seen[idx] {
                    continue;
                }
                edge_seen[idx] = true;
                for neighbor in self.edges()[idx].vertices() {
                    if visited.insert(neighbor.clone()) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }
        visited
    }
}
