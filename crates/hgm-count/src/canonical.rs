use std::collections::BTreeMap;
use std::fmt;

use hgm_core::errors::{ErrorInfo, MotifError};
use hgm_graph::Hypergraph;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Largest vertex count the brute-force labelling accepts (4! = 24 permutations).
pub const MAX_CANONICAL_VERTICES: usize = 4;

/// Isomorphism-invariant representative of a small hypergraph.
///
/// Holds the lexicographically smallest sorted list of sorted, relabelled
/// hyperedges over all relabellings of the vertices onto `0..k`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalForm {
    edges: Vec<Vec<u8>>,
}

impl CanonicalForm {
    /// Returns the relabelled hyperedges.
    pub fn edges(&self) -> &[Vec<u8>] {
        &self.edges
    }

    /// Returns the number of hyperedges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of vertices the form spans.
    pub fn vertex_count(&self) -> usize {
        self.edges
            .iter()
            .flatten()
            .max()
            .map_or(0, |&max| usize::from(max) + 1)
    }

    /// Returns whether this is the form of the empty hypergraph.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.edges.is_empty() {
            return write!(f, "()");
        }
        write!(f, "[")?;
        for (idx, edge) in self.edges.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[{}]", edge.iter().join(", "))?;
        }
        write!(f, "]")
    }
}

/// Computes the canonical form of a hypergraph with at most four vertices.
///
/// Two hypergraphs with the same vertex count are isomorphic iff their forms
/// are equal. Larger inputs are rejected with an invalid-argument error.
pub fn canonical_form<V: Ord + Clone>(graph: &Hypergraph<V>) -> Result<CanonicalForm, MotifError> {
    let k = graph.vertex_count();
    if k == 0 {
        return Ok(CanonicalForm::default());
    }
    if k > MAX_CANONICAL_VERTICES {
        return Err(MotifError::InvalidArgument(
            ErrorInfo::new(
                "canonical-too-large",
                "brute-force canonical labelling supports at most four vertices",
            )
            .with_context("vertices", k)
            .with_hint("larger motifs need a partition-refinement canonicaliser"),
        ));
    }

    let index: BTreeMap<&V, u8> = graph
        .vertices()
        .iter()
        .enumerate()
        .map(|(idx, vertex)| (vertex, idx as u8))
        .collect();
    let edges: Vec<Vec<u8>> = graph
        .edges()
        .iter()
        .map(|edge| edge.vertices().iter().map(|vertex| index[vertex]).collect())
        .collect();

    let mut best: Option<Vec<Vec<u8>>> = None;
    for perm in (0..k as u8).permutations(k) {
        let mut relabelled: Vec<Vec<u8>> = edges
            .iter()
            .map(|edge| {
                let mut mapped: Vec<u8> = edge.iter().map(|&idx| perm[usize::from(idx)]).collect();
                mapped.sort_unstable();
                mapped
            })
            .collect();
        relabelled.sort();
        if best.as_ref().map_or(true, |current| relabelled < *current) {
            best = Some(relabelled);
        }
    }

    Ok(CanonicalForm {
        edges: best.unwrap_or_default(),
    })
}
