use hgm_core::errors::{ErrorInfo, MotifError};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::hypergraph::Hypergraph;
use crate::serialization::GRAPH_SCHEMA;

/// Computes a content hash of the hypergraph.
///
/// The digest covers the vertex count and the sorted multiset of hyperedges,
/// so insertion order and edge identifiers do not affect it. Relabelled
/// (isomorphic) copies hash differently.
pub fn canonical_hash<V>(graph: &Hypergraph<V>) -> Result<String, MotifError>
where
    V: Ord + Clone + Serialize,
{
    let mut hasher = Sha256::new();
    hasher.update(GRAPH_SCHEMA.major.to_le_bytes());
    hasher.update((graph.vertex_count() as u64).to_le_bytes());

    let mut signatures: Vec<Vec<&V>> = graph
        .edges()
        .iter()
        .map(|edge| edge.vertices().iter().collect())
        .collect();
    signatures.sort();
    hasher.update((signatures.len() as u64).to_le_bytes());
    for signature in signatures {
        let bytes = serde_json::to_vec(&signature)
            .map_err(|err| MotifError::Serde(ErrorInfo::new("hash-encode", err.to_string())))?;
        hasher.update((bytes.len() as u64).to_le_bytes());
        hasher.update(&bytes);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
