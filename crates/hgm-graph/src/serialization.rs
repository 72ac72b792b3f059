use std::collections::BTreeSet;

use hgm_core::errors::{ErrorInfo, MotifError};
use hgm_core::provenance::SchemaVersion;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::hypergraph::Hypergraph;
use crate::ids::EdgeId;

/// Schema version written into every serialized hypergraph.
pub const GRAPH_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes<V>(graph: &Hypergraph<V>) -> Result<Vec<u8>, MotifError>
where
    V: Ord + Clone + Serialize,
{
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| MotifError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes<V>(bytes: &[u8]) -> Result<Hypergraph<V>, MotifError>
where
    V: Ord + Clone + DeserializeOwned,
{
    let serializable: SerializableGraph<V> = bincode::deserialize(bytes)
        .map_err(|err| MotifError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json<V>(graph: &Hypergraph<V>) -> Result<String, MotifError>
where
    V: Ord + Clone + Serialize,
{
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| MotifError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json<V>(json: &str) -> Result<Hypergraph<V>, MotifError>
where
    V: Ord + Clone + DeserializeOwned,
{
    let serializable: SerializableGraph<V> = serde_json::from_str(json)
        .map_err(|err| MotifError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph<V> {
    schema_version: SchemaVersion,
    vertices: Vec<V>,
    edges: Vec<SerializableEdge<V>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableEdge<V> {
    id: u64,
    vertices: Vec<V>,
}

impl<V: Ord + Clone> SerializableGraph<V> {
    fn from_graph(graph: &Hypergraph<V>) -> Self {
        Self {
            schema_version: GRAPH_SCHEMA,
            vertices: graph.vertices().iter().cloned().collect(),
            edges: graph
                .edges()
                .iter()
                .map(|edge| SerializableEdge {
                    id: edge.id().as_raw(),
                    vertices: edge.vertices().iter().cloned().collect(),
                })
                .collect(),
        }
    }

    fn into_graph(self) -> Result<Hypergraph<V>, MotifError> {
        if self.schema_version.major != GRAPH_SCHEMA.major {
            return Err(MotifError::Serde(
                ErrorInfo::new("schema-mismatch", "unsupported hypergraph schema version")
                    .with_context("found", self.schema_version.major)
                    .with_context("expected", GRAPH_SCHEMA.major),
            ));
        }
        let mut graph = Hypergraph::new();
        let mut previous: Option<u64> = None;
        for edge in self.edges {
            if previous.is_some_and(|prev| edge.id <= prev) {
                return Err(MotifError::Serde(
                    ErrorInfo::new("edge-order", "edge identifiers must be strictly increasing")
                        .with_context("edge", edge.id),
                ));
            }
            // The next insertion id must stay representable.
            if edge.id == u64::MAX {
                return Err(MotifError::Serde(
                    ErrorInfo::new("edge-id-range", "edge identifier leaves no successor id")
                        .with_context("edge", edge.id),
                ));
            }
            let vertices: BTreeSet<V> = edge.vertices.into_iter().collect();
            if vertices.is_empty() {
                return Err(MotifError::Serde(
                    ErrorInfo::new("empty-edge", "serialized hyperedge has no vertices")
                        .with_context("edge", edge.id),
                ));
            }
            previous = Some(edge.id);
            graph.push_edge(EdgeId::from_raw(edge.id), vertices);
        }
        let declared: BTreeSet<V> = self.vertices.into_iter().collect();
        if &declared != graph.vertices() {
            return Err(MotifError::Serde(
                ErrorInfo::new(
                    "vertex-mismatch",
                    "vertex list does not match the union of the hyperedges",
                )
                .with_context("declared", declared.len())
                .with_context("derived", graph.vertex_count()),
            ));
        }
        Ok(graph)
    }
}
