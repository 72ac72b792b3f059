use hgm_core::MotifError;
use hgm_graph::{
    canonical_hash, graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json, EdgeId,
    Hypergraph,
};

fn sample() -> Hypergraph<String> {
    Hypergraph::from_edges([
        vec!["a".to_string(), "b".to_string(), "c".to_string()],
        vec!["c".to_string(), "d".to_string()],
        vec!["c".to_string(), "d".to_string()],
    ])
}

#[test]
fn json_roundtrip_preserves_edges_and_ids() {
    let graph = sample();
    let json = graph_to_json(&graph).unwrap();
    let restored: Hypergraph<String> = graph_from_json(&json).unwrap();
    assert_eq!(restored, graph);
    assert_eq!(canonical_hash(&restored).unwrap(), canonical_hash(&graph).unwrap());
}

#[test]
fn bytes_roundtrip_preserves_graph() {
    let graph = Hypergraph::from_edges([vec![3u64, 1, 2], vec![9]]);
    let bytes = graph_to_bytes(&graph).unwrap();
    let restored: Hypergraph<u64> = graph_from_bytes(&bytes).unwrap();
    assert_eq!(restored, graph);
}

#[test]
fn hash_ignores_insertion_order() {
    let forward = Hypergraph::from_edges([vec![1u64, 2], vec![2, 3]]);
    let reverse = Hypergraph::from_edges([vec![3u64, 2], vec![2, 1]]);
    let relabelled = Hypergraph::from_edges([vec![1u64, 2], vec![2, 4]]);
    let forward_hash = canonical_hash(&forward).unwrap();
    assert_eq!(forward_hash, canonical_hash(&reverse).unwrap());
    assert_ne!(forward_hash, canonical_hash(&relabelled).unwrap());
}

#[test]
fn rejects_empty_edges_and_vertex_mismatch() {
    let empty_edge = r#"{"schema_version":{"major":1,"minor":0,"patch":0},
        "vertices":[1],"edges":[{"id":0,"vertices":[]}]}"#;
    let err = graph_from_json::<u64>(empty_edge).unwrap_err();
    assert!(matches!(err, MotifError::Serde(info) if info.code == "empty-edge"));

    let mismatch = r#"{"schema_version":{"major":1,"minor":0,"patch":0},
        "vertices":[1,2,3],"edges":[{"id":0,"vertices":[1,2]}]}"#;
    let err = graph_from_json::<u64>(mismatch).unwrap_err();
    assert!(matches!(err, MotifError::Serde(info) if info.code == "vertex-mismatch"));
}

#[test]
fn rejects_unknown_major_version_and_unordered_ids() {
    let future = r#"{"schema_version":{"major":9,"minor":0,"patch":0},
        "vertices":[],"edges":[]}"#;
    let err = graph_from_json::<u64>(future).unwrap_err();
    assert_eq!(err.info().code, "schema-mismatch");

    let unordered = r#"{"schema_version":{"major":1,"minor":0,"patch":0},
        "vertices":[1,2],"edges":[{"id":4,"vertices":[1]},{"id":2,"vertices":[2]}]}"#;
    let err = graph_from_json::<u64>(unordered).unwrap_err();
    assert_eq!(err.info().code, "edge-order");
}

#[test]
fn rejects_edge_id_without_successor() {
    let saturated = r#"{"schema_version":{"major":1,"minor":0,"patch":0},
        "vertices":[1,2],"edges":[{"id":18446744073709551615,"vertices":[1,2]}]}"#;
    let err = graph_from_json::<u64>(saturated).unwrap_err();
    assert_eq!(err.info().code, "edge-id-range");

    let largest_valid = r#"{"schema_version":{"major":1,"minor":0,"patch":0},
        "vertices":[1,2],"edges":[{"id":18446744073709551614,"vertices":[1,2]}]}"#;
    let mut graph = graph_from_json::<u64>(largest_valid).unwrap();
    assert_eq!(graph.edges()[0].id().as_raw(), u64::MAX - 1);
    assert_eq!(graph.add_edge([3]), Some(EdgeId::from_raw(u64::MAX)));
    assert_eq!(graph.add_edge([4]), None);
    assert_eq!(graph.edge_count(), 2);
}
