use std::collections::{BTreeMap, BTreeSet};

use hgm_core::MotifError;
use hgm_count::{
    baseline_count, canonical_form, count_motifs_with_stats, efficient_count_order3,
    efficient_count_order4, CountMethod, MotifCounts, MotifOrder,
};
use hgm_graph::Hypergraph;

fn example() -> Hypergraph<&'static str> {
    Hypergraph::from_edges([
        vec!["a", "b", "c"],
        vec!["b", "c", "d"],
        vec!["c", "d", "e"],
        vec!["a", "d"],
    ])
}

fn rendered(counts: &MotifCounts) -> BTreeMap<String, u64> {
    counts
        .iter()
        .map(|(form, count)| (form.to_string(), count))
        .collect()
}

#[test]
fn single_hyperedge_is_one_motif() {
    for k in [3usize, 4] {
        let graph = Hypergraph::from_edges([(0..k).collect::<Vec<_>>()]);
        let counts = baseline_count(&graph, k).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&canonical_form(&graph).unwrap()), 1);
    }
    let triple = Hypergraph::from_edges([vec!["x", "y", "z"]]);
    assert_eq!(efficient_count_order3(&triple).unwrap().total(), 1);
    let quad = Hypergraph::from_edges([vec!["w", "x", "y", "z"]]);
    assert_eq!(efficient_count_order4(&quad).unwrap().total(), 1);
}

#[test]
fn singleton_edges_yield_no_motifs() {
    let graph = Hypergraph::from_edges([vec![1], vec![2], vec![3], vec![4], vec![1]]);
    for k in [3usize, 4] {
        assert!(baseline_count(&graph, k).unwrap().is_empty());
    }
    assert!(efficient_count_order3(&graph).unwrap().is_empty());
    assert!(efficient_count_order4(&graph).unwrap().is_empty());
}

#[test]
fn empty_hypergraph_yields_no_motifs() {
    let graph: Hypergraph<u32> = Hypergraph::new();
    assert!(baseline_count(&graph, 3).unwrap().is_empty());
    assert!(efficient_count_order4(&graph).unwrap().is_empty());
}

#[test]
fn unsupported_orders_are_invalid_arguments() {
    let graph = example();
    for k in [0usize, 1, 2, 5, 10] {
        let err = baseline_count(&graph, k).unwrap_err();
        assert!(
            matches!(err, MotifError::InvalidArgument(ref info) if info.code == "invalid-order")
        );
    }
}

#[test]
fn example_order3_counts() {
    let graph = example();
    let baseline = baseline_count(&graph, 3).unwrap();
    assert_eq!(efficient_count_order3(&graph).unwrap(), baseline);
    // every triple except {a, b, e} is connected
    assert_eq!(baseline.total(), 9);

    let expected: BTreeMap<String, u64> = [
        ("[[0], [0, 1], [0, 1, 2], [1]]", 1),
        ("[[0], [0, 1], [0, 1, 2], [1, 2]]", 1),
        ("[[0], [0, 1], [0, 1, 2], [2]]", 1),
        ("[[0], [0, 1], [0, 2], [1]]", 3),
        ("[[0], [0, 1], [0, 2], [1, 2]]", 1),
        ("[[0, 1], [0, 1], [0, 2]]", 1),
        ("[[0, 1], [0, 1], [0, 2], [1, 2]]", 1),
    ]
    .into_iter()
    .map(|(form, count)| (form.to_string(), count))
    .collect();
    assert_eq!(rendered(&baseline), expected);
}

#[test]
fn example_order4_counts() {
    let graph = example();
    let baseline = baseline_count(&graph, 4).unwrap();
    assert_eq!(efficient_count_order4(&graph).unwrap(), baseline);
    assert_eq!(baseline.total(), 5);
    assert_eq!(baseline.len(), 5);
    let abcd: BTreeSet<&str> = ["a", "b", "c", "d"].into_iter().collect();
    let abcd_form = canonical_form(&graph.induced_subhypergraph(&abcd)).unwrap();
    assert_eq!(baseline.get(&abcd_form), 1);
}

#[test]
fn efficient_stats_account_for_every_phase() {
    let graph = example();
    let order3 =
        count_motifs_with_stats(&graph, MotifOrder::Three, CountMethod::Efficient).unwrap();
    assert_eq!(order3.stats.direct_hits, 3);
    assert_eq!(order3.stats.candidates, 9);
    assert_eq!(order3.stats.rejected, 0);

    let order4 = count_motifs_with_stats(&graph, MotifOrder::Four, CountMethod::Efficient).unwrap();
    assert_eq!(order4.stats.direct_hits, 0);
    // abc+bcd, bcd+cde and cde+ad; the remaining pairs repeat a set or span five vertices
    assert_eq!(order4.stats.union_hits, 3);
    assert_eq!(order4.stats.candidates, 5);
    assert_eq!(order4.counts.total(), 5);

    let baseline =
        count_motifs_with_stats(&graph, MotifOrder::Four, CountMethod::Baseline).unwrap();
    assert_eq!(baseline.stats.direct_hits + baseline.stats.union_hits, 0);
    assert_eq!(baseline.stats.candidates, 5);
}

#[test]
fn duplicate_direct_edges_are_skipped_and_reported() {
    let graph = Hypergraph::from_edges([vec![1, 2, 3], vec![1, 2, 3], vec![3, 4]]);
    let outcome =
        count_motifs_with_stats(&graph, MotifOrder::Three, CountMethod::Efficient).unwrap();
    assert_eq!(outcome.stats.duplicate_direct_edges, 1);
    assert_eq!(outcome.stats.direct_hits, 1);
    assert_eq!(outcome.counts, baseline_count(&graph, 3).unwrap());
}

#[test]
fn counts_serialize_as_entries() {
    let graph = Hypergraph::from_edges([vec![1, 2, 3]]);
    let counts = baseline_count(&graph, 3).unwrap();
    let json = serde_json::to_string(&counts).unwrap();
    assert_eq!(json, r#"[{"motif":[[0,1,2]],"count":1}]"#);
    let back: MotifCounts = serde_json::from_str(&json).unwrap();
    assert_eq!(back, counts);
}
