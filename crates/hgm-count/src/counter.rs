use std::collections::BTreeSet;
use std::fmt;

use hgm_core::errors::MotifError;
use hgm_core::MotifOrder;
use hgm_graph::Hypergraph;
use serde::{Deserialize, Serialize};

use crate::canonical::canonical_form;
use crate::counts::MotifCounts;
use crate::esu::try_for_each_connected_subset;

/// Counting strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountMethod {
    /// Enumerate every connected subset of the projection.
    Baseline,
    /// Resolve direct hyperedges (and, for order 4, size-3 unions) first.
    Efficient,
}

impl fmt::Display for CountMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountMethod::Baseline => write!(f, "baseline"),
            CountMethod::Efficient => write!(f, "efficient"),
        }
    }
}

/// Work counters collected during a single counting call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountStats {
    /// Vertex sets emitted by the connected-subset enumerator.
    pub candidates: u64,
    /// Vertex sets resolved directly from a hyperedge of the motif size.
    pub direct_hits: u64,
    /// Vertex sets resolved from the union of a size-3 edge and a neighbour.
    pub union_hits: u64,
    /// Candidates whose induced sub-hypergraph was not connected.
    pub rejected: u64,
    /// Direct hyperedges skipped because an earlier edge had the same vertex set.
    pub duplicate_direct_edges: u64,
}

/// Counts together with the statistics of the call that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountOutcome {
    /// Occurrences per motif class.
    pub counts: MotifCounts,
    /// Work performed.
    pub stats: CountStats,
}

/// Reference algorithm: every connected k-subset of the projection is
/// induced, filtered by hypergraph connectivity, canonicalised and counted.
///
/// Fails with an invalid-argument error unless `k` is 3 or 4.
pub fn baseline_count<V: Ord + Clone>(
    graph: &Hypergraph<V>,
    k: usize,
) -> Result<MotifCounts, MotifError> {
    let order = MotifOrder::try_from(k)?;
    count_motifs(graph, order, CountMethod::Baseline)
}

/// Order-3 counter that resolves size-3 hyperedges before enumerating.
/// Always equal to `baseline_count(graph, 3)`.
pub fn efficient_count_order3<V: Ord + Clone>(
    graph: &Hypergraph<V>,
) -> Result<MotifCounts, MotifError> {
    count_motifs(graph, MotifOrder::Three, CountMethod::Efficient)
}

/// Order-4 counter that resolves size-4 hyperedges, then unions of a size-3
/// hyperedge with an overlapping edge, before enumerating.
/// Always equal to `baseline_count(graph, 4)`.
pub fn efficient_count_order4<V: Ord + Clone>(
    graph: &Hypergraph<V>,
) -> Result<MotifCounts, MotifError> {
    count_motifs(graph, MotifOrder::Four, CountMethod::Efficient)
}

/// Counts motifs of `order` with the chosen method.
pub fn count_motifs<V: Ord + Clone>(
    graph: &Hypergraph<V>,
    order: MotifOrder,
    method: CountMethod,
) -> Result<MotifCounts, MotifError> {
    count_motifs_with_stats(graph, order, method).map(|outcome| outcome.counts)
}

/// Counts motifs of `order` with the chosen method and reports the work done.
pub fn count_motifs_with_stats<V: Ord + Clone>(
    graph: &Hypergraph<V>,
    order: MotifOrder,
    method: CountMethod,
) -> Result<CountOutcome, MotifError> {
    let mut tally = Tally::new(graph);
    match (method, order) {
        (CountMethod::Baseline, _) => {}
        (CountMethod::Efficient, MotifOrder::Three) => {
            tally.direct_edges(3)?;
        }
        (CountMethod::Efficient, MotifOrder::Four) => {
            tally.direct_edges(4)?;
            tally.triangle_unions()?;
        }
    }
    tally.enumerate(order.size())?;

    let outcome = tally.finish();
    tracing::debug!(
        order = order.size(),
        %method,
        motifs = outcome.counts.len(),
        occurrences = outcome.counts.total(),
        candidates = outcome.stats.candidates,
        direct_hits = outcome.stats.direct_hits,
        union_hits = outcome.stats.union_hits,
        rejected = outcome.stats.rejected,
        duplicate_direct_edges = outcome.stats.duplicate_direct_edges,
        "motif count finished"
    );
    Ok(outcome)
}

/// Accumulator shared by the counting phases. `visited` is keyed by vertex
/// set, so a vertex set is counted at most once whichever phase reaches it.
struct Tally<'g, V> {
    graph: &'g Hypergraph<V>,
    counts: MotifCounts,
    visited: BTreeSet<BTreeSet<V>>,
    stats: CountStats,
}

impl<'g, V: Ord + Clone> Tally<'g, V> {
    fn new(graph: &'g Hypergraph<V>) -> Self {
        Self {
            graph,
            counts: MotifCounts::new(),
            visited: BTreeSet::new(),
            stats: CountStats::default(),
        }
    }

    /// Induces `subset` from the original hypergraph and counts it when the
    /// result is connected. Returns whether it was counted.
    fn record(&mut self, subset: &BTreeSet<V>) -> Result<bool, MotifError> {
        let candidate = self.graph.induced_subhypergraph(subset);
        if !candidate.is_connected() {
            self.stats.rejected += 1;
            return Ok(false);
        }
        self.counts.increment(canonical_form(&candidate)?);
        Ok(true)
    }

    // A later hyperedge with the same vertex set as an earlier one is skipped
    // here: the set is already visited. Counts are per vertex set, so this
    // never changes the result, only `duplicate_direct_edges`.
    fn direct_edges(&mut self, size: usize) -> Result<(), MotifError> {
        let graph = self.graph;
        for edge in graph.edges_of_size(size) {
            if self.visited.contains(edge.vertices()) {
                self.stats.duplicate_direct_edges += 1;
                continue;
            }
            let subset = edge.vertices().clone();
            if self.record(&subset)? {
                self.stats.direct_hits += 1;
            }
            self.visited.insert(subset);
        }
        Ok(())
    }

    fn triangle_unions(&mut self) -> Result<(), MotifError> {
        let reduced = self.graph.without_edges_of_size(4);
        for edge in reduced.edges_of_size(3) {
            for other in reduced.edges() {
                if other.id() == edge.id() || !edge.intersects(other) {
                    continue;
                }
                let union: BTreeSet<V> = edge
                    .vertices()
                    .union(other.vertices())
                    .cloned()
                    .collect();
                if union.len() != 4 || self.visited.contains(&union) {
                    continue;
                }
                if self.record(&union)? {
                    self.stats.union_hits += 1;
                }
                self.visited.insert(union);
            }
        }
        Ok(())
    }

    // The enumerator never emits a set twice, so this last phase only reads
    // `visited`.
    fn enumerate(&mut self, k: usize) -> Result<(), MotifError> {
        let projection = self.graph.projection_2_section();
        try_for_each_connected_subset(&projection, k, |members| {
            self.stats.candidates += 1;
            let subset: BTreeSet<V> = members.iter().cloned().collect();
            if !self.visited.contains(&subset) {
                self.record(&subset)?;
            }
            Ok(())
        })
    }

    fn finish(self) -> CountOutcome {
        CountOutcome {
            counts: self.counts,
            stats: self.stats,
        }
    }
}
