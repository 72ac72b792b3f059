#![deny(missing_docs)]
#![doc = "Motif counting for hypergraphs: connected-subset enumeration (ESU), \
brute-force canonical labelling for up to four vertices, and the baseline and \
optimised order-3/order-4 counters."]

/// Canonical labelling of small hypergraphs.
pub mod canonical;
/// Baseline and optimised motif counters.
pub mod counter;
/// Motif count tables.
pub mod counts;
/// Exhaustive, non-redundant enumeration of connected vertex subsets.
pub mod esu;

pub use canonical::{canonical_form, CanonicalForm, MAX_CANONICAL_VERTICES};
pub use counter::{
    baseline_count, count_motifs, count_motifs_with_stats, efficient_count_order3,
    efficient_count_order4, CountMethod, CountOutcome, CountStats,
};
pub use counts::{MotifCounts, MotifEntry};
pub use esu::{connected_subsets, for_each_connected_subset, try_for_each_connected_subset};
pub use hgm_core::MotifOrder;
