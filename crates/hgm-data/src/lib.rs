//! Dataset loaders that turn raw relational records into hypergraphs.
//!
//! Every loader returns `Ok(None)` when its source data is absent so callers
//! can fall back to [`example_hypergraph`].

pub mod dataset;
pub mod dblp;
pub mod email_eu;
mod example;

pub use dataset::{load_dataset, DatasetKind, DatasetSource};
pub use dblp::load_dblp;
pub use email_eu::{load_email_eu, EMAIL_EU_NAME};
pub use example::example_hypergraph;

use std::collections::BTreeSet;

use hgm_core::errors::{ErrorInfo, MotifError};
use hgm_graph::Hypergraph;

/// Default upper bound on hyperedge size used by the loaders.
pub const DEFAULT_MAX_SIZE: usize = 4;

pub(crate) fn data_error(code: &str, err: impl ToString) -> MotifError {
    MotifError::Data(ErrorInfo::new(code, err.to_string()))
}

/// Keeps the distinct member sets whose size lies in `[2, max_size]`, in
/// sorted order, and builds the hypergraph from them.
pub(crate) fn build_deduplicated<V, I>(groups: I, max_size: usize) -> Hypergraph<V>
where
    V: Ord + Clone,
    I: IntoIterator<Item = BTreeSet<V>>,
{
    let edges: BTreeSet<BTreeSet<V>> = groups
        .into_iter()
        .filter(|members| members.len() >= 2 && members.len() <= max_size)
        .collect();
    Hypergraph::from_edges(edges)
}
