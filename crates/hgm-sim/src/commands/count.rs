use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use hgm_core::{MotifOrder, RunProvenance};
use hgm_count::{count_motifs_with_stats, CountMethod, CountStats, MotifCounts};
use hgm_data::{DatasetKind, DEFAULT_MAX_SIZE};
use serde::Serialize;

use super::{emit_json, load_input, parse_method, parse_order};

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Motif order (3 or 4).
    #[arg(long, value_parser = parse_order)]
    pub k: MotifOrder,
    /// Counting strategy: `baseline` or `efficient`.
    #[arg(long, default_value = "efficient", value_parser = parse_method)]
    pub method: CountMethod,
    /// DBLP CSV, email-Eu directory or hypergraph JSON file.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Dataset layout of `--input`: auto, dblp or email-eu.
    #[arg(long, default_value = "auto")]
    pub dataset: DatasetKind,
    /// Largest hyperedge kept when loading a dataset.
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    pub max_size: usize,
    /// Write the report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct CountReport {
    pub provenance: RunProvenance,
    pub order: MotifOrder,
    pub method: CountMethod,
    pub vertices: usize,
    pub edges: usize,
    pub size_histogram: BTreeMap<usize, usize>,
    pub counts: MotifCounts,
    pub total: u64,
    pub stats: CountStats,
    pub elapsed_seconds: f64,
}

pub fn run(args: &CountArgs) -> Result<(), Box<dyn Error>> {
    let input = load_input(args.input.as_deref(), args.dataset, args.max_size)?;
    let graph = &input.graph;
    tracing::info!(
        input = %input.input,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        order = %args.k,
        method = %args.method,
        "counting motifs"
    );

    let start = Instant::now();
    let outcome = count_motifs_with_stats(graph, args.k, args.method)?;
    let elapsed_seconds = start.elapsed().as_secs_f64();

    let report = CountReport {
        provenance: input.provenance()?,
        order: args.k,
        method: args.method,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        size_histogram: graph.size_histogram(),
        total: outcome.counts.total(),
        counts: outcome.counts,
        stats: outcome.stats,
        elapsed_seconds,
    };
    emit_json(&report, args.out.as_deref())
}
