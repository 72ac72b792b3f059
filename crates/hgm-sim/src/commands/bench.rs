use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use hgm_core::errors::{ErrorInfo, MotifError};
use hgm_core::{MotifOrder, RunProvenance};
use hgm_count::{count_motifs_with_stats, CountMethod, CountOutcome, CountStats};
use hgm_data::{DatasetKind, DEFAULT_MAX_SIZE};
use hgm_graph::Hypergraph;
use serde::{Deserialize, Serialize};

use super::{emit_json, load_input};

#[derive(Args, Debug)]
pub struct BenchArgs {
    /// DBLP CSV, email-Eu directory or hypergraph JSON file.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Dataset layout of `--file`: auto, dblp or email-eu.
    #[arg(long)]
    pub dataset: Option<DatasetKind>,
    /// Largest hyperedge kept when loading a dataset.
    #[arg(long)]
    pub max_size: Option<usize>,
    /// Timed runs per method and order.
    #[arg(long)]
    pub repeat: Option<usize>,
    /// YAML benchmark configuration; explicit flags take precedence.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// YAML-configurable benchmark parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    /// Dataset location; the built-in example is used when absent.
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub kind: DatasetKind,
    #[serde(default = "default_max_size")]
    pub max_size: usize,
    #[serde(default = "default_repeat")]
    pub repeat: usize,
    #[serde(default = "default_orders")]
    pub orders: Vec<MotifOrder>,
}

fn default_max_size() -> usize {
    DEFAULT_MAX_SIZE
}

fn default_repeat() -> usize {
    1
}

fn default_orders() -> Vec<MotifOrder> {
    MotifOrder::ALL.to_vec()
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            path: None,
            kind: DatasetKind::Auto,
            max_size: default_max_size(),
            repeat: default_repeat(),
            orders: default_orders(),
        }
    }
}

impl BenchConfig {
    fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let contents = fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&contents).map_err(|err| {
            MotifError::Serde(
                ErrorInfo::new("bench-config", err.to_string())
                    .with_context("path", path.display()),
            )
        })?;
        Ok(config)
    }

    fn with_overrides(mut self, args: &BenchArgs) -> Self {
        if let Some(file) = &args.file {
            self.path = Some(file.clone());
        }
        if let Some(kind) = args.dataset {
            self.kind = kind;
        }
        if let Some(max_size) = args.max_size {
            self.max_size = max_size;
        }
        if let Some(repeat) = args.repeat {
            self.repeat = repeat;
        }
        self
    }

    fn validate(&self) -> Result<(), MotifError> {
        if self.repeat == 0 {
            return Err(MotifError::InvalidArgument(
                ErrorInfo::new("bench-repeat", "repeat must be at least 1")
                    .with_context("repeat", self.repeat),
            ));
        }
        if self.orders.is_empty() {
            return Err(MotifError::InvalidArgument(
                ErrorInfo::new("bench-orders", "at least one motif order is required")
                    .with_hint("set orders: [3, 4] in the configuration"),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodTiming {
    pub method: CountMethod,
    pub mean_seconds: f64,
    pub min_seconds: f64,
    pub stats: CountStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchRow {
    pub order: MotifOrder,
    pub motif_classes: usize,
    pub total: u64,
    pub baseline: MethodTiming,
    pub efficient: MethodTiming,
    pub speedup: f64,
    pub matches: bool,
}

#[derive(Debug, Serialize)]
pub struct BenchReport {
    pub provenance: RunProvenance,
    pub config: BenchConfig,
    pub vertices: usize,
    pub edges: usize,
    pub rows: Vec<BenchRow>,
}

pub fn run(args: &BenchArgs) -> Result<(), Box<dyn Error>> {
    let config = match &args.config {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::default(),
    }
    .with_overrides(args);
    config.validate()?;

    let input = load_input(config.path.as_deref(), config.kind, config.max_size)?;
    tracing::info!(
        input = %input.input,
        vertices = input.graph.vertex_count(),
        edges = input.graph.edge_count(),
        repeat = config.repeat,
        "benchmarking counters"
    );

    let mut rows = Vec::with_capacity(config.orders.len());
    for &order in &config.orders {
        let (baseline, baseline_outcome) =
            time_method(&input.graph, order, CountMethod::Baseline, config.repeat)?;
        let (efficient, efficient_outcome) =
            time_method(&input.graph, order, CountMethod::Efficient, config.repeat)?;
        let matches = baseline_outcome.counts == efficient_outcome.counts;
        if !matches {
            tracing::error!(%order, "efficient counts differ from baseline");
        }
        let speedup = if efficient.mean_seconds > 0.0 {
            baseline.mean_seconds / efficient.mean_seconds
        } else {
            0.0
        };
        rows.push(BenchRow {
            order,
            motif_classes: baseline_outcome.counts.len(),
            total: baseline_outcome.counts.total(),
            baseline,
            efficient,
            speedup,
            matches,
        });
    }

    print_table(&rows);
    let mismatched: Vec<String> = rows
        .iter()
        .filter(|row| !row.matches)
        .map(|row| row.order.to_string())
        .collect();
    let report = BenchReport {
        provenance: input.provenance()?,
        vertices: input.graph.vertex_count(),
        edges: input.graph.edge_count(),
        config,
        rows,
    };
    emit_json(&report, args.out.as_deref())?;

    if !mismatched.is_empty() {
        return Err(format!(
            "efficient counts differ from baseline for order(s) {}",
            mismatched.join(", ")
        )
        .into());
    }
    Ok(())
}

fn time_method(
    graph: &Hypergraph<String>,
    order: MotifOrder,
    method: CountMethod,
    repeat: usize,
) -> Result<(MethodTiming, CountOutcome), MotifError> {
    let mut durations = Vec::with_capacity(repeat);
    let mut last = None;
    for _ in 0..repeat {
        let start = Instant::now();
        let outcome = count_motifs_with_stats(graph, order, method)?;
        durations.push(start.elapsed().as_secs_f64());
        last = Some(outcome);
    }
    let outcome = last.ok_or_else(|| {
        MotifError::InvalidArgument(ErrorInfo::new("bench-repeat", "repeat must be at least 1"))
    })?;
    let mean_seconds = durations.iter().sum::<f64>() / durations.len() as f64;
    let min_seconds = durations.iter().copied().fold(f64::INFINITY, f64::min);
    let timing = MethodTiming {
        method,
        mean_seconds,
        min_seconds,
        stats: outcome.stats,
    };
    Ok((timing, outcome))
}

/// Human readable summary on stderr; stdout carries the JSON report.
fn print_table(rows: &[BenchRow]) {
    eprintln!(
        "{:<6} {:>8} {:>10} {:>14} {:>14} {:>8} {:>6}",
        "order", "classes", "total", "baseline (s)", "efficient (s)", "speedup", "match"
    );
    for row in rows {
        eprintln!(
            "{:<6} {:>8} {:>10} {:>14.6} {:>14.6} {:>8.2} {:>6}",
            row.order.size(),
            row.motif_classes,
            row.total,
            row.baseline.mean_seconds,
            row.efficient.mean_seconds,
            row.speedup,
            if row.matches { "yes" } else { "NO" }
        );
    }
}
