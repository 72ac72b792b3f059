use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use hgm_core::errors::{ErrorInfo, MotifError};
use hgm_core::RngHandle;
use hgm_graph::{gen_random_hypergraph, graph_to_json};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of vertices to draw from.
    #[arg(long)]
    pub vertices: usize,
    /// Number of hyperedges.
    #[arg(long)]
    pub edges: usize,
    /// Largest hyperedge arity.
    #[arg(long, default_value_t = 4)]
    pub max_size: usize,
    /// Master seed; graph `i` of a batch draws from substream `i`.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Number of independent graphs to generate.
    #[arg(long, default_value_t = 1)]
    pub batch: u64,
    /// Output file, or directory receiving `graph-<i>.json` when `--batch` > 1.
    /// Stdout when omitted (single graph only).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    if args.batch == 0 {
        return Err(MotifError::InvalidArgument(ErrorInfo::new(
            "generate-batch",
            "batch must be at least 1",
        ))
        .into());
    }
    if args.batch > 1 && args.out.is_none() {
        return Err(MotifError::InvalidArgument(
            ErrorInfo::new("generate-batch", "a batch needs an output directory")
                .with_context("batch", args.batch)
                .with_hint("pass --out <DIR>"),
        )
        .into());
    }

    let master = RngHandle::from_seed(args.seed);
    for index in 0..args.batch {
        let mut rng = master.substream(index);
        let graph = gen_random_hypergraph(args.vertices, args.edges, args.max_size, &mut rng)?;
        tracing::info!(
            seed = args.seed,
            index,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "generated random hypergraph"
        );
        let json = graph_to_json(&graph)?;
        match &args.out {
            Some(dir) if args.batch > 1 => {
                fs::create_dir_all(dir)?;
                fs::write(dir.join(format!("graph-{index}.json")), json)?;
            }
            Some(path) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, json)?;
            }
            None => println!("{json}"),
        }
    }
    Ok(())
}
