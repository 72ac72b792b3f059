use std::error::Error;

use clap::{ArgAction, Parser, Subcommand};
use commands::{
    bench::{self, BenchArgs},
    count::{self, CountArgs},
    example::{self, ExampleArgs},
    generate::{self, GenerateArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "hgm", version, about = "Hypergraph motif counting CLI")]
struct Cli {
    /// Raise log verbosity (`-v` info, `-vv` debug). Overrides `RUST_LOG`.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count order-3 or order-4 motifs of a dataset or the built-in example.
    Count(CountArgs),
    /// Time baseline against efficient counting and check they agree.
    Bench(BenchArgs),
    /// Print the built-in example hypergraph with its motif counts.
    Example(ExampleArgs),
    /// Write a seeded random hypergraph as JSON.
    Generate(GenerateArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Count(args) => count::run(&args),
        Command::Bench(args) => bench::run(&args),
        Command::Example(args) => example::run(&args),
        Command::Generate(args) => generate::run(&args),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    // Logs go to stderr so stdout stays machine readable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
