pub mod bench;
pub mod count;
pub mod example;
pub mod generate;

use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use hgm_core::{MotifOrder, RunProvenance, SchemaVersion};
use hgm_count::CountMethod;
use hgm_data::{example_hypergraph, load_dataset, DatasetKind, DatasetSource};
use hgm_graph::{canonical_hash, graph_from_json, Hypergraph};
use serde::Serialize;

/// Schema version stamped on every report the CLI emits.
pub const REPORT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

const BUILTIN_INPUT: &str = "builtin-example";

/// Hypergraph resolved from the command line together with its origin.
pub struct InputGraph {
    pub graph: Hypergraph<String>,
    pub input: String,
    pub dataset: String,
}

impl InputGraph {
    pub fn builtin() -> Self {
        Self {
            graph: example_hypergraph(),
            input: BUILTIN_INPUT.into(),
            dataset: "example".into(),
        }
    }

    pub fn provenance(&self) -> Result<RunProvenance, Box<dyn Error>> {
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert("hgm".to_string(), env!("CARGO_PKG_VERSION").to_string());
        Ok(RunProvenance {
            input: self.input.clone(),
            dataset: self.dataset.clone(),
            graph_hash: canonical_hash(&self.graph)?,
            schema_version: REPORT_SCHEMA,
            tool_versions,
        })
    }
}

/// Loads `input` as a hypergraph JSON document or a dataset, falling back to
/// the built-in example when no input is given or the data is absent.
pub fn load_input(
    input: Option<&Path>,
    kind: DatasetKind,
    max_size: usize,
) -> Result<InputGraph, Box<dyn Error>> {
    let Some(path) = input else {
        return Ok(InputGraph::builtin());
    };
    if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
        let graph = read_graph_json(path)?;
        return Ok(InputGraph {
            graph,
            input: path.display().to_string(),
            dataset: "hypergraph-json".into(),
        });
    }
    let source = DatasetSource {
        path: PathBuf::from(path),
        kind,
        max_size,
    };
    match load_dataset(&source)? {
        Some(graph) => Ok(InputGraph {
            graph,
            input: path.display().to_string(),
            dataset: kind.resolve(path).to_string(),
        }),
        None => {
            tracing::warn!(
                path = %path.display(),
                "dataset unavailable, using the built-in example"
            );
            Ok(InputGraph::builtin())
        }
    }
}

/// Reads a hypergraph JSON document with string or integer vertex labels.
fn read_graph_json(path: &Path) -> Result<Hypergraph<String>, Box<dyn Error>> {
    let json = fs::read_to_string(path)?;
    match graph_from_json::<String>(&json) {
        Ok(graph) => Ok(graph),
        Err(as_strings) => match graph_from_json::<u64>(&json) {
            Ok(graph) => Ok(graph.map_vertices(|v| v.to_string())),
            Err(_) => Err(as_strings.into()),
        },
    }
}

pub fn parse_order(value: &str) -> Result<MotifOrder, String> {
    let k: usize = value
        .parse()
        .map_err(|_| format!("motif order must be 3 or 4, got '{value}'"))?;
    MotifOrder::try_from(k).map_err(|err| err.to_string())
}

pub fn parse_method(value: &str) -> Result<CountMethod, String> {
    match value {
        "baseline" => Ok(CountMethod::Baseline),
        "efficient" => Ok(CountMethod::Efficient),
        other => Err(format!(
            "unknown method '{other}', expected baseline or efficient"
        )),
    }
}

/// Writes `value` as pretty JSON to `out`, or to stdout when no path is given.
pub fn emit_json<T: Serialize>(value: &T, out: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
        }
        None => println!("{json}"),
    }
    Ok(())
}
