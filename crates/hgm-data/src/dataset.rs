use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use hgm_core::errors::{ErrorInfo, MotifError};
use hgm_graph::Hypergraph;
use serde::{Deserialize, Serialize};

use crate::{load_dblp, load_email_eu, DEFAULT_MAX_SIZE};

/// Layout of a dataset on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    /// Directory means email-Eu, anything else a DBLP CSV.
    #[default]
    Auto,
    /// `paper,author[,year]` CSV.
    Dblp,
    /// Directory holding the email-Eu nverts/simplices pair.
    EmailEu,
}

impl DatasetKind {
    /// Resolves [`DatasetKind::Auto`] against the given path.
    pub fn resolve(self, path: &std::path::Path) -> DatasetKind {
        match self {
            DatasetKind::Auto if path.is_dir() => DatasetKind::EmailEu,
            DatasetKind::Auto => DatasetKind::Dblp,
            other => other,
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DatasetKind::Auto => "auto",
            DatasetKind::Dblp => "dblp",
            DatasetKind::EmailEu => "email-eu",
        })
    }
}

impl FromStr for DatasetKind {
    type Err = MotifError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(DatasetKind::Auto),
            "dblp" => Ok(DatasetKind::Dblp),
            "email-eu" | "email_eu" | "emaileu" => Ok(DatasetKind::EmailEu),
            _ => Err(MotifError::InvalidArgument(
                ErrorInfo::new("unknown-dataset", format!("unknown dataset kind '{s}'"))
                    .with_hint("expected one of auto, dblp, email-eu"),
            )),
        }
    }
}

/// Where and how to load a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSource {
    /// CSV file or email-Eu directory.
    pub path: PathBuf,
    /// Dataset layout.
    #[serde(default)]
    pub kind: DatasetKind,
    /// Largest hyperedge kept.
    #[serde(default = "default_max_size")]
    pub max_size: usize,
}

fn default_max_size() -> usize {
    DEFAULT_MAX_SIZE
}

impl DatasetSource {
    /// Source with automatic layout detection and the default size bound.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: DatasetKind::Auto,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

/// Loads `source` into a string-labelled hypergraph, or `Ok(None)` when the
/// data is not present.
pub fn load_dataset(source: &DatasetSource) -> Result<Option<Hypergraph<String>>, MotifError> {
    match source.kind.resolve(&source.path) {
        DatasetKind::EmailEu => Ok(load_email_eu(&source.path, source.max_size)?
            .map(|graph| graph.map_vertices(|v| v.to_string()))),
        _ => load_dblp(&source.path, source.max_size),
    }
}
