use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use hgm_core::errors::{ErrorInfo, MotifError};
use hgm_graph::Hypergraph;

use crate::{build_deduplicated, data_error};

/// File-name prefix of the email-Eu simplicial dataset.
pub const EMAIL_EU_NAME: &str = "email-Eu";

/// Loads the email-Eu simplex dataset from `dir`.
///
/// `email-Eu-nverts.txt` lists one simplex size per line and
/// `email-Eu-simplices.txt` the flat vertex ids; consecutive runs of the given
/// sizes form the simplices. Distinct simplices of size `2..=max_size` become
/// hyperedges. Returns `Ok(None)` when either file is missing.
pub fn load_email_eu(dir: &Path, max_size: usize) -> Result<Option<Hypergraph<u64>>, MotifError> {
    let nverts_path = dir.join(format!("{EMAIL_EU_NAME}-nverts.txt"));
    let simplices_path = dir.join(format!("{EMAIL_EU_NAME}-simplices.txt"));
    if !nverts_path.is_file() || !simplices_path.is_file() {
        tracing::debug!(dir = %dir.display(), "email-Eu files not found");
        return Ok(None);
    }

    let sizes: Vec<usize> = read_integers(&nverts_path)?;
    let flat: Vec<u64> = read_integers(&simplices_path)?;

    let mut simplices: Vec<BTreeSet<u64>> = Vec::with_capacity(sizes.len());
    let mut offset = 0usize;
    for (idx, &size) in sizes.iter().enumerate() {
        let block = offset
            .checked_add(size)
            .and_then(|end| flat.get(offset..end));
        let Some(block) = block else {
            return Err(MotifError::Data(
                ErrorInfo::new(
                    "email-eu-truncated",
                    "simplex file ends before the declared simplex sizes",
                )
                .with_context("simplex", idx)
                .with_context("needed", offset as u128 + size as u128)
                .with_context("available", flat.len()),
            ));
        };
        simplices.push(block.iter().copied().collect());
        offset += block.len();
    }

    let graph = build_deduplicated(simplices, max_size);
    tracing::debug!(
        dir = %dir.display(),
        simplices = sizes.len(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded email-Eu hypergraph"
    );
    Ok(Some(graph))
}

fn read_integers<T: std::str::FromStr>(path: &Path) -> Result<Vec<T>, MotifError>
where
    T::Err: std::fmt::Display,
{
    let contents = fs::read_to_string(path)
        .map_err(|err| data_error("email-eu-read", format!("{}: {err}", path.display())))?;
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            line.trim().parse::<T>().map_err(|err| {
                MotifError::Data(
                    ErrorInfo::new("email-eu-parse", err.to_string())
                        .with_context("file", path.display())
                        .with_context("line", idx + 1),
                )
            })
        })
        .collect()
}
