use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use hgm_core::errors::MotifError;
use hgm_graph::Hypergraph;

use crate::{build_deduplicated, data_error};

/// Loads a DBLP-style CSV (`paper,author[,year]` rows after a header line).
///
/// Authors are grouped per paper; each distinct author set of size
/// `2..=max_size` becomes one hyperedge. Rows with fewer than two fields are
/// skipped. Returns `Ok(None)` when `path` does not exist.
pub fn load_dblp(path: &Path, max_size: usize) -> Result<Option<Hypergraph<String>>, MotifError> {
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "dblp file not found");
        return Ok(None);
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|err| data_error("dblp-open", format!("{}: {err}", path.display())))?;

    let mut papers: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut rows = 0usize;
    for record in reader.records() {
        let record = record.map_err(|err| data_error("dblp-parse", err))?;
        let (Some(paper), Some(author)) = (record.get(0), record.get(1)) else {
            continue;
        };
        if paper.is_empty() && author.is_empty() {
            continue;
        }
        papers
            .entry(paper.to_string())
            .or_default()
            .insert(author.to_string());
        rows += 1;
    }

    let graph = build_deduplicated(papers.into_values(), max_size);
    tracing::debug!(
        path = %path.display(),
        rows,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "loaded dblp hypergraph"
    );
    Ok(Some(graph))
}
