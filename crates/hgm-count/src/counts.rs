use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::canonical::CanonicalForm;

/// Occurrence count per motif class.
///
/// Equality is exact mapping equality, which is how the optimised counters
/// are checked against the baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<MotifEntry>", from = "Vec<MotifEntry>")]
pub struct MotifCounts {
    counts: BTreeMap<CanonicalForm, u64>,
}

/// Serialized row of a [`MotifCounts`] table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotifEntry {
    /// Canonical form identifying the motif class.
    pub motif: CanonicalForm,
    /// Number of induced occurrences.
    pub count: u64,
}

impl MotifCounts {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn increment(&mut self, form: CanonicalForm) {
        *self.counts.entry(form).or_insert(0) += 1;
    }

    /// Returns the count recorded for `form` (zero when absent).
    pub fn get(&self, form: &CanonicalForm) -> u64 {
        self.counts.get(form).copied().unwrap_or(0)
    }

    /// Returns the number of distinct motif classes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns whether no motif was found.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the total number of occurrences across all classes.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterates over `(form, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalForm, u64)> + '_ {
        self.counts.iter().map(|(form, count)| (form, *count))
    }

    /// Returns the underlying map.
    pub fn as_map(&self) -> &BTreeMap<CanonicalForm, u64> {
        &self.counts
    }
}

impl From<MotifCounts> for Vec<MotifEntry> {
    fn from(value: MotifCounts) -> Self {
        value
            .counts
            .into_iter()
            .map(|(motif, count)| MotifEntry { motif, count })
            .collect()
    }
}

impl From<Vec<MotifEntry>> for MotifCounts {
    fn from(entries: Vec<MotifEntry>) -> Self {
        let mut counts = BTreeMap::new();
        for entry in entries {
            *counts.entry(entry.motif).or_insert(0) += entry.count;
        }
        Self { counts }
    }
}

impl FromIterator<(CanonicalForm, u64)> for MotifCounts {
    fn from_iter<I: IntoIterator<Item = (CanonicalForm, u64)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(motif, count)| MotifEntry { motif, count })
            .collect::<Vec<_>>()
            .into()
    }
}
