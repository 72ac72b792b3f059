#![deny(missing_docs)]
#![doc = "Core error, order and provenance types shared by the hypergraph motif crates."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, MotifError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};

/// Motif order (number of vertices per motif) supported by the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum MotifOrder {
    /// Motifs on three vertices.
    Three,
    /// Motifs on four vertices.
    Four,
}

impl MotifOrder {
    /// Every supported order, smallest first.
    pub const ALL: [MotifOrder; 2] = [MotifOrder::Three, MotifOrder::Four];

    /// Returns the number of vertices per motif.
    pub const fn size(self) -> usize {
        match self {
            MotifOrder::Three => 3,
            MotifOrder::Four => 4,
        }
    }
}

impl TryFrom<usize> for MotifOrder {
    type Error = MotifError;

    fn try_from(k: usize) -> Result<Self, Self::Error> {
        match k {
            3 => Ok(MotifOrder::Three),
            4 => Ok(MotifOrder::Four),
            other => Err(MotifError::InvalidArgument(
                ErrorInfo::new("invalid-order", "motif order must be 3 or 4")
                    .with_context("k", other),
            )),
        }
    }
}

impl From<MotifOrder> for usize {
    fn from(order: MotifOrder) -> Self {
        order.size()
    }
}

impl fmt::Display for MotifOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.size())
    }
}
