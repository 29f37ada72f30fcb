//! Cost summaries for the comparison sorts.

use serde::{Deserialize, Serialize};

/// Comparison and move totals for one sort run
///
/// The comparison sorts do not track array accesses; accesses belong
/// to the traced engine's finer-grained instrumentation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct CostSummary {
    /// Order tests between two elements
    pub comparisons: u64,
    /// Writes of a value into a slot or bucket
    pub moves: u64,
}

impl CostSummary {
    /// Create a summary at zero
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            comparisons: 0,
            moves: 0,
        }
    }

    /// Count one comparison
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Count one move
    pub fn record_move(&mut self) {
        self.moves += 1;
    }
}

impl std::fmt::Display for CostSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} comparisons, {} moves", self.comparisons, self.moves)
    }
}

/// Sorted output plus cost totals from a comparison sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareRun {
    /// The sorted sequence
    pub sorted: Vec<i64>,
    /// Cost totals
    pub cost: CostSummary,
}
