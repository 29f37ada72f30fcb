//! Operation counters for sort instrumentation.
//!
//! Counters only ever increase within a run. An access is any read or
//! write of an array slot, so accesses form a superset of moves.

use serde::{Deserialize, Serialize};

/// Aggregate operation counters for one sort run
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct OpCounters {
    /// Order tests between two elements
    pub comparisons: u64,
    /// Writes of a value into an array slot
    pub moves: u64,
    /// Reads or writes of an array slot
    pub accesses: u64,
}

impl OpCounters {
    /// Create counters at zero
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            comparisons: 0,
            moves: 0,
            accesses: 0,
        }
    }

    /// Count one comparison
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Count one move (array write)
    pub fn record_move(&mut self) {
        self.moves += 1;
    }

    /// Count one array access (read or write)
    pub fn record_access(&mut self) {
        self.accesses += 1;
    }

    /// Combined operation count
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.comparisons + self.moves + self.accesses
    }

    /// Difference since an earlier counter snapshot
    ///
    /// Returns `None` if any counter went backwards, which a
    /// well-formed step log never produces.
    #[must_use]
    pub fn delta_from(&self, earlier: &Self) -> Option<Self> {
        Some(Self {
            comparisons: self.comparisons.checked_sub(earlier.comparisons)?,
            moves: self.moves.checked_sub(earlier.moves)?,
            accesses: self.accesses.checked_sub(earlier.accesses)?,
        })
    }
}

impl std::fmt::Display for OpCounters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} comps | {} moves | {} accesses",
            self.comparisons, self.moves, self.accesses
        )
    }
}
