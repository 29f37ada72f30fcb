//! Step records for the traced sort engine.
//!
//! Steps are produced in strict chronological order and never mutated
//! after creation.

use serde::{Deserialize, Serialize};
use sortlab_core::OpCounters;

/// Kind of recorded step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// Array snapshot before any pass runs
    Initial,
    /// An element shifted one slot right to make room for the key
    Shift {
        /// The value that moved
        value: i64,
        /// Slot the value moved out of
        from: usize,
        /// Slot the value moved into
        to: usize,
    },
    /// The key written into its slot at the end of a pass
    Insert {
        /// The key value
        value: i64,
        /// Final slot for this pass
        position: usize,
    },
}

impl StepKind {
    /// Whether this step wrote to the array
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        matches!(self, Self::Shift { .. } | Self::Insert { .. })
    }

    /// Array indices highlighted as active for this step
    #[must_use]
    pub fn highlights(&self) -> Vec<usize> {
        match self {
            Self::Initial => Vec::new(),
            Self::Shift { from, to, .. } => vec![*from, *to],
            Self::Insert { position, .. } => vec![*position],
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initial => write!(f, "Initial array"),
            Self::Shift { value, .. } => write!(f, "Shift {} right", value),
            Self::Insert { value, position } => {
                write!(f, "Insert {} at position {}", value, position)
            }
        }
    }
}

/// One recorded step of a traced sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Full array snapshot after this step's effect
    pub array: Vec<i64>,
    /// Outer cursor: index of the key being inserted
    pub i: usize,
    /// Inner cursor: scan position within the sorted prefix
    pub j: usize,
    /// Counter totals as of this step
    pub counters: OpCounters,
    /// What happened
    pub kind: StepKind,
}

impl Step {
    /// Human-readable description of this step
    #[must_use]
    pub fn description(&self) -> String {
        self.kind.to_string()
    }

    /// Array indices highlighted as active for this step
    #[must_use]
    pub fn highlights(&self) -> Vec<usize> {
        self.kind.highlights()
    }

    /// Whether this step wrote to the array
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        self.kind.is_mutation()
    }
}
