//! Traced insertion sort engine.
//!
//! Sorts ascending and stable over an internal copy. Caller-owned data
//! is never mutated. The counting policy is exact: every backward-scan
//! test counts one comparison, including the failing test that stops
//! the scan; every right-shift write and every key placement counts
//! one move; every slot read or write counts one access.

use crate::cursor::StepCursor;
use crate::step::{Step, StepKind};
use serde::{Deserialize, Serialize};
use sortlab_core::OpCounters;
use std::collections::BTreeMap;

/// Run verification error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    /// Output is not a permutation of the input
    #[error("output is not a permutation of the input")]
    NotPermutation,
    /// Output has an inversion
    #[error("output is not sorted at index {index}")]
    NotSorted {
        /// Index of the out-of-order element
        index: usize,
    },
    /// Step log does not start with the initial snapshot
    #[error("step log is missing the initial snapshot")]
    MissingInitial,
    /// Counters went backwards between two steps
    #[error("counters decreased at step {index}")]
    CounterRegression {
        /// Index of the offending step
        index: usize,
    },
    /// Final step snapshot differs from the returned sorted sequence
    #[error("final snapshot does not match the sorted output")]
    SnapshotMismatch,
}

/// Finished run of the traced engine
///
/// One run per invocation; no cross-run state is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracedRun {
    /// The input sequence as received
    pub input: Vec<i64>,
    /// The sorted sequence
    pub sorted: Vec<i64>,
    /// Chronological step log, starting with the initial snapshot
    pub steps: Vec<Step>,
    /// Final counter totals
    pub counters: OpCounters,
}

impl TracedRun {
    /// Number of recorded steps
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Number of right-shift steps across all passes
    #[must_use]
    pub fn shift_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.kind, StepKind::Shift { .. }))
            .count()
    }

    /// Last recorded step
    #[must_use]
    pub fn final_step(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Cursor positioned at the start of the step log
    #[must_use]
    pub fn cursor(&self) -> StepCursor<'_> {
        StepCursor::new(&self.steps)
    }

    /// Check the run invariants
    ///
    /// The output must be a permutation of the input, sorted pairwise,
    /// the log must open with the initial snapshot, counters must be
    /// monotone across the log, and the final snapshot must equal the
    /// sorted sequence.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn verify(&self) -> Result<(), VerifyError> {
        if multiset(&self.input) != multiset(&self.sorted) {
            return Err(VerifyError::NotPermutation);
        }

        for (index, pair) in self.sorted.windows(2).enumerate() {
            if pair[0] > pair[1] {
                return Err(VerifyError::NotSorted { index: index + 1 });
            }
        }

        let first = self.steps.first().ok_or(VerifyError::MissingInitial)?;
        if first.kind != StepKind::Initial {
            return Err(VerifyError::MissingInitial);
        }

        for (index, pair) in self.steps.windows(2).enumerate() {
            if pair[1].counters.delta_from(&pair[0].counters).is_none() {
                return Err(VerifyError::CounterRegression { index: index + 1 });
            }
        }

        let last = self.steps.last().ok_or(VerifyError::MissingInitial)?;
        if last.array != self.sorted {
            return Err(VerifyError::SnapshotMismatch);
        }

        Ok(())
    }

    /// Serialize to JSON
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Deserialize from JSON
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn multiset(values: &[i64]) -> BTreeMap<i64, usize> {
    let mut counts = BTreeMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// Engine running the traced insertion sort
pub struct TraceEngine;

impl TraceEngine {
    /// Create a new engine (unit struct)
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Sort a sequence, recording every state-changing operation.
    ///
    /// Maintains a growing sorted prefix. Each pass removes the key at
    /// `i`, scans the prefix backward shifting strictly-greater
    /// elements one slot right, then writes the key into the vacated
    /// slot. Only strictly-greater elements shift, so equal elements
    /// keep their relative order.
    #[must_use]
    pub fn run(&self, input: &[i64]) -> TracedRun {
        let mut a = input.to_vec();
        let mut counters = OpCounters::zero();
        let mut steps = Vec::new();

        steps.push(Step {
            array: a.clone(),
            i: 0,
            j: 0,
            counters,
            kind: StepKind::Initial,
        });

        for i in 1..a.len() {
            let key = a[i];
            counters.record_access();
            let mut j = i;

            while j > 0 {
                counters.record_comparison();
                counters.record_access();
                if a[j - 1] > key {
                    a[j] = a[j - 1];
                    counters.record_move();
                    counters.record_access();
                    steps.push(Step {
                        array: a.clone(),
                        i,
                        j: j - 1,
                        counters,
                        kind: StepKind::Shift {
                            value: a[j],
                            from: j - 1,
                            to: j,
                        },
                    });
                    j -= 1;
                } else {
                    break;
                }
            }

            a[j] = key;
            counters.record_move();
            counters.record_access();
            steps.push(Step {
                array: a.clone(),
                i,
                j,
                counters,
                kind: StepKind::Insert {
                    value: key,
                    position: j,
                },
            });
        }

        tracing::debug!(
            "traced {} elements in {} steps ({})",
            input.len(),
            steps.len(),
            counters
        );

        TracedRun {
            input: input.to_vec(),
            sorted: a,
            steps,
            counters,
        }
    }
}

impl Default for TraceEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort a sequence with full step tracing
#[must_use]
pub fn insertion_sort_traced(input: &[i64]) -> TracedRun {
    TraceEngine::new().run(input)
}
