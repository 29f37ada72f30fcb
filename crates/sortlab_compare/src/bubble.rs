//! Bubble sort with cost counting.

use crate::cost::{CompareRun, CostSummary};

/// Sort by repeated adjacent-pair passes, counting costs.
///
/// Every pass examines one fewer trailing element than the last.
/// There is no early-exit check: the full pass structure runs even on
/// sorted input, so its counters stay comparable against the traced
/// engine's adaptive behavior. One comparison per pair examined, one
/// move per executed swap.
#[must_use]
pub fn bubble_sort(input: &[i64]) -> CompareRun {
    let mut a = input.to_vec();
    let n = a.len();
    let mut cost = CostSummary::zero();

    for i in 0..n {
        for j in 0..n - i - 1 {
            cost.record_comparison();
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                cost.record_move();
            }
        }
    }

    CompareRun { sorted: a, cost }
}
