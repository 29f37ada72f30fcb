//! Quicksort with cost counting.

use crate::cost::{CompareRun, CostSummary};

/// Sort by three-way partitioning around a middle pivot, counting costs.
///
/// Each partition level examines every element against the pivot in
/// one linear pass: one comparison and one move per element, whichever
/// bucket it lands in. Recursion covers the strictly-less and
/// strictly-greater buckets; partitions of length one or less return
/// with no additional counts.
#[must_use]
pub fn quick_sort(input: &[i64]) -> CompareRun {
    let mut cost = CostSummary::zero();
    let sorted = quicksort(input.to_vec(), &mut cost);
    CompareRun { sorted, cost }
}

fn quicksort(a: Vec<i64>, cost: &mut CostSummary) -> Vec<i64> {
    if a.len() <= 1 {
        return a;
    }

    let pivot = a[a.len() / 2];
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for x in a {
        cost.record_comparison();
        if x < pivot {
            less.push(x);
        } else if x == pivot {
            equal.push(x);
        } else {
            greater.push(x);
        }
        cost.record_move();
    }

    let mut sorted = quicksort(less, cost);
    sorted.extend(equal);
    sorted.extend(quicksort(greater, cost));
    sorted
}
