//! SORTLAB Comparison Sorts
//!
//! Bubble sort and quicksort with comparison/move counters and no step
//! logs, for side-by-side metric comparison against the traced engine.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bubble;
pub mod cost;
pub mod quick;

pub use bubble::bubble_sort;
pub use cost::{CompareRun, CostSummary};
pub use quick::quick_sort;
