//! SORTLAB Traced Sort Engine
//!
//! Insertion sort instrumented with an ordered, append-only log of
//! every state-changing operation. Each recorded step is a frozen
//! snapshot; replaying the log reproduces the sort exactly.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod engine;
pub mod step;

pub use cursor::{StepCursor, TraceError};
pub use engine::{TraceEngine, TracedRun, VerifyError, insertion_sort_traced};
pub use step::{Step, StepKind};
