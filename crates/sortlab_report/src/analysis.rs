//! Analysis orchestration: parse, trace-sort, compare.

use serde::{Deserialize, Serialize};
use sortlab_compare::{CompareRun, bubble_sort, quick_sort};
use sortlab_core::{InputResult, parse_sequence};
use sortlab_trace::{TracedRun, insertion_sort_traced};

/// Options for one analysis run
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct AnalysisOptions {
    /// Also run bubble sort and quicksort on the same input
    pub compare: bool,
}

impl AnalysisOptions {
    /// Enable the comparison sorts
    #[must_use]
    pub const fn with_comparisons() -> Self {
        Self { compare: true }
    }
}

/// A completed analysis over one input sequence
///
/// Either the whole analysis succeeds or parsing fails; there are no
/// partial results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// The parsed input sequence
    pub input: Vec<i64>,
    /// The traced insertion sort run
    pub traced: TracedRun,
    /// Bubble sort result, when comparisons were requested
    pub bubble: Option<CompareRun>,
    /// Quicksort result, when comparisons were requested
    pub quick: Option<CompareRun>,
}

impl Analysis {
    /// Parse free text and analyze the resulting sequence.
    ///
    /// # Errors
    ///
    /// Returns the parse failure; no sorting runs on invalid input.
    pub fn run(text: &str, options: AnalysisOptions) -> InputResult<Self> {
        let input = parse_sequence(text)?;
        Ok(Self::over(input, options))
    }

    /// Analyze an already-parsed sequence
    #[must_use]
    pub fn over(input: Vec<i64>, options: AnalysisOptions) -> Self {
        let traced = insertion_sort_traced(&input);
        let (bubble, quick) = if options.compare {
            (Some(bubble_sort(&input)), Some(quick_sort(&input)))
        } else {
            (None, None)
        };

        Self {
            input,
            traced,
            bubble,
            quick,
        }
    }

    /// The sorted sequence
    #[must_use]
    pub fn sorted(&self) -> &[i64] {
        &self.traced.sorted
    }

    /// Whether comparison results are present
    #[must_use]
    pub fn has_comparisons(&self) -> bool {
        self.bubble.is_some() && self.quick.is_some()
    }
}
