//! Plain-text analysis summary.

use crate::analysis::Analysis;

const RULE_WIDTH: usize = 70;

/// Render the human-readable analysis summary.
///
/// Covers the input/output arrays, the traced engine's counters, and,
/// when comparisons ran, the per-algorithm cost table with relative
/// ratios.
#[must_use]
pub fn render_summary(analysis: &Analysis) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let counters = analysis.traced.counters;

    let mut lines = vec![
        rule.clone(),
        "INSERTION SORT ANALYSIS".to_string(),
        rule.clone(),
        format!("Sorted {} elements successfully", analysis.input.len()),
        String::new(),
        "RESULTS".to_string(),
        format!("  Input:  {:?}", analysis.input),
        format!("  Output: {:?}", analysis.traced.sorted),
        String::new(),
        "PERFORMANCE METRICS".to_string(),
        format!("  Comparisons:      {}", counters.comparisons),
        format!("  Array moves:      {}", counters.moves),
        format!("  Total accesses:   {}", counters.accesses),
        format!("  Total operations: {}", counters.total()),
        String::new(),
    ];

    match (&analysis.bubble, &analysis.quick) {
        (Some(bubble), Some(quick)) => {
            lines.push("ALGORITHM COMPARISON".to_string());
            lines.push(format!(
                "  insertion -> {} comparisons, {} moves",
                counters.comparisons, counters.moves
            ));
            lines.push(format!("  bubble    -> {}", bubble.cost));
            lines.push(format!("  quick     -> {}", quick.cost));
            lines.push(String::new());
            lines.push("EFFICIENCY INSIGHTS".to_string());
            lines.push(format!(
                "  Insertion vs bubble: {:.2}x comparisons",
                ratio(bubble.cost.comparisons, counters.comparisons)
            ));
            lines.push(format!(
                "  Insertion vs quick:  {:.2}x comparisons",
                ratio(quick.cost.comparisons, counters.comparisons)
            ));
        }
        _ => lines.push("ALGORITHM COMPARISON (disabled)".to_string()),
    }

    lines.push(String::new());
    lines.push("KEY CHARACTERISTICS".to_string());
    lines.push("  Adaptive: fast on nearly-sorted input".to_string());
    lines.push("  Stable: equal elements keep their relative order".to_string());
    lines.push("  In-place: constant extra space".to_string());
    lines.push(
        "  Best case O(n) on sorted input, worst case O(n^2) on reversed input"
            .to_string(),
    );
    lines.push(rule);

    lines.join("\n")
}

fn ratio(other: u64, base: u64) -> f64 {
    other as f64 / base.max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisOptions;

    #[test]
    fn test_summary_contains_arrays_and_counters() {
        let analysis = Analysis::run("5, 2, 9", AnalysisOptions::default()).unwrap();
        let summary = render_summary(&analysis);
        assert!(summary.contains("Sorted 3 elements successfully"));
        assert!(summary.contains("Input:  [5, 2, 9]"));
        assert!(summary.contains("Output: [2, 5, 9]"));
        assert!(summary.contains("Comparisons:      2"));
        assert!(summary.contains("Array moves:      3"));
    }

    #[test]
    fn test_summary_without_comparisons() {
        let analysis = Analysis::run("1, 2", AnalysisOptions::default()).unwrap();
        let summary = render_summary(&analysis);
        assert!(summary.contains("ALGORITHM COMPARISON (disabled)"));
        assert!(!summary.contains("bubble    ->"));
    }

    #[test]
    fn test_summary_with_comparisons() {
        let analysis =
            Analysis::run("5, 2, 9", AnalysisOptions::with_comparisons()).unwrap();
        let summary = render_summary(&analysis);
        assert!(summary.contains("ALGORITHM COMPARISON"));
        assert!(summary.contains("bubble    -> 3 comparisons, 1 moves"));
        assert!(summary.contains("quick     -> 5 comparisons, 5 moves"));
        assert!(summary.contains("Insertion vs bubble: 1.50x comparisons"));
    }

    #[test]
    fn test_summary_ratio_survives_zero_comparisons() {
        // Single element: zero comparisons everywhere; no division blowup.
        let analysis = Analysis::run("42", AnalysisOptions::with_comparisons()).unwrap();
        let summary = render_summary(&analysis);
        assert!(summary.contains("Insertion vs bubble: 0.00x comparisons"));
    }
}
