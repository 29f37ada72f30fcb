//! Text rendering of step logs.

use sortlab_trace::{Step, StepCursor, TraceError};

const FRAME_WIDTH: usize = 68;

/// Render the full step log as text, one framed block per step.
#[must_use]
pub fn render_trace(steps: &[Step]) -> String {
    render_blocks(steps.iter().enumerate())
}

/// Render a window of the step log, starting at `from`.
///
/// A `limit` of zero renders everything from `from` to the end.
///
/// # Errors
///
/// Returns [`TraceError::OutOfBounds`] if `from` is past the end of
/// the log.
pub fn render_trace_window(
    steps: &[Step],
    from: usize,
    limit: usize,
) -> Result<String, TraceError> {
    let mut cursor = StepCursor::new(steps);
    cursor.seek(from)?;

    let mut window = Vec::new();
    while let Some(step) = cursor.next_step() {
        if limit != 0 && window.len() >= limit {
            break;
        }
        window.push((cursor.position() - 1, step));
    }

    Ok(render_blocks(window.into_iter()))
}

fn render_blocks<'a>(steps: impl Iterator<Item = (usize, &'a Step)>) -> String {
    let bar = format!("+{}+", "-".repeat(FRAME_WIDTH));
    let mut lines = vec![
        bar.clone(),
        format!("| {:^66} |", "STEP-BY-STEP EXECUTION TRACE"),
        bar,
    ];

    for (index, step) in steps {
        let visual = step
            .array
            .iter()
            .map(|x| format!("[{}]", x))
            .collect::<Vec<_>>()
            .join(" -> ");

        lines.push(String::new());
        lines.push(format!("+-- STEP {:02} {}", index, "-".repeat(56)));
        lines.push(format!("| Action: {}", step.description()));
        lines.push(format!("| Array:  {}", visual));
        lines.push(format!("| Indices: i={}, j={}", step.i, step.j));
        lines.push(format!("| Stats:  {}", step.counters));
        lines.push(format!("+{}", "-".repeat(FRAME_WIDTH)));
    }

    lines.join("\n")
}
