//! Cursor for navigating a finished step log.

use crate::step::Step;

/// Trace navigation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    /// Requested position is past the end of the log
    #[error("position {position} exceeds log length {len}")]
    OutOfBounds {
        /// Requested position
        position: usize,
        /// Log length
        len: usize,
    },
}

/// Cursor over an immutable step log
///
/// Positions range from 0 to the log length inclusive; the final
/// position means the cursor is exhausted.
#[derive(Debug, Clone)]
pub struct StepCursor<'a> {
    steps: &'a [Step],
    position: usize,
}

impl<'a> StepCursor<'a> {
    /// Create a cursor at the start of a log
    #[must_use]
    pub fn new(steps: &'a [Step]) -> Self {
        Self { steps, position: 0 }
    }

    /// Current position
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Total step count in the log
    #[must_use]
    pub const fn total(&self) -> usize {
        self.steps.len()
    }

    /// Steps left to read
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.steps.len() - self.position
    }

    /// Whether more steps can be read
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.position < self.steps.len()
    }

    /// Look at the next step without consuming it
    #[must_use]
    pub fn peek(&self) -> Option<&'a Step> {
        self.steps.get(self.position)
    }

    /// Read the next step and advance
    pub fn next_step(&mut self) -> Option<&'a Step> {
        let step = self.steps.get(self.position)?;
        self.position += 1;
        Some(step)
    }

    /// Step back and read the previous step
    pub fn prev_step(&mut self) -> Option<&'a Step> {
        if self.position == 0 {
            return None;
        }
        self.position -= 1;
        self.steps.get(self.position)
    }

    /// Seek to a specific position
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::OutOfBounds`] if the position is past the
    /// end of the log.
    pub fn seek(&mut self, position: usize) -> Result<(), TraceError> {
        if position > self.steps.len() {
            return Err(TraceError::OutOfBounds {
                position,
                len: self.steps.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Reset to the beginning
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl<'a> Iterator for StepCursor<'a> {
    type Item = &'a Step;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepKind;
    use sortlab_core::OpCounters;

    fn log() -> Vec<Step> {
        vec![
            Step {
                array: vec![5, 2],
                i: 0,
                j: 0,
                counters: OpCounters::zero(),
                kind: StepKind::Initial,
            },
            Step {
                array: vec![5, 5],
                i: 1,
                j: 0,
                counters: OpCounters::zero(),
                kind: StepKind::Shift {
                    value: 5,
                    from: 0,
                    to: 1,
                },
            },
            Step {
                array: vec![2, 5],
                i: 1,
                j: 0,
                counters: OpCounters::zero(),
                kind: StepKind::Insert {
                    value: 2,
                    position: 0,
                },
            },
        ]
    }

    #[test]
    fn test_cursor_new() {
        let steps = log();
        let cursor = StepCursor::new(&steps);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.total(), 3);
        assert_eq!(cursor.remaining(), 3);
        assert!(cursor.has_more());
    }

    #[test]
    fn test_cursor_next() {
        let steps = log();
        let mut cursor = StepCursor::new(&steps);
        assert_eq!(cursor.next_step().unwrap().kind, StepKind::Initial);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn test_cursor_exhaustion() {
        let steps = log();
        let mut cursor = StepCursor::new(&steps);
        while cursor.next_step().is_some() {}
        assert!(!cursor.has_more());
        assert!(cursor.next_step().is_none());
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_cursor_peek_does_not_consume() {
        let steps = log();
        let cursor = StepCursor::new(&steps);
        assert!(cursor.peek().is_some());
        assert_eq!(cursor.remaining(), 3);
    }

    #[test]
    fn test_cursor_prev() {
        let steps = log();
        let mut cursor = StepCursor::new(&steps);
        assert!(cursor.prev_step().is_none());

        cursor.next_step();
        cursor.next_step();
        let step = cursor.prev_step().unwrap();
        assert!(matches!(step.kind, StepKind::Shift { .. }));
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_cursor_seek() {
        let steps = log();
        let mut cursor = StepCursor::new(&steps);
        cursor.seek(2).unwrap();
        assert_eq!(cursor.position(), 2);
        assert!(matches!(
            cursor.next_step().unwrap().kind,
            StepKind::Insert { .. }
        ));
    }

    #[test]
    fn test_cursor_seek_to_end_allowed() {
        let steps = log();
        let mut cursor = StepCursor::new(&steps);
        cursor.seek(3).unwrap();
        assert!(!cursor.has_more());
    }

    #[test]
    fn test_cursor_seek_past_end() {
        let steps = log();
        let mut cursor = StepCursor::new(&steps);
        let err = cursor.seek(4).unwrap_err();
        assert_eq!(err, TraceError::OutOfBounds { position: 4, len: 3 });
    }

    #[test]
    fn test_cursor_reset() {
        let steps = log();
        let mut cursor = StepCursor::new(&steps);
        cursor.next_step();
        cursor.reset();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_cursor_iterator() {
        let steps = log();
        let kinds: Vec<_> = StepCursor::new(&steps).map(|s| s.kind).collect();
        assert_eq!(kinds.len(), 3);
        assert_eq!(kinds[0], StepKind::Initial);
    }

    #[test]
    fn test_trace_error_display() {
        let err = TraceError::OutOfBounds { position: 9, len: 4 };
        assert_eq!(err.to_string(), "position 9 exceeds log length 4");
    }
}
