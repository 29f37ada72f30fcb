//! Parsing of comma-separated integer sequences.

use crate::error::{InputError, InputResult};

/// Parse a comma-separated list of signed integers.
///
/// Tokens are trimmed before parsing. Empty tokens (trailing commas,
/// doubled commas, blank input segments) are silently skipped.
///
/// # Errors
///
/// Returns [`InputError::InvalidToken`] naming the first token that
/// fails integer parsing, or [`InputError::Empty`] if no integers
/// remain once parsing is done.
pub fn parse_sequence(text: &str) -> InputResult<Vec<i64>> {
    let mut values = Vec::new();

    for raw in text.split(',') {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        let value: i64 = token.parse().map_err(|_| InputError::InvalidToken {
            token: token.to_string(),
        })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(InputError::Empty);
    }

    Ok(values)
}
