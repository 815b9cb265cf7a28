//! List text format
//!
//! Lists are written as integers separated by commas and/or whitespace,
//! optionally wrapped in square brackets. Absent values are written as one
//! of the null tokens (`null`, `none`, `-`, `_`, any case).
//!
//! ```text
//! 2, 2, 3, null, 8
//! [1 2 _ 4]
//! ```

use crate::constants::{LIST_SEPARATOR, NULL_TOKEN, NULL_TOKENS};
use std::fmt::Display;
use thiserror::Error;

/// List parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseListError {
    /// Token is neither an integer nor a null token
    #[error("Invalid value '{token}' at position {position}")]
    InvalidToken { position: usize, token: String },
}

/// Parse a list of optional integers
///
/// Positions in errors are 1-based token indices.
pub fn parse_list(input: &str) -> Result<Vec<Option<i32>>, ParseListError> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| parse_value(token, i + 1))
        .collect()
}

/// Parse a single optional integer token
pub fn parse_value(token: &str, position: usize) -> Result<Option<i32>, ParseListError> {
    if is_null_token(token) {
        return Ok(None);
    }

    token
        .parse()
        .map(Some)
        .map_err(|_| ParseListError::InvalidToken {
            position,
            token: token.to_string(),
        })
}

fn is_null_token(token: &str) -> bool {
    NULL_TOKENS
        .iter()
        .any(|null| token.eq_ignore_ascii_case(null))
}

/// Format a list of optional integers as `[a, b, null]`
pub fn format_list(list: &[Option<i32>]) -> String {
    let items: Vec<String> = list
        .iter()
        .map(|value| match value {
            Some(v) => v.to_string(),
            None => NULL_TOKEN.to_string(),
        })
        .collect();
    format!("[{}]", items.join(LIST_SEPARATOR))
}

/// Format a list of present values as `[a, b, c]`
pub fn format_values<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(LIST_SEPARATOR))
}
