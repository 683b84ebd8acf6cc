// src/dialogs/parse.rs

//! Decoding of dialog output.

use crate::errors::{DialogError, Result};

/// Separator the dialog program puts between multiple values.
pub const LIST_SEPARATOR: char = '|';

/// Answer reported by a scale dialog that produced no value.
pub const NO_SCALE_VALUE: i32 = -1;

/// Split multi-value output on `|`.
///
/// Empty segments are kept: `""` yields `[""]`, not an empty vector.
pub fn split_list(output: &str) -> Vec<String> {
    output.split(LIST_SEPARATOR).map(str::to_string).collect()
}

/// Parse a scale answer. Empty output means "no answer" and maps to
/// [`NO_SCALE_VALUE`].
pub fn parse_scale_value(output: &str) -> Result<i32> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Ok(NO_SCALE_VALUE);
    }
    trimmed
        .parse::<i32>()
        .map_err(|e| DialogError::InvalidOutput {
            output: trimmed.to_string(),
            reason: e.to_string(),
        })
}

/// Split `username|password` output. Only the first separator counts, so the
/// password may itself contain `|`.
pub fn split_credentials(output: &str) -> Result<(String, String)> {
    if output.is_empty() {
        return Ok((String::new(), String::new()));
    }
    output
        .split_once(LIST_SEPARATOR)
        .map(|(user, pass)| (user.to_string(), pass.to_string()))
        .ok_or_else(|| DialogError::InvalidOutput {
            output: output.to_string(),
            reason: "expected 'username|password'".to_string(),
        })
}
