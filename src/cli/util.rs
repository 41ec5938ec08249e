//! Argument parsers for the CLI.

use crate::level::{Level, RawLevel};

/// Accepts a level name (`warn`) or a numeric code (`3`).
///
/// Codes aren't range-checked here: the logger owns that check and its fallback.
///
/// # Errors
/// Returns a message for clap when the value is neither.
pub fn parse_threshold(s: &str) -> Result<RawLevel, String> {
    if let Ok(code) = s.trim().parse::<i32>() {
        return Ok(RawLevel(code));
    }
    s.parse::<Level>()
        .map(RawLevel::from)
        .map_err(|e| e.to_string())
}

/// Splits `key=value` at the first `=`. Values may contain further `=` signs.
///
/// # Errors
/// Returns a message for clap when there is no `=` or the key is empty.
pub fn parse_field(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, val)) if !key.is_empty() => Ok((key.to_string(), val.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}
