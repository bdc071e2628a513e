//! Term processing utilities for the ftsq parser
//!
//! Small string checks shared by the parser and the formatter.

/// Marks a term that must match literally, without a trailing wildcard
pub const EXACT_MARKER: char = '=';

/// True when the user already typed query syntax: a field reference
/// (`TEXT:test`) or a quoted phrase (`"Hello World"`).
///
/// Such input is sent to the search backend as is.
#[must_use]
pub fn is_structured(input: &str) -> bool {
    input.contains(':') || input.contains('"')
}

/// Split the exact-match marker off a term
///
/// Returns the remaining text and whether the marker was present.
/// Only one leading marker is stripped.
#[must_use]
pub fn split_exact_marker(text: &str) -> (&str, bool) {
    text.strip_prefix(EXACT_MARKER)
        .map_or((text, false), |rest| (rest, true))
}
