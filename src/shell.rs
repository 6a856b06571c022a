//! POSIX shell quoting for rendered command lines.
//!
//! Child processes never see these strings: they get argv tokens directly.
//! Quoting only matters for the values written to workflow outputs, which
//! callers may paste into their own `run:` steps.

/// Characters that make a token unsafe to pass to `sh` unquoted.
const SHELL_META: &[char] = &[
    ' ', '\t', '\n', '\r', '\'', '"', '\\', '$', '`', '!', '*', '?', '[', ']', '(', ')', '{',
    '}', '<', '>', '|', '&', ';', '#', '~',
];

/// Whether `token` needs quoting to survive word splitting and expansion.
pub fn needs_quoting(token: &str) -> bool {
    token.is_empty() || token.contains(SHELL_META)
}

/// Quote a single token for `sh`.
///
/// Safe tokens are returned as-is. Anything else is wrapped in single quotes,
/// with embedded `'` written as `'\''`.
pub fn quote(token: &str) -> String {
    if !needs_quoting(token) {
        return token.to_string();
    }
    format!("'{}'", token.replace('\'', "'\\''"))
}

/// Quote every token and join with single spaces.
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| quote(t.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
