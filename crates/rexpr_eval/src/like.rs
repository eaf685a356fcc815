//! `LIKE` pattern matching.
//!
//! Patterns support a single leading and/or trailing `%` wildcard. There
//! are no interior wildcards and no escapes: a `%` anywhere else is a
//! literal character.

/// Match `subject` against a `LIKE` pattern.
///
/// Rules, in order:
/// - the pattern is empty once its wildcards are stripped: always matches
/// - `%needle%`: `subject` contains `needle`
/// - `needle%`: `subject` starts with `needle`
/// - `%needle`: `subject` ends with `needle`
/// - no wildcard: plain equality
pub fn like(subject: &str, pattern: &str) -> bool {
    let (leading, rest) = match pattern.strip_prefix('%') {
        Some(rest) => (true, rest),
        None => (false, pattern),
    };
    let (trailing, needle) = match rest.strip_suffix('%') {
        Some(needle) => (true, needle),
        None => (false, rest),
    };

    if needle.is_empty() {
        return true;
    }

    match (leading, trailing) {
        (true, true) => subject.contains(needle),
        (false, true) => subject.starts_with(needle),
        (true, false) => subject.ends_with(needle),
        (false, false) => subject == needle,
    }
}
