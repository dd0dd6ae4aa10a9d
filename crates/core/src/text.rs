//! Shared text helpers.

/// Truncate to at most `max_chars` characters without splitting a character.
/// Input at or under the cap comes back unchanged; anything longer is cut to
/// exactly the cap. Caps in this pipeline count characters (the wire-level
/// contract), not bytes.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
