//! Shared utility functions.

/// Shorten `s` to at most `max_chars` characters for log lines, appending
/// `...` when anything was cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let mut chars = s.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
