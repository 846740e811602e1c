//! Small text helpers shared by the operators.

/// Lowercase `text` and split it on runs of whitespace.
pub(crate) fn tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// The first `n` characters of `text` (the whole text when shorter).
pub(crate) fn prefix(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
