//! Helpers for lesson text entered by the user or returned by the gateway.

use std::borrow::Cow;

/// Returns false for empty or whitespace-only input.
pub fn validate_text_input(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Shortens `text` to at most `max_chars` characters, appending `...` when
/// anything was cut. Counts characters, not bytes.
pub fn truncate_text(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Strips surrounding whitespace from generated text before display.
pub fn format_response(response: &str) -> &str {
    response.trim()
}

/// Joins imported text onto what is already in the input, separated by a
/// blank line. Existing input that is only whitespace is replaced.
pub fn append_text(existing: &str, extra: &str) -> String {
    if validate_text_input(existing) {
        format!("{existing}\n\n{extra}")
    } else {
        extra.to_string()
    }
}
