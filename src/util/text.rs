/// Text helpers for diagnostics

/// Cut `text` to at most `limit` characters, appending `...` when shortened
pub fn truncate_for_display(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
