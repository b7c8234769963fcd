// Subscore keys are shown with spaces instead of underscores ("reuse_macros" -> "reuse macros")
pub fn humanize_key(key: &str) -> String {
    key.replace('_', " ")
}

// Cuts `text` to at most `max_chars` characters, ending in `…` when shortened
pub fn elide(text: &str, max_chars: usize) -> String {
    if max_chars == 0 || text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
