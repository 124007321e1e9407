const ELLIPSIS: char = '…';

/// Shortens `text` to at most `limit` chars, marking the cut with an ellipsis.
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut shortened: String = text.chars().take(limit.saturating_sub(1)).collect();
    shortened.push(ELLIPSIS);
    shortened
}
