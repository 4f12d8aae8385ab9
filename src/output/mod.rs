// Output formatting — terminal display of signatures and matches.

pub mod terminal;

/// Shorten a label to at most `max_chars` characters, appending "..." if cut.
///
/// Counts characters, not bytes, so multi-byte labels never split mid-char.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_chars("Brontë", 10), "Brontë");
        assert_eq!(truncate_chars("Émile Zola", 5), "Émile...");
    }
}
