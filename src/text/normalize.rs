// Token normalization.
//
// A word is a whitespace-delimited token, lowercased, with punctuation
// stripped from both ends. Interior punctuation survives, so contractions
// and hyphenated compounds stay intact ("don't", "well-known").

/// Characters stripped from the ends of every token.
pub const BOUNDARY_PUNCTUATION: &str = "!\"',;:.-?)([]<>*#";

fn is_boundary(c: char) -> bool {
    c.is_whitespace() || BOUNDARY_PUNCTUATION.contains(c)
}

/// Lowercase a token and strip boundary punctuation and whitespace.
///
/// May return an empty string (e.g. for `"--"`), which callers must treat
/// as "not a word".
pub fn normalize(token: &str) -> String {
    token.to_lowercase().trim_matches(is_boundary).to_string()
}

/// The non-empty normalized words of a piece of text.
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(normalize)
        .filter(|w| !w.is_empty())
}

/// Whether a span of text contains anything besides punctuation and whitespace.
pub fn has_content(text: &str) -> bool {
    text.chars().any(|c| !is_boundary(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_and_lowercases() {
        assert_eq!(normalize(" Hello!! "), "hello");
        assert_eq!(normalize("(\"Quoted\")"), "quoted");
        assert_eq!(normalize("end.\n"), "end");
    }

    #[test]
    fn test_interior_punctuation_kept() {
        assert_eq!(normalize("don't"), "don't");
        assert_eq!(normalize("'well-known'"), "well-known");
    }

    #[test]
    fn test_punctuation_only_is_empty() {
        assert_eq!(normalize("--"), "");
        assert_eq!(normalize("*#*"), "");
        assert!(!has_content(" ,;\n"));
        assert!(has_content(" a "));
    }

    #[test]
    fn test_words_discards_empties() {
        let w: Vec<String> = words("The -- cat, sat!\n").collect();
        assert_eq!(w, vec!["the", "cat", "sat"]);
    }
}
