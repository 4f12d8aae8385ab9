// Sentence and phrase segmentation.
//
// Text is cut at every occurrence of any delimiter character. Delimiters are
// consumed, and empty pieces (between consecutive delimiters or at the ends)
// are kept: deciding what counts as a sentence or phrase is the caller's job.

use regex_lite::Regex;

/// Characters that end a sentence.
pub const SENTENCE_TERMINATORS: &str = "!.?";

/// Characters that separate phrases within a sentence.
pub const PHRASE_DELIMITERS: &str = ",;:";

/// A compiled splitter for a fixed set of single-character delimiters.
#[derive(Debug, Clone)]
pub struct Segmenter {
    pattern: Option<Regex>,
}

impl Segmenter {
    /// Build a segmenter from a string of delimiter characters.
    ///
    /// Each delimiter is escaped, so regex metacharacters such as `.` or `?`
    /// match literally. An empty delimiter set never splits.
    pub fn new(delimiters: &str) -> Self {
        if delimiters.is_empty() {
            return Self { pattern: None };
        }
        let alternation = delimiters
            .chars()
            .map(|c| regex_lite::escape(c.encode_utf8(&mut [0u8; 4])))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&alternation).expect("escaped literal alternation");
        Self {
            pattern: Some(pattern),
        }
    }

    /// Segmenter for sentence boundaries (`!`, `.`, `?`).
    pub fn sentences() -> Self {
        Self::new(SENTENCE_TERMINATORS)
    }

    /// Segmenter for phrase boundaries (`,`, `;`, `:`).
    pub fn phrases() -> Self {
        Self::new(PHRASE_DELIMITERS)
    }

    /// Split `text` at every delimiter occurrence.
    ///
    /// Empty input yields no pieces; input without delimiters yields itself.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        if text.is_empty() {
            return Vec::new();
        }
        match &self.pattern {
            Some(re) => re.split(text).collect(),
            None => vec![text],
        }
    }
}

/// Split `text` on any of the single-character `delimiters`.
pub fn split<'t>(text: &'t str, delimiters: &str) -> Vec<&'t str> {
    Segmenter::new(delimiters).split(text)
}
