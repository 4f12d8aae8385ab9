// Unit tests for token normalization and segmentation.
//
// Tests the two leaf components in isolation: normalize edge cases and
// idempotence, and split's handling of boundaries and metacharacters.

use penprint::text::normalize::{normalize, words};
use penprint::text::segment::{split, Segmenter, PHRASE_DELIMITERS, SENTENCE_TERMINATORS};

// ============================================================
// normalize
// ============================================================

#[test]
fn normalize_strips_boundary_punctuation_and_whitespace() {
    assert_eq!(normalize(" Hello!! "), "hello");
    assert_eq!(normalize("<<Chapter>>"), "chapter");
    assert_eq!(normalize("[*note*]"), "note");
    assert_eq!(normalize("\tword\r\n"), "word");
}

#[test]
fn normalize_keeps_interior_punctuation() {
    assert_eq!(normalize("don't"), "don't");
    assert_eq!(normalize("Mr.Smith"), "mr.smith");
    assert_eq!(normalize("\"rock-and-roll,\""), "rock-and-roll");
}

#[test]
fn normalize_leaves_unlisted_symbols() {
    // Only the fixed punctuation set is stripped
    assert_eq!(normalize("$100"), "$100");
    assert_eq!(normalize("@handle"), "@handle");
}

#[test]
fn normalize_is_idempotent() {
    for token in [" Hello!! ", "don't", "--", "(\"Yes!\")", "ÉCOLE.", "", "a-", "#tag#"] {
        let once = normalize(token);
        assert_eq!(normalize(&once), once, "normalize not idempotent for {token:?}");
    }
}

#[test]
fn normalize_lowercases_non_ascii() {
    assert_eq!(normalize("ÉCOLE."), "école");
}

#[test]
fn words_splits_on_any_whitespace() {
    let w: Vec<String> = words("One\ttwo  three\nfour").collect();
    assert_eq!(w, vec!["one", "two", "three", "four"]);
}

// ============================================================
// split
// ============================================================

#[test]
fn split_keeps_empty_pieces() {
    assert_eq!(split("A,B;;C", ",;"), vec!["A", "B", "", "C"]);
}

#[test]
fn split_sentences_of_text() {
    let pieces = split("Hi. Hi. Bye.\n", SENTENCE_TERMINATORS);
    assert_eq!(pieces, vec!["Hi", " Hi", " Bye", "\n"]);
}

#[test]
fn split_phrases_of_sentence() {
    let pieces = split("First: one, two; three", PHRASE_DELIMITERS);
    assert_eq!(pieces, vec!["First", " one", " two", " three"]);
}

#[test]
fn split_question_mark_is_literal() {
    assert_eq!(split("Why? Because", "?"), vec!["Why", " Because"]);
}

#[test]
fn split_empty_input_is_empty() {
    assert!(split("", SENTENCE_TERMINATORS).is_empty());
}

#[test]
fn segmenter_is_reusable() {
    let s = Segmenter::phrases();
    assert_eq!(s.split("a,b").len(), 2);
    assert_eq!(s.split("c;d:e").len(), 3);
}
