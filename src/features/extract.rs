// Stylometric feature extraction.
//
// Five statistics over a text given as a sequence of lines. Word statistics
// work line by line; sentence statistics concatenate the lines verbatim first
// so that a sentence running across a line break stays one sentence.
//
// Anything that normalizes to empty (a stray "--", a blank sentence between
// "..." terminators, an empty phrase between ",,") is skipped entirely: it
// counts toward neither numerator nor denominator. A zero denominator is an
// error, never a silent 0.0.

use std::collections::{HashMap, HashSet};

use crate::error::{AttributionError, Result};
use crate::text::normalize::{has_content, words};
use crate::text::segment::Segmenter;

use super::signature::{Features, Signature};

fn all_words<S: AsRef<str>>(text: &[S]) -> impl Iterator<Item = String> + '_ {
    text.iter().flat_map(|line| words(line.as_ref()))
}

/// Concatenate lines verbatim, keeping their line endings.
fn join_lines<S: AsRef<str>>(text: &[S]) -> String {
    let mut joined = String::new();
    for line in text {
        joined.push_str(line.as_ref());
    }
    joined
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator as f64
}

/// Average number of characters per word.
pub fn average_word_length<S: AsRef<str>>(text: &[S]) -> Result<f64> {
    let mut total_chars = 0usize;
    let mut word_count = 0usize;
    for word in all_words(text) {
        total_chars += word.chars().count();
        word_count += 1;
    }
    if word_count == 0 {
        return Err(AttributionError::no_words("average word length"));
    }
    Ok(ratio(total_chars, word_count))
}

/// Number of distinct words divided by the total number of words.
pub fn type_token_ratio<S: AsRef<str>>(text: &[S]) -> Result<f64> {
    let mut distinct = HashSet::new();
    let mut word_count = 0usize;
    for word in all_words(text) {
        distinct.insert(word);
        word_count += 1;
    }
    if word_count == 0 {
        return Err(AttributionError::no_words("type-token ratio"));
    }
    Ok(ratio(distinct.len(), word_count))
}

/// Number of words occurring exactly once divided by the total number of words.
pub fn hapax_legomena_ratio<S: AsRef<str>>(text: &[S]) -> Result<f64> {
    let mut occurrences: HashMap<String, usize> = HashMap::new();
    let mut word_count = 0usize;
    for word in all_words(text) {
        *occurrences.entry(word).or_insert(0) += 1;
        word_count += 1;
    }
    if word_count == 0 {
        return Err(AttributionError::no_words("hapax legomena ratio"));
    }
    let hapaxes = occurrences.values().filter(|&&n| n == 1).count();
    Ok(ratio(hapaxes, word_count))
}

/// The sentences of a text that contain at least one non-punctuation character.
fn qualifying_sentences(joined: &str) -> Vec<&str> {
    Segmenter::sentences()
        .split(joined)
        .into_iter()
        .filter(|s| has_content(s))
        .collect()
}

/// Average number of words per sentence.
pub fn average_sentence_length<S: AsRef<str>>(text: &[S]) -> Result<f64> {
    let joined = join_lines(text);
    let sentences = qualifying_sentences(&joined);
    if sentences.is_empty() {
        return Err(AttributionError::no_sentences("average sentence length"));
    }
    let total_words: usize = sentences.iter().map(|s| words(s).count()).sum();
    Ok(ratio(total_words, sentences.len()))
}

/// Average number of phrases per sentence.
pub fn avg_sentence_complexity<S: AsRef<str>>(text: &[S]) -> Result<f64> {
    let joined = join_lines(text);
    let sentences = qualifying_sentences(&joined);
    if sentences.is_empty() {
        return Err(AttributionError::no_sentences("average sentence complexity"));
    }
    let phrase_splitter = Segmenter::phrases();
    let total_phrases: usize = sentences
        .iter()
        .map(|s| {
            phrase_splitter
                .split(s)
                .into_iter()
                .filter(|p| has_content(p))
                .count()
        })
        .sum();
    Ok(ratio(total_phrases, sentences.len()))
}

/// Compute all five features of a text.
pub fn compute_features<S: AsRef<str>>(text: &[S]) -> Result<Features> {
    Ok(Features {
        avg_word_length: average_word_length(text)?,
        type_token_ratio: type_token_ratio(text)?,
        hapax_ratio: hapax_legomena_ratio(text)?,
        avg_sentence_length: average_sentence_length(text)?,
        avg_sentence_complexity: avg_sentence_complexity(text)?,
    })
}

/// Compute the labelled signature of a text.
pub fn compute_signature<S: AsRef<str>>(label: impl Into<String>, text: &[S]) -> Result<Signature> {
    Ok(Signature::new(label, compute_features(text)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_short_sentence() {
        let text = lines(&["The cat sat.\n"]);
        assert_eq!(average_word_length(&text).unwrap(), 3.0);
        assert_eq!(type_token_ratio(&text).unwrap(), 1.0);
        assert_eq!(hapax_legomena_ratio(&text).unwrap(), 1.0);
        assert_eq!(average_sentence_length(&text).unwrap(), 3.0);
        assert_eq!(avg_sentence_complexity(&text).unwrap(), 1.0);
    }

    #[test]
    fn test_repeated_words() {
        let text = lines(&["Hi. Hi. Bye.\n"]);
        assert!((type_token_ratio(&text).unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((hapax_legomena_ratio(&text).unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_sentence_spans_lines() {
        let text = lines(&["It was the best\n", "of times, it was\n", "the worst of times.\n"]);
        assert_eq!(average_sentence_length(&text).unwrap(), 12.0);
        assert_eq!(avg_sentence_complexity(&text).unwrap(), 2.0);
    }

    #[test]
    fn test_blank_units_are_skipped() {
        // "..." yields empty sentences; ",," yields an empty phrase
        let text = lines(&["Wait... Really,, truly? -- !\n"]);
        assert_eq!(average_sentence_length(&text).unwrap(), 1.5);
        assert_eq!(avg_sentence_complexity(&text).unwrap(), 1.5);
    }

    #[test]
    fn test_no_words_is_an_error() {
        let text = lines(&["-- ... !!\n"]);
        assert!(matches!(
            average_word_length(&text),
            Err(AttributionError::EmptyInput { unit: "words", .. })
        ));
        assert!(type_token_ratio(&text).is_err());
        assert!(hapax_legomena_ratio(&text).is_err());
        assert!(matches!(
            average_sentence_length(&text),
            Err(AttributionError::EmptyInput { unit: "sentences", .. })
        ));
        assert!(avg_sentence_complexity(&text).is_err());
    }

    #[test]
    fn test_compute_signature_order() {
        let sig = compute_signature("mystery.txt", &lines(&["The cat sat.\n"])).unwrap();
        assert_eq!(sig.label, "mystery.txt");
        assert_eq!(sig.features.as_array(), [3.0, 1.0, 1.0, 3.0, 1.0]);
    }
}
