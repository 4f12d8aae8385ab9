// Signature — the stylistic profile of a text.
//
// A signature pairs a free-form label (usually an author name or a file
// name) with five numeric statistics in a fixed order. The order matters:
// it is the order of the on-disk record and of the weight vector.

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Number of numeric features in a signature.
pub const FEATURE_COUNT: usize = 5;

/// Human-readable feature names, in signature order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Average word length",
    "Type-token ratio",
    "Hapax legomena ratio",
    "Average sentence length",
    "Sentence complexity",
];

/// The five numeric statistics of a signature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Features {
    /// Mean characters per normalized word
    pub avg_word_length: f64,
    /// Distinct words over total words (0.0 to 1.0)
    pub type_token_ratio: f64,
    /// Words used exactly once over total words (0.0 to 1.0)
    pub hapax_ratio: f64,
    /// Mean words per sentence
    pub avg_sentence_length: f64,
    /// Mean phrases per sentence
    pub avg_sentence_complexity: f64,
}

impl Features {
    /// The features as an array, in signature order.
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.avg_word_length,
            self.type_token_ratio,
            self.hapax_ratio,
            self.avg_sentence_length,
            self.avg_sentence_complexity,
        ]
    }

    /// Build features from an array in signature order.
    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        let [avg_word_length, type_token_ratio, hapax_ratio, avg_sentence_length, avg_sentence_complexity] =
            values;
        Self {
            avg_word_length,
            type_token_ratio,
            hapax_ratio,
            avg_sentence_length,
            avg_sentence_complexity,
        }
    }
}

/// A labelled linguistic signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    /// Who (or what) this signature describes
    pub label: String,
    pub features: Features,
}

impl Signature {
    pub fn new(label: impl Into<String>, features: Features) -> Self {
        Self {
            label: label.into(),
            features,
        }
    }

    /// Display the signature as a small table in the terminal.
    pub fn display(&self) {
        println!(
            "\n{}",
            format!("=== Signature: {} ===", self.label).bold()
        );
        println!();
        for (name, value) in FEATURE_NAMES.iter().zip(self.features.as_array()) {
            println!("  {:<26} {:>10.4}", name, value);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_order() {
        let f = Features::from_array([4.5, 0.6, 0.4, 12.0, 2.5]);
        assert_eq!(f.avg_word_length, 4.5);
        assert_eq!(f.type_token_ratio, 0.6);
        assert_eq!(f.hapax_ratio, 0.4);
        assert_eq!(f.avg_sentence_length, 12.0);
        assert_eq!(f.avg_sentence_complexity, 2.5);
        assert_eq!(f.as_array(), [4.5, 0.6, 0.4, 12.0, 2.5]);
    }

    #[test]
    fn test_json_roundtrip() {
        let sig = Signature::new("Jane Austen", Features::from_array([4.1, 0.59, 0.43, 27.5, 3.2]));
        let json = serde_json::to_string(&sig).unwrap();
        let back: Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sig);
    }
}
