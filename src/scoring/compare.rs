// Weighted signature distance.
//
// The distance between two signatures is the weighted sum of absolute
// differences of their features:
//
//   d(a, b) = sum(|a_i - b_i| * w_i)   for the five features i
//
// Labels never take part. Weights are not normalized; they are expected to
// compensate for each feature's natural range (TTR varies in a narrow band,
// sentence length in a wide one).

use serde::{Deserialize, Serialize};

use crate::error::AttributionError;
use crate::features::signature::{Signature, FEATURE_COUNT};

/// Multiplicative weights for the five signature features.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    /// Weight for average word length (default 11.0)
    pub avg_word_length: f64,
    /// Weight for type-token ratio (default 33.0)
    pub type_token_ratio: f64,
    /// Weight for hapax legomena ratio (default 50.0)
    pub hapax_ratio: f64,
    /// Weight for average sentence length (default 0.4)
    pub avg_sentence_length: f64,
    /// Weight for sentence complexity (default 4.0)
    pub avg_sentence_complexity: f64,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            avg_word_length: 11.0,
            type_token_ratio: 33.0,
            hapax_ratio: 50.0,
            avg_sentence_length: 0.4,
            avg_sentence_complexity: 4.0,
        }
    }
}

impl FeatureWeights {
    /// The weights as an array, in signature order.
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.avg_word_length,
            self.type_token_ratio,
            self.hapax_ratio,
            self.avg_sentence_length,
            self.avg_sentence_complexity,
        ]
    }

    /// Build weights from an array in signature order.
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

    /// Parse a comma-separated weight list.
    ///
    /// Accepts five values (one per feature) or six, in which case the first
    /// value pairs with the label and is ignored. Every value must be a
    /// finite, non-negative number.
    pub fn parse(input: &str) -> Result<Self, AttributionError> {
        let values = input
            .split(',')
            .map(|v| {
                let v = v.trim();
                v.parse::<f64>()
                    .map_err(|_| AttributionError::InvalidWeights(format!("'{v}' is not a number")))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let features = match values.len() {
            FEATURE_COUNT => &values[..],
            n if n == FEATURE_COUNT + 1 => &values[1..],
            n => {
                return Err(AttributionError::InvalidWeights(format!(
                    "expected {} or {} values, got {n}",
                    FEATURE_COUNT,
                    FEATURE_COUNT + 1
                )))
            }
        };

        if let Some(bad) = features.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(AttributionError::InvalidWeights(format!(
                "weight {bad} must be a finite non-negative number"
            )));
        }

        let mut array = [0.0; FEATURE_COUNT];
        array.copy_from_slice(features);
        Ok(Self::from_array(array))
    }
}

/// Weighted absolute-difference distance between two signatures.
///
/// Returns 0.0 when all five features are equal. Symmetric in `a` and `b`.
pub fn distance(a: &Signature, b: &Signature, weights: &FeatureWeights) -> f64 {
    a.features
        .as_array()
        .iter()
        .zip(b.features.as_array())
        .zip(weights.as_array())
        .map(|((x, y), w)| (x - y).abs() * w)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::signature::Features;

    fn sig(label: &str, values: [f64; 5]) -> Signature {
        Signature::new(label, Features::from_array(values))
    }

    #[test]
    fn test_identical_features_score_zero() {
        let a = sig("a", [4.4, 0.1, 0.05, 10.0, 2.0]);
        let b = sig("b", [4.4, 0.1, 0.05, 10.0, 2.0]);
        assert_eq!(distance(&a, &b, &FeatureWeights::default()), 0.0);
    }

    #[test]
    fn test_weighted_sum() {
        let a = sig("a", [4.0, 0.5, 0.3, 20.0, 2.0]);
        let b = sig("b", [5.0, 0.4, 0.2, 15.0, 3.0]);
        // 1*11 + 0.1*33 + 0.1*50 + 5*0.4 + 1*4 = 11 + 3.3 + 5 + 2 + 4
        let d = distance(&a, &b, &FeatureWeights::default());
        assert!((d - 25.3).abs() < 1e-9, "Expected 25.3, got {d}");
    }

    #[test]
    fn test_zero_weights_ignore_features() {
        let a = sig("a", [4.0, 0.5, 0.3, 20.0, 2.0]);
        let b = sig("b", [9.0, 0.5, 0.3, 20.0, 2.0]);
        let weights = FeatureWeights::from_array([0.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(distance(&a, &b, &weights), 0.0);
    }

    #[test]
    fn test_parse_five_and_six() {
        let five = FeatureWeights::parse("11, 33, 50, 0.4, 4").unwrap();
        assert_eq!(five, FeatureWeights::default());
        let six = FeatureWeights::parse("0,11,33,50,0.4,4").unwrap();
        assert_eq!(six, FeatureWeights::default());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(FeatureWeights::parse("1,2,3").is_err());
        assert!(FeatureWeights::parse("1,2,x,4,5").is_err());
        assert!(FeatureWeights::parse("1,2,-3,4,5").is_err());
    }
}
