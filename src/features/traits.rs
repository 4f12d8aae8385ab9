// Signature extractor trait — swap-ready abstraction.
//
// The driver asks for "a signature of this text" without caring which
// statistics go into it. The default implementation computes the five
// classic stylometric features.

use anyhow::Result;
use tracing::debug;

use super::extract::compute_signature;
use super::signature::Signature;

/// Trait for turning a text (a sequence of lines) into a signature.
pub trait SignatureExtractor {
    /// Analyze `text` and produce a signature labelled `label`.
    fn extract(&self, label: &str, text: &[String]) -> Result<Signature>;
}

/// Five-feature stylometric extractor: word length, type-token ratio,
/// hapax ratio, sentence length and sentence complexity.
#[derive(Debug, Default, Clone, Copy)]
pub struct StyleExtractor;

impl SignatureExtractor for StyleExtractor {
    fn extract(&self, label: &str, text: &[String]) -> Result<Signature> {
        let signature = compute_signature(label, text)?;
        debug!(
            label,
            lines = text.len(),
            avg_word_length = signature.features.avg_word_length,
            type_token_ratio = signature.features.type_token_ratio,
            hapax_ratio = signature.features.hapax_ratio,
            avg_sentence_length = signature.features.avg_sentence_length,
            avg_sentence_complexity = signature.features.avg_sentence_complexity,
            "Computed signature"
        );
        Ok(signature)
    }
}
