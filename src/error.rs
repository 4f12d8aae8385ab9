// Typed errors for the attribution core.
//
// Feature extraction, signature parsing and matching fail with these
// variants. Application code (CLI, config, file loading) wraps them in
// anyhow with context.

use std::path::PathBuf;

/// Errors raised by the attribution core and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum AttributionError {
    /// A feature statistic had a zero denominator (no qualifying words
    /// or no qualifying sentences in the text).
    #[error("cannot compute {statistic}: text has no qualifying {unit}")]
    EmptyInput {
        /// Name of the statistic being computed
        statistic: &'static str,
        /// The unit that was missing ("words" or "sentences")
        unit: &'static str,
    },

    /// A signature record could not be parsed.
    #[error("malformed signature at line {line}: {reason}")]
    MalformedSignature {
        /// 1-based line number of the offending record line
        line: usize,
        /// What was wrong with it
        reason: String,
    },

    /// The matcher was handed no candidates.
    #[error("no candidate signatures to match against")]
    EmptyCandidatePool,

    /// A label contains a line break and cannot be stored in a record.
    #[error("label must be a single line: {0:?}")]
    InvalidLabel(String),

    /// A user-supplied path does not exist.
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// A weight vector was not 5 or 6 non-negative numbers.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
}

impl AttributionError {
    pub(crate) fn no_words(statistic: &'static str) -> Self {
        Self::EmptyInput {
            statistic,
            unit: "words",
        }
    }

    pub(crate) fn no_sentences(statistic: &'static str) -> Self {
        Self::EmptyInput {
            statistic,
            unit: "sentences",
        }
    }
}

pub type Result<T, E = AttributionError> = std::result::Result<T, E>;
