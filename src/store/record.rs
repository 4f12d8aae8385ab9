// Signature record format.
//
// One field per line:
//
//   line 1     label (free text)
//   lines 2-6  avg word length, TTR, hapax ratio, avg sentence length,
//              avg sentence complexity (decimal reals)
//
// Blank lines after the sixth are tolerated so hand-edited files with a
// trailing newline or two still load. Features must be finite and
// non-negative; a label must fit on its one line.

use crate::error::AttributionError;
use crate::features::signature::{Features, Signature, FEATURE_COUNT, FEATURE_NAMES};

/// Parse a signature record.
pub fn parse_signature(contents: &str) -> Result<Signature, AttributionError> {
    let mut lines = contents.lines();

    let label = lines.next().ok_or_else(|| AttributionError::MalformedSignature {
        line: 1,
        reason: "record is empty".to_string(),
    })?;

    let mut values = [0.0; FEATURE_COUNT];
    for (i, value) in values.iter_mut().enumerate() {
        let line_no = i + 2;
        let raw = lines.next().ok_or_else(|| AttributionError::MalformedSignature {
            line: line_no,
            reason: format!(
                "missing {} (a record has {} lines)",
                FEATURE_NAMES[i].to_lowercase(),
                FEATURE_COUNT + 1
            ),
        })?;
        let raw = raw.trim();
        let parsed = raw
            .parse::<f64>()
            .map_err(|_| AttributionError::MalformedSignature {
                line: line_no,
                reason: format!("'{raw}' is not a number"),
            })?;
        if !parsed.is_finite() || parsed < 0.0 {
            return Err(AttributionError::MalformedSignature {
                line: line_no,
                reason: format!("'{raw}' must be a finite non-negative number"),
            });
        }
        *value = parsed;
    }

    if let Some((offset, _)) = lines.enumerate().find(|(_, l)| !l.trim().is_empty()) {
        return Err(AttributionError::MalformedSignature {
            line: FEATURE_COUNT + 2 + offset,
            reason: "unexpected content after the last feature".to_string(),
        });
    }

    Ok(Signature::new(label, Features::from_array(values)))
}

/// Check that a label can be stored on the single label line of a record.
pub fn validate_label(label: &str) -> Result<(), AttributionError> {
    if label.contains(['\n', '\r']) {
        return Err(AttributionError::InvalidLabel(label.to_string()));
    }
    Ok(())
}

/// Format a signature as a record, the inverse of [`parse_signature`].
///
/// Fails for labels containing line breaks, which could not be read back.
pub fn format_signature(signature: &Signature) -> Result<String, AttributionError> {
    validate_label(&signature.label)?;
    let mut out = String::new();
    out.push_str(&signature.label);
    out.push('\n');
    for value in signature.features.as_array() {
        out.push_str(&value.to_string());
        out.push('\n');
    }
    Ok(out)
}
