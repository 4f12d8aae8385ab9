// Nearest-signature matching.
//
// A plain linear scan: candidate pools are a directory's worth of
// signatures. Ties go to the candidate seen first.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AttributionError;
use crate::features::signature::Signature;

use super::compare::{distance, FeatureWeights};

/// A candidate label and its distance from the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub label: String,
    /// Weighted distance to the query (lower is closer)
    pub score: f64,
}

/// Find the candidate closest to `query`.
///
/// Only a strictly smaller distance replaces the current best, so on exact
/// ties the earliest candidate wins. Fails on an empty pool.
pub fn best_match(
    query: &Signature,
    candidates: &[Signature],
    weights: &FeatureWeights,
) -> Result<Match, AttributionError> {
    let (first, rest) = candidates
        .split_first()
        .ok_or(AttributionError::EmptyCandidatePool)?;

    let mut best = first;
    let mut best_score = distance(query, first, weights);
    debug!(label = %first.label, score = best_score, "Scored candidate");

    for candidate in rest {
        let score = distance(query, candidate, weights);
        debug!(label = %candidate.label, score, "Scored candidate");
        if score < best_score {
            best = candidate;
            best_score = score;
        }
    }

    Ok(Match {
        label: best.label.clone(),
        score: best_score,
    })
}

/// Score every candidate and sort ascending by distance.
///
/// The sort is stable, so equally distant candidates keep pool order and the
/// first entry agrees with [`best_match`].
pub fn rank(query: &Signature, candidates: &[Signature], weights: &FeatureWeights) -> Vec<Match> {
    let mut ranked: Vec<Match> = candidates
        .iter()
        .map(|c| Match {
            label: c.label.clone(),
            score: distance(query, c, weights),
        })
        .collect();
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked
}
