use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scoring::compare::FeatureWeights;

/// Central configuration loaded from environment variables.
///
/// A .env file is loaded at startup via dotenvy, so these can live there
/// instead of the shell environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Feature weights for the distance metric (PENPRINT_WEIGHTS).
    /// Five comma-separated values, or six with a leading label weight.
    pub weights: FeatureWeights,
    /// Default signature directory for `identify` (PENPRINT_SIGNATURE_DIR)
    pub signature_dir: Option<PathBuf>,
    /// How many ranked candidates `identify` prints besides the winner
    /// (PENPRINT_TOP, default 0)
    pub top: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default: unset weights fall back to the reference
    /// heuristic `0, 11, 33, 50, 0.4, 4`.
    pub fn load() -> Result<Self> {
        let weights = match env::var("PENPRINT_WEIGHTS") {
            Ok(raw) if !raw.trim().is_empty() => {
                FeatureWeights::parse(&raw).context("PENPRINT_WEIGHTS is invalid")?
            }
            _ => FeatureWeights::default(),
        };

        let signature_dir = env::var("PENPRINT_SIGNATURE_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let top = match env::var("PENPRINT_TOP") {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse()
                .with_context(|| format!("PENPRINT_TOP must be a whole number, got '{raw}'"))?,
            _ => 0,
        };

        Ok(Self {
            weights,
            signature_dir,
            top,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: FeatureWeights::default(),
            signature_dir: None,
            top: 0,
        }
    }
}
