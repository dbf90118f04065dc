//! Conversion of command-line input into typed engine input.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::domain::{
    Candidate, Factor, PeakThreshold, RollingPeriod, ScoreWeights, MAX_USER_WEIGHT,
};
use crate::error::{InputError, Result};

/// One `factor=value` weight override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightOverride {
    pub factor: Factor,
    pub weight: f64,
}

/// Parse `factor=value`, with the value in `0..=50`.
pub fn parse_weight_override(input: &str) -> std::result::Result<WeightOverride, InputError> {
    let invalid = |reason: String| InputError::InvalidWeightOverride {
        input: input.to_string(),
        reason,
    };

    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| invalid("expected FACTOR=VALUE".to_string()))?;
    let factor = name
        .parse::<Factor>()
        .map_err(|e| invalid(e.to_string()))?;
    let weight: f64 = value
        .trim()
        .parse()
        .map_err(|_| invalid(format!("'{}' is not a number", value.trim())))?;
    if !weight.is_finite() || !(0.0..=MAX_USER_WEIGHT).contains(&weight) {
        return Err(invalid(format!("weight must be between 0 and {MAX_USER_WEIGHT}")));
    }

    Ok(WeightOverride { factor, weight })
}

/// Apply overrides in order; later overrides of the same factor win.
#[must_use]
pub fn apply_overrides(mut weights: ScoreWeights, overrides: &[WeightOverride]) -> ScoreWeights {
    for o in overrides {
        weights.set(o.factor, o.weight);
    }
    weights
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> std::result::Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|source| {
        InputError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}

/// Parse a rolling-low window given in days.
pub fn parse_rolling_period(input: &str) -> std::result::Result<RollingPeriod, String> {
    let days: u32 = input
        .trim()
        .parse()
        .map_err(|_| format!("'{input}' is not a number of days"))?;
    RollingPeriod::try_from(days).map_err(|e| e.to_string())
}

/// Parse a historical peak threshold given as a probability.
pub fn parse_peak_threshold(input: &str) -> std::result::Result<PeakThreshold, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("'{input}' is not a probability"))?;
    PeakThreshold::try_from(value).map_err(|e| e.to_string())
}

/// Read a JSON array of candidates.
pub fn load_candidates(path: &Path) -> Result<Vec<Candidate>> {
    let content = fs::read_to_string(path).map_err(|source| InputError::ReadCandidates {
        path: path.to_path_buf(),
        source,
    })?;
    let candidates: Vec<Candidate> =
        serde_json::from_str(&content).map_err(|source| InputError::ParseCandidates {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), count = candidates.len(), "Loaded candidates");
    Ok(candidates)
}
