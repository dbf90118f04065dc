//! Human-readable explanation of one recommendation.
//!
//! The breakdown already carries every number behind a composite score. An
//! [`Explanation`] orders those numbers by impact, classifies the overall
//! verdict and calls out factors that were scored neutral for lack of data.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    DataStatus, Factor, NormalizedWeights, OptionName, RecommendationFilters, RecommendedOption,
};

/// Composite score at or above which a recommendation is strong.
pub const STRONG_THRESHOLD: f64 = 70.0;

/// Composite score at or above which a recommendation is moderate.
pub const MODERATE_THRESHOLD: f64 = 50.0;

/// Overall strength of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// At or above [`STRONG_THRESHOLD`].
    Strong,
    /// At or above [`MODERATE_THRESHOLD`].
    Moderate,
    Weak,
}

impl Verdict {
    #[must_use]
    pub fn from_score(composite: f64) -> Self {
        if composite >= STRONG_THRESHOLD {
            Self::Strong
        } else if composite >= MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strong => write!(f, "strong"),
            Self::Moderate => write!(f, "moderate"),
            Self::Weak => write!(f, "weak"),
        }
    }
}

/// Whether the option's probability of worthlessness has retreated from a
/// historical peak at or above the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryClass {
    /// Peak at or above threshold and above the current probability.
    Candidate,
    /// Peak below threshold, or current probability not below the peak.
    NotCandidate,
    /// Peak or current probability unknown.
    Unknown,
}

impl RecoveryClass {
    /// Classify a historical peak against the current probability.
    #[must_use]
    pub fn classify(peak: Option<f64>, current: Option<f64>, threshold: f64) -> Self {
        match (peak, current) {
            (Some(peak), Some(current)) if peak.is_finite() && current.is_finite() => {
                if peak >= threshold && peak > current {
                    Self::Candidate
                } else {
                    Self::NotCandidate
                }
            }
            _ => Self::Unknown,
        }
    }
}

/// One factor's line in an explanation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    /// Factor this line describes.
    pub factor: Factor,
    /// Raw input value, absent when the factor had no data.
    pub raw: Option<f64>,
    /// Normalized value in [0, 100].
    pub normalized: f64,
    /// Renormalized weight, in [0, 100].
    pub weight: f64,
    /// Points contributed to the composite score.
    pub weighted: f64,
    /// Data behind the normalized value.
    pub data_status: DataStatus,
}

/// Structured explanation of one recommended option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    /// Option contract being explained.
    pub option_name: OptionName,
    /// 1-based rank in the run.
    pub rank: usize,
    /// Composite score in [0, 100].
    pub composite_score: f64,
    /// Overall strength band of the composite score.
    pub verdict: Verdict,
    /// Factor lines, largest contribution first. Ties keep factor order.
    pub contributions: Vec<Contribution>,
    /// One note per factor that had no usable spread or no data.
    pub notes: Vec<String>,
    /// Historical peak against current probability of worthlessness.
    pub recovery: RecoveryClass,
}

impl Explanation {
    /// Explain `option` as scored with `weights` under `filters`.
    #[must_use]
    pub fn new(
        option: &RecommendedOption,
        weights: &NormalizedWeights,
        filters: &RecommendationFilters,
    ) -> Self {
        let mut contributions: Vec<Contribution> = option
            .score_breakdown
            .iter()
            .map(|(factor, component)| Contribution {
                factor,
                raw: component.raw,
                normalized: component.normalized,
                weight: weights.get(factor),
                weighted: component.weighted,
                data_status: component.data_status,
            })
            .collect();
        contributions.sort_by(|a, b| b.weighted.total_cmp(&a.weighted));

        let mut notes: Vec<String> = option
            .score_breakdown
            .iter()
            .filter_map(|(factor, component)| match component.data_status {
                DataStatus::Available => None,
                DataStatus::Insufficient => Some(format!(
                    "{}: every candidate has the same value, scored neutral",
                    factor.label()
                )),
                DataStatus::Unavailable => {
                    Some(format!("{}: no data, scored neutral", factor.label()))
                }
            })
            .collect();
        if weights.is_degenerate() {
            notes.push("All weights are zero: ranking follows input order".to_string());
        }

        let recovery = RecoveryClass::classify(
            option.factors.get(Factor::HistoricalPeak),
            option.context.current_probability,
            filters.historical_peak_threshold.value(),
        );

        Self {
            option_name: option.option_name.clone(),
            rank: option.rank,
            composite_score: option.composite_score,
            verdict: Verdict::from_score(option.composite_score),
            contributions,
            notes,
            recovery,
        }
    }

    /// Factor with the largest contribution, if any weight is non-zero.
    #[must_use]
    pub fn top_factor(&self) -> Option<Factor> {
        self.contributions
            .first()
            .filter(|c| c.weighted > 0.0)
            .map(|c| c.factor)
    }
}
