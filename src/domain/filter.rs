//! Filter configuration for a scoring run.
//!
//! A [`RecommendationFilters`] value always carries an expiry date: the type
//! cannot be constructed without one, so the engine never runs on an
//! incomplete configuration. Everything else has a default taken from
//! [`FilterDefaults`], which is what the config file stores.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use super::error::DomainError;

/// Rolling-low lookback window in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum RollingPeriod {
    Days30,
    Days90,
    Days180,
    Days270,
    #[default]
    Days365,
}

impl RollingPeriod {
    /// All supported windows, shortest first.
    pub const ALL: [RollingPeriod; 5] = [
        RollingPeriod::Days30,
        RollingPeriod::Days90,
        RollingPeriod::Days180,
        RollingPeriod::Days270,
        RollingPeriod::Days365,
    ];

    /// Window length in calendar days.
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            RollingPeriod::Days30 => 30,
            RollingPeriod::Days90 => 90,
            RollingPeriod::Days180 => 180,
            RollingPeriod::Days270 => 270,
            RollingPeriod::Days365 => 365,
        }
    }
}

impl TryFrom<u32> for RollingPeriod {
    type Error = DomainError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        RollingPeriod::ALL
            .into_iter()
            .find(|period| period.days() == days)
            .ok_or(DomainError::UnsupportedRollingPeriod { days })
    }
}

impl From<RollingPeriod> for u32 {
    fn from(period: RollingPeriod) -> Self {
        period.days()
    }
}

impl fmt::Display for RollingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RollingPeriod::Days365 => write!(f, "1 year"),
            other => write!(f, "{} days", other.days()),
        }
    }
}

/// Method used upstream to estimate the probability of expiring worthless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbabilityMethod {
    #[default]
    BayesianCalibrated,
    WeightedAverage,
    OriginalBlackScholes,
    BiasCorrected,
    HistoricalIv,
}

impl ProbabilityMethod {
    /// All supported methods.
    pub const ALL: [ProbabilityMethod; 5] = [
        ProbabilityMethod::BayesianCalibrated,
        ProbabilityMethod::WeightedAverage,
        ProbabilityMethod::OriginalBlackScholes,
        ProbabilityMethod::BiasCorrected,
        ProbabilityMethod::HistoricalIv,
    ];

    /// Snake-case identifier used in config files.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ProbabilityMethod::BayesianCalibrated => "bayesian_calibrated",
            ProbabilityMethod::WeightedAverage => "weighted_average",
            ProbabilityMethod::OriginalBlackScholes => "original_black_scholes",
            ProbabilityMethod::BiasCorrected => "bias_corrected",
            ProbabilityMethod::HistoricalIv => "historical_iv",
        }
    }

    /// Column name of this estimate in the upstream option dataset.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            ProbabilityMethod::BayesianCalibrated => "ProbWorthless_Bayesian_IsoCal",
            ProbabilityMethod::WeightedAverage => "1_2_3_ProbOfWorthless_Weighted",
            ProbabilityMethod::OriginalBlackScholes => "1_ProbOfWorthless_Original",
            ProbabilityMethod::BiasCorrected => "2_ProbOfWorthless_Calibrated",
            ProbabilityMethod::HistoricalIv => "3_ProbOfWorthless_Historical_IV",
        }
    }

    /// Display name shown to users.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            ProbabilityMethod::BayesianCalibrated => "PoW - Bayesian Calibrated",
            ProbabilityMethod::WeightedAverage => "PoW - Weighted Average",
            ProbabilityMethod::OriginalBlackScholes => "PoW - Original Black-Scholes",
            ProbabilityMethod::BiasCorrected => "PoW - Bias Corrected",
            ProbabilityMethod::HistoricalIv => "PoW - Historical IV",
        }
    }
}

impl fmt::Display for ProbabilityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ProbabilityMethod {
    type Err = DomainError;

    /// Accepts either the snake-case key or the upstream column name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ProbabilityMethod::ALL
            .into_iter()
            .find(|m| m.key() == trimmed.replace('-', "_") || m.field_name() == trimmed)
            .ok_or_else(|| DomainError::UnknownProbabilityMethod {
                name: s.to_string(),
            })
    }
}

/// Historical peak probability cutoff for recovery-candidate classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum PeakThreshold {
    P80,
    #[default]
    P90,
    P95,
}

impl PeakThreshold {
    /// All supported cutoffs, lowest first.
    pub const ALL: [PeakThreshold; 3] = [PeakThreshold::P80, PeakThreshold::P90, PeakThreshold::P95];

    /// Cutoff as a probability in [0, 1].
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            PeakThreshold::P80 => 0.80,
            PeakThreshold::P90 => 0.90,
            PeakThreshold::P95 => 0.95,
        }
    }
}

impl TryFrom<f64> for PeakThreshold {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        PeakThreshold::ALL
            .into_iter()
            .find(|t| (t.value() - value).abs() < 1e-9)
            .ok_or(DomainError::UnsupportedPeakThreshold { value })
    }
}

impl From<PeakThreshold> for f64 {
    fn from(threshold: PeakThreshold) -> Self {
        threshold.value()
    }
}

impl fmt::Display for PeakThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.value() * 100.0)
    }
}

/// Filter settings that do not depend on the selected expiry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterDefaults {
    /// Rolling-low lookback window.
    pub rolling_period: RollingPeriod,
    /// Minimum trading days since the support level was last broken.
    pub min_days_since_break: u32,
    /// Probability estimation method.
    pub probability_method: ProbabilityMethod,
    /// Historical peak probability cutoff.
    pub historical_peak_threshold: PeakThreshold,
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            rolling_period: RollingPeriod::Days365,
            min_days_since_break: 10,
            probability_method: ProbabilityMethod::BayesianCalibrated,
            historical_peak_threshold: PeakThreshold::P90,
        }
    }
}

impl FilterDefaults {
    /// Complete these defaults with a selected expiry date.
    #[must_use]
    pub const fn for_expiry(self, expiry_date: NaiveDate) -> RecommendationFilters {
        RecommendationFilters {
            expiry_date,
            rolling_period: self.rolling_period,
            min_days_since_break: self.min_days_since_break,
            probability_method: self.probability_method,
            historical_peak_threshold: self.historical_peak_threshold,
        }
    }
}

/// Immutable filter configuration for one scoring run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationFilters {
    /// Selected option expiry.
    pub expiry_date: NaiveDate,
    /// Rolling-low lookback window.
    pub rolling_period: RollingPeriod,
    /// Minimum trading days since the support level was last broken.
    pub min_days_since_break: u32,
    /// Probability estimation method.
    pub probability_method: ProbabilityMethod,
    /// Historical peak probability cutoff.
    pub historical_peak_threshold: PeakThreshold,
}

impl RecommendationFilters {
    /// Filters for `expiry_date` with every other setting at its default.
    #[must_use]
    pub fn new(expiry_date: NaiveDate) -> Self {
        FilterDefaults::default().for_expiry(expiry_date)
    }

    /// Whether a candidate passes the eligibility screen.
    ///
    /// A candidate is admitted when its expiry matches, its strike is at or
    /// below the rolling low (when known), and its days since last break
    /// reaches the minimum (when known). Unknown values never exclude.
    #[must_use]
    pub fn admits(&self, candidate: &Candidate) -> bool {
        if candidate.expiry_date != self.expiry_date {
            return false;
        }

        if let Some(rolling_low) = candidate.context.rolling_low {
            if candidate.strike_price > rolling_low {
                return false;
            }
        }

        match candidate.factors.days_since_break {
            Some(days) if days.is_finite() => days >= f64::from(self.min_days_since_break),
            _ => true,
        }
    }

    /// Keep only the candidates that pass [`admits`](Self::admits), preserving order.
    #[must_use]
    pub fn screen(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        let before = candidates.len();
        let admitted: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| self.admits(candidate))
            .collect();

        tracing::debug!(
            before,
            after = admitted.len(),
            expiry = %self.expiry_date,
            "Screened candidates"
        );

        admitted
    }
}
