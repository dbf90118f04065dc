//! Score weights and their renormalization.
//!
//! Users allocate relative importance to the six factors without having to
//! balance the numbers. [`ScoreWeights::renormalize`] rescales them into a
//! distribution summing to 100, once per scoring run.
//!
//! # Examples
//!
//! ```
//! use optscore::domain::{Factor, ScoreWeights};
//!
//! let weights = ScoreWeights::new(10.0, 10.0, 0.0, 0.0, 0.0, 0.0);
//! let normalized = weights.renormalize();
//!
//! assert!((normalized.get(Factor::SupportStrength) - 50.0).abs() < 1e-9);
//! assert!((normalized.total() - 100.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::factor::Factor;

/// Upper bound for a single user weight as offered by the dashboard sliders.
pub const MAX_USER_WEIGHT: f64 = 50.0;

/// Target sum of renormalized weights.
pub const WEIGHT_TOTAL: f64 = 100.0;

/// Relative, user-supplied importance of each factor.
///
/// No invariant holds on the sum; the engine renormalizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight applied to support strength.
    pub support_strength: f64,
    /// Weight applied to days since last support break.
    pub days_since_break: f64,
    /// Weight applied to recovery advantage.
    pub recovery_advantage: f64,
    /// Weight applied to historical peak probability.
    pub historical_peak: f64,
    /// Weight applied to monthly seasonality.
    pub monthly_seasonality: f64,
    /// Weight applied to current performance.
    pub current_performance: f64,
}

impl ScoreWeights {
    /// Creates new score weights.
    #[must_use]
    pub const fn new(
        support_strength: f64,
        days_since_break: f64,
        recovery_advantage: f64,
        historical_peak: f64,
        monthly_seasonality: f64,
        current_performance: f64,
    ) -> Self {
        Self {
            support_strength,
            days_since_break,
            recovery_advantage,
            historical_peak,
            monthly_seasonality,
            current_performance,
        }
    }

    /// All weights set to zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Weight of one factor only, every other factor at zero.
    #[must_use]
    pub fn only(factor: Factor, weight: f64) -> Self {
        let mut weights = Self::zero();
        weights.set(factor, weight);
        weights
    }

    /// Weight for `factor`.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::SupportStrength => self.support_strength,
            Factor::DaysSinceBreak => self.days_since_break,
            Factor::RecoveryAdvantage => self.recovery_advantage,
            Factor::HistoricalPeak => self.historical_peak,
            Factor::MonthlySeasonality => self.monthly_seasonality,
            Factor::CurrentPerformance => self.current_performance,
        }
    }

    /// Replace the weight for `factor`.
    pub fn set(&mut self, factor: Factor, weight: f64) {
        let slot = match factor {
            Factor::SupportStrength => &mut self.support_strength,
            Factor::DaysSinceBreak => &mut self.days_since_break,
            Factor::RecoveryAdvantage => &mut self.recovery_advantage,
            Factor::HistoricalPeak => &mut self.historical_peak,
            Factor::MonthlySeasonality => &mut self.monthly_seasonality,
            Factor::CurrentPerformance => &mut self.current_performance,
        };
        *slot = weight;
    }

    /// Sum of all six weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        Factor::ALL.into_iter().map(|f| self.get(f)).sum()
    }

    /// Rescale into a distribution summing to exactly [`WEIGHT_TOTAL`].
    ///
    /// Each output is proportional to its input. Negative and non-finite
    /// inputs count as zero. When every weight is zero the zero weights are
    /// returned unchanged and the result reports
    /// [`is_degenerate`](NormalizedWeights::is_degenerate).
    #[must_use]
    pub fn renormalize(&self) -> NormalizedWeights {
        let mut sanitized = *self;
        for factor in Factor::ALL {
            let weight = self.get(factor);
            if !weight.is_finite() || weight < 0.0 {
                tracing::warn!(factor = %factor, weight, "Ignoring invalid weight");
                sanitized.set(factor, 0.0);
            }
        }

        let largest = Factor::ALL
            .into_iter()
            .map(|f| sanitized.get(f))
            .fold(0.0, f64::max);
        if largest == 0.0 {
            tracing::warn!("All weights are zero, composite scores will be zero");
            return NormalizedWeights {
                weights: sanitized,
                degenerate: true,
            };
        }

        // Scaling by the largest weight first keeps the sum finite.
        let mut scaled = Self::zero();
        for factor in Factor::ALL {
            scaled.set(factor, sanitized.get(factor) / largest);
        }
        let scaled_total = scaled.total();

        let mut weights = Self::zero();
        for factor in Factor::ALL {
            weights.set(factor, scaled.get(factor) / scaled_total * WEIGHT_TOTAL);
        }

        tracing::debug!(
            largest,
            support_strength = weights.support_strength,
            days_since_break = weights.days_since_break,
            recovery_advantage = weights.recovery_advantage,
            historical_peak = weights.historical_peak,
            monthly_seasonality = weights.monthly_seasonality,
            current_performance = weights.current_performance,
            "Renormalized weights"
        );

        NormalizedWeights {
            weights,
            degenerate: false,
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            support_strength: 20.0,
            days_since_break: 15.0,
            recovery_advantage: 25.0,
            historical_peak: 15.0,
            monthly_seasonality: 15.0,
            current_performance: 10.0,
        }
    }
}

/// Weights rescaled to sum to 100, or all zero in the degenerate case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedWeights {
    #[serde(flatten)]
    weights: ScoreWeights,
    degenerate: bool,
}

impl NormalizedWeights {
    /// Renormalized weight for `factor`, in [0, 100].
    #[must_use]
    pub const fn get(&self, factor: Factor) -> f64 {
        self.weights.get(factor)
    }

    /// Sum of the renormalized weights: 100, or 0 when degenerate.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.weights.total()
    }

    /// True when every input weight was zero: no discrimination requested.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// The renormalized weights as plain [`ScoreWeights`].
    #[must_use]
    pub const fn as_weights(&self) -> &ScoreWeights {
        &self.weights
    }
}
