//! Score breakdown types.
//!
//! Every candidate is scored on six factors. For each factor the breakdown
//! keeps the raw input, its normalized value on the 0-100 scale and its
//! weighted contribution, so every ranking decision can be audited.
//!
//! # Scoring System
//!
//! - **Normalized**: the raw value rescaled against the population being
//!   scored together, in [0, 100].
//! - **Weighted**: `normalized * weight / 100` with the renormalized weight.
//! - **Composite**: the sum of the six weighted values, in [0, 100].
//!
//! A factor without data normalizes to [`NEUTRAL_SCORE`] so it neither
//! rewards nor penalizes the candidate.

use serde::{Deserialize, Serialize};

use super::factor::Factor;
use super::weights::{NormalizedWeights, WEIGHT_TOTAL};

/// Normalized value used when a factor carries no discriminating data.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Upper bound of the normalized scale.
pub const MAX_SCORE: f64 = 100.0;

/// How much real data stood behind a normalized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataStatus {
    /// Raw value present and the population had a spread to scale against.
    Available,
    /// Raw value present but every available value in the population was equal.
    Insufficient,
    /// Raw value absent.
    Unavailable,
}

/// Output of normalizing one raw value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    value: f64,
    status: DataStatus,
}

impl Normalization {
    /// A normalized value backed by data. The value is clamped to [0, 100];
    /// NaN falls back to [`NEUTRAL_SCORE`].
    #[must_use]
    pub fn scored(value: f64) -> Self {
        let value = if value.is_nan() {
            NEUTRAL_SCORE
        } else {
            value.clamp(0.0, MAX_SCORE)
        };
        Self {
            value,
            status: DataStatus::Available,
        }
    }

    /// Neutral value for a raw value in a zero-variance population.
    #[must_use]
    pub const fn flat() -> Self {
        Self {
            value: NEUTRAL_SCORE,
            status: DataStatus::Insufficient,
        }
    }

    /// Neutral value for an absent raw value.
    #[must_use]
    pub const fn missing() -> Self {
        Self {
            value: NEUTRAL_SCORE,
            status: DataStatus::Unavailable,
        }
    }

    /// Normalized value in [0, 100].
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Data status behind the value.
    #[must_use]
    pub const fn status(&self) -> DataStatus {
        self.status
    }

    /// Whether a raw value was available.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.status != DataStatus::Unavailable
    }
}

/// One factor's contribution to one candidate's composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    /// Raw metric value, absent when the factor had no data.
    pub raw: Option<f64>,
    /// Normalized value in [0, 100].
    pub normalized: f64,
    /// `normalized * weight / 100`.
    pub weighted: f64,
    /// Whether real data was available.
    pub has_data: bool,
    /// Severity of any data issue.
    pub data_status: DataStatus,
}

impl ScoreComponent {
    /// Combine a normalization with the factor's renormalized weight.
    ///
    /// `raw` is dropped when the normalization reports no data, so an
    /// unavailable component never carries a raw value.
    #[must_use]
    pub fn new(raw: Option<f64>, normalization: Normalization, weight: f64) -> Self {
        let has_data = normalization.has_data();
        let normalized = normalization.value();
        Self {
            raw: raw.filter(|_| has_data),
            normalized,
            weighted: normalized * weight / WEIGHT_TOTAL,
            has_data,
            data_status: normalization.status(),
        }
    }
}

/// The six score components of one candidate, keyed by factor.
///
/// All keys are always present, even when a factor had no data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Support strength component.
    pub support_strength: ScoreComponent,
    /// Days since last support break component.
    pub days_since_break: ScoreComponent,
    /// Recovery advantage component.
    pub recovery_advantage: ScoreComponent,
    /// Historical peak probability component.
    pub historical_peak: ScoreComponent,
    /// Monthly seasonality component.
    pub monthly_seasonality: ScoreComponent,
    /// Current performance component.
    pub current_performance: ScoreComponent,
}

impl ScoreBreakdown {
    /// Build a breakdown by computing each factor's component.
    pub fn from_fn(mut component: impl FnMut(Factor) -> ScoreComponent) -> Self {
        Self {
            support_strength: component(Factor::SupportStrength),
            days_since_break: component(Factor::DaysSinceBreak),
            recovery_advantage: component(Factor::RecoveryAdvantage),
            historical_peak: component(Factor::HistoricalPeak),
            monthly_seasonality: component(Factor::MonthlySeasonality),
            current_performance: component(Factor::CurrentPerformance),
        }
    }

    /// Component for `factor`.
    #[must_use]
    pub const fn get(&self, factor: Factor) -> &ScoreComponent {
        match factor {
            Factor::SupportStrength => &self.support_strength,
            Factor::DaysSinceBreak => &self.days_since_break,
            Factor::RecoveryAdvantage => &self.recovery_advantage,
            Factor::HistoricalPeak => &self.historical_peak,
            Factor::MonthlySeasonality => &self.monthly_seasonality,
            Factor::CurrentPerformance => &self.current_performance,
        }
    }

    /// Components in canonical factor order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, &ScoreComponent)> {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Composite score: the sum of weighted components, clamped to [0, 100].
    ///
    /// Zero when the weights are degenerate: no discrimination was requested.
    #[must_use]
    pub fn composite(&self, weights: &NormalizedWeights) -> f64 {
        if weights.is_degenerate() {
            return 0.0;
        }
        let sum: f64 = self.iter().map(|(_, c)| c.weighted).sum();
        sum.clamp(0.0, MAX_SCORE)
    }

    /// Factors without data.
    pub fn missing(&self) -> impl Iterator<Item = Factor> + '_ {
        self.iter().filter(|(_, c)| !c.has_data).map(|(f, _)| f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScoreWeights;

    #[test]
    fn scored_values_are_clamped() {
        assert_eq!(Normalization::scored(140.0).value(), 100.0);
        assert_eq!(Normalization::scored(-3.0).value(), 0.0);
        assert_eq!(Normalization::scored(f64::INFINITY).value(), 100.0);
    }

    #[test]
    fn nan_scores_neutral() {
        let n = Normalization::scored(f64::NAN);
        assert_eq!(n.value(), NEUTRAL_SCORE);
        assert_eq!(n.status(), DataStatus::Available);
    }

    #[test]
    fn missing_component_drops_raw_and_stays_neutral() {
        let component = ScoreComponent::new(Some(12.0), Normalization::missing(), 40.0);

        assert_eq!(component.raw, None);
        assert!(!component.has_data);
        assert_eq!(component.normalized, NEUTRAL_SCORE);
        assert_eq!(component.weighted, 20.0);
        assert_eq!(component.data_status, DataStatus::Unavailable);
    }

    #[test]
    fn flat_component_keeps_raw() {
        let component = ScoreComponent::new(Some(30.0), Normalization::flat(), 10.0);

        assert_eq!(component.raw, Some(30.0));
        assert!(component.has_data);
        assert_eq!(component.normalized, NEUTRAL_SCORE);
        assert_eq!(component.data_status, DataStatus::Insufficient);
    }

    #[test]
    fn composite_sums_weighted_components() {
        let weights = ScoreWeights::default().renormalize();
        let breakdown = ScoreBreakdown::from_fn(|factor| {
            ScoreComponent::new(Some(1.0), Normalization::scored(80.0), weights.get(factor))
        });

        assert!((breakdown.composite(&weights) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn composite_is_zero_for_degenerate_weights() {
        let weights = ScoreWeights::zero().renormalize();
        let breakdown = ScoreBreakdown::from_fn(|_| {
            ScoreComponent::new(Some(1.0), Normalization::scored(90.0), 0.0)
        });

        assert_eq!(breakdown.composite(&weights), 0.0);
    }

    #[test]
    fn missing_lists_factors_without_data() {
        let breakdown = ScoreBreakdown::from_fn(|factor| {
            let normalization = if factor == Factor::RecoveryAdvantage {
                Normalization::missing()
            } else {
                Normalization::scored(60.0)
            };
            ScoreComponent::new(Some(1.0), normalization, 10.0)
        });

        assert_eq!(
            breakdown.missing().collect::<Vec<_>>(),
            vec![Factor::RecoveryAdvantage]
        );
    }
}
