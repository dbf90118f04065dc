//! Population-relative factor normalization.
//!
//! Each factor is rescaled against the range of values observed across the
//! candidates scored together, so a factor's "good" range follows the market
//! regime rather than a fixed scale.
//!
//! # Policy
//!
//! - Absent raw value: neutral [`NEUTRAL_SCORE`], no data.
//! - Population range collapsed to one value: neutral, flagged
//!   [`DataStatus::Insufficient`]. The factor carries no discriminating signal
//!   in this run but is not treated as an error.
//! - Otherwise the value is clamped to the population `[min, max]` and its
//!   position `p = (v - min) / (max - min)` is mapped onto [0, 100] according
//!   to the factor's [`Direction`].
//!
//! # Days since break
//!
//! Days since the support level was last broken uses a tent curve over `p`:
//! it rises linearly from 0 at the population minimum to 100 at the
//! configured peak position and falls linearly back to 0 at the population
//! maximum. A freshly broken support and a long-untested one both score low.
//!
//! [`NEUTRAL_SCORE`]: crate::domain::NEUTRAL_SCORE
//! [`DataStatus::Insufficient`]: crate::domain::DataStatus::Insufficient

use serde::{Deserialize, Serialize};

use crate::domain::{Candidate, Direction, DomainError, Factor, Normalization, MAX_SCORE};

/// Ranges narrower than this are treated as a single value.
const FLAT_EPSILON: f64 = 1e-10;

/// Tunable parameters of the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerSettings {
    /// Position in (0, 1) of the population range at which the
    /// days-since-break curve scores 100.
    pub days_since_break_peak: f64,
}

impl Default for NormalizerSettings {
    fn default() -> Self {
        Self {
            days_since_break_peak: 0.5,
        }
    }
}

impl NormalizerSettings {
    /// Settings with a validated curve peak.
    pub fn new(days_since_break_peak: f64) -> Result<Self, DomainError> {
        let settings = Self {
            days_since_break_peak,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check the curve peak lies strictly inside (0, 1).
    pub fn validate(&self) -> Result<(), DomainError> {
        let peak = self.days_since_break_peak;
        if peak.is_finite() && peak > 0.0 && peak < 1.0 {
            Ok(())
        } else {
            Err(DomainError::InvalidCurvePeak { value: peak })
        }
    }

    /// Normalize one raw value against its factor's population range.
    #[must_use]
    pub fn normalize(
        &self,
        factor: Factor,
        raw: Option<f64>,
        range: Option<FactorRange>,
    ) -> Normalization {
        let Some(value) = raw else {
            return Normalization::missing();
        };
        let Some(position) = range.and_then(|r| r.position(value)) else {
            return Normalization::flat();
        };

        match factor.direction() {
            Direction::HigherIsBetter => Normalization::scored(position * MAX_SCORE),
            Direction::PeakedMidRange => {
                Normalization::scored(tent(position, self.days_since_break_peak))
            }
        }
    }
}

/// Rise-then-fall curve over `position` in [0, 1], peaking at `peak`.
///
/// Out-of-range peaks are pulled just inside (0, 1) so the curve stays defined
/// for unvalidated settings.
#[must_use]
pub fn tent(position: f64, peak: f64) -> f64 {
    let peak = if peak.is_finite() {
        peak.clamp(f64::EPSILON, 1.0 - f64::EPSILON)
    } else {
        0.5
    };
    let p = position.clamp(0.0, 1.0);
    if p <= peak {
        p / peak * MAX_SCORE
    } else {
        (1.0 - p) / (1.0 - peak) * MAX_SCORE
    }
}

/// Observed `[min, max]` of one factor's available values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorRange {
    min: f64,
    max: f64,
    count: usize,
}

impl FactorRange {
    fn new(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            count: 1,
        }
    }

    fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.count += 1;
    }

    /// Smallest available value.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Largest available value.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Number of candidates with a value for the factor.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Half the width of the range. Halving first keeps the width finite
    /// when `min` and `max` sit near opposite ends of `f64`.
    fn half_span(&self) -> f64 {
        self.max / 2.0 - self.min / 2.0
    }

    /// True when every available value is the same.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.half_span() < FLAT_EPSILON / 2.0
    }

    /// Position of `value` in [0, 1] after clamping to the range, or `None`
    /// when the range is flat.
    #[must_use]
    pub fn position(&self, value: f64) -> Option<f64> {
        if self.is_flat() {
            return None;
        }
        let clamped = value.clamp(self.min, self.max);
        let position = (clamped / 2.0 - self.min / 2.0) / self.half_span();
        Some(position.clamp(0.0, 1.0))
    }
}

/// Per-factor ranges for one scoring population.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulationStats {
    ranges: [Option<FactorRange>; 6],
}

impl PopulationStats {
    /// Collect every factor's range in a single pass over the candidates.
    #[must_use]
    pub fn collect<'a>(candidates: impl IntoIterator<Item = &'a Candidate>) -> Self {
        let mut stats = Self::default();
        for candidate in candidates {
            for factor in Factor::ALL {
                if let Some(value) = candidate.factors.get(factor) {
                    let slot = &mut stats.ranges[factor as usize];
                    *slot = Some(match *slot {
                        Some(mut range) => {
                            range.include(value);
                            range
                        }
                        None => FactorRange::new(value),
                    });
                }
            }
        }

        for factor in Factor::ALL {
            match stats.range(factor) {
                Some(range) => tracing::debug!(
                    factor = %factor,
                    min = range.min(),
                    max = range.max(),
                    count = range.count(),
                    flat = range.is_flat(),
                    "Factor population"
                ),
                None => tracing::debug!(factor = %factor, "Factor has no data in population"),
            }
        }

        stats
    }

    /// Range of `factor`, absent when no candidate carries a value.
    #[must_use]
    pub fn range(&self, factor: Factor) -> Option<FactorRange> {
        self.ranges[factor as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DataStatus;
    use crate::testkit::domain::candidates_with;

    const EPS: f64 = 1e-9;

    fn population(factor: Factor, values: &[Option<f64>]) -> PopulationStats {
        PopulationStats::collect(&candidates_with(factor, values))
    }

    #[test]
    fn collect_skips_absent_and_non_finite_values() {
        let stats = population(
            Factor::SupportStrength,
            &[Some(40.0), None, Some(f64::NAN), Some(80.0)],
        );
        let range = stats.range(Factor::SupportStrength).unwrap();

        assert_eq!(range.min(), 40.0);
        assert_eq!(range.max(), 80.0);
        assert_eq!(range.count(), 2);
    }

    #[test]
    fn collect_reports_no_range_without_data() {
        let stats = population(Factor::RecoveryAdvantage, &[None, None]);
        assert_eq!(stats.range(Factor::RecoveryAdvantage), None);
    }

    #[test]
    fn higher_is_better_scales_linearly() {
        let settings = NormalizerSettings::default();
        let stats = population(Factor::SupportStrength, &[Some(40.0), Some(80.0)]);
        let range = stats.range(Factor::SupportStrength);

        let low = settings.normalize(Factor::SupportStrength, Some(40.0), range);
        let mid = settings.normalize(Factor::SupportStrength, Some(60.0), range);
        let high = settings.normalize(Factor::SupportStrength, Some(80.0), range);

        assert!((low.value() - 0.0).abs() < EPS);
        assert!((mid.value() - 50.0).abs() < EPS);
        assert!((high.value() - 100.0).abs() < EPS);
        assert_eq!(high.status(), DataStatus::Available);
    }

    #[test]
    fn values_outside_range_are_clamped() {
        let settings = NormalizerSettings::default();
        let range = population(Factor::CurrentPerformance, &[Some(-5.0), Some(5.0)])
            .range(Factor::CurrentPerformance);

        let n = settings.normalize(Factor::CurrentPerformance, Some(12.0), range);
        assert_eq!(n.value(), 100.0);
    }

    #[test]
    fn absent_value_is_neutral_without_data() {
        let settings = NormalizerSettings::default();
        let n = settings.normalize(Factor::HistoricalPeak, None, None);

        assert_eq!(n.value(), 50.0);
        assert!(!n.has_data());
        assert_eq!(n.status(), DataStatus::Unavailable);
    }

    #[test]
    fn flat_population_is_neutral_but_has_data() {
        let settings = NormalizerSettings::default();
        let range = population(Factor::MonthlySeasonality, &[Some(65.0), Some(65.0)])
            .range(Factor::MonthlySeasonality);

        let n = settings.normalize(Factor::MonthlySeasonality, Some(65.0), range);
        assert_eq!(n.value(), 50.0);
        assert!(n.has_data());
        assert_eq!(n.status(), DataStatus::Insufficient);
    }

    #[test]
    fn days_since_break_rises_then_falls() {
        let settings = NormalizerSettings::default();
        let range = population(Factor::DaysSinceBreak, &[Some(0.0), Some(100.0)])
            .range(Factor::DaysSinceBreak);
        let score = |days: f64| {
            settings
                .normalize(Factor::DaysSinceBreak, Some(days), range)
                .value()
        };

        assert!((score(0.0) - 0.0).abs() < EPS);
        assert!((score(25.0) - 50.0).abs() < EPS);
        assert!((score(50.0) - 100.0).abs() < EPS);
        assert!((score(75.0) - 50.0).abs() < EPS);
        assert!((score(100.0) - 0.0).abs() < EPS);
    }

    #[test]
    fn days_since_break_peak_is_configurable() {
        let settings = NormalizerSettings::new(0.25).unwrap();
        assert!((tent(0.25, settings.days_since_break_peak) - 100.0).abs() < EPS);
        assert!((tent(0.625, settings.days_since_break_peak) - 50.0).abs() < EPS);
    }

    #[test]
    fn settings_reject_peak_outside_open_interval() {
        assert!(NormalizerSettings::new(0.0).is_err());
        assert!(NormalizerSettings::new(1.0).is_err());
        assert!(NormalizerSettings::new(f64::NAN).is_err());
        assert!(NormalizerSettings::new(0.5).is_ok());
    }

    #[test]
    fn range_spanning_all_of_f64_keeps_positions_finite() {
        let range = population(
            Factor::SupportStrength,
            &[Some(-1e308), Some(0.0), Some(1e308)],
        )
        .range(Factor::SupportStrength)
        .unwrap();

        assert!(!range.is_flat());
        assert_eq!(range.position(-1e308), Some(0.0));
        assert_eq!(range.position(0.0), Some(0.5));
        assert_eq!(range.position(1e308), Some(1.0));

        let extremes = population(Factor::SupportStrength, &[Some(f64::MIN), Some(f64::MAX)])
            .range(Factor::SupportStrength)
            .unwrap();
        assert_eq!(extremes.position(f64::MAX), Some(1.0));
        assert_eq!(extremes.position(0.0), Some(0.5));
    }

    #[test]
    fn tent_stays_bounded_for_unvalidated_peak() {
        for peak in [-1.0, 0.0, 1.0, 2.0, f64::INFINITY] {
            for p in [0.0, 0.3, 1.0] {
                let v = tent(p, peak);
                assert!((0.0..=100.0).contains(&v), "tent({p}, {peak}) = {v}");
            }
        }
    }
}
