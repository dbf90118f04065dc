//! Per-candidate score composition.

use crate::domain::{
    Candidate, NormalizedWeights, RecommendedOption, ScoreBreakdown, ScoreComponent,
};

use super::normalize::{NormalizerSettings, PopulationStats};

/// Combines normalized factors and renormalized weights into scores.
///
/// Borrowed state is fixed for the whole run, so every candidate is scored
/// against the same population and the same weights.
#[derive(Debug, Clone, Copy)]
pub struct ScoreCompositor<'a> {
    normalizer: &'a NormalizerSettings,
    population: &'a PopulationStats,
    weights: &'a NormalizedWeights,
}

impl<'a> ScoreCompositor<'a> {
    #[must_use]
    pub const fn new(
        normalizer: &'a NormalizerSettings,
        population: &'a PopulationStats,
        weights: &'a NormalizedWeights,
    ) -> Self {
        Self {
            normalizer,
            population,
            weights,
        }
    }

    /// Score breakdown for one candidate.
    #[must_use]
    pub fn breakdown(&self, candidate: &Candidate) -> ScoreBreakdown {
        ScoreBreakdown::from_fn(|factor| {
            let raw = candidate.factors.get(factor);
            let range = self.population.range(factor);
            let normalization = self.normalizer.normalize(factor, raw, range);
            ScoreComponent::new(raw, normalization, self.weights.get(factor))
        })
    }

    /// Score one candidate into an unranked recommendation.
    #[must_use]
    pub fn compose(&self, candidate: Candidate) -> RecommendedOption {
        let breakdown = self.breakdown(&candidate);
        let composite = breakdown.composite(self.weights);
        RecommendedOption::scored(candidate, breakdown, composite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DataStatus, Factor, ScoreWeights};
    use crate::testkit::domain::candidate;

    const EPS: f64 = 1e-9;

    #[test]
    fn weighted_values_follow_renormalized_weights() {
        let mut high = candidate("HIGH", "ERIC");
        high.factors.support_strength = Some(90.0);
        let mut low = candidate("LOW", "ERIC");
        low.factors.support_strength = Some(30.0);
        let candidates = vec![high, low];

        let normalizer = NormalizerSettings::default();
        let population = PopulationStats::collect(&candidates);
        let weights = ScoreWeights::only(Factor::SupportStrength, 20.0).renormalize();
        let compositor = ScoreCompositor::new(&normalizer, &population, &weights);

        let scored: Vec<_> = candidates.into_iter().map(|c| compositor.compose(c)).collect();

        let support = scored[0].score_breakdown.support_strength;
        assert_eq!(support.raw, Some(90.0));
        assert!((support.normalized - 100.0).abs() < EPS);
        assert!((support.weighted - 100.0).abs() < EPS);
        assert!((scored[0].composite_score - 100.0).abs() < EPS);
        assert!((scored[1].composite_score - 0.0).abs() < EPS);
    }

    #[test]
    fn every_factor_is_present_in_breakdown() {
        let mut c = candidate("SOLO", "VOLV");
        c.factors = Default::default();
        let candidates = vec![c];

        let normalizer = NormalizerSettings::default();
        let population = PopulationStats::collect(&candidates);
        let weights = ScoreWeights::default().renormalize();
        let compositor = ScoreCompositor::new(&normalizer, &population, &weights);
        let breakdown = compositor.breakdown(&candidates[0]);

        assert_eq!(breakdown.iter().count(), 6);
        for (_, component) in breakdown.iter() {
            assert!(!component.has_data);
            assert_eq!(component.data_status, DataStatus::Unavailable);
            assert_eq!(component.normalized, 50.0);
        }
        assert!((breakdown.composite(&weights) - 50.0).abs() < EPS);
    }
}
