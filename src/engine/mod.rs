//! Multi-factor recommendation scoring.
//!
//! One call to [`RecommendationEngine::analyze`] runs the full pipeline over a
//! materialized candidate set:
//!
//! 1. Renormalize the user weights to sum to 100 (once per run).
//! 2. Collect each factor's population range in a single pass.
//! 3. Normalize every raw factor value and compose the weighted breakdown.
//! 4. Rank by composite score, stable on ties.
//!
//! The engine is pure and synchronous. It holds no state between calls and
//! never fails: missing data, degenerate weights and flat populations all
//! resolve to defined numbers.

mod composite;
mod explain;
mod normalize;
mod rank;

pub use composite::ScoreCompositor;
pub use explain::{
    Contribution, Explanation, RecoveryClass, Verdict, MODERATE_THRESHOLD, STRONG_THRESHOLD,
};
pub use normalize::{tent, FactorRange, NormalizerSettings, PopulationStats};
pub use rank::rank;

use crate::domain::{Candidate, RecommendationFilters, Recommendations, ScoreWeights};

/// Scores and ranks candidate options.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecommendationEngine {
    normalizer: NormalizerSettings,
}

impl RecommendationEngine {
    /// Create an engine with the given normalizer settings.
    #[must_use]
    pub const fn new(normalizer: NormalizerSettings) -> Self {
        Self { normalizer }
    }

    /// Normalizer settings in use.
    #[must_use]
    pub const fn normalizer(&self) -> &NormalizerSettings {
        &self.normalizer
    }

    /// Score and rank `candidates`.
    ///
    /// Every candidate appears in the output exactly once; screening is the
    /// caller's job (see [`RecommendationFilters::screen`]). The filters are
    /// carried into the result so the run can be audited.
    #[must_use]
    pub fn analyze(
        &self,
        filters: &RecommendationFilters,
        weights: &ScoreWeights,
        candidates: Vec<Candidate>,
    ) -> Recommendations {
        let weights = weights.renormalize();
        let population = PopulationStats::collect(&candidates);
        let compositor = ScoreCompositor::new(&self.normalizer, &population, &weights);

        let scored = candidates
            .into_iter()
            .map(|candidate| compositor.compose(candidate))
            .collect();
        let options = rank(scored);

        tracing::info!(
            candidates = options.len(),
            expiry = %filters.expiry_date,
            degenerate_weights = weights.is_degenerate(),
            top_score = options.first().map(|o| o.composite_score),
            "Ranked recommendations"
        );

        Recommendations {
            filters: *filters,
            weights,
            options,
        }
    }

    /// Explain one option from a previous run.
    #[must_use]
    pub fn explain(
        &self,
        recommendations: &Recommendations,
        option_name: &str,
    ) -> Option<Explanation> {
        let option = recommendations.find(option_name)?;
        Some(Explanation::new(
            option,
            &recommendations.weights,
            &recommendations.filters,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DataStatus, Factor};
    use crate::testkit::domain::{bare_candidate, expiry};

    const EPS: f64 = 1e-9;

    #[test]
    fn support_and_recovery_scenario() {
        let mut first = bare_candidate("C1", "ERIC");
        first.factors.support_strength = Some(80.0);
        first.factors.recovery_advantage = None;
        let mut second = bare_candidate("C2", "VOLV");
        second.factors.support_strength = Some(40.0);
        second.factors.recovery_advantage = Some(10.0);

        let mut weights = ScoreWeights::zero();
        weights.set(Factor::SupportStrength, 50.0);
        weights.set(Factor::RecoveryAdvantage, 50.0);

        let result = RecommendationEngine::default().analyze(
            &RecommendationFilters::new(expiry()),
            &weights,
            vec![first, second],
        );

        let c1 = &result.options[0];
        assert_eq!(c1.option_name.as_str(), "C1");
        assert_eq!(c1.rank, 1);
        assert!((c1.score_breakdown.support_strength.normalized - 100.0).abs() < EPS);
        assert!((c1.score_breakdown.recovery_advantage.normalized - 50.0).abs() < EPS);
        assert!(!c1.score_breakdown.recovery_advantage.has_data);
        assert!((c1.composite_score - 75.0).abs() < EPS);

        let c2 = &result.options[1];
        assert_eq!(c2.option_name.as_str(), "C2");
        assert_eq!(c2.rank, 2);
        assert!((c2.score_breakdown.support_strength.normalized - 0.0).abs() < EPS);
        assert_eq!(
            c2.score_breakdown.recovery_advantage.data_status,
            DataStatus::Insufficient
        );
        assert!((c2.composite_score - 25.0).abs() < EPS);
    }

    #[test]
    fn result_carries_filters_and_renormalized_weights() {
        let filters = RecommendationFilters::new(expiry());
        let weights = ScoreWeights::new(10.0, 10.0, 0.0, 0.0, 0.0, 0.0);
        let result = RecommendationEngine::default().analyze(&filters, &weights, Vec::new());

        assert!(result.is_empty());
        assert_eq!(result.filters, filters);
        assert!((result.weights.get(Factor::SupportStrength) - 50.0).abs() < EPS);
    }

    #[test]
    fn explain_finds_option_by_name() {
        let engine = RecommendationEngine::default();
        let result = engine.analyze(
            &RecommendationFilters::new(expiry()),
            &ScoreWeights::default(),
            vec![bare_candidate("A", "ERIC"), bare_candidate("B", "SAND")],
        );

        let explanation = engine.explain(&result, "B").unwrap();
        assert_eq!(explanation.rank, 2);
        assert!(engine.explain(&result, "MISSING").is_none());
    }
}
