//! Randomized properties of weight renormalization and scoring.

mod support;

use optscore::domain::{
    Candidate, DataStatus, Factor, RecommendationFilters, Recommendations, ScoreWeights,
};
use optscore::engine::RecommendationEngine;
use optscore::testkit::domain::{bare_candidate, expiry};
use proptest::prelude::*;

use support::fixtures::sample_candidates;

fn analyze(weights: &ScoreWeights, candidates: Vec<Candidate>) -> Recommendations {
    RecommendationEngine::default().analyze(
        &RecommendationFilters::new(expiry()),
        weights,
        candidates,
    )
}

/// One raw factor value, weighted toward the awkward corners of `f64`.
fn raw_value() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        Just(None),
        Just(Some(f64::NAN)),
        Just(Some(f64::INFINITY)),
        Just(Some(f64::NEG_INFINITY)),
        Just(Some(f64::MAX)),
        Just(Some(f64::MIN)),
        Just(Some(0.0)),
        (-1e308f64..1e308).prop_map(Some),
        (-100.0f64..100.0).prop_map(Some),
    ]
}

/// Populations of up to 20 candidates with arbitrary factor values.
fn population() -> impl Strategy<Value = Vec<[Option<f64>; 6]>> {
    prop::collection::vec(prop::array::uniform6(raw_value()), 0..20)
}

fn build(rows: &[[Option<f64>; 6]]) -> Vec<Candidate> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let mut c = bare_candidate(&format!("OPT{i}"), "ERIC");
            for (factor, value) in Factor::ALL.into_iter().zip(row) {
                c.factors.set(factor, *value);
            }
            c
        })
        .collect()
}

fn one_weight() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        0.0f64..=50.0,
        1e300f64..=f64::MAX,
        Just(f64::MIN_POSITIVE),
    ]
}

fn weights() -> impl Strategy<Value = ScoreWeights> {
    prop::array::uniform6(one_weight())
        .prop_map(|w| ScoreWeights::new(w[0], w[1], w[2], w[3], w[4], w[5]))
}

proptest! {
    #[test]
    fn renormalized_weights_sum_to_100(weights in weights()) {
        prop_assume!(weights.total() > 0.0);

        let normalized = weights.renormalize();

        prop_assert!(!normalized.is_degenerate());
        prop_assert!((normalized.total() - 100.0).abs() < 1e-6, "total {}", normalized.total());
        for factor in Factor::ALL {
            let w = normalized.get(factor);
            prop_assert!((0.0..=100.0 + 1e-9).contains(&w), "{factor} = {w}");
        }
    }

    #[test]
    fn renormalized_weights_keep_ratios(raw in prop::array::uniform6(0.0f64..=1e6)) {
        let weights = ScoreWeights::new(raw[0], raw[1], raw[2], raw[3], raw[4], raw[5]);
        prop_assume!(weights.total() > 0.0);

        let normalized = weights.renormalize();
        let total = weights.total();

        for factor in Factor::ALL {
            let expected = weights.get(factor) / total * 100.0;
            let actual = normalized.get(factor);
            prop_assert!(
                (actual - expected).abs() <= 1e-9 * expected.max(1.0),
                "{factor}: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn composite_scores_stay_bounded(weights in weights(), rows in population()) {
        let result = analyze(&weights, build(&rows));

        prop_assert_eq!(result.options.len(), rows.len());
        for option in &result.options {
            let score = option.composite_score;
            prop_assert!(!score.is_nan(), "{} scored NaN", option.option_name);
            prop_assert!((0.0..=100.0).contains(&score), "{} scored {score}", option.option_name);
            for factor in Factor::ALL {
                let normalized = option.score_breakdown.get(factor).normalized;
                prop_assert!((0.0..=100.0).contains(&normalized), "{factor} normalized {normalized}");
            }
        }
    }

    #[test]
    fn ranks_are_dense_and_ordered(weights in weights(), rows in population()) {
        let result = analyze(&weights, build(&rows));

        for (i, option) in result.options.iter().enumerate() {
            prop_assert_eq!(option.rank, i + 1);
        }
        for pair in result.options.windows(2) {
            prop_assert!(pair[0].composite_score >= pair[1].composite_score);
        }
    }

    #[test]
    fn non_finite_values_score_as_missing(rows in population()) {
        let result = analyze(&ScoreWeights::default(), build(&rows));

        for option in &result.options {
            let index: usize = option.option_name.as_str()[3..].parse().unwrap();
            for (factor, value) in Factor::ALL.into_iter().zip(rows[index]) {
                if value.is_some_and(|v| !v.is_finite()) {
                    let component = option.score_breakdown.get(factor);
                    prop_assert!(!component.has_data);
                    prop_assert_eq!(component.data_status, DataStatus::Unavailable);
                    prop_assert_eq!(component.normalized, 50.0);
                }
            }
        }
    }

    #[test]
    fn single_factor_composite_equals_its_normalized_score(
        index in 0..Factor::ALL.len(),
        rows in population(),
    ) {
        let factor = Factor::ALL[index];
        let result = analyze(&ScoreWeights::only(factor, 50.0), build(&rows));

        for option in &result.options {
            let normalized = option.score_breakdown.get(factor).normalized;
            prop_assert!(
                (option.composite_score - normalized).abs() < 1e-9,
                "{factor}: composite {} vs normalized {normalized}",
                option.composite_score
            );
        }
    }

    #[test]
    fn scoring_is_idempotent(weights in weights(), rows in population()) {
        let first = analyze(&weights, build(&rows));
        let second = analyze(&weights, build(&rows));

        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn scaling_every_weight_keeps_the_scores(
        raw in prop::array::uniform6(0.0f64..=50.0),
        scale in 1e-6f64..1e6,
    ) {
        let weights = ScoreWeights::new(raw[0], raw[1], raw[2], raw[3], raw[4], raw[5]);
        let scaled = ScoreWeights::new(
            raw[0] * scale,
            raw[1] * scale,
            raw[2] * scale,
            raw[3] * scale,
            raw[4] * scale,
            raw[5] * scale,
        );

        let a = analyze(&weights, sample_candidates());
        let b = analyze(&scaled, sample_candidates());

        for x in &a.options {
            let y = b.find(x.option_name.as_str()).unwrap();
            prop_assert!((x.composite_score - y.composite_score).abs() < 1e-6);
        }
    }
}
