use optscore::domain::Recommendations;

pub const EPS: f64 = 1e-9;

pub fn assert_near(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected} ± {EPS}, got {actual}"
    );
}

/// Assert the ranked output as `(option_name, rank)` pairs, in output order.
pub fn assert_ranking(result: &Recommendations, expected: &[(&str, usize)]) {
    let actual: Vec<(&str, usize)> = result
        .options
        .iter()
        .map(|o| (o.option_name.as_str(), o.rank))
        .collect();
    assert_eq!(actual, expected);
}

/// Option names in output order.
pub fn names(result: &Recommendations) -> Vec<&str> {
    result
        .options
        .iter()
        .map(|o| o.option_name.as_str())
        .collect()
}
