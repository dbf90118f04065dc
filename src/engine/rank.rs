//! Dense, stable ranking of scored options.

use crate::domain::RecommendedOption;

/// Sort by composite score descending and assign ranks 1..=N.
///
/// The sort is stable: options with equal composite scores keep their input
/// order. Ranks are strictly increasing even across ties: scores
/// `[70, 70, 90]` rank the 90 first, then the two 70s in input order, as
/// 1, 2, 3. No option is dropped.
#[must_use]
pub fn rank(mut options: Vec<RecommendedOption>) -> Vec<RecommendedOption> {
    options.sort_by(|a, b| b.composite_score.total_cmp(&a.composite_score));
    for (index, option) in options.iter_mut().enumerate() {
        option.rank = index + 1;
    }
    options
}
