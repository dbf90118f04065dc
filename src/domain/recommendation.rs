//! Ranked recommendation records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::bins::{DteBin, ProbabilityBin};
use super::candidate::{Candidate, CandidateContext, RawFactors};
use super::filter::RecommendationFilters;
use super::id::{OptionName, StockName};
use super::score::ScoreBreakdown;
use super::weights::NormalizedWeights;

/// One scored and ranked candidate.
///
/// Identifying and pricing fields are the candidate's, unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedOption {
    /// 1-based position in the ranked list.
    pub rank: usize,
    /// Option contract name.
    pub option_name: OptionName,
    /// Underlying stock.
    pub stock_name: StockName,
    /// Strike price.
    pub strike_price: Decimal,
    /// Expiry date.
    pub expiry_date: NaiveDate,
    /// Calendar days to expiry.
    pub days_to_expiry: i64,
    /// Option premium.
    pub premium: Decimal,
    /// Current underlying price.
    pub current_price: Decimal,
    /// Raw factor inputs as received.
    pub factors: RawFactors,
    /// Descriptive passthrough fields, unchanged.
    pub context: CandidateContext,
    /// `(rolling_low - current_price) / current_price * 100`, when known.
    pub distance_to_support_pct: Option<Decimal>,
    /// Bin of the current probability of worthlessness, when known.
    pub probability_bin: Option<ProbabilityBin>,
    /// Bin of the days to expiry.
    pub dte_bin: DteBin,
    /// Per-factor audit trail behind the composite score.
    pub score_breakdown: ScoreBreakdown,
    /// Composite score in [0, 100].
    pub composite_score: f64,
}

impl RecommendedOption {
    /// Attach a score to a candidate. The rank is assigned later by the ranker.
    #[must_use]
    pub fn scored(
        candidate: Candidate,
        score_breakdown: ScoreBreakdown,
        composite_score: f64,
    ) -> Self {
        let distance_to_support_pct =
            distance_to_support_pct(candidate.context.rolling_low, candidate.current_price);
        let probability_bin = candidate
            .context
            .current_probability
            .filter(|p| p.is_finite())
            .map(ProbabilityBin::of);

        Self {
            rank: 0,
            dte_bin: DteBin::of(candidate.days_to_expiry),
            option_name: candidate.option_name,
            stock_name: candidate.stock_name,
            strike_price: candidate.strike_price,
            expiry_date: candidate.expiry_date,
            days_to_expiry: candidate.days_to_expiry,
            premium: candidate.premium,
            current_price: candidate.current_price,
            factors: candidate.factors,
            context: candidate.context,
            distance_to_support_pct,
            probability_bin,
            score_breakdown,
            composite_score,
        }
    }
}

/// Signed distance from the current price down to the rolling low, in percent.
///
/// Negative when the support sits below the current price.
#[must_use]
pub fn distance_to_support_pct(
    rolling_low: Option<Decimal>,
    current_price: Decimal,
) -> Option<Decimal> {
    let low = rolling_low?;
    (low - current_price)
        .checked_div(current_price)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| pct.round_dp(2))
}

/// Output of one scoring run.
///
/// Carries the filters and renormalized weights actually applied, so a result
/// can be audited without the original request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    /// Filters the run was made under.
    pub filters: RecommendationFilters,
    /// Renormalized weights actually applied.
    pub weights: NormalizedWeights,
    /// Ranked options, best first.
    pub options: Vec<RecommendedOption>,
}

impl Recommendations {
    /// Number of ranked options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True when nothing was ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Look up an option by contract name.
    #[must_use]
    pub fn find(&self, option_name: &str) -> Option<&RecommendedOption> {
        self.options
            .iter()
            .find(|o| o.option_name.as_str() == option_name)
    }

    /// Keep only the top `limit` options.
    pub fn truncate(&mut self, limit: usize) {
        self.options.truncate(limit);
    }
}
