//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`Candidate`] and related types so
//! tests focus on assertions rather than construction boilerplate.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use crate::domain::{
    Candidate, CandidateContext, Factor, OptionName, RawFactors, ScoreWeights, StockName,
};

/// The expiry every builder in this module uses: 2026-11-20.
pub fn expiry() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 11, 20).expect("valid date")
}

/// A candidate with every factor and context field populated.
///
/// Expires on [`expiry`], strikes below its rolling low and has been clear
/// of a support break for 20 days, so it passes the default screen.
pub fn candidate(option_name: &str, stock_name: &str) -> Candidate {
    Candidate {
        option_name: OptionName::new(option_name),
        stock_name: StockName::new(stock_name),
        strike_price: dec!(65),
        expiry_date: expiry(),
        days_to_expiry: 33,
        premium: dec!(1.25),
        current_price: dec!(72.40),
        factors: RawFactors {
            support_strength: Some(72.0),
            days_since_break: Some(20.0),
            recovery_advantage: Some(4.5),
            historical_peak: Some(0.91),
            monthly_positive_rate: Some(63.0),
            current_performance: Some(1.8),
        },
        context: CandidateContext {
            rolling_low: Some(dec!(66.10)),
            current_probability: Some(0.78),
            pattern_type: Some("stable_accumulator".to_string()),
            monthly_avg_return: Some(0.9),
            typical_low_day: Some(12),
            months_in_history: Some(48),
            worst_month_drawdown: Some(-11.4),
            financial_report: false,
            ex_dividend: false,
        },
    }
}

/// A candidate with no factor data and an empty context.
pub fn bare_candidate(option_name: &str, stock_name: &str) -> Candidate {
    Candidate {
        factors: RawFactors::default(),
        context: CandidateContext::default(),
        ..candidate(option_name, stock_name)
    }
}

/// Bare candidates `OPT0..OPTn` carrying only `factor`, one value each.
pub fn candidates_with(factor: Factor, values: &[Option<f64>]) -> Vec<Candidate> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let mut c = bare_candidate(&format!("OPT{i}"), "ERIC");
            c.factors.set(factor, *value);
            c
        })
        .collect()
}

/// Weights putting all importance on `factor`.
pub fn sole_weight(factor: Factor) -> ScoreWeights {
    ScoreWeights::only(factor, 50.0)
}
