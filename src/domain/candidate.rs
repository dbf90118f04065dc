//! Strongly typed candidate records consumed by the scoring engine.
//!
//! Upstream collaborators convert their loosely typed rows into
//! [`Candidate`] values before scoring. Identifying and pricing fields are
//! copied through untouched; the six raw factor values may each be absent.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::factor::Factor;
use super::id::{OptionName, StockName};

/// Raw, un-normalized factor values for one candidate.
///
/// `None` means the upstream signal had insufficient history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawFactors {
    /// Support strength score (0-100 upstream scale).
    pub support_strength: Option<f64>,
    /// Trading days since the support level was last broken.
    pub days_since_break: Option<f64>,
    /// Recovery advantage in percentage points.
    pub recovery_advantage: Option<f64>,
    /// Historical peak probability of expiring worthless (0-1).
    pub historical_peak: Option<f64>,
    /// Percentage of positive-return months for the current month (0-100).
    pub monthly_positive_rate: Option<f64>,
    /// Month-to-date performance of the underlying in percent.
    pub current_performance: Option<f64>,
}

impl RawFactors {
    /// Raw value for `factor`. Non-finite values are treated as absent.
    #[must_use]
    pub fn get(&self, factor: Factor) -> Option<f64> {
        let value = match factor {
            Factor::SupportStrength => self.support_strength,
            Factor::DaysSinceBreak => self.days_since_break,
            Factor::RecoveryAdvantage => self.recovery_advantage,
            Factor::HistoricalPeak => self.historical_peak,
            Factor::MonthlySeasonality => self.monthly_positive_rate,
            Factor::CurrentPerformance => self.current_performance,
        };
        value.filter(|v| v.is_finite())
    }

    /// Replace the raw value for `factor`.
    pub fn set(&mut self, factor: Factor, value: Option<f64>) {
        let slot = match factor {
            Factor::SupportStrength => &mut self.support_strength,
            Factor::DaysSinceBreak => &mut self.days_since_break,
            Factor::RecoveryAdvantage => &mut self.recovery_advantage,
            Factor::HistoricalPeak => &mut self.historical_peak,
            Factor::MonthlySeasonality => &mut self.monthly_positive_rate,
            Factor::CurrentPerformance => &mut self.current_performance,
        };
        *slot = value;
    }
}

/// Descriptive context copied through to the recommendation unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateContext {
    /// Rolling-low support price for the selected lookback window.
    pub rolling_low: Option<Decimal>,
    /// Current probability of expiring worthless under the selected method (0-1).
    pub current_probability: Option<f64>,
    /// Support pattern classification from the upstream analysis.
    pub pattern_type: Option<String>,
    /// Historical mean return for the current calendar month in percent.
    pub monthly_avg_return: Option<f64>,
    /// Day of month on which the monthly low typically occurs.
    pub typical_low_day: Option<u8>,
    /// Number of historical months behind the seasonality figures.
    pub months_in_history: Option<u32>,
    /// Worst historical open-to-low drawdown for the month in percent.
    pub worst_month_drawdown: Option<f64>,
    /// A financial report is published before expiry.
    pub financial_report: bool,
    /// An ex-dividend date falls before expiry.
    pub ex_dividend: bool,
}

/// One eligible option contract to be scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
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
    /// Raw factor inputs.
    #[serde(default)]
    pub factors: RawFactors,
    /// Descriptive passthrough fields.
    #[serde(default)]
    pub context: CandidateContext,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_treats_non_finite_as_absent() {
        let mut factors = RawFactors::default();
        factors.set(Factor::RecoveryAdvantage, Some(f64::NAN));
        factors.set(Factor::SupportStrength, Some(72.0));

        assert_eq!(factors.get(Factor::RecoveryAdvantage), None);
        assert_eq!(factors.get(Factor::SupportStrength), Some(72.0));
    }

    #[test]
    fn deserializes_with_missing_optional_sections() {
        let json = r#"{
            "option_name": "ERIC6X65",
            "stock_name": "ERIC",
            "strike_price": "65",
            "expiry_date": "2026-11-20",
            "days_to_expiry": 33,
            "premium": "1.25",
            "current_price": "72.40",
            "factors": { "support_strength": 80.0 }
        }"#;

        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.option_name.as_str(), "ERIC6X65");
        assert_eq!(candidate.factors.get(Factor::SupportStrength), Some(80.0));
        assert_eq!(candidate.factors.get(Factor::DaysSinceBreak), None);
        assert_eq!(candidate.context, CandidateContext::default());
    }
}
