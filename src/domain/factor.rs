//! The six scoring factors and their normalization direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// One independently computed signal about an option or its underlying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    /// Robustness of the rolling-low support level (0-100 upstream score).
    SupportStrength,
    /// Trading days since the support level was last broken.
    DaysSinceBreak,
    /// Recovery advantage in percentage points.
    RecoveryAdvantage,
    /// Historical peak probability of expiring worthless.
    HistoricalPeak,
    /// Share of positive-return months for the current calendar month.
    MonthlySeasonality,
    /// Month-to-date performance of the underlying.
    CurrentPerformance,
}

/// How a factor's raw value maps onto the normalized scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Linear rescale: the population maximum scores 100.
    HigherIsBetter,
    /// Rise-then-fall: moderate values score highest, both extremes score lowest.
    PeakedMidRange,
}

impl Factor {
    /// All factors in canonical breakdown order.
    pub const ALL: [Factor; 6] = [
        Factor::SupportStrength,
        Factor::DaysSinceBreak,
        Factor::RecoveryAdvantage,
        Factor::HistoricalPeak,
        Factor::MonthlySeasonality,
        Factor::CurrentPerformance,
    ];

    /// Snake-case key used in config files, JSON and CLI overrides.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Factor::SupportStrength => "support_strength",
            Factor::DaysSinceBreak => "days_since_break",
            Factor::RecoveryAdvantage => "recovery_advantage",
            Factor::HistoricalPeak => "historical_peak",
            Factor::MonthlySeasonality => "monthly_seasonality",
            Factor::CurrentPerformance => "current_performance",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Factor::SupportStrength => "Support Strength",
            Factor::DaysSinceBreak => "Days Since Break",
            Factor::RecoveryAdvantage => "Recovery Advantage",
            Factor::HistoricalPeak => "Historical Peak",
            Factor::MonthlySeasonality => "Monthly Seasonality",
            Factor::CurrentPerformance => "Current Performance",
        }
    }

    /// Normalization direction for this factor.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Factor::DaysSinceBreak => Direction::PeakedMidRange,
            _ => Direction::HigherIsBetter,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Factor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Factor::ALL
            .into_iter()
            .find(|factor| factor.key() == normalized)
            .ok_or_else(|| DomainError::UnknownFactor {
                name: s.to_string(),
            })
    }
}
