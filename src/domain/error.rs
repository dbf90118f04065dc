//! Domain validation errors for core domain types.
//!
//! These errors are returned when untyped input (config values, CLI
//! arguments) cannot be mapped onto one of the enumerated domain values.
//!
//! # Examples
//!
//! ```
//! use optscore::domain::error::DomainError;
//! use optscore::domain::RollingPeriod;
//!
//! let result = RollingPeriod::try_from(45);
//! assert!(matches!(result, Err(DomainError::UnsupportedRollingPeriod { days: 45 })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Rolling-low lookback must be one of the supported day counts.
    #[error("unsupported rolling period {days}, expected one of 30, 90, 180, 270, 365")]
    UnsupportedRollingPeriod {
        /// The rejected day count.
        days: u32,
    },

    /// Historical peak threshold must be one of the supported cutoffs.
    #[error("unsupported historical peak threshold {value}, expected one of 0.80, 0.90, 0.95")]
    UnsupportedPeakThreshold {
        /// The rejected cutoff.
        value: f64,
    },

    /// Probability method identifier is not known.
    #[error("unknown probability method '{name}'")]
    UnknownProbabilityMethod {
        /// The rejected identifier.
        name: String,
    },

    /// Factor name is not one of the six scoring factors.
    #[error("unknown factor '{name}'")]
    UnknownFactor {
        /// The rejected name.
        name: String,
    },

    /// Peak of the days-since-break curve must lie strictly inside (0, 1).
    #[error("days-since-break curve peak {value} must lie strictly between 0 and 1")]
    InvalidCurvePeak {
        /// The rejected position.
        value: f64,
    },
}
