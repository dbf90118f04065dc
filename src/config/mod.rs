//! Application configuration loading and validation.
//!
//! Provides the [`Config`] struct that aggregates default weights, default
//! filters, normalizer tuning and logging. Configuration is loaded from a TOML
//! file; every section is optional and falls back to its defaults.
//!
//! # Example
//!
//! ```
//! use optscore::config::Config;
//! use optscore::domain::Factor;
//!
//! let config = Config::parse_toml(
//!     r#"
//!     [weights]
//!     support_strength = 40
//!
//!     [filters]
//!     rolling_period = 90
//!     "#,
//! )?;
//!
//! assert_eq!(config.weights.get(Factor::SupportStrength), 40.0);
//! assert_eq!(config.filters.rolling_period.days(), 90);
//! # Ok::<(), optscore::error::Error>(())
//! ```

mod logging;

pub use logging::{LoggingConfig, LOG_FORMATS};

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::domain::{Factor, FilterDefaults, RecommendationFilters, ScoreWeights, MAX_USER_WEIGHT};
use crate::engine::{NormalizerSettings, RecommendationEngine};
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging and tracing configuration.
    pub logging: LoggingConfig,

    /// Default score weights, before renormalization.
    ///
    /// Each weight must lie in `0..=50`, the range the dashboard sliders offer.
    pub weights: ScoreWeights,

    /// Default filters. The expiry date is chosen per run.
    pub filters: FilterDefaults,

    /// Normalizer tuning.
    pub normalizer: NormalizerSettings,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for factor in Factor::ALL {
            let weight = self.weights.get(factor);
            if !weight.is_finite() || !(0.0..=MAX_USER_WEIGHT).contains(&weight) {
                return Err(ConfigError::InvalidValue {
                    field: factor.key(),
                    reason: format!("must be between 0 and {MAX_USER_WEIGHT}"),
                }
                .into());
            }
        }

        self.normalizer.validate()?;

        if EnvFilter::try_new(&self.logging.level).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "level",
                reason: format!("'{}' is not a valid log filter", self.logging.level),
            }
            .into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }

        Ok(())
    }

    /// Filters for a run on `expiry_date` using the configured defaults.
    #[must_use]
    pub const fn filters_for(&self, expiry_date: NaiveDate) -> RecommendationFilters {
        self.filters.for_expiry(expiry_date)
    }

    /// Engine using the configured normalizer settings.
    #[must_use]
    pub const fn engine(&self) -> RecommendationEngine {
        RecommendationEngine::new(self.normalizer)
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self, verbose: u8) {
        self.logging.init_with_verbosity(verbose);
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self).map_err(ConfigError::Serialize)?)
    }
}
