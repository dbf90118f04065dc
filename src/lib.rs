//! Optscore - multi-factor scoring and ranking of option recommendations.
//!
//! Given a set of tradable option contracts and six independently computed,
//! heterogeneously scaled signals per contract, the engine normalizes each
//! signal against the population being scored, combines them with
//! user-adjustable weights and produces a deterministic, explainable ranking.
//!
//! # Modules
//!
//! - [`domain`] - Typed candidates, filters, weights and score breakdowns
//! - [`engine`] - Normalization, composition, ranking and explanations
//! - [`config`] - Configuration loading from TOML files
//! - [`cli`] - Command-line adapter over the engine
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Builders shared by unit and integration tests
//!
//! # Example
//!
//! ```
//! use optscore::domain::{RecommendationFilters, ScoreWeights};
//! use optscore::engine::RecommendationEngine;
//!
//! let expiry = chrono::NaiveDate::from_ymd_opt(2026, 11, 20).unwrap();
//! let result = RecommendationEngine::default().analyze(
//!     &RecommendationFilters::new(expiry),
//!     &ScoreWeights::default(),
//!     Vec::new(),
//! );
//! assert!(result.is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
