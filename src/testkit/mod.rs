//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for candidates, expiries and weights.
//! - [`config`] - Canonical TOML configurations.

pub mod config;
pub mod domain;
