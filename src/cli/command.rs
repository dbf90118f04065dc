//! Command-line interface definitions.
//!
//! Defines the CLI structure for the optscore binary using `clap`. Every
//! scoring command reads a JSON array of typed candidates, so the engine only
//! ever sees strongly typed records.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::domain::{PeakThreshold, ProbabilityMethod, RecommendationFilters, RollingPeriod};

use super::input::{self, WeightOverride};

/// Multi-factor scoring and ranking of option candidates
#[derive(Parser, Debug)]
#[command(name = "optscore")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score and rank candidates for one expiry
    Rank(RankArgs),

    /// Explain the score of one ranked option
    Explain(ExplainArgs),

    /// Show raw and renormalized weights
    Weights(WeightsArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `optscore config`.
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied
    Show,
    /// Validate the configuration file
    Validate,
}

/// Inputs shared by every command that runs the engine.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// JSON file holding an array of candidates
    #[arg(long)]
    pub candidates: PathBuf,

    /// Selected expiry date (YYYY-MM-DD)
    #[arg(long, value_parser = input::parse_date)]
    pub expiry: NaiveDate,

    /// Override one weight, e.g. `support_strength=40` (repeatable)
    #[arg(
        long = "weight",
        value_name = "FACTOR=VALUE",
        value_parser = input::parse_weight_override
    )]
    pub weights: Vec<WeightOverride>,

    /// Rolling-low window in days (30, 90, 180, 270, 365)
    #[arg(long, value_parser = input::parse_rolling_period)]
    pub rolling_period: Option<RollingPeriod>,

    /// Minimum trading days since the last support break
    #[arg(long)]
    pub min_days_since_break: Option<u32>,

    /// Probability estimation method
    #[arg(long)]
    pub probability_method: Option<ProbabilityMethod>,

    /// Historical peak threshold (0.80, 0.90, 0.95)
    #[arg(long, value_parser = input::parse_peak_threshold)]
    pub peak_threshold: Option<PeakThreshold>,

    /// Drop candidates failing the expiry, strike and days-since-break screen
    #[arg(long)]
    pub screen: bool,
}

impl RunArgs {
    /// Filters for this run: config defaults, then command-line overrides.
    #[must_use]
    pub fn filters(&self, config: &Config) -> RecommendationFilters {
        let mut filters = config.filters_for(self.expiry);
        if let Some(period) = self.rolling_period {
            filters.rolling_period = period;
        }
        if let Some(days) = self.min_days_since_break {
            filters.min_days_since_break = days;
        }
        if let Some(method) = self.probability_method {
            filters.probability_method = method;
        }
        if let Some(threshold) = self.peak_threshold {
            filters.historical_peak_threshold = threshold;
        }
        filters
    }
}

/// Arguments for the `rank` subcommand.
#[derive(Args, Debug)]
pub struct RankArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Show only the top N options
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the `explain` subcommand.
#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Option contract name to explain
    pub option: String,
}

/// Arguments for the `weights` subcommand.
#[derive(Args, Debug)]
pub struct WeightsArgs {
    /// Override one weight, e.g. `support_strength=40` (repeatable)
    #[arg(
        long = "weight",
        value_name = "FACTOR=VALUE",
        value_parser = input::parse_weight_override
    )]
    pub weights: Vec<WeightOverride>,
}
