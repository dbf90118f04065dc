//! Command-line adapter over the scoring engine.

pub mod command;
pub mod config;
pub mod explain;
pub mod input;
pub mod output;
pub mod rank;
pub mod weights;

pub use command::{Cli, Commands, ConfigCommand};

use crate::config::Config;
use crate::error::Result;

/// Dispatch a parsed command.
pub fn execute(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Commands::Rank(args) => rank::execute(config, args),
        Commands::Explain(args) => explain::execute(config, args),
        Commands::Weights(args) => weights::execute(config, args),
        Commands::Config(command) => config::execute(*command, config, cli.config.as_deref()),
    }
}
