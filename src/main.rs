use std::process::ExitCode;

use clap::Parser;

use optscore::cli::{self, output, Cli};
use optscore::config::Config;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            output::error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };
    config.init_logging(cli.verbose);

    match cli::execute(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
