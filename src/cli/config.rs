//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use crate::cli::command::ConfigCommand;
use crate::cli::output;
use crate::config::Config;
use crate::error::Result;

/// Execute a `config` subcommand against the already loaded configuration.
pub fn execute(command: ConfigCommand, config: &Config, path: Option<&Path>) -> Result<()> {
    match command {
        ConfigCommand::Show => show(config, path),
        ConfigCommand::Validate => validate(path),
    }
}

fn source_label(path: Option<&Path>) -> String {
    path.map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string())
}

fn show(config: &Config, path: Option<&Path>) -> Result<()> {
    if output::is_json() {
        output::json_output(&json!({
            "command": "config.show",
            "source": source_label(path),
            "config": serde_json::to_value(config)?,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Source", source_label(path));
    output::section("config.toml");
    output::table(&config.to_toml()?);
    Ok(())
}

/// Loading already validated the file; reaching here means it is valid.
fn validate(path: Option<&Path>) -> Result<()> {
    if output::is_json() {
        output::json_output(&json!({
            "command": "config.validate",
            "source": source_label(path),
            "valid": true,
        }));
        return Ok(());
    }

    match path {
        Some(path) => output::success(&format!("{} is valid", path.display())),
        None => output::note("No config file given, built-in defaults are valid"),
    }
    Ok(())
}
