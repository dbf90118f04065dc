//! Handler for the `weights` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::cli::command::WeightsArgs;
use crate::cli::{input, output};
use crate::config::Config;
use crate::domain::Factor;
use crate::error::Result;

#[derive(Tabled)]
struct WeightRow {
    #[tabled(rename = "Factor")]
    factor: &'static str,
    #[tabled(rename = "Raw")]
    raw: String,
    #[tabled(rename = "Normalized")]
    normalized: String,
}

/// Execute `weights`.
pub fn execute(config: &Config, args: &WeightsArgs) -> Result<()> {
    let raw = input::apply_overrides(config.weights, &args.weights);
    let normalized = raw.renormalize();

    if output::is_json() {
        output::json_output(&json!({
            "command": "weights",
            "raw": serde_json::to_value(raw)?,
            "normalized": serde_json::to_value(normalized)?,
        }));
        return Ok(());
    }

    output::section("Weights");
    let rows: Vec<WeightRow> = Factor::ALL
        .into_iter()
        .map(|factor| WeightRow {
            factor: factor.label(),
            raw: format!("{:.1}", raw.get(factor)),
            normalized: format!("{:.2}", normalized.get(factor)),
        })
        .collect();
    output::table(&Table::new(rows).to_string());
    output::field("Raw total", format!("{:.1}", raw.total()));

    if normalized.is_degenerate() {
        output::warning("All weights are zero: composite scores will all be 0");
    } else {
        output::success("Renormalized to 100");
    }
    Ok(())
}
