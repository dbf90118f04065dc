//! Handler for the `explain` command.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::cli::command::ExplainArgs;
use crate::cli::{output, rank};
use crate::config::Config;
use crate::domain::DataStatus;
use crate::engine::{Contribution, RecoveryClass, Verdict};
use crate::error::{InputError, Result};

#[derive(Tabled)]
struct ContributionRow {
    #[tabled(rename = "Factor")]
    factor: &'static str,
    #[tabled(rename = "Raw")]
    raw: String,
    #[tabled(rename = "Normalized")]
    normalized: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "Points")]
    points: String,
    #[tabled(rename = "Data")]
    data: &'static str,
}

impl From<&Contribution> for ContributionRow {
    fn from(c: &Contribution) -> Self {
        Self {
            factor: c.factor.label(),
            raw: c.raw.map_or_else(|| "-".to_string(), |v| format!("{v:.2}")),
            normalized: format!("{:.1}", c.normalized),
            weight: format!("{:.1}", c.weight),
            points: format!("{:.2}", c.weighted),
            data: match c.data_status {
                DataStatus::Available => "available",
                DataStatus::Insufficient => "insufficient",
                DataStatus::Unavailable => "unavailable",
            },
        }
    }
}

fn verdict_label(verdict: Verdict) -> String {
    match verdict {
        Verdict::Strong => output::positive(verdict),
        Verdict::Moderate => output::highlight(verdict),
        Verdict::Weak => output::negative(verdict),
    }
}

fn recovery_label(recovery: RecoveryClass) -> &'static str {
    match recovery {
        RecoveryClass::Candidate => "recovery candidate",
        RecoveryClass::NotCandidate => "not a recovery candidate",
        RecoveryClass::Unknown => "unknown",
    }
}

/// Execute `explain`.
pub fn execute(config: &Config, args: &ExplainArgs) -> Result<()> {
    let result = rank::run(config, &args.run)?;
    let engine = config.engine();
    let explanation = engine
        .explain(&result, &args.option)
        .ok_or_else(|| InputError::UnknownOption {
            name: args.option.clone(),
        })?;

    if output::is_json() {
        output::json_output(&json!({
            "command": "explain",
            "option": serde_json::to_value(result.find(&args.option))?,
            "explanation": serde_json::to_value(&explanation)?,
        }));
        return Ok(());
    }

    output::section("Explanation");
    output::field("Option", output::highlight(&explanation.option_name));
    output::field("Rank", format!("{} of {}", explanation.rank, result.len()));
    output::field("Score", format!("{:.1}", explanation.composite_score));
    output::field("Verdict", verdict_label(explanation.verdict));
    output::field("Recovery", recovery_label(explanation.recovery));
    if let Some(top) = explanation.top_factor() {
        output::field("Top factor", top.label());
    }

    output::section("Factors");
    let rows: Vec<ContributionRow> = explanation
        .contributions
        .iter()
        .map(ContributionRow::from)
        .collect();
    output::table(&Table::new(rows).to_string());

    if !explanation.notes.is_empty() {
        output::section("Notes");
        for note in &explanation.notes {
            output::note(note);
        }
    }
    Ok(())
}
