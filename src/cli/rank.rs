//! Handler for the `rank` command.

use rust_decimal::Decimal;
use serde_json::json;
use tabled::{Table, Tabled};

use crate::cli::command::{RankArgs, RunArgs};
use crate::cli::{input, output};
use crate::config::Config;
use crate::domain::{Factor, RecommendedOption, Recommendations};
use crate::error::Result;

#[derive(Tabled)]
struct RankRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Option")]
    option: String,
    #[tabled(rename = "Stock")]
    stock: String,
    #[tabled(rename = "Strike")]
    strike: Decimal,
    #[tabled(rename = "Premium")]
    premium: Decimal,
    #[tabled(rename = "DTE")]
    days_to_expiry: i64,
    #[tabled(rename = "To Support")]
    distance: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "No Data")]
    missing: String,
}

impl From<&RecommendedOption> for RankRow {
    fn from(option: &RecommendedOption) -> Self {
        let missing: Vec<&str> = option
            .score_breakdown
            .missing()
            .map(Factor::key)
            .collect();
        Self {
            rank: option.rank,
            option: option.option_name.to_string(),
            stock: option.stock_name.to_string(),
            strike: option.strike_price,
            premium: option.premium,
            days_to_expiry: option.days_to_expiry,
            distance: option
                .distance_to_support_pct
                .map_or_else(|| "-".to_string(), |pct| format!("{pct}%")),
            score: format!("{:.1}", option.composite_score),
            missing: if missing.is_empty() {
                "-".to_string()
            } else {
                missing.join(", ")
            },
        }
    }
}

/// Load, optionally screen, score and rank the candidates of one run.
pub fn run(config: &Config, args: &RunArgs) -> Result<Recommendations> {
    let candidates = input::load_candidates(&args.candidates)?;
    let filters = args.filters(config);
    let weights = input::apply_overrides(config.weights, &args.weights);

    let candidates = if args.screen {
        filters.screen(candidates)
    } else {
        candidates
    };

    Ok(config.engine().analyze(&filters, &weights, candidates))
}

/// Execute `rank`.
pub fn execute(config: &Config, args: &RankArgs) -> Result<()> {
    let mut result = run(config, &args.run)?;
    let total = result.len();
    if let Some(limit) = args.limit {
        result.truncate(limit);
    }

    if output::is_json() {
        output::json_output(&json!({
            "command": "rank",
            "total": total,
            "recommendations": serde_json::to_value(&result)?,
        }));
        return Ok(());
    }

    let filters = &result.filters;
    output::section("Recommendations");
    output::field("Expiry", filters.expiry_date);
    output::field("Rolling period", filters.rolling_period);
    output::field("Min days", filters.min_days_since_break);
    output::field("Probability", filters.probability_method);
    output::field("Peak threshold", filters.historical_peak_threshold);
    output::field("Candidates", total);

    if result.weights.is_degenerate() {
        output::warning("All weights are zero: every score is 0 and ranking follows input order");
    }

    if result.is_empty() {
        output::note("No candidates to rank");
        return Ok(());
    }

    output::section("Ranking");
    let rows: Vec<RankRow> = result.options.iter().map(RankRow::from).collect();
    output::table(&Table::new(rows).to_string());

    if let Some(top) = result.options.first() {
        output::note(&format!(
            "Top pick {} scores {}",
            output::highlight(&top.option_name),
            output::highlight(format!("{:.1}", top.composite_score))
        ));
    }
    Ok(())
}
