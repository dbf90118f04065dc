use std::fs;
use std::path::{Path, PathBuf};

use optscore::domain::Candidate;
use optscore::testkit::domain::candidate;
use rust_decimal_macros::dec;

/// Three candidates for 2026-11-20 with spread on every factor.
///
/// With default weights they rank `ERIC6X65`, `SAND6X180`, `VOLV6X240`.
/// `VOLV6X240` has no recovery data and strikes above its rolling low, so
/// the eligibility screen drops it.
pub fn sample_candidates() -> Vec<Candidate> {
    let mut eric = candidate("ERIC6X65", "ERIC");
    eric.factors.support_strength = Some(85.0);
    eric.factors.days_since_break = Some(40.0);
    eric.factors.recovery_advantage = Some(9.0);
    eric.factors.historical_peak = Some(0.94);
    eric.factors.monthly_positive_rate = Some(70.0);
    eric.factors.current_performance = Some(3.0);
    eric.context.current_probability = Some(0.81);

    let mut sand = candidate("SAND6X180", "SAND");
    sand.factors.support_strength = Some(60.0);
    sand.factors.days_since_break = Some(25.0);
    sand.factors.recovery_advantage = Some(4.0);
    sand.factors.historical_peak = Some(0.88);
    sand.factors.monthly_positive_rate = Some(55.0);
    sand.factors.current_performance = Some(-1.0);

    let mut volv = candidate("VOLV6X240", "VOLV");
    volv.strike_price = dec!(240);
    volv.current_price = dec!(251.30);
    volv.context.rolling_low = Some(dec!(231.00));
    volv.factors.support_strength = Some(35.0);
    volv.factors.days_since_break = Some(10.0);
    volv.factors.recovery_advantage = None;
    volv.factors.historical_peak = Some(0.79);
    volv.factors.monthly_positive_rate = Some(48.0);
    volv.factors.current_performance = Some(-4.5);

    vec![eric, sand, volv]
}

/// Write candidates as a JSON array into `dir`.
pub fn write_candidates(dir: &Path, candidates: &[Candidate]) -> PathBuf {
    let path = dir.join("candidates.json");
    let json = serde_json::to_string_pretty(candidates).expect("serialize candidates");
    fs::write(&path, json).expect("write candidates");
    path
}

/// Write a config file into `dir`.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, contents).expect("write config");
    path
}
