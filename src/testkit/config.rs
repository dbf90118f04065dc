//! Canonical test configurations.
//!
//! Single source of truth for config documents used across tests.

/// A complete config file touching every section.
pub const FULL_TOML: &str = r#"
[logging]
level = "info"
format = "compact"

[weights]
support_strength = 30
days_since_break = 10
recovery_advantage = 30
historical_peak = 10
monthly_seasonality = 10
current_performance = 10

[filters]
rolling_period = 90
min_days_since_break = 5
probability_method = "weighted_average"
historical_peak_threshold = 0.8

[normalizer]
days_since_break_peak = 0.4
"#;
