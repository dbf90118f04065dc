//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Output formats understood by [`LoggingConfig::init`].
pub const LOG_FORMATS: [&str; 3] = ["pretty", "json", "compact"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Logs go to
    /// stderr so command output on stdout stays machine-readable.
    pub fn init(&self) {
        self.init_with_verbosity(0);
    }

    /// Initialize the subscriber, raising the level for each `-v` flag.
    pub fn init_with_verbosity(&self, verbose: u8) {
        let level = self.effective_level(verbose);
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let result = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            "compact" => fmt()
                .compact()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        if result.is_err() {
            tracing::debug!("Tracing subscriber already installed");
        }
    }

    /// Level after applying `-v` flags: one raises to `debug`, two or more to `trace`.
    #[must_use]
    pub fn effective_level(&self, verbose: u8) -> &str {
        match verbose {
            0 => &self.level,
            1 => "debug",
            _ => "trace",
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "pretty".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_configured_level() {
        let config = LoggingConfig {
            level: "info".into(),
            format: "json".into(),
        };
        assert_eq!(config.effective_level(0), "info");
        assert_eq!(config.effective_level(1), "debug");
        assert_eq!(config.effective_level(3), "trace");
    }
}
