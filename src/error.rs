use std::path::PathBuf;

use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),
}

/// Errors raised while turning command-line input into typed engine input.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read candidates from {path}: {source}")]
    ReadCandidates {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse candidates in {path}: {source}")]
    ParseCandidates {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("option '{name}' is not among the ranked candidates")]
    UnknownOption { name: String },

    #[error("invalid weight override '{input}': {reason}")]
    InvalidWeightOverride { input: String, reason: String },

    #[error("invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Crate-wide error type returned by configuration loading and CLI commands.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
