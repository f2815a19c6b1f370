//! Error types for the configuration core.
//!
//! Validation failures are not errors in this sense: they are aggregated into
//! a report (see `validation`). `ConfigError` covers the genuinely fallible
//! paths, file sources and logging setup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading configuration sources or initializing logging.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid log directive: {0}")]
    InvalidLogDirective(String),

    #[error("Invalid log format: {0} (must be 'json' or 'text')")]
    InvalidLogFormat(String),
}
