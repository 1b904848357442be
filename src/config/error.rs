//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// A single rule a configuration broke.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("auto_delay_ms must be at least 1 (got {0})")]
    AutoDelayTooShort(u64),

    #[error("auto_delay_ms must not exceed {max} (got {value})")]
    AutoDelayTooLong { max: u64, value: u64 },

    #[error("menu_pause_ms must not exceed {max} (got {value})")]
    MenuPauseTooLong { max: u64, value: u64 },
}

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every violated rule, not just the first one.
    #[error("invalid configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
