//! Simulator configuration.
//!
//! Values come from defaults, an optional JSON file and finally CLI
//! overrides. [`SimConfig::checked`] runs every validation rule before the
//! config is used.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;

pub mod error;
pub mod validation;

pub use error::{ConfigError, ConfigViolation};

/// How the driver reports outcomes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Menu and human readable status lines
    #[default]
    Text,
    /// One JSON object per outcome, no menu
    Json,
}

/// Timing and output settings for a simulator session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Delay before an auto-transition fires
    pub auto_delay_ms: u64,

    /// Pause after each menu action; the machine's own default when unset
    pub menu_pause_ms: Option<u64>,

    pub format: OutputFormat,
}

/// Values given on the command line. Each one set replaces the file value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    pub format: Option<OutputFormat>,
    pub auto_delay_ms: Option<u64>,
    pub menu_pause_ms: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            auto_delay_ms: 3_000,
            menu_pause_ms: None,
            format: OutputFormat::Text,
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON text. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Apply command line overrides on top of this config.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(ms) = overrides.auto_delay_ms {
            self.auto_delay_ms = ms;
        }
        if let Some(ms) = overrides.menu_pause_ms {
            self.menu_pause_ms = Some(ms);
        }
        self
    }

    /// Validate, returning the config unchanged or every violation found.
    pub fn checked(self) -> Result<Self, ConfigError> {
        match validation::validate(&self) {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    pub fn auto_delay(&self) -> Duration {
        Duration::from_millis(self.auto_delay_ms)
    }

    /// Menu pause, falling back to `default_ms` when not configured.
    pub fn menu_pause(&self, default_ms: u64) -> Duration {
        Duration::from_millis(self.menu_pause_ms.unwrap_or(default_ms))
    }
}
