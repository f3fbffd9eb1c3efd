//! Configuration structures for deserialisation.
//!
//! These structures map directly to the JSON configuration file format.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::milhdbk217f::{PART_COUNT, PART_STRESS};

/// Root configuration structure.
///
/// This is the top-level structure that matches the JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Optional JSON schema reference (ignored during parsing).
    #[serde(rename = "$schema", default)]
    _schema: Option<String>,

    /// Optional comment field (ignored during parsing).
    #[serde(rename = "_comment", default)]
    _comment: Option<String>,

    /// Prediction settings.
    #[serde(default)]
    pub prediction: PredictionConfig,

    /// Report output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any validation checks fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref method) = self.prediction.hazard_rate_method {
            if method_id(method).is_none() {
                return Err(ConfigError::ValidationError {
                    message: format!("Invalid hazard rate method '{method}'. Must be one of: count, stress"),
                });
            }
        }
        Ok(())
    }
}

/// Maps a method name to its `hazard_rate_method_id`.
#[must_use]
pub fn method_id(name: &str) -> Option<u32> {
    match name.to_lowercase().as_str() {
        "count" | "parts-count" => Some(PART_COUNT),
        "stress" | "part-stress" => Some(PART_STRESS),
        _ => None,
    }
}

/// Prediction configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PredictionConfig {
    /// Method applied to every part: "count" or "stress".
    /// Default: each part's own `hazard_rate_method_id`.
    #[serde(default)]
    pub hazard_rate_method: Option<String>,

    /// Replace zero stress inputs with engineering defaults before
    /// calculating.
    #[serde(default)]
    pub apply_default_values: bool,
}

impl PredictionConfig {
    /// The configured method ID, if any.
    #[must_use]
    pub fn method_id(&self) -> Option<u32> {
        self.hazard_rate_method.as_deref().and_then(method_id)
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Pretty-print the JSON report.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: default_true() }
    }
}

const fn default_true() -> bool {
    true
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
