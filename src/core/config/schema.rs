//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$NAJIA_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/najia/config.toml`
//! 3. `~/.najia/config.toml`
//!
//! # Validation
//!
//! Config values are validated after parsing so that a typo in
//! `integrity` or `output.format` is reported instead of silently ignored.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ConfigError;
use crate::core::hidden::IntegrityPolicy;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// catalog = "/usr/share/najia/hexagrams.json"
/// integrity = "strict"
///
/// [output]
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Replacement catalogue document
    pub catalog: Option<PathBuf>,

    /// Integrity policy for hidden spirit gaps ("warn" or "strict")
    pub integrity: Option<String>,

    /// Output defaults
    pub output: Option<OutputConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(integrity) = &self.integrity {
            if IntegrityPolicy::from_name(integrity).is_none() {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid integrity '{}', must be one of: {}",
                    integrity,
                    IntegrityPolicy::NAMES.join(", ")
                )));
            }
        }

        if let Some(catalog) = &self.catalog {
            if catalog.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "catalog path cannot be empty".to_string(),
                ));
            }
        }

        if let Some(output) = &self.output {
            output.validate()?;
        }

        Ok(())
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default view format ("text" or "json")
    pub format: Option<String>,
}

impl OutputConfig {
    /// Validate the output settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(format) = &self.format {
            if OutputFormat::from_name(format).is_none() {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid output format '{}', must be one of: {}",
                    format,
                    OutputFormat::NAMES.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// How views are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Valid configuration names.
    pub const NAMES: &'static [&'static str] = &["text", "json"];

    /// Parse a configuration name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}
