//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$NAJIA_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/najia/config.toml`
//! 3. `~/.najia/config.toml`
//!
//! A missing file is not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use najia::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("Integrity: {:?}", config.integrity_policy());
//! if let Some(path) = config.catalog_path() {
//!     println!("Catalogue: {}", path.display());
//! }
//! ```

pub mod schema;

pub use schema::{GlobalConfig, OutputConfig, OutputFormat};

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::hidden::IntegrityPolicy;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
///
/// Accessors apply defaults for anything the file leaves out.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub global: GlobalConfig,
    /// Path the configuration was loaded from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. Missing config files are not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let candidates = candidate_paths(
            std::env::var_os("NAJIA_CONFIG"),
            std::env::var_os("XDG_CONFIG_HOME"),
            dirs::home_dir(),
        );

        match candidates.into_iter().find(|p| p.exists()) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        global.validate()?;

        Ok(Self {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Get the replacement catalogue path.
    ///
    /// Relative paths are resolved against the config file's directory.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        let catalog = self.global.catalog.as_ref()?;
        match self.path.as_deref().and_then(Path::parent) {
            Some(dir) if catalog.is_relative() => Some(dir.join(catalog)),
            _ => Some(catalog.clone()),
        }
    }

    /// Get the integrity policy.
    ///
    /// Defaults to `Warn` if not configured.
    pub fn integrity_policy(&self) -> IntegrityPolicy {
        self.global
            .integrity
            .as_deref()
            .and_then(IntegrityPolicy::from_name)
            .unwrap_or_default()
    }

    /// Get the output format.
    ///
    /// Defaults to `Text` if not configured.
    pub fn output_format(&self) -> OutputFormat {
        self.global
            .output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .and_then(OutputFormat::from_name)
            .unwrap_or_default()
    }

    /// Get the path the configuration was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Config file candidates in search order.
fn candidate_paths(
    explicit: Option<OsString>,
    xdg_config_home: Option<OsString>,
    home: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = explicit.filter(|p| !p.is_empty()) {
        paths.push(PathBuf::from(path));
    }
    if let Some(xdg) = xdg_config_home.filter(|p| !p.is_empty()) {
        paths.push(PathBuf::from(xdg).join("najia/config.toml"));
    }
    if let Some(home) = home {
        paths.push(home.join(".najia/config.toml"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_when_nothing_configured() {
        let config = Config::default();
        assert!(config.catalog_path().is_none());
        assert_eq!(config.integrity_policy(), IntegrityPolicy::Warn);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"
            integrity = "strict"

            [output]
            format = "json"
            "#,
        );

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.integrity_policy(), IntegrityPolicy::Strict);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn relative_catalog_resolved_against_config_dir() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), r#"catalog = "data/hexagrams.json""#);

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.catalog_path(),
            Some(temp.path().join("data/hexagrams.json"))
        );
    }

    #[test]
    fn absolute_catalog_kept() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), r#"catalog = "/srv/hexagrams.json""#);

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.catalog_path(),
            Some(PathBuf::from("/srv/hexagrams.json"))
        );
    }

    #[test]
    fn invalid_value_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_config(temp.path(), r#"integrity = "sometimes""#);

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            temp.path(),
            r#"
            integrity = "warn"
            unknown_field = true
            "#,
        );

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let err = Config::load_from(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }

    #[test]
    fn search_order() {
        let paths = candidate_paths(
            Some(OsString::from("/etc/najia.toml")),
            Some(OsString::from("/xdg")),
            Some(PathBuf::from("/home/user")),
        );
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/etc/najia.toml"),
                PathBuf::from("/xdg/najia/config.toml"),
                PathBuf::from("/home/user/.najia/config.toml"),
            ]
        );
    }

    #[test]
    fn empty_env_values_skipped() {
        let paths = candidate_paths(Some(OsString::new()), Some(OsString::new()), None);
        assert!(paths.is_empty());
    }
}
