//! Configuration management for complaintboard.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::complaint::{Priority, DEFAULT_SUBMITTER};
use crate::error::{Error, Result};
use crate::storage::DOWNLOAD_FILE_NAME;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "complaintboard";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "COMPLAINTBOARD_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `COMPLAINTBOARD_`, sections split by `__`)
/// 2. TOML config file at `~/.config/complaintboard/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the board is loaded from.
    pub source: SourceConfig,
    /// Where saved boards are written.
    pub output: OutputConfig,
    /// Defaults for newly filed complaints.
    pub defaults: DefaultsConfig,
}

/// Board source configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Local board file.
    /// Defaults to `~/.local/share/complaintboard/complaints.json`
    pub path: Option<PathBuf>,
    /// URL of a published board. Takes precedence over `path`.
    pub url: Option<String>,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory that receives `complaints.json` after every change.
    /// Defaults to the user's download directory.
    pub dir: Option<PathBuf>,
}

/// Defaults applied when filing a complaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Submitter name used when none is given.
    pub submitted_by: String,
    /// Priority used when none is given.
    pub priority: Priority,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: None, // Resolved to the data directory at runtime
            url: None,
            timeout_secs: 10,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            submitted_by: DEFAULT_SUBMITTER.to_string(),
            priority: Priority::Low,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.source.url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(Error::config_validation(format!(
                    "source.url must be an http(s) URL, got: {url}"
                )));
            }
        }

        if self.source.timeout_secs == 0 {
            return Err(Error::config_validation(
                "source.timeout_secs must be greater than 0",
            ));
        }

        if self.defaults.submitted_by.trim().is_empty() {
            return Err(Error::config_validation(
                "defaults.submitted_by must not be empty",
            ));
        }

        Ok(())
    }

    /// Get the board file path, resolving defaults if not set.
    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        self.source
            .path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DOWNLOAD_FILE_NAME))
    }

    /// Get the output directory, resolving defaults if not set.
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the HTTP timeout as a Duration.
    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.source.path.is_none());
        assert!(config.source.url.is_none());
        assert_eq!(config.source.timeout_secs, 10);
        assert!(config.output.dir.is_none());
        assert_eq!(config.defaults.submitted_by, "Wife");
        assert_eq!(config.defaults.priority, Priority::Low);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_url() {
        let mut config = Config::default();
        config.source.url = Some("ftp://example.org/complaints.json".to_string());

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("source.url"));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.source.timeout_secs = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("timeout_secs"));
    }

    #[test]
    fn test_validate_blank_submitter() {
        let mut config = Config::default();
        config.defaults.submitted_by = "   ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("submitted_by"));
    }

    #[test]
    fn test_source_path_default() {
        let path = Config::default().source_path();
        assert!(path.to_string_lossy().contains("complaintboard"));
        assert!(path.to_string_lossy().ends_with("complaints.json"));
    }

    #[test]
    fn test_source_path_custom() {
        let mut config = Config::default();
        config.source.path = Some(PathBuf::from("/srv/board/complaints.json"));
        assert_eq!(config.source_path(), PathBuf::from("/srv/board/complaints.json"));
    }

    #[test]
    fn test_output_dir_custom() {
        let mut config = Config::default();
        config.output.dir = Some(PathBuf::from("/tmp/downloads"));
        assert_eq!(config.output_dir(), PathBuf::from("/tmp/downloads"));
    }

    #[test]
    fn test_fetch_timeout() {
        assert_eq!(Config::default().fetch_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("complaintboard"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert_eq!(result.unwrap(), Config::default());
    }

    #[test]
    fn test_load_toml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[source]
url = "https://example.org/Complaint_Board/complaints.json"

[defaults]
submitted_by = "Husband"
priority = "medium"
"#,
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(
            config.source.url.as_deref(),
            Some("https://example.org/Complaint_Board/complaints.json")
        );
        assert_eq!(config.defaults.submitted_by, "Husband");
        assert_eq!(config.defaults.priority, Priority::Medium);
        assert_eq!(config.source.timeout_secs, 10);
    }

    #[test]
    fn test_load_invalid_toml_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\npriority = \"urgent\"\n").unwrap();

        assert!(Config::load_from(Some(path)).is_err());
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("timeout_secs"));
        assert!(json.contains("submitted_by"));
    }
}
