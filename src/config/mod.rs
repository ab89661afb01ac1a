//! Configuration management for govdash
//!
//! Settings come from an optional YAML file (`~/.govdash/config.yaml` by
//! default). CLI flags and environment variables are layered on top in
//! [`crate::cli::CommandContext`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// GovData CKAN action API
pub const DEFAULT_API_URL: &str = "https://www.govdata.de/ckan/api/3/action";

/// Logical name of the hierarchy resource bundled with the binary
pub const DEFAULT_DEPARTMENTS_FILE: &str = "departments.json";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the CKAN action API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Path (or bundled logical name) of the department hierarchy file
    #[serde(default = "default_departments_file")]
    pub departments_file: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format (pretty, table, json, html)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_departments_file() -> String {
    DEFAULT_DEPARTMENTS_FILE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            departments_file: default_departments_file(),
            timeout_secs: default_timeout_secs(),
            preferences: Preferences::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".govdash").join("config.yaml"))
    }

    /// Resolve the config path, preferring an explicit override.
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path or the default location.
    ///
    /// A missing default file yields the built-in defaults, while a missing
    /// explicitly requested file is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(Path::new(p)),
            None => {
                let default_path = Self::default_path()?;
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    log::debug!(
                        "No config file at {}, using defaults",
                        default_path.display()
                    );
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        log::debug!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    /// Apply runtime overrides (CLI flags or environment variables).
    pub fn with_overrides(mut self, api_url: Option<&str>, departments_file: Option<&str>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url.to_string();
        }
        if let Some(file) = departments_file {
            self.departments_file = file.to_string();
        }
        self
    }

    /// Validate the settings needed to reach the catalog API
    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "API URL must start with http:// or https://, got '{}'",
                self.api_url
            ))
            .into());
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be greater than 0".to_string()).into());
        }
        if self.departments_file.trim().is_empty() {
            return Err(ConfigError::Invalid("departments_file must not be empty".to_string()).into());
        }
        Ok(())
    }

    /// HTTP request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.departments_file, "departments.json");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.preferences.format.is_none());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_url: http://localhost:5000/api/3/action\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.api_url, "http://localhost:5000/api/3/action");
        assert_eq!(config.departments_file, DEFAULT_DEPARTMENTS_FILE);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "api_url: https://example.org/api\ndepartments_file: /etc/govdash/departments.json\ntimeout_secs: 5\npreferences:\n  format: json\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.departments_file, "/etc/govdash/departments.json");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.preferences.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_load_explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let err = Config::load_at(path.to_str()).unwrap_err();

        assert!(matches!(err, Error::Config(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_malformed_yaml_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_url: [unclosed").unwrap();

        let err = Config::load_from(&path).unwrap_err();

        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let config = Config::default()
            .with_overrides(Some("http://localhost:1234"), Some("custom.json"));

        assert_eq!(config.api_url, "http://localhost:1234");
        assert_eq!(config.departments_file, "custom.json");
    }

    #[test]
    fn test_overrides_none_keep_values() {
        let config = Config::default().with_overrides(None, None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let config = Config::default().with_overrides(Some("ftp://example.org"), None);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ftp://example.org"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Config::default().validate().is_ok());
    }
}
