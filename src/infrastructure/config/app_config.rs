//! Application configuration.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_NAME: &str = "rationdesk";
const APP_QUALIFIER: &str = "io";
const APP_ORGANIZATION: &str = "rationdesk";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Configuration load failure.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration from file, environment, and CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the portal backend API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Whether login persists the session to the system keyring.
    #[serde(default = "default_true")]
    pub persist_session: bool,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            log_level: LogLevel::Info,
            persist_session: true,
            log_path: None,
        }
    }
}

use super::args::CliArgs;

impl AppConfig {
    /// Loads configuration from the given path, or the default location
    /// when none is given. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or
    /// parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(api_url) = &args.api_url {
            self.api_base_url = api_url.trim_end_matches('/').to_string();
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if args.no_store {
            self.persist_session = false;
        }
    }

    /// Returns the default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("rationdesk.log"))
    }

    /// Returns the effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
            api_base_url = "https://ration.example.gov/api"
            log_level = "debug"
            persist_session = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.api_base_url, "https://ration.example.gov/api");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!config.persist_session);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.persist_session);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8080/api");
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api_base_url = \"http://10.0.0.5/api\"").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(config.api_base_url, "http://10.0.0.5/api");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_merge_with_args_overrides() {
        let mut config = AppConfig::default();
        let args = CliArgs {
            config: None,
            log_path: None,
            log_level: Some(LogLevel::Trace),
            api_url: Some("http://override/api/".to_string()),
            no_store: true,
        };

        config.merge_with_args(&args);

        assert_eq!(config.api_base_url, "http://override/api");
        assert_eq!(config.log_level, LogLevel::Trace);
        assert!(!config.persist_session);
    }
}
