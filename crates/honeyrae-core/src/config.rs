//! Configuration loading and typed config structures for the dispatch service.
//!
//! The canonical configuration lives in `honeyrae-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads the file. Every
//! field has a default, so an empty document is a valid configuration.

use std::path::Path;

use chrono::TimeDelta;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override for the port was not a valid `u16`.
    #[error("invalid port override {value:?}")]
    InvalidPort {
        /// The raw value that failed to parse.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
///
/// Mirrors the structure of `honeyrae-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Trailing windows used by the time-relative reports.
    #[serde(default)]
    pub reports: ReportWindows,

    /// Initial state.
    #[serde(default)]
    pub seed: SeedSection,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSection,
}

impl ServiceConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for the listener:
    /// - `HONEYRAE_HOST` overrides `server.host`
    /// - `HONEYRAE_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidPort`] if the port override is malformed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string, then apply env overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::parse_without_env(yaml)?;
        config.server.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string, ignoring the environment.
    ///
    /// An empty or whitespace-only document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse_without_env(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Address to bind (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerSection {
    /// Override host and port from `HONEYRAE_HOST` / `HONEYRAE_PORT`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `HONEYRAE_PORT` is set but
    /// is not a valid port number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("HONEYRAE_HOST") {
            self.host = val;
        }
        if let Ok(val) = std::env::var("HONEYRAE_PORT") {
            self.port = val
                .parse()
                .map_err(|_parse_error| ConfigError::InvalidPort { value: val.clone() })?;
        }
        Ok(())
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Trailing windows for the time-relative reports.
///
/// Both windows are inclusive: a ticket completed exactly `N` days
/// before evaluation time still counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReportWindows {
    /// A customer with no completion inside this many days is inactive.
    #[serde(default = "default_inactive_customer_days")]
    pub inactive_customer_days: u32,

    /// Completions inside this many days count toward employee of the month.
    #[serde(default = "default_employee_of_month_days")]
    pub employee_of_month_days: u32,
}

impl ReportWindows {
    /// The inactivity window as a duration.
    pub fn inactivity(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.inactive_customer_days))
    }

    /// The employee-of-the-month window as a duration.
    pub fn employee_of_month(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.employee_of_month_days))
    }
}

impl Default for ReportWindows {
    fn default() -> Self {
        Self {
            inactive_customer_days: default_inactive_customer_days(),
            employee_of_month_days: default_employee_of_month_days(),
        }
    }
}

/// Initial state configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedSection {
    /// Load the built-in fixture (3 customers, 2 employees, 5 tickets).
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for SeedSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingSection {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8088
}

const fn default_inactive_customer_days() -> u32 {
    365
}

const fn default_employee_of_month_days() -> u32 {
    30
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.reports.inactive_customer_days, 365);
        assert_eq!(config.reports.employee_of_month_days, 30);
        assert!(config.seed.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = ServiceConfig::parse_without_env("   \n");
        assert_eq!(config.ok(), Some(ServiceConfig::default()));
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 9090

reports:
  inactive_customer_days: 180
  employee_of_month_days: 7

seed:
  enabled: false

logging:
  level: "debug"
  json: true
"#;

        let config = ServiceConfig::parse_without_env(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.reports.inactivity(), TimeDelta::days(180));
        assert_eq!(config.reports.employee_of_month(), TimeDelta::days(7));
        assert!(!config.seed.enabled);
        assert!(config.logging.json);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let yaml = "reports:\n  employee_of_month_days: 14\n";
        let config = ServiceConfig::parse_without_env(yaml).unwrap();
        assert_eq!(config.reports.employee_of_month_days, 14);
        assert_eq!(config.reports.inactive_customer_days, 365);
        assert_eq!(config.server, ServerSection::default());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = ServiceConfig::parse_without_env("server: [unterminated");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }
}
