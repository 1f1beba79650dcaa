use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::credentials::CLOUD_PLATFORM_SCOPE;

/// Main configuration structure for Carbonkit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Environment file configuration
    #[serde(default)]
    pub env: EnvFileConfig,

    /// Service-account credential configuration
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Environment file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EnvFileConfig {
    /// Explicit path to a `.env` file
    ///
    /// When unset, the nearest `.env` file is discovered by searching upward
    /// from the current directory (if `search` is enabled).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Search parent directories for a `.env` file when no path is set
    #[serde(default = "default_search")]
    pub search: bool,
}

const fn default_search() -> bool {
    true
}

impl Default for EnvFileConfig {
    fn default() -> Self {
        Self {
            path: None,
            search: default_search(),
        }
    }
}

/// Service-account credential configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CredentialsConfig {
    /// Path to the service-account key file
    #[serde(default = "default_key_path")]
    pub key_path: String,

    /// OAuth scopes requested for the credential
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,
}

fn default_key_path() -> String {
    "../key/service-account.json".to_string()
}

fn default_scopes() -> Vec<String> {
    vec![CLOUD_PLATFORM_SCOPE.to_string()]
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            key_path: default_key_path(),
            scopes: default_scopes(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
