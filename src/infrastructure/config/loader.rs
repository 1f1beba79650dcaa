use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Credentials key path cannot be empty")]
    EmptyKeyPath,

    #[error("Credential scopes cannot be empty")]
    EmptyScopes,

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. carbonkit.yaml (project config, optional)
    /// 3. Environment variables (CARBONKIT_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            // 1. Start with programmatic defaults
            .merge(Serialized::defaults(Config::default()))
            // 2. Merge project config (optional)
            .merge(Yaml::file("carbonkit.yaml"))
            // 3. Merge environment variables (highest priority)
            .merge(Env::prefixed("CARBONKIT_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        // Validate logging config
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        // Validate credentials config
        if config.credentials.key_path.is_empty() {
            return Err(ConfigError::EmptyKeyPath);
        }

        if config.credentials.scopes.is_empty() {
            return Err(ConfigError::EmptyScopes);
        }

        for scope in &config.credentials.scopes {
            if scope.is_empty() {
                return Err(ConfigError::ValidationFailed(
                    "credential scope cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
