use std::env;
use std::path::Path;

use tracing::debug;

use crate::domain::models::config::EnvFileConfig;

/// Environment variable holding the Electricity Maps API key
pub const ELECTRICITY_MAPS_API_KEY: &str = "ELECTRICITY_MAPS_API_KEY";

/// Environment file loader
///
/// Seeds the process environment from a `.env` file and reads individual
/// variables back as explicit return values. Variables already present in
/// the process environment always win over file contents, which makes
/// repeated loads idempotent.
pub struct EnvLoader;

impl EnvLoader {
    /// Seed the process environment from the `.env` file at `path`.
    ///
    /// A missing or unreadable file is not an error: the variables simply
    /// stay unset and later lookups yield `None`.
    pub fn load_from_path(path: impl AsRef<Path>) {
        let path = path.as_ref();
        match dotenvy::from_path(path) {
            Ok(()) => debug!(path = %path.display(), "environment file loaded"),
            Err(err) => debug!(path = %path.display(), %err, "environment file not loaded"),
        }
    }

    /// Seed the process environment from the nearest `.env` file, searching
    /// upward from the current directory.
    ///
    /// Same missing-file policy as [`Self::load_from_path`]: not finding a
    /// file anywhere on the walk is a no-op.
    pub fn load() {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "environment file loaded"),
            Err(err) => debug!(%err, "no environment file found"),
        }
    }

    /// Seed the process environment as configured.
    ///
    /// An explicit path takes precedence over upward search; with neither
    /// configured, the process environment is left untouched.
    pub fn load_with(config: &EnvFileConfig) {
        if let Some(ref path) = config.path {
            Self::load_from_path(path);
        } else if config.search {
            Self::load();
        }
    }

    /// Read a single environment variable; absence yields `None`.
    pub fn var(name: &str) -> Option<String> {
        env::var(name).ok()
    }

    /// Load the nearest `.env` file and return the Electricity Maps API key.
    pub fn electricity_maps_api_key() -> Option<String> {
        Self::load();
        Self::var(ELECTRICITY_MAPS_API_KEY)
    }

    /// Seed the environment as configured and return the Electricity Maps
    /// API key.
    pub fn electricity_maps_api_key_from(config: &EnvFileConfig) -> Option<String> {
        Self::load_with(config);
        Self::var(ELECTRICITY_MAPS_API_KEY)
    }
}
