//! Carbonkit - Configuration and Credential Loading for Carbon-Aware Tooling
//!
//! Carbonkit provides the two pieces of plumbing that carbon-aware training
//! and reporting scripts keep reimplementing: seeding the process environment
//! from a `.env` file to pick up the Electricity Maps API key, and loading a
//! Google service-account key file into a scoped credential bundle.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Configuration and credential models
//! - **Infrastructure Layer** (`infrastructure`): File-backed loaders, logging
//!
//! # Example
//!
//! ```ignore
//! use carbonkit::{ConfigLoader, CredentialsLoader, EnvLoader};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load()?;
//!     let api_key = EnvLoader::electricity_maps_api_key_from(&config.env);
//!     let (credentials, project_id) = CredentialsLoader::load_with(&config.credentials)?;
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, CredentialsConfig, EnvFileConfig, LoggingConfig, ScopedCredentials, ServiceAccountKey,
    CLOUD_PLATFORM_SCOPE,
};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::credentials::{CredentialsError, CredentialsLoader};
pub use infrastructure::env::{EnvLoader, ELECTRICITY_MAPS_API_KEY};
pub use infrastructure::logging::{LogConfig, LogFormat, Logger};
