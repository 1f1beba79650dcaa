pub mod config;
pub mod credentials;

pub use config::{Config, CredentialsConfig, EnvFileConfig, LoggingConfig};
pub use credentials::{ScopedCredentials, ServiceAccountKey, CLOUD_PLATFORM_SCOPE};
