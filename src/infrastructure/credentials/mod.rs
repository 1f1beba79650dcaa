//! Credentials management infrastructure
//!
//! Service-account key handling:
//! - Key file loading and validation
//! - Scope assignment
//! - Project id extraction

pub mod loader;

pub use loader::{CredentialsError, CredentialsLoader};
