//! Logging infrastructure
//!
//! Structured logging built on tracing:
//! - Env-filter driven log levels
//! - JSON or pretty stdout output

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::Logger;
