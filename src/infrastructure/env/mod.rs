//! Environment file infrastructure
//!
//! `.env` handling:
//! - Process environment seeding from a fixed path or by upward search
//! - API key retrieval as an explicit return value

pub mod loader;

pub use loader::{EnvLoader, ELECTRICITY_MAPS_API_KEY};
