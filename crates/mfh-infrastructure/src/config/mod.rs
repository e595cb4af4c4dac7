//! Configuration management
//!
//! Layered configuration in the order defaults, TOML file, environment
//! variables; validated after extraction.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, CacheConfig, KvConfig, LoggingConfig, ServerConfig};
