//! Infrastructure layer for the micro-frontend host edge
//!
//! Cross-cutting concerns: configuration loading and validation, and
//! structured logging initialization.

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, CacheConfig, ConfigLoader, KvConfig, LoggingConfig, ServerConfig};
pub use logging::init_logging;
