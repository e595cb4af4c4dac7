//! Configuration types, one file per section

pub mod app;
pub mod cache;
pub mod kv;
pub mod logging;
pub mod server;

pub use app::AppConfig;
pub use cache::CacheConfig;
pub use kv::KvConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
