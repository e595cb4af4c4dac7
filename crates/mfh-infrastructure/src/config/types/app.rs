//! Top-level application configuration

use super::{CacheConfig, KvConfig, LoggingConfig, ServerConfig};
use mfh_domain::manifest::FederationManifest;
use serde::{Deserialize, Serialize};

/// Complete configuration for the host edge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Key-value store settings
    #[serde(default)]
    pub kv: KvConfig,

    /// Remote URL cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Federation topology (host, remotes, shared dependencies)
    #[serde(default)]
    pub federation: FederationManifest,
}
