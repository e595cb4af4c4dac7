//! Key-value store configuration types

use serde::{Deserialize, Serialize};

/// Key-value store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KvConfig {
    /// Store provider name ("memory", "redis", "http")
    pub provider: String,

    /// Connection URI or namespace endpoint (provider-dependent)
    pub uri: Option<String>,

    /// Request timeout in seconds for network-backed stores
    pub timeout_secs: u64,
}

impl Default for KvConfig {
    fn default() -> Self {
        Self {
            provider: "memory".to_string(),
            uri: None,
            timeout_secs: 10,
        }
    }
}
