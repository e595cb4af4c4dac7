//! KV Store Provider Registry
//!
//! Auto-registration system for key-value store providers. Providers register
//! themselves via `linkme::distributed_slice` and are discovered at runtime
//! by name.

use std::collections::HashMap;
use std::sync::Arc;

use mfh_domain::ports::KvStore;

/// Configuration for KV store provider creation
///
/// Contains all configuration options a store provider might need.
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct KvProviderConfig {
    /// Provider name (e.g., "memory", "redis", "http")
    pub provider: String,
    /// Connection URI or namespace endpoint
    pub uri: Option<String>,
    /// Request timeout in seconds (for network-backed stores)
    pub timeout_secs: Option<u64>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl KvProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for KV store providers
///
/// Each store implementation registers itself with this entry using
/// `linkme::distributed_slice`. The entry contains metadata and a factory
/// function to create provider instances.
pub struct KvProviderEntry {
    /// Unique provider name (e.g., "memory", "redis", "http")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&KvProviderConfig) -> Result<Arc<dyn KvStore>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static KV_PROVIDERS: [KvProviderEntry] = [..];

/// Resolve a KV store provider by name from the registry
///
/// Searches the registry for a provider matching the configured name
/// and creates an instance using the provider's factory function.
///
/// # Arguments
/// * `config` - Configuration containing provider name and settings
///
/// # Returns
/// * `Ok(Arc<dyn KvStore>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_kv_provider(config: &KvProviderConfig) -> Result<Arc<dyn KvStore>, String> {
    for entry in KV_PROVIDERS {
        if entry.name == config.provider {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = KV_PROVIDERS.iter().map(|entry| entry.name).collect();
    Err(format!(
        "Unknown KV store provider '{}'. Available providers: {}",
        config.provider,
        available.join(", ")
    ))
}

/// List registered providers as (name, description) pairs
pub fn list_kv_providers() -> Vec<(&'static str, &'static str)> {
    KV_PROVIDERS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
