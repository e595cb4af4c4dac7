//! Redis KV store provider
//!
//! Reads remote entry URLs from a Redis instance shared with the remote
//! deployment pipeline. Uses multiplexed connections for connection reuse.
//!
//! ## Example
//!
//! ```ignore
//! use mfh_providers::kv::RedisKvStore;
//!
//! let store = RedisKvStore::new("redis://localhost:6379")?;
//! // Or with host/port
//! let store = RedisKvStore::with_host_port("localhost", 6379)?;
//! ```

use crate::constants::REDIS_DEFAULT_URI;
use async_trait::async_trait;
use mfh_application::registry::{KV_PROVIDERS, KvProviderConfig, KvProviderEntry};
use mfh_domain::error::{Error, Result};
use mfh_domain::ports::KvStore;
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use std::sync::Arc;

/// Redis-backed key-value store
#[derive(Clone)]
pub struct RedisKvStore {
    client: Client,
}

impl RedisKvStore {
    /// Create a new Redis store with a connection string
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| Error::KvStore {
            message: format!("Failed to create Redis client: {}", e),
            source: Some(Box::new(e)),
        })?;

        Ok(Self { client })
    }

    /// Create a new Redis store with host and port
    ///
    /// # Arguments
    ///
    /// * `host` - Redis server hostname
    /// * `port` - Redis server port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{}:{}", host, port))
    }

    /// Get a connection from the pool
    async fn get_connection(&self) -> Result<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::KvStore {
                message: format!("Failed to get Redis connection: {}", e),
                source: Some(Box::new(e)),
            })
    }
}

#[async_trait]
impl KvStore for RedisKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.get_connection().await?;

        conn.get::<_, Option<String>>(key)
            .await
            .map_err(|e| Error::KvStore {
                message: format!("Redis GET failed: {}", e),
                source: Some(Box::new(e)),
            })
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisKvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisKvStore").finish_non_exhaustive()
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Factory function for creating Redis store instances.
fn redis_kv_factory(config: &KvProviderConfig) -> std::result::Result<Arc<dyn KvStore>, String> {
    let uri = config
        .uri
        .clone()
        .unwrap_or_else(|| REDIS_DEFAULT_URI.to_string());

    let store =
        RedisKvStore::new(&uri).map_err(|e| format!("Failed to create Redis provider: {e}"))?;

    Ok(Arc::new(store))
}

#[linkme::distributed_slice(KV_PROVIDERS)]
static REDIS_PROVIDER: KvProviderEntry = KvProviderEntry {
    name: "redis",
    description: "Redis distributed store",
    factory: redis_kv_factory,
};
