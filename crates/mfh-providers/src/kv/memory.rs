//! In-memory KV store provider
//!
//! Process-local map. Serves as the default provider for development (the
//! edge then always answers with fallback URLs until keys are seeded) and as
//! the store double in integration tests.

use async_trait::async_trait;
use mfh_application::registry::{KV_PROVIDERS, KvProviderConfig, KvProviderEntry};
use mfh_domain::error::{Error, Result};
use mfh_domain::ports::KvStore;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory key-value store
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKvStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given entries
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Insert or replace a value
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.into(), value.into());
        }
    }

    /// Remove a key, returning whether it was present
    pub fn remove(&self, key: &str) -> bool {
        match self.entries.write() {
            Ok(mut entries) => entries.remove(key).is_some(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().map_err(|_| Error::Internal {
            message: "kv store lock poisoned".to_string(),
        })?;
        Ok(entries.get(key).cloned())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(KV_PROVIDERS)]
static MEMORY_PROVIDER: KvProviderEntry = KvProviderEntry {
    name: "memory",
    description: "Process-local in-memory store",
    factory: |_config: &KvProviderConfig| Ok(std::sync::Arc::new(MemoryKvStore::new())),
};
