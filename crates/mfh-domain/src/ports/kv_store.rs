//! Key-value store port
//!
//! The configuration store holding remote entry URLs. It is written by the
//! remote deployment pipeline out of band; this system only ever reads it.

use crate::error::Result;
use async_trait::async_trait;

/// Read-only key-value store holding remote entry URLs
///
/// ## Thread Safety
///
/// All implementations must be `Send + Sync` for thread-safe sharing
/// across async contexts.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Look up a value, returning `None` when the key is absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Provider name for logging and diagnostics
    fn provider_name(&self) -> &str;
}
