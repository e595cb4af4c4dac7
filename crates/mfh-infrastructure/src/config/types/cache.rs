//! Remote URL cache configuration types

use mfh_domain::constants::CACHE_TTL_SECS;
use serde::{Deserialize, Serialize};

/// Remote URL cache configuration
///
/// One advisory value per remote is held in process memory; expiry is
/// passive, there is no invalidation push.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a resolved remote URL stays valid, in seconds
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: CACHE_TTL_SECS,
        }
    }
}
