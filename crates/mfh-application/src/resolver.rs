//! Remote URL resolution
//!
//! Resolves the current entry URL for each federated remote: a short-lived
//! in-process cache sits in front of the external key-value store, and every
//! failure path degrades to the remote's configured fallback URL. Resolution
//! never fails and never blocks a response.

use arc_swap::ArcSwapOption;
use mfh_domain::manifest::RemoteDefinition;
use mfh_domain::ports::KvStore;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// A resolved entry URL together with the moment it was fetched
#[derive(Debug)]
struct CachedUrl {
    url: String,
    fetched_at: Instant,
}

/// Cache slot and rewrite data for one federated remote
struct RemoteSlot {
    definition: RemoteDefinition,
    cached: ArcSwapOption<CachedUrl>,
}

/// Resolves remote entry URLs with a TTL cache in front of the store
///
/// The cache is shared across concurrent requests without a lock; concurrent
/// refreshes are tolerated and the last write wins. The value is advisory
/// and idempotent to recompute, so a lost race costs one extra store read.
/// Expiry is passive: once a value is older than the TTL, the next resolve
/// triggers a re-fetch. Only a successful store read freshens the window —
/// fallbacks are served without it, so the store is retried on the next
/// eligible request.
pub struct RemoteUrlResolver {
    store: Arc<dyn KvStore>,
    ttl: Duration,
    slots: Vec<RemoteSlot>,
}

impl RemoteUrlResolver {
    /// Create a resolver for the given remotes
    pub fn new(
        store: Arc<dyn KvStore>,
        ttl: Duration,
        remotes: impl IntoIterator<Item = RemoteDefinition>,
    ) -> Self {
        let slots = remotes
            .into_iter()
            .map(|definition| RemoteSlot {
                definition,
                cached: ArcSwapOption::empty(),
            })
            .collect();

        Self { store, ttl, slots }
    }

    /// Names of the remotes known to this resolver
    pub fn remote_names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.definition.name.as_str())
    }

    /// Resolve the current entry URL for a single remote by name
    ///
    /// Returns `None` for a remote the manifest does not declare. Store
    /// failures and missing keys degrade to the remote's fallback URL.
    pub async fn resolve(&self, remote_name: &str) -> Option<String> {
        let slot = self
            .slots
            .iter()
            .find(|slot| slot.definition.name == remote_name)?;
        Some(self.resolve_slot(slot).await)
    }

    /// Resolve every remote, returning `(placeholder, url)` pairs
    ///
    /// This is what the edge substitutes into eligible response bodies.
    pub async fn resolve_all(&self) -> Vec<(String, String)> {
        let mut substitutions = Vec::with_capacity(self.slots.len());
        for slot in &self.slots {
            let url = self.resolve_slot(slot).await;
            substitutions.push((slot.definition.placeholder.clone(), url));
        }
        substitutions
    }

    async fn resolve_slot(&self, slot: &RemoteSlot) -> String {
        if let Some(cached) = slot.cached.load_full() {
            if cached.fetched_at.elapsed() <= self.ttl {
                return cached.url.clone();
            }
        }

        match self.store.get(&slot.definition.lookup_key).await {
            Ok(Some(url)) => {
                debug!(
                    remote = %slot.definition.name,
                    key = %slot.definition.lookup_key,
                    url = %url,
                    "refreshed remote entry url from store"
                );
                slot.cached.store(Some(Arc::new(CachedUrl {
                    url: url.clone(),
                    fetched_at: Instant::now(),
                })));
                url
            }
            Ok(None) => {
                warn!(
                    remote = %slot.definition.name,
                    key = %slot.definition.lookup_key,
                    "remote entry url not found in store, using fallback"
                );
                slot.definition.fallback_url.clone()
            }
            Err(e) => {
                error!(
                    remote = %slot.definition.name,
                    key = %slot.definition.lookup_key,
                    error = %e,
                    "store lookup failed, using fallback"
                );
                slot.definition.fallback_url.clone()
            }
        }
    }
}

impl std::fmt::Debug for RemoteUrlResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteUrlResolver")
            .field("provider", &self.store.provider_name())
            .field("ttl", &self.ttl)
            .field("remotes", &self.slots.len())
            .finish()
    }
}
