//! Remote URL resolver tests
//!
//! Exercises the cache window, the fallback paths, and the retry-on-failure
//! behavior with scripted store doubles.

use async_trait::async_trait;
use mfh_application::RemoteUrlResolver;
use mfh_domain::error::{Error, Result};
use mfh_domain::manifest::RemoteDefinition;
use mfh_domain::ports::KvStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Store double that counts lookups and answers from a fixed script
struct ScriptedStore {
    value: Option<String>,
    fail: bool,
    lookups: AtomicUsize,
}

impl ScriptedStore {
    fn returning(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            fail: false,
            lookups: AtomicUsize::new(0),
        }
    }

    fn empty() -> Self {
        Self {
            value: None,
            fail: false,
            lookups: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            value: None,
            fail: true,
            lookups: AtomicUsize::new(0),
        }
    }

    fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KvStore for ScriptedStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::KvStore {
                message: "store unavailable".to_string(),
                source: None,
            });
        }
        Ok(self.value.clone())
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

fn remote1() -> RemoteDefinition {
    RemoteDefinition::default()
}

fn resolver_with(store: Arc<ScriptedStore>, ttl: Duration) -> RemoteUrlResolver {
    RemoteUrlResolver::new(store, ttl, vec![remote1()])
}

#[tokio::test]
async fn test_resolves_url_from_store() {
    let store = Arc::new(ScriptedStore::returning("https://cdn.example/remoteEntry.js"));
    let resolver = resolver_with(store.clone(), Duration::from_secs(300));

    let url = resolver
        .resolve("remote1")
        .await
        .expect("should know remote1");
    assert_eq!(url, "https://cdn.example/remoteEntry.js");
    assert_eq!(store.lookup_count(), 1);
}

#[tokio::test]
async fn test_second_resolve_within_window_hits_cache() {
    let store = Arc::new(ScriptedStore::returning("https://cdn.example/remoteEntry.js"));
    let resolver = resolver_with(store.clone(), Duration::from_secs(300));

    let first = resolver.resolve("remote1").await.expect("known remote");
    let second = resolver.resolve("remote1").await.expect("known remote");

    assert_eq!(first, second);
    assert_eq!(
        store.lookup_count(),
        1,
        "second resolve inside the window should not hit the store"
    );
}

#[tokio::test]
async fn test_expired_window_triggers_refetch() {
    let store = Arc::new(ScriptedStore::returning("https://cdn.example/remoteEntry.js"));
    let resolver = resolver_with(store.clone(), Duration::from_millis(1));

    resolver.resolve("remote1").await.expect("known remote");
    tokio::time::sleep(Duration::from_millis(10)).await;
    resolver.resolve("remote1").await.expect("known remote");

    assert_eq!(
        store.lookup_count(),
        2,
        "resolve past the window should re-fetch"
    );
}

#[tokio::test]
async fn test_missing_key_falls_back_and_retries() {
    let store = Arc::new(ScriptedStore::empty());
    let resolver = resolver_with(store.clone(), Duration::from_secs(300));

    let url = resolver.resolve("remote1").await.expect("known remote");
    assert_eq!(url, remote1().fallback_url);

    // A fallback never freshens the window, so the store is consulted again.
    resolver.resolve("remote1").await.expect("known remote");
    assert_eq!(store.lookup_count(), 2);
}

#[tokio::test]
async fn test_store_error_falls_back() {
    let store = Arc::new(ScriptedStore::failing());
    let resolver = resolver_with(store.clone(), Duration::from_secs(300));

    let url = resolver.resolve("remote1").await.expect("known remote");
    assert_eq!(url, remote1().fallback_url, "errors should degrade to the fallback");
}

#[tokio::test]
async fn test_unknown_remote_resolves_to_none() {
    let store = Arc::new(ScriptedStore::returning("https://cdn.example/remoteEntry.js"));
    let resolver = resolver_with(store, Duration::from_secs(300));

    assert!(resolver.resolve("remote9").await.is_none());
}

#[tokio::test]
async fn test_resolve_all_yields_placeholder_pairs() {
    let store = Arc::new(ScriptedStore::returning("https://cdn.example/remoteEntry.js"));
    let resolver = resolver_with(store, Duration::from_secs(300));

    let substitutions = resolver.resolve_all().await;
    assert_eq!(substitutions.len(), 1);
    assert_eq!(substitutions[0].0, remote1().placeholder);
    assert_eq!(substitutions[0].1, "https://cdn.example/remoteEntry.js");
}

#[test]
fn test_unknown_provider_name_is_rejected() {
    let config = mfh_application::KvProviderConfig::new("does-not-exist");
    let err = match mfh_application::resolve_kv_provider(&config) {
        Ok(_) => panic!("unknown provider should be rejected"),
        Err(err) => err,
    };
    assert!(err.contains("does-not-exist"), "unexpected error: {err}");
}
