//! KV store provider tests

use mfh_application::registry::{KvProviderConfig, list_kv_providers, resolve_kv_provider};
use mfh_providers::MemoryKvStore;
use mfh_domain::ports::KvStore;

#[tokio::test]
async fn test_memory_store_returns_seeded_value() {
    let store = MemoryKvStore::with_entries([("remote1_url", "https://cdn.example/remoteEntry.js")]);

    let value = store.get("remote1_url").await.expect("get should succeed");
    assert_eq!(value.as_deref(), Some("https://cdn.example/remoteEntry.js"));
}

#[tokio::test]
async fn test_memory_store_absent_key_is_none() {
    let store = MemoryKvStore::new();

    let value = store.get("remote1_url").await.expect("get should succeed");
    assert!(value.is_none(), "unseeded key should be absent");
}

#[tokio::test]
async fn test_memory_store_insert_and_remove() {
    let store = MemoryKvStore::new();
    store.insert("remote1_url", "https://cdn.example/remoteEntry.js");

    let value = store.get("remote1_url").await.expect("get should succeed");
    assert!(value.is_some());

    assert!(store.remove("remote1_url"), "remove should report presence");
    let value = store.get("remote1_url").await.expect("get should succeed");
    assert!(value.is_none());
}

#[test]
fn test_registry_lists_all_providers() {
    let names: Vec<_> = list_kv_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    assert!(names.contains(&"memory"), "memory should be registered");
    assert!(names.contains(&"redis"), "redis should be registered");
    assert!(names.contains(&"http"), "http should be registered");
}

#[tokio::test]
async fn test_registry_resolves_memory_provider() {
    let store = resolve_kv_provider(&KvProviderConfig::new("memory"))
        .expect("memory provider should resolve");
    assert_eq!(store.provider_name(), "memory");

    let value = store.get("anything").await.expect("get should succeed");
    assert!(value.is_none(), "fresh memory store starts empty");
}

#[test]
fn test_http_provider_requires_uri() {
    let err = match resolve_kv_provider(&KvProviderConfig::new("http")) {
        Ok(_) => panic!("http provider without uri should fail"),
        Err(err) => err,
    };
    assert!(err.contains("uri"), "unexpected error: {err}");
}

#[test]
fn test_unknown_provider_lists_alternatives() {
    let err = match resolve_kv_provider(&KvProviderConfig::new("etcd")) {
        Ok(_) => panic!("unknown provider should fail"),
        Err(err) => err,
    };
    assert!(err.contains("memory"), "error should list alternatives: {err}");
}
