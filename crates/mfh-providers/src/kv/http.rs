//! HTTP KV store provider
//!
//! Reads keys from a REST namespace endpoint (`GET {base_url}/{key}`), the
//! shape exposed by edge-platform KV namespaces. A 200 response yields the
//! body as the value; 404 maps to an absent key.

use crate::constants::HTTP_STORE_DEFAULT_TIMEOUT_SECS;
use async_trait::async_trait;
use mfh_application::registry::{KV_PROVIDERS, KvProviderConfig, KvProviderEntry};
use mfh_domain::error::{Error, Result};
use mfh_domain::ports::KvStore;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Key-value store backed by a REST namespace endpoint
#[derive(Debug, Clone)]
pub struct HttpKvStore {
    client: Client,
    base_url: String,
}

impl HttpKvStore {
    /// Create a store reading from the given namespace base URL
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mfh/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Network {
                message: format!("Failed to build HTTP client: {}", e),
                source: Some(Box::new(e)),
            })?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl KvStore for HttpKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let url = format!("{}/{}", self.base_url, key);
        debug!(url = %url, "looking up key via http store");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network {
                message: format!("KV request to {} failed: {}", url, e),
                source: Some(Box::new(e)),
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body = response.text().await.map_err(|e| Error::Network {
                    message: format!("Failed to read KV response from {}: {}", url, e),
                    source: Some(Box::new(e)),
                })?;
                Ok(Some(body))
            }
            status => Err(Error::Network {
                message: format!("KV request to {} returned {}", url, status),
                source: None,
            }),
        }
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

/// Factory function for creating HTTP store instances.
fn http_kv_factory(config: &KvProviderConfig) -> std::result::Result<Arc<dyn KvStore>, String> {
    let uri = config
        .uri
        .clone()
        .ok_or_else(|| "The http KV provider requires a uri".to_string())?;

    let timeout = Duration::from_secs(
        config
            .timeout_secs
            .unwrap_or(HTTP_STORE_DEFAULT_TIMEOUT_SECS),
    );

    let store = HttpKvStore::new(uri, timeout)
        .map_err(|e| format!("Failed to create http provider: {e}"))?;

    Ok(Arc::new(store))
}

#[linkme::distributed_slice(KV_PROVIDERS)]
static HTTP_PROVIDER: KvProviderEntry = KvProviderEntry {
    name: "http",
    description: "REST namespace lookup store",
    factory: http_kv_factory,
};
