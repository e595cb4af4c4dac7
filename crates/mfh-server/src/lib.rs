//! HTTP edge and host-shell origin for the micro-frontend host
//!
//! Wires the layers together: configuration and logging from
//! mfh-infrastructure, a key-value store provider resolved by name from the
//! registry, the remote URL resolver from mfh-application, and the Rocket
//! server with the placeholder rewrite fairing.

pub mod builder;
pub mod rewrite;

pub use builder::EdgeServer;
pub use rewrite::RewriteFairing;

use anyhow::Context;
use mfh_application::{KvProviderConfig, RemoteUrlResolver, resolve_kv_provider};
use mfh_infrastructure::config::ConfigLoader;
use mfh_infrastructure::logging::init_logging;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Load configuration, assemble the edge server, and run it to completion
pub async fn run(config_path: Option<&Path>, port_override: Option<u16>) -> anyhow::Result<()> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load().context("loading configuration")?;
    if let Some(port) = port_override {
        config.server.port = port;
    }

    init_logging(&config.logging).context("initializing logging")?;

    info!(
        host = %config.federation.name,
        remotes = config.federation.remotes.len(),
        shared = config.federation.shared.len(),
        "federation manifest loaded"
    );

    if !config.server.site_dir.is_dir() {
        anyhow::bail!(
            "site directory {} does not exist",
            config.server.site_dir.display()
        );
    }

    let mut kv_config = KvProviderConfig::new(&config.kv.provider)
        .with_timeout_secs(config.kv.timeout_secs);
    if let Some(uri) = &config.kv.uri {
        kv_config = kv_config.with_uri(uri);
    }
    let store = resolve_kv_provider(&kv_config).map_err(|e| anyhow::anyhow!(e))?;

    let resolver = Arc::new(RemoteUrlResolver::new(
        store.clone(),
        Duration::from_secs(config.cache.ttl_secs),
        config.federation.remotes.clone(),
    ));
    info!(
        provider = store.provider_name(),
        ttl_secs = config.cache.ttl_secs,
        "remote url resolver ready"
    );

    let server = EdgeServer::new(config, resolver);
    server
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .context("running edge server")
}
