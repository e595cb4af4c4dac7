//! Edge server assembly
//!
//! Builds the Rocket application: a static file server over the host-shell
//! site directory with the rewrite fairing attached, configured from the
//! loaded application config.

use crate::rewrite::RewriteFairing;
use mfh_application::RemoteUrlResolver;
use mfh_infrastructure::config::AppConfig;
use rocket::fs::FileServer;
use rocket::{Build, Rocket};
use std::sync::Arc;
use tracing::info;

/// The host edge server
pub struct EdgeServer {
    config: AppConfig,
    resolver: Arc<RemoteUrlResolver>,
}

impl EdgeServer {
    /// Create a new edge server from loaded configuration
    pub fn new(config: AppConfig, resolver: Arc<RemoteUrlResolver>) -> Self {
        Self { config, resolver }
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        rocket::build()
            .mount("/", FileServer::from(&self.config.server.site_dir))
            .attach(RewriteFairing::new(self.resolver.clone()))
    }

    /// Start the edge server
    pub async fn launch(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!(
            "edge server listening on {}:{}",
            self.config.server.host, self.config.server.port
        );

        let figment = rocket::Config::figment()
            .merge(("address", self.config.server.host.clone()))
            .merge(("port", self.config.server.port));

        self.rocket()
            .configure(figment)
            .launch()
            .await
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

        Ok(())
    }
}
