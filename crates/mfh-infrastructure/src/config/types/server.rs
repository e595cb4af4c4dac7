//! HTTP server configuration types

use crate::constants::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SITE_DIR};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory served as the static host-shell origin
    pub site_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            site_dir: PathBuf::from(DEFAULT_SITE_DIR),
        }
    }
}
