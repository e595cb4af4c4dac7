//! Application layer for the micro-frontend host edge
//!
//! Holds the one use case this system has — resolving the current entry URL
//! for each federated remote through a short-lived in-process cache — and the
//! registry that wires key-value store providers in at startup.

pub mod registry;
pub mod resolver;

pub use registry::{KvProviderConfig, KvProviderEntry, KV_PROVIDERS, resolve_kv_provider};
pub use resolver::RemoteUrlResolver;
