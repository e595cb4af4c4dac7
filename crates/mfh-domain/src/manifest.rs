//! Federation manifest value objects
//!
//! Declarative description of the federation topology: the host, the remote
//! modules it consumes at runtime, and the dependencies shared between them.
//! The manifest is loaded once at startup and validated; beyond the rewrite
//! rules it yields for the edge, it is never consulted as runtime logic.

use crate::constants::{
    DEFAULT_HOST_NAME, DEFAULT_REMOTE_FALLBACK_URL, DEFAULT_REMOTE_LOOKUP_KEY,
    DEFAULT_REMOTE_NAME, REMOTE_URL_PLACEHOLDER, SHARED_UI_RUNTIME_VERSION,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A remote module consumed by the host at runtime
///
/// Maps a remote's name to the placeholder token embedded in the host build
/// output, the store key its current entry URL is published under, and the
/// entry URL used when the store cannot answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDefinition {
    /// Remote module name (the federation scope, e.g. "remote1")
    pub name: String,

    /// Literal token substituted in served HTML/JS bodies
    pub placeholder: String,

    /// Key under which the remote's entry URL is published in the store
    pub lookup_key: String,

    /// Entry URL used when the store is unreachable or the key is absent
    pub fallback_url: String,
}

impl RemoteDefinition {
    /// Create a new remote definition
    pub fn new(
        name: impl Into<String>,
        placeholder: impl Into<String>,
        lookup_key: impl Into<String>,
        fallback_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            placeholder: placeholder.into(),
            lookup_key: lookup_key.into(),
            fallback_url: fallback_url.into(),
        }
    }
}

impl Default for RemoteDefinition {
    fn default() -> Self {
        Self::new(
            DEFAULT_REMOTE_NAME,
            REMOTE_URL_PLACEHOLDER,
            DEFAULT_REMOTE_LOOKUP_KEY,
            DEFAULT_REMOTE_FALLBACK_URL,
        )
    }
}

/// A dependency deduplicated between the host and its remotes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedDependency {
    /// Package name as resolved by the module loader
    pub name: String,

    /// Whether exactly one copy may exist across host and remotes
    pub singleton: bool,

    /// Version range the shared copy must satisfy
    pub required_version: Option<String>,
}

impl SharedDependency {
    /// Create a shared singleton dependency with a required version
    pub fn singleton(name: impl Into<String>, required_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            singleton: true,
            required_version: Some(required_version.into()),
        }
    }
}

/// The federation topology for one host deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederationManifest {
    /// Host application name
    pub name: String,

    /// Remote modules the host loads at runtime
    pub remotes: Vec<RemoteDefinition>,

    /// Dependencies shared between host and remotes
    pub shared: Vec<SharedDependency>,
}

impl Default for FederationManifest {
    fn default() -> Self {
        Self {
            name: DEFAULT_HOST_NAME.to_string(),
            remotes: vec![RemoteDefinition::default()],
            shared: vec![
                SharedDependency::singleton("react", SHARED_UI_RUNTIME_VERSION),
                SharedDependency::singleton("react-dom", SHARED_UI_RUNTIME_VERSION),
            ],
        }
    }
}

impl FederationManifest {
    /// Validate the manifest
    ///
    /// Invariants: non-empty host name, unique remote names, unique non-empty
    /// placeholder tokens, non-empty lookup keys and fallback URLs, and a
    /// required version on every singleton shared dependency.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("federation host name cannot be empty"));
        }

        let mut names = HashSet::new();
        let mut placeholders = HashSet::new();
        for remote in &self.remotes {
            if remote.name.trim().is_empty() {
                return Err(invalid("remote name cannot be empty"));
            }
            if !names.insert(remote.name.as_str()) {
                return Err(invalid(format!("duplicate remote name '{}'", remote.name)));
            }
            if remote.placeholder.trim().is_empty() {
                return Err(invalid(format!(
                    "remote '{}' has an empty placeholder token",
                    remote.name
                )));
            }
            if !placeholders.insert(remote.placeholder.as_str()) {
                return Err(invalid(format!(
                    "placeholder '{}' is used by more than one remote",
                    remote.placeholder
                )));
            }
            if remote.lookup_key.trim().is_empty() {
                return Err(invalid(format!(
                    "remote '{}' has an empty lookup key",
                    remote.name
                )));
            }
            if remote.fallback_url.trim().is_empty() {
                return Err(invalid(format!(
                    "remote '{}' has an empty fallback URL",
                    remote.name
                )));
            }
        }

        for dep in &self.shared {
            if dep.name.trim().is_empty() {
                return Err(invalid("shared dependency name cannot be empty"));
            }
            if dep.singleton && dep.required_version.is_none() {
                return Err(invalid(format!(
                    "singleton shared dependency '{}' must declare a required version",
                    dep.name
                )));
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidArgument {
        message: message.into(),
    }
}
