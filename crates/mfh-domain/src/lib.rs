//! Domain layer for the micro-frontend host edge
//!
//! Core contracts and types shared by every other layer:
//!
//! - [`error`]: the workspace-wide error type and `Result` alias
//! - [`manifest`]: the federation topology as declarative value objects
//! - [`ports`]: interfaces implemented outside the domain (the key-value
//!   store the remote deployment pipeline writes to)

pub mod constants;
pub mod error;
pub mod manifest;
pub mod ports;

pub use error::{Error, Result};
pub use manifest::{FederationManifest, RemoteDefinition, SharedDependency};
