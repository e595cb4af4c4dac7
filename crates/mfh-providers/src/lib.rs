//! Key-value store providers for the micro-frontend host edge
//!
//! Each provider implements the [`mfh_domain::ports::KvStore`] port and
//! registers itself into the provider registry via linkme distributed
//! slices, so the server resolves them by name from configuration.

pub mod constants;
pub mod kv;

pub use kv::{HttpKvStore, MemoryKvStore, RedisKvStore};
