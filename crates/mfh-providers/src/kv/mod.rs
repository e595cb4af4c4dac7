//! Key-value store provider implementations
//!
//! | Provider | Backend | Typical use |
//! |----------|---------|-------------|
//! | `memory` | process-local map | development and tests |
//! | `redis`  | Redis | deployments sharing a store with the remote pipeline |
//! | `http`   | REST namespace endpoint | edge-platform KV namespaces |

pub mod http;
pub mod memory;
pub mod redis;

pub use http::HttpKvStore;
pub use memory::MemoryKvStore;
pub use redis::RedisKvStore;
