//! Port definitions implemented outside the domain layer

pub mod kv_store;

pub use kv_store::KvStore;
