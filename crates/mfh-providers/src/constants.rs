//! Provider constants

/// Default Redis connection string
pub const REDIS_DEFAULT_URI: &str = "redis://127.0.0.1:6379";

/// Default request timeout for the HTTP store, in seconds
pub const HTTP_STORE_DEFAULT_TIMEOUT_SECS: u64 = 10;
