//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "MFH";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "mfh.toml";

/// Environment variable consulted for log filter directives
pub const LOG_ENV_VAR: &str = "MFH_LOG";

/// Default HTTP bind address
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port (the port the host shell was served from in development)
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default directory served as the static host-shell origin
pub const DEFAULT_SITE_DIR: &str = "site";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
