//! Domain constants
//!
//! Default federation values for the host deployment. All of them are
//! overridable through configuration; the defaults reproduce the production
//! topology the host shell was built against.

/// Literal marker embedded in the host build output, substituted at the edge
pub const REMOTE_URL_PLACEHOLDER: &str = "__REMOTE_URL_PLACEHOLDER__";

/// Lookup key under which the remote deployment pipeline publishes its entry URL
pub const DEFAULT_REMOTE_LOOKUP_KEY: &str = "remote1_url";

/// Entry URL used when the store is unreachable or the key is absent
pub const DEFAULT_REMOTE_FALLBACK_URL: &str =
    "https://micro-frontend-test-remote.pages.dev/remoteEntry.js";

/// Default remote module name
pub const DEFAULT_REMOTE_NAME: &str = "remote1";

/// Host application name in the federation topology
pub const DEFAULT_HOST_NAME: &str = "host";

/// How long a resolved remote URL stays valid in the in-process cache, in seconds
pub const CACHE_TTL_SECS: u64 = 300;

/// Version range of the UI runtime shared as a singleton between host and remotes
pub const SHARED_UI_RUNTIME_VERSION: &str = "^18.3.1";
