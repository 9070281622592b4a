//! Core constants shared across ytstate components.

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

/// Environment variable overriding the YouTrack host
pub const ENV_YOUTRACK_HOST: &str = "YOUTRACK_HOST";

/// Environment variable overriding the YouTrack permanent token
pub const ENV_YOUTRACK_TOKEN: &str = "YOUTRACK_TOKEN";

/// Environment variable overriding the YouTrack project key
pub const ENV_YOUTRACK_PROJECT: &str = "YOUTRACK_PROJECT";

/// Request timeout in seconds when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
