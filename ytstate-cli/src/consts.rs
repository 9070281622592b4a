//! Constants for the ytstate CLI
//!
//! Exit codes and other static values used by the command-line entry point.

/// Exit code for every failure: bad arguments, configuration, lookup or update
pub const EXIT_FAILURE_CODE: u8 = 200;

/// Environment variable read by the tracing filter in addition to `-v`
pub const ENV_LOG_FILTER: &str = "RUST_LOG";
