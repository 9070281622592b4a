//! # ytstate CLI Entry Point
//!
//! The main entry point for the ytstate command-line tool, which moves a
//! YouTrack issue to a new workflow state.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};
use ytstate_cli::cli::{Cli, handle_cli};
use ytstate_cli::consts::{ENV_LOG_FILTER, EXIT_FAILURE_CODE};

fn main() -> ExitCode {
  // Parse CLI arguments; help and version requests are the only successful
  // early exits
  let cmd = match Cli::try_parse() {
    Ok(cmd) => cmd,
    Err(err) => {
      err.print().ok();
      return if err.use_stderr() {
        ExitCode::from(EXIT_FAILURE_CODE)
      } else {
        ExitCode::SUCCESS
      };
    }
  };

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  // Logs go to stderr so stdout only carries the final outcome
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(
      EnvFilter::builder()
        .with_env_var(ENV_LOG_FILTER)
        .from_env_lossy()
        .add_directive(level.into()),
    )
    .init();

  debug!("Tracing initialized with level: {}", level);

  handle_cli(cmd)
}
