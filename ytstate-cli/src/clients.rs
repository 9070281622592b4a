//! # Client Creation
//!
//! Builds the YouTrack client and the runtime that drives it from resolved
//! settings.

use anyhow::{Context, Result};
use tokio::runtime::{Builder, Runtime};
use ytstate_core::Settings;
use ytstate_youtrack::{ClientOptions, YouTrackClient, create_youtrack_client};

/// Creates an authenticated YouTrack client from resolved settings
pub fn create_youtrack_client_from_settings(settings: &Settings) -> Result<YouTrackClient> {
  let options = ClientOptions {
    insecure_skip_verify: settings.insecure_skip_verify,
    timeout: settings.timeout,
  };

  create_youtrack_client(&settings.host, &settings.token, &options).context("Failed to create YouTrack client")
}

/// Creates a single-threaded tokio runtime and an authenticated YouTrack
/// client.
///
/// The two requests of a transition run strictly one after the other, so a
/// current-thread runtime is all the CLI needs.
pub fn create_youtrack_runtime_and_client(settings: &Settings) -> Result<(Runtime, YouTrackClient)> {
  let rt = Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")?;
  let client = create_youtrack_client_from_settings(settings)?;
  Ok((rt, client))
}
