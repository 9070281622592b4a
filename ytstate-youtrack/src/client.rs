//! # YouTrack HTTP Client
//!
//! HTTP client shared by the YouTrack endpoints, handling bearer
//! authentication, TLS settings, timeouts and URL construction.

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use tracing::{debug, warn};
use url::Url;

use crate::consts::USER_AGENT;
use crate::error::YouTrackError;

/// Settings used to build a [`YouTrackClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
  /// Skip TLS certificate verification
  pub insecure_skip_verify: bool,
  /// Per-request timeout
  pub timeout: Duration,
}

impl ClientOptions {
  /// Options with certificate verification enabled and the given timeout
  pub const fn with_timeout(timeout: Duration) -> Self {
    Self {
      insecure_skip_verify: false,
      timeout,
    }
  }
}

/// Represents a YouTrack API client
pub struct YouTrackClient {
  pub(crate) client: Client,
  pub(crate) base_url: Url,
  token: String,
}

impl fmt::Debug for YouTrackClient {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("YouTrackClient")
      .field("base_url", &self.base_url.as_str())
      .field("token", &"<redacted>")
      .finish_non_exhaustive()
  }
}

impl YouTrackClient {
  /// Create a new YouTrack client for the tracker at `base_url`
  pub fn new(base_url: &str, token: &str, options: &ClientOptions) -> Result<Self, YouTrackError> {
    let base_url = parse_base_url(base_url)?;

    if options.insecure_skip_verify {
      warn!("TLS certificate verification is disabled for {}", base_url);
    }

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = Client::builder()
      .user_agent(USER_AGENT)
      .default_headers(headers)
      .timeout(options.timeout)
      .danger_accept_invalid_certs(options.insecure_skip_verify)
      .build()
      .map_err(YouTrackError::Client)?;

    Ok(Self {
      client,
      base_url,
      token: token.to_string(),
    })
  }

  /// The tracker base URL, always ending with `/`
  pub const fn base_url(&self) -> &Url {
    &self.base_url
  }

  /// Resolve `relative` against the tracker base URL
  pub(crate) fn endpoint(&self, relative: &str) -> Result<Url, YouTrackError> {
    self.base_url.join(relative).map_err(|source| YouTrackError::InvalidUrl {
      url: format!("{}{}", self.base_url, relative),
      source,
    })
  }

  /// Attach the bearer token to a request
  pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
    request.header(AUTHORIZATION, format!("Bearer {}", self.token))
  }
}

/// Parse the tracker host and make sure it can be used as a join base.
///
/// Without the trailing slash, joining `api/issues/` onto
/// `https://host/youtrack` would drop the `youtrack` segment.
fn parse_base_url(base_url: &str) -> Result<Url, YouTrackError> {
  let mut normalized = base_url.trim().to_string();
  if !normalized.ends_with('/') {
    normalized.push('/');
  }

  let url = Url::parse(&normalized).map_err(|source| YouTrackError::InvalidUrl {
    url: base_url.to_string(),
    source,
  })?;
  debug!("Using YouTrack base URL {}", url);
  Ok(url)
}

/// Create a YouTrack client from a host and permanent token
pub fn create_youtrack_client(
  base_url: &str,
  token: &str,
  options: &ClientOptions,
) -> Result<YouTrackClient, YouTrackError> {
  YouTrackClient::new(base_url, token, options)
}
