//! Error type returned by the YouTrack client.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while talking to YouTrack
#[derive(Debug, Error)]
pub enum YouTrackError {
  /// The HTTP client could not be constructed
  #[error("Failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),

  /// The tracker base URL or a derived request URL is malformed
  #[error("Invalid YouTrack URL '{url}': {source}")]
  InvalidUrl {
    url: String,
    #[source]
    source: url::ParseError,
  },

  /// The request never produced an HTTP response
  #[error("Failed to reach YouTrack: {0}")]
  Transport(#[source] reqwest::Error),

  /// The search did not identify exactly one issue
  #[error("Issue not found ({})", describe_lookup(.status, .matches))]
  IssueNotFound {
    /// Status of the search response
    status: StatusCode,
    /// Number of records returned, when the response was decoded
    matches: Option<usize>,
  },

  /// The tracker refused the state update
  #[error("Failed to update issue {issue_id}: HTTP {status}")]
  UpdateRejected { issue_id: String, status: StatusCode },

  /// The response body could not be decoded
  #[error("Failed to parse YouTrack response: {0}")]
  Decode(#[source] reqwest::Error),
}

fn describe_lookup(status: &StatusCode, matches: &Option<usize>) -> String {
  match *matches {
    Some(0) => "search returned no issues".to_string(),
    Some(count) => format!("search matched {count} issues"),
    None => format!("search failed with HTTP {status}"),
  }
}

impl YouTrackError {
  /// Whether the error means the task token did not map to a single issue
  pub const fn is_not_found(&self) -> bool {
    matches!(self, Self::IssueNotFound { .. })
  }
}
