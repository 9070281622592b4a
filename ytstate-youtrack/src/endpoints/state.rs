//! # YouTrack State Endpoint
//!
//! Moves an issue to a new workflow state by updating its `State` custom
//! field.

use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::client::YouTrackClient;
use crate::consts::{ISSUES_PATH, UPDATE_FIELDS};
use crate::error::YouTrackError;
use crate::models::StateUpdateRequest;

impl YouTrackClient {
  /// Set the `State` field of `issue_id` to `state`.
  ///
  /// The state name is not checked locally; YouTrack rejects unknown values.
  #[instrument(skip(self), level = "debug")]
  pub async fn set_issue_state(&self, issue_id: &str, state: &str) -> Result<(), YouTrackError> {
    let mut url = self.endpoint(ISSUES_PATH)?;
    url
      .path_segments_mut()
      .map_err(|()| YouTrackError::InvalidUrl {
        url: self.base_url.to_string(),
        source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
      })?
      .pop_if_empty()
      .push(issue_id);
    url.query_pairs_mut().append_pair("fields", UPDATE_FIELDS);

    debug!("POST {}", url);

    let payload = StateUpdateRequest::new(state);

    let response = self
      .authorize(self.client.post(url))
      .json(&payload)
      .send()
      .await
      .map_err(YouTrackError::Transport)?;

    match response.status() {
      StatusCode::OK => Ok(()),
      status => {
        debug!(
          "State update rejected: HTTP {} - {}",
          status,
          response.text().await.unwrap_or_default()
        );
        Err(YouTrackError::UpdateRejected {
          issue_id: issue_id.to_string(),
          status,
        })
      }
    }
  }
}
