//! # YouTrack Issue Endpoints
//!
//! Resolves a project-scoped task token to exactly one issue through the
//! issue search endpoint.

use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::client::YouTrackClient;
use crate::consts::{ISSUES_PATH, SEARCH_FIELDS};
use crate::error::YouTrackError;
use crate::models::YouTrackIssue;

/// Build the YouTrack search query for a task token.
///
/// An empty or missing project leaves the query unscoped.
pub fn build_search_query(project: Option<&str>, task: &str) -> String {
  match project.map(str::trim).filter(|p| !p.is_empty()) {
    Some(project) => format!("project:{project} #{task}"),
    None => format!("#{task}"),
  }
}

impl YouTrackClient {
  /// Find the single issue matching `task` in `project`.
  ///
  /// Ambiguous searches are treated like empty ones: no candidate is picked.
  #[instrument(skip(self), level = "debug")]
  pub async fn resolve_issue(&self, project: Option<&str>, task: &str) -> Result<YouTrackIssue, YouTrackError> {
    let mut url = self.endpoint(ISSUES_PATH)?;
    url
      .query_pairs_mut()
      .append_pair("fields", SEARCH_FIELDS)
      .append_pair("query", &build_search_query(project, task));

    debug!("GET {}", url);

    let response = self
      .authorize(self.client.get(url))
      .send()
      .await
      .map_err(YouTrackError::Transport)?;

    let status = response.status();
    if status != StatusCode::OK {
      debug!("Issue search failed with HTTP {}", status);
      return Err(YouTrackError::IssueNotFound { status, matches: None });
    }

    let mut issues = response
      .json::<Vec<YouTrackIssue>>()
      .await
      .map_err(YouTrackError::Decode)?;

    match issues.len() {
      1 => {
        let issue = issues.remove(0);
        debug!("Resolved task {} to issue {} ({})", task, issue.display_id(), issue.id);
        Ok(issue)
      }
      count => Err(YouTrackError::IssueNotFound {
        status,
        matches: Some(count),
      }),
    }
  }
}
