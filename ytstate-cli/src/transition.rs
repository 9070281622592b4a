//! # State Transition
//!
//! The resolve-then-update flow behind the `ytstate` command: find the single
//! issue for a task token, then set its `State` field.

use anyhow::{Context, Result};
use tracing::info;
use ytstate_core::Settings;
use ytstate_youtrack::YouTrackIssue;

use crate::clients::create_youtrack_runtime_and_client;

/// Move the issue identified by `task` to `state`.
///
/// Returns the resolved issue. Nothing is sent to the update endpoint unless
/// the search matched exactly one issue.
pub fn transition_task(settings: &Settings, task: &str, state: &str) -> Result<YouTrackIssue> {
  let task_number = settings
    .task_number(task)
    .with_context(|| format!("Task '{task}' does not contain a task number"))?;
  let (rt, client) = create_youtrack_runtime_and_client(settings)?;

  rt.block_on(async {
    let issue = client
      .resolve_issue(settings.project.as_deref(), task_number)
      .await
      .with_context(|| format!("Failed to resolve task '{task}'"))?;

    info!("Task {} resolved to issue {}", task, issue.id);

    client
      .set_issue_state(&issue.id, state)
      .await
      .with_context(|| format!("Failed to move issue {} to state '{state}'", issue.display_id()))?;

    info!("Issue {} moved to state {}", issue.display_id(), state);
    Ok(issue)
  })
}
