use serde::{Deserialize, Serialize};

use crate::consts::{STATE_FIELD_NAME, STATE_FIELD_TYPE};

/// Represents a YouTrack issue as returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YouTrackIssue {
  /// Internal database id, used to address the issue in further requests
  pub id: String,
  /// Human-facing id such as `PRJ-42`
  #[serde(default)]
  pub id_readable: Option<String>,
  #[serde(default)]
  pub summary: Option<String>,
}

impl YouTrackIssue {
  /// Label for log and terminal output, preferring the readable id
  pub fn display_id(&self) -> &str {
    self.id_readable.as_deref().unwrap_or(&self.id)
  }
}

/// Partial issue update that sets the `State` custom field
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateUpdateRequest {
  pub custom_fields: Vec<StateIssueCustomField>,
}

impl StateUpdateRequest {
  /// Build an update moving the issue to `state`
  pub fn new(state: &str) -> Self {
    Self {
      custom_fields: vec![StateIssueCustomField {
        name: STATE_FIELD_NAME.to_string(),
        field_type: STATE_FIELD_TYPE.to_string(),
        value: StateFieldValue {
          name: state.to_string(),
        },
      }],
    }
  }
}

/// A state custom field entry
#[derive(Debug, Serialize)]
pub struct StateIssueCustomField {
  pub name: String,
  #[serde(rename = "$type")]
  pub field_type: String,
  pub value: StateFieldValue,
}

/// The state value, addressed by name
#[derive(Debug, Serialize)]
pub struct StateFieldValue {
  pub name: String,
}
