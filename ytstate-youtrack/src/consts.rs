//! Constants for the ytstate YouTrack client.

/// User-Agent header value for the YouTrack API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Path of the issues collection, relative to the tracker base URL
pub const ISSUES_PATH: &str = "api/issues/";

/// Fields requested from the issue search endpoint
pub const SEARCH_FIELDS: &str = "idReadable,id,summary";

/// Fields requested back from the issue update endpoint
pub const UPDATE_FIELDS: &str = "customFields(id,name,value(name))";

/// Name of the workflow custom field
pub const STATE_FIELD_NAME: &str = "State";

/// YouTrack `$type` discriminator for the workflow custom field
pub const STATE_FIELD_TYPE: &str = "StateIssueCustomField";
