//! # YouTrack API Client
//!
//! Provides the small slice of the YouTrack REST API that ytstate needs:
//! resolving a project-scoped task token to an issue and updating the issue's
//! `State` custom field.

mod client;
pub mod consts;
mod endpoints;
mod error;
pub mod models;

// Re-export the client
pub use client::{ClientOptions, YouTrackClient, create_youtrack_client};
pub use endpoints::issues::build_search_query;
pub use error::YouTrackError;
// Re-export models
pub use models::{StateFieldValue, StateIssueCustomField, StateUpdateRequest, YouTrackIssue};
