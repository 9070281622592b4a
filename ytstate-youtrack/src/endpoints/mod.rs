//! # YouTrack API Endpoints
//!
//! Endpoint implementations grouped by resource: issue search and the
//! state update applied to a resolved issue.

pub mod issues;
pub mod state;
