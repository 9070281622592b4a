//! # ytstate CLI Library
//!
//! Argument parsing and command handling for the `ytstate` binary, which
//! resolves a YouTrack task token to an issue and moves it to a new state.

pub mod cli;
pub mod clients;
pub mod consts;
pub mod transition;
