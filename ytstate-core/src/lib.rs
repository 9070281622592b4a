//! # ytstate Core Library
//!
//! Configuration loading, host normalization and terminal output shared by
//! the ytstate command-line tool.

pub mod config;
pub mod consts;
pub mod output;
pub mod url;

// Re-export main types
pub use config::{ConfigFile, Settings, SettingsOverrides, YouTrackSection, load_settings};
pub use output::{ColorMode, print_error, print_success};
