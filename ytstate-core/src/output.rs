//! # Output Formatting
//!
//! User-facing status lines with colors and emojis. Diagnostics go through
//! `tracing`; these helpers are for the final outcome of a command.

use owo_colors::{OwoColorize, Stream};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply the mode as the global owo-colors override
  pub fn apply(self) {
    match self {
      Self::Always | Self::Yes => owo_colors::set_override(true),
      Self::Never | Self::No => owo_colors::set_override(false),
      // Leave owo-colors to detect the terminal itself
      Self::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", check.if_supports_color(Stream::Stdout, |c| c.green()), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", cross.if_supports_color(Stream::Stderr, |c| c.red()), message);
}

/// Format an issue id for inline display
pub fn format_issue_id(id: &str) -> String {
  id.if_supports_color(Stream::Stdout, |text| text.bright_cyan()).to_string()
}

/// Format a workflow state name for inline display
pub fn format_state(state: &str) -> String {
  state.if_supports_color(Stream::Stdout, |text| text.yellow()).to_string()
}
