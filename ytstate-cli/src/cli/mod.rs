//! # Command Line Interface
//!
//! Defines the flags of the `ytstate` tool and turns a parsed command line
//! into settings, a transition and an exit code.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, CommandFactory, Parser};
use tracing::debug;
use ytstate_core::consts::DEFAULT_CONFIG_FILE;
use ytstate_core::output::{format_issue_id, format_state};
use ytstate_core::{ColorMode, SettingsOverrides, load_settings, print_error, print_success};

use crate::consts::EXIT_FAILURE_CODE;
use crate::transition::transition_task;

/// Top-level CLI command for the ytstate tool
#[derive(Parser, Debug)]
#[command(name = "ytstate")]
#[command(about = "Move a YouTrack issue to a new workflow state")]
#[command(
  long_about = "Looks up a YouTrack issue by its task number and sets its State field.\n\n\
        Connection settings come from a YAML config file with a 'youtrack' section\n\
        (host, token, project, prefix), from YOUTRACK_HOST / YOUTRACK_TOKEN /\n\
        YOUTRACK_PROJECT, or from the flags below, in increasing order of precedence."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Task number to look up, e.g. 42 (or PRJ-42 when a prefix is configured)
  #[arg(long, value_name = "TASK")]
  pub task: Option<String>,

  /// New state for the issue, e.g. "In Progress"
  #[arg(long = "ns", value_name = "STATE")]
  pub new_state: Option<String>,

  /// YAML config file [default: config.yml]
  #[arg(long, value_name = "PATH")]
  pub config: Option<PathBuf>,

  /// YouTrack base URL, overriding the config file
  #[arg(long, value_name = "URL")]
  pub host: Option<String>,

  /// YouTrack permanent token, overriding the config file
  #[arg(long, value_name = "TOKEN")]
  pub token: Option<String>,

  /// Project key used to scope the issue search
  #[arg(long, value_name = "KEY")]
  pub project: Option<String>,

  /// Skip TLS certificate verification
  #[arg(long)]
  pub insecure: bool,

  /// Request timeout in seconds
  #[arg(long, value_name = "SECS")]
  pub timeout: Option<u64>,

  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,
}

impl Cli {
  /// Task and target state, if both were given and non-empty
  pub fn required_inputs(&self) -> Option<(&str, &str)> {
    let task = self.task.as_deref().map(str::trim).filter(|t| !t.is_empty())?;
    let state = self.new_state.as_deref().filter(|s| !s.trim().is_empty())?;
    Some((task, state))
  }

  /// Config file path and whether it was given explicitly
  pub fn config_path(&self) -> (PathBuf, bool) {
    match &self.config {
      Some(path) => (path.clone(), true),
      None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    }
  }

  /// Command-line values that take precedence over file and environment
  pub fn overrides(&self) -> SettingsOverrides {
    SettingsOverrides {
      host: self.host.clone(),
      token: self.token.clone(),
      project: self.project.clone(),
      insecure_skip_verify: self.insecure,
      timeout_secs: self.timeout,
    }
  }
}

/// Print the usage text to stderr
pub fn print_usage() {
  let help = Cli::command().render_help();
  eprintln!("{help}");
}

/// Run the command and map the outcome to the process exit code
pub fn handle_cli(cli: Cli) -> ExitCode {
  cli.colors.apply();

  let Some((task, state)) = cli.required_inputs() else {
    print_error("Both --task and --ns are required");
    print_usage();
    return ExitCode::from(EXIT_FAILURE_CODE);
  };

  match handle_transition(&cli, task, state) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      debug!("Transition failed: {:?}", e);
      print_error(&format!("{e:#}"));
      ExitCode::from(EXIT_FAILURE_CODE)
    }
  }
}

/// Load settings and move the task to the requested state
fn handle_transition(cli: &Cli, task: &str, state: &str) -> Result<()> {
  let (config_path, explicit) = cli.config_path();
  let settings = load_settings(&config_path, explicit, &cli.overrides())?;

  let issue = transition_task(&settings, task, state)?;

  print_success(&format!(
    "Success! {} is now {}",
    format_issue_id(issue.display_id()),
    format_state(state)
  ));
  Ok(())
}
