//! # Configuration Management
//!
//! Loads the YAML config file, layers environment variables and command-line
//! overrides on top of it, and produces the immutable [`Settings`] used for a
//! single run.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::debug;

use crate::consts::{DEFAULT_TIMEOUT_SECS, ENV_YOUTRACK_HOST, ENV_YOUTRACK_PROJECT, ENV_YOUTRACK_TOKEN};
use crate::url::normalize_host;

/// On-disk configuration file
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
  #[serde(default)]
  pub youtrack: YouTrackSection,
}

/// The `youtrack` section of the config file
#[derive(Debug, Default, Clone, Deserialize)]
pub struct YouTrackSection {
  pub host: Option<String>,
  pub token: Option<String>,
  pub project: Option<String>,
  /// Prefix stripped from task tokens, e.g. `PRJ-` so `PRJ-42` searches `#42`
  pub prefix: Option<String>,
  pub insecure_skip_verify: Option<bool>,
  pub timeout_secs: Option<u64>,
}

impl ConfigFile {
  /// Parse a config file from YAML text. Empty documents yield defaults.
  pub fn from_yaml_str(content: &str) -> Result<Self> {
    if content.trim().is_empty() {
      return Ok(Self::default());
    }
    serde_yaml::from_str(content).context("Failed to parse YAML configuration")
  }

  /// Load the config file at `path`.
  ///
  /// A missing file is only an error when the path was given explicitly.
  pub fn load(path: &Path, required: bool) -> Result<Self> {
    if !path.exists() {
      if required {
        bail!("Config file {} does not exist", path.display());
      }
      debug!("No config file at {}, using defaults", path.display());
      return Ok(Self::default());
    }

    let content =
      fs::read_to_string(path).with_context(|| format!("Failed to read config from {}", path.display()))?;

    Self::from_yaml_str(&content).with_context(|| format!("Failed to load config from {}", path.display()))
  }
}

/// Values supplied on the command line, taking precedence over everything else
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
  pub host: Option<String>,
  pub token: Option<String>,
  pub project: Option<String>,
  /// `true` forces certificate verification off; `false` defers to the file
  pub insecure_skip_verify: bool,
  pub timeout_secs: Option<u64>,
}

/// Fully resolved settings for one invocation
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
  /// Normalized base URL without trailing slash
  pub host: String,
  pub token: String,
  pub project: Option<String>,
  pub prefix: Option<String>,
  pub insecure_skip_verify: bool,
  pub timeout: Duration,
}

impl fmt::Debug for Settings {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Settings")
      .field("host", &self.host)
      .field("token", &"<redacted>")
      .field("project", &self.project)
      .field("prefix", &self.prefix)
      .field("insecure_skip_verify", &self.insecure_skip_verify)
      .field("timeout", &self.timeout)
      .finish()
  }
}

impl Settings {
  /// Merge the config file, environment and overrides.
  ///
  /// Precedence: overrides, then `env`, then the file. `env` is injected so
  /// resolution can be tested without touching the process environment.
  pub fn resolve<F>(file: YouTrackSection, env: F, overrides: &SettingsOverrides) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let present = |value: &String| !value.trim().is_empty();
    let pick = |flag: &Option<String>, var: &str, from_file: Option<String>| {
      flag
        .clone()
        .filter(present)
        .or_else(|| env(var).filter(present))
        .or_else(|| from_file.filter(present))
    };

    let host = pick(&overrides.host, ENV_YOUTRACK_HOST, file.host).with_context(|| {
      format!("YouTrack host is not configured (set youtrack.host, {ENV_YOUTRACK_HOST} or --host)")
    })?;
    let host = normalize_host(&host).context("Invalid YouTrack host")?;

    let token = pick(&overrides.token, ENV_YOUTRACK_TOKEN, file.token).with_context(|| {
      format!("YouTrack token is not configured (set youtrack.token, {ENV_YOUTRACK_TOKEN} or --token)")
    })?;

    let project = pick(&overrides.project, ENV_YOUTRACK_PROJECT, file.project).map(|p| p.trim().to_string());
    let prefix = file.prefix.filter(|p| !p.is_empty());

    let insecure_skip_verify = overrides.insecure_skip_verify || file.insecure_skip_verify.unwrap_or(false);

    let timeout_secs = overrides
      .timeout_secs
      .or(file.timeout_secs)
      .unwrap_or(DEFAULT_TIMEOUT_SECS);
    if timeout_secs == 0 {
      bail!("Request timeout must be at least one second");
    }

    Ok(Self {
      host,
      token: token.trim().to_string(),
      project,
      prefix,
      insecure_skip_verify,
      timeout: Duration::from_secs(timeout_secs),
    })
  }

  /// Strip the configured prefix from a task token, if present.
  ///
  /// Returns `None` when nothing is left to search for.
  pub fn task_number<'a>(&self, task: &'a str) -> Option<&'a str> {
    let task = task.trim();
    let number = match &self.prefix {
      Some(prefix) => task.strip_prefix(prefix.as_str()).unwrap_or(task).trim(),
      None => task,
    };
    (!number.is_empty()).then_some(number)
  }
}

/// Load settings from the config file at `path`, the process environment and
/// command-line overrides
pub fn load_settings(path: &Path, explicit_path: bool, overrides: &SettingsOverrides) -> Result<Settings> {
  let file = ConfigFile::load(path, explicit_path)?;
  let settings = Settings::resolve(file.youtrack, |key| std::env::var(key).ok(), overrides)?;
  debug!("Resolved settings: {:?}", settings);
  Ok(settings)
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use tempfile::TempDir;
  use ytstate_test_utils::{ConfigFileGuard, EnvVarGuard};

  use super::*;

  const SAMPLE: &str = r#"
youtrack:
  host: https://tracker.example/
  token: perm:abc
  project: PRJ
  prefix: PRJ-
"#;

  fn no_env(_: &str) -> Option<String> {
    None
  }

  #[test]
  fn test_parse_config_file() {
    let config = ConfigFile::from_yaml_str(SAMPLE).unwrap();

    assert_eq!(config.youtrack.host.as_deref(), Some("https://tracker.example/"));
    assert_eq!(config.youtrack.token.as_deref(), Some("perm:abc"));
    assert_eq!(config.youtrack.project.as_deref(), Some("PRJ"));
    assert_eq!(config.youtrack.prefix.as_deref(), Some("PRJ-"));
    assert_eq!(config.youtrack.insecure_skip_verify, None);
  }

  #[test]
  fn test_parse_config_ignores_unknown_keys() {
    let config = ConfigFile::from_yaml_str("other: 1\nyoutrack:\n  host: h\n  extra: true\n").unwrap();
    assert_eq!(config.youtrack.host.as_deref(), Some("h"));
  }

  #[test]
  fn test_parse_empty_config() {
    let config = ConfigFile::from_yaml_str("").unwrap();
    assert!(config.youtrack.host.is_none());
  }

  #[test]
  fn test_parse_invalid_config() {
    let result = ConfigFile::from_yaml_str("youtrack: [not, a, mapping]");
    assert!(result.is_err());
  }

  #[test]
  fn test_load_missing_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");

    assert!(ConfigFile::load(&path, false).is_ok());

    let error = ConfigFile::load(&path, true).unwrap_err().to_string();
    assert!(error.contains("does not exist"));
  }

  #[test]
  fn test_load_config_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    fs::write(&path, SAMPLE).unwrap();

    let config = ConfigFile::load(&path, true).unwrap();
    assert_eq!(config.youtrack.project.as_deref(), Some("PRJ"));
  }

  #[test]
  fn test_resolve_from_file() {
    let config = ConfigFile::from_yaml_str(SAMPLE).unwrap();
    let settings = Settings::resolve(config.youtrack, no_env, &SettingsOverrides::default()).unwrap();

    assert_eq!(settings.host, "https://tracker.example");
    assert_eq!(settings.token, "perm:abc");
    assert_eq!(settings.project.as_deref(), Some("PRJ"));
    assert!(!settings.insecure_skip_verify);
    assert_eq!(settings.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
  }

  #[test]
  fn test_resolve_precedence() {
    let config = ConfigFile::from_yaml_str(SAMPLE).unwrap();
    let env: HashMap<&str, &str> = HashMap::from([
      (ENV_YOUTRACK_HOST, "env.example"),
      (ENV_YOUTRACK_TOKEN, "env-token"),
    ]);
    let overrides = SettingsOverrides {
      token: Some("flag-token".to_string()),
      timeout_secs: Some(5),
      ..Default::default()
    };

    let settings = Settings::resolve(config.youtrack, |key| env.get(key).map(|v| v.to_string()), &overrides).unwrap();

    assert_eq!(settings.host, "https://env.example");
    assert_eq!(settings.token, "flag-token");
    assert_eq!(settings.project.as_deref(), Some("PRJ"));
    assert_eq!(settings.timeout, Duration::from_secs(5));
  }

  #[test]
  fn test_resolve_flags_only() {
    let overrides = SettingsOverrides {
      host: Some("http://127.0.0.1:8080".to_string()),
      token: Some("abc".to_string()),
      insecure_skip_verify: true,
      ..Default::default()
    };

    let settings = Settings::resolve(YouTrackSection::default(), no_env, &overrides).unwrap();

    assert_eq!(settings.host, "http://127.0.0.1:8080");
    assert_eq!(settings.project, None);
    assert!(settings.insecure_skip_verify);
  }

  #[test]
  fn test_resolve_missing_host() {
    let overrides = SettingsOverrides {
      token: Some("abc".to_string()),
      ..Default::default()
    };

    let error = Settings::resolve(YouTrackSection::default(), no_env, &overrides)
      .unwrap_err()
      .to_string();
    assert!(error.contains("host is not configured"));
  }

  #[test]
  fn test_resolve_missing_token() {
    let section = YouTrackSection {
      host: Some("tracker.example".to_string()),
      token: Some("   ".to_string()),
      ..Default::default()
    };

    let error = Settings::resolve(section, no_env, &SettingsOverrides::default())
      .unwrap_err()
      .to_string();
    assert!(error.contains("token is not configured"));
  }

  #[test]
  fn test_resolve_insecure_from_file() {
    let config = ConfigFile::from_yaml_str(
      "youtrack:\n  host: tracker.example\n  token: abc\n  insecure_skip_verify: true\n  timeout_secs: 10\n",
    )
    .unwrap();

    let settings = Settings::resolve(config.youtrack, no_env, &SettingsOverrides::default()).unwrap();
    assert!(settings.insecure_skip_verify);
    assert_eq!(settings.timeout, Duration::from_secs(10));
  }

  #[test]
  fn test_resolve_zero_timeout() {
    let overrides = SettingsOverrides {
      host: Some("tracker.example".to_string()),
      token: Some("abc".to_string()),
      timeout_secs: Some(0),
      ..Default::default()
    };

    assert!(Settings::resolve(YouTrackSection::default(), no_env, &overrides).is_err());
  }

  #[test]
  fn test_task_number() {
    let config = ConfigFile::from_yaml_str(SAMPLE).unwrap();
    let settings = Settings::resolve(config.youtrack, no_env, &SettingsOverrides::default()).unwrap();

    assert_eq!(settings.task_number("PRJ-42"), Some("42"));
    assert_eq!(settings.task_number("42"), Some("42"));
    assert_eq!(settings.task_number(" 7 "), Some("7"));
    assert_eq!(settings.task_number("PRJ-"), None);
    assert_eq!(settings.task_number(" PRJ- "), None);
    assert_eq!(settings.task_number(""), None);

    let unprefixed = Settings {
      prefix: None,
      ..settings
    };
    assert_eq!(unprefixed.task_number("PRJ-42"), Some("PRJ-42"));
    assert_eq!(unprefixed.task_number("PRJ-"), Some("PRJ-"));
  }

  #[test]
  fn test_load_settings_reads_environment() {
    let config = ConfigFileGuard::with_youtrack("tracker.example", "abc", Some("PRJ")).unwrap();
    let host_guard = EnvVarGuard::new(ENV_YOUTRACK_HOST);
    host_guard.remove();
    let token_guard = EnvVarGuard::new(ENV_YOUTRACK_TOKEN);
    token_guard.remove();
    let project_guard = EnvVarGuard::new(ENV_YOUTRACK_PROJECT);
    project_guard.set("OPS");

    let settings = load_settings(config.path(), true, &SettingsOverrides::default()).unwrap();

    assert_eq!(settings.host, "https://tracker.example");
    assert_eq!(settings.token, "abc");
    assert_eq!(settings.project.as_deref(), Some("OPS"));
  }

  #[test]
  fn test_settings_debug_redacts_token() {
    let overrides = SettingsOverrides {
      host: Some("tracker.example".to_string()),
      token: Some("super-secret".to_string()),
      ..Default::default()
    };
    let settings = Settings::resolve(YouTrackSection::default(), no_env, &overrides).unwrap();

    let rendered = format!("{settings:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("<redacted>"));
  }
}
