//! Temporary config files for testing
//!
//! Writes `config.yml` files into a per-test temporary directory that can
//! double as the working directory of a spawned binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::TempDir;

/// A temporary directory holding a single YAML config file
pub struct ConfigFileGuard {
  /// The temporary directory, removed on drop
  pub temp_dir: TempDir,
  path: PathBuf,
}

impl ConfigFileGuard {
  /// Config file name used by default
  pub const FILE_NAME: &'static str = "config.yml";

  /// Create a guard with `content` written verbatim to `config.yml`
  pub fn new(content: &str) -> anyhow::Result<Self> {
    let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
    let path = temp_dir.path().join(Self::FILE_NAME);
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(Self { temp_dir, path })
  }

  /// Create a guard with a `youtrack` section built from the given values
  pub fn with_youtrack(host: &str, token: &str, project: Option<&str>) -> anyhow::Result<Self> {
    Self::new(&youtrack_yaml(host, token, project))
  }

  /// Create a guard whose directory contains no config file
  pub fn empty() -> anyhow::Result<Self> {
    let temp_dir = TempDir::new().context("Failed to create temporary directory")?;
    let path = temp_dir.path().join(Self::FILE_NAME);

    Ok(Self { temp_dir, path })
  }

  /// Path to the config file
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// The directory containing the config file
  pub fn dir(&self) -> &Path {
    self.temp_dir.path()
  }
}

/// Render a minimal YAML config with a `youtrack` section
pub fn youtrack_yaml(host: &str, token: &str, project: Option<&str>) -> String {
  let mut yaml = format!("youtrack:\n  host: \"{host}\"\n  token: \"{token}\"\n");
  if let Some(project) = project {
    yaml.push_str(&format!("  project: \"{project}\"\n"));
  }
  yaml
}
