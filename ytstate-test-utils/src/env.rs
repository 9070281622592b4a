//! Environment variable management for testing
//!
//! Sets a variable for the lifetime of a guard and restores the previous
//! value afterwards so tests do not leak configuration into each other.

use std::env;

/// Overrides a single environment variable until dropped
pub struct EnvVarGuard {
  key: String,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Capture the current value of `key` without changing it
  pub fn new(key: &str) -> Self {
    Self {
      key: key.to_string(),
      original: env::var(key).ok(),
    }
  }

  /// Set the variable to `value`
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.key, value);
    }
  }

  /// Remove the variable
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.key);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.key, val);
      },
      None => unsafe {
        env::remove_var(&self.key);
      },
    }
  }
}
