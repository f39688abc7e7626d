//! External configuration for the dispatcher.
//!
//! Deployments describe the dispatcher in a small YAML document; everything
//! has a default so tests and examples can run configuration-free.

use std::path::Path;

use serde::Deserialize;

use crate::error::RoutingError;

/// Dispatcher settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
  /// Prefix stripped from incoming request paths before route lookup: the
  /// context path of the deployment. Empty means "mounted at the root".
  pub base_path: String,

  /// Body returned when no route matches the request path.
  pub not_found_body: String,

  /// Body prefix returned when a handler fails; the error text is appended.
  pub error_body: String,
}

impl Default for DispatcherConfig {
  fn default() -> Self {
    Self {
      base_path: String::new(),
      not_found_body: "404 not found!".to_string(),
      error_body: "500 handler failed".to_string(),
    }
  }
}

impl DispatcherConfig {
  /// Parses a YAML document. Missing keys fall back to their defaults.
  pub fn from_yaml_str(text: &str) -> Result<Self, RoutingError> {
    Ok(serde_yaml::from_str(text)?)
  }

  /// Reads and parses a YAML config file.
  pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, RoutingError> {
    let text = std::fs::read_to_string(path)?;
    Self::from_yaml_str(&text)
  }
}
