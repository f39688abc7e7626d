// src/error.rs

use thiserror::Error;

/// Failures while loading or parsing dispatcher configuration.
///
/// Dispatch itself never errors out of the routing layer: an unroutable
/// request becomes a 404 response and a failed handler a 500 response.
#[derive(Debug, Error)]
pub enum RoutingError {
  #[error("cannot read dispatcher config: {0}")]
  ConfigIo(#[from] std::io::Error),

  #[error("malformed dispatcher config: {0}")]
  ConfigParse(#[from] serde_yaml::Error),
}
