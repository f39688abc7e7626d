// src/error.rs

use thiserror::Error;

use crate::metadata::TypeKey;

/// Fatal aspect-configuration faults.
///
/// Each aborts the weaving of the aspect it names; weaving of other aspects
/// proceeds. The container treats any of these as a failed startup.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// The pointcut payload could not be split into a target type and method.
  #[error("aspect {aspect}: malformed pointcut payload `{payload}`")]
  MalformedPointcut { aspect: TypeKey, payload: String },

  /// The aspect declares no method with a pointcut marker.
  #[error("aspect {aspect} declares no pointcut")]
  MissingPointcut { aspect: TypeKey },

  /// The pointcut names a type the catalog has never seen.
  #[error("aspect {aspect}: pointcut target `{target}` is not in the catalog")]
  UnknownTargetType { aspect: TypeKey, target: TypeKey },

  /// The aspect type itself could not be instantiated.
  #[error("aspect {aspect} cannot be instantiated")]
  AspectInstantiation {
    aspect: TypeKey,
    #[source]
    source: InstantiationError,
  },

  /// The pointcut target could not be instantiated.
  #[error("pointcut target {target} cannot be instantiated")]
  TargetInstantiation {
    target: TypeKey,
    #[source]
    source: InstantiationError,
  },
}

/// Per-type creation failures. Fatal for the affected type, never for the
/// surrounding scan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstantiationError {
  /// The descriptor carries no constructor closure.
  #[error("type {0} declares no constructor")]
  NoConstructor(TypeKey),
}

/// Failures surfaced by [`Bean::invoke`](crate::bean::Bean::invoke).
///
/// Advice and handler failures travel through the interception proxy
/// unchanged; the container never retries or compensates.
#[derive(Debug, Error)]
pub enum InvokeError {
  #[error("no method `{method}` on {type_name}")]
  UnknownMethod { type_name: String, method: String },

  #[error("method `{method}` expected {expected} argument(s), got {got}")]
  BadArity {
    method: String,
    expected: usize,
    got: usize,
  },

  #[error("method `{method}` failed: {source}")]
  Handler {
    method: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },
}

impl InvokeError {
  /// Wraps an arbitrary handler failure.
  pub fn handler(
    method: impl Into<String>,
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
  ) -> Self {
    InvokeError::Handler {
      method: method.into(),
      source: source.into(),
    }
  }
}
