//! The interception proxy substituted for a woven target instance.

use std::any::Any;

use crate::bean::{Bean, BeanRef, Value};
use crate::error::InvokeError;

/// A stand-in for a woven target bean.
///
/// The proxy presents exactly the surface of the instance it wraps: every
/// call is forwarded verbatim to the target, except the one bound method,
/// which runs before-advice, the target method, then after-advice. A failure
/// raised by any of the three propagates to the caller unchanged; there is
/// no retry and no per-invocation state.
pub struct AdvisedBean {
  aspect: BeanRef,
  before: Option<String>,
  after: Option<String>,
  target: BeanRef,
  target_method: String,
}

impl AdvisedBean {
  /// Binds the advice holder and its before/after methods around
  /// `target_method` of `target`. Either advice may be absent.
  pub fn new(
    aspect: BeanRef,
    before: Option<String>,
    after: Option<String>,
    target: BeanRef,
    target_method: impl Into<String>,
  ) -> Self {
    Self {
      aspect,
      before,
      after,
      target,
      target_method: target_method.into(),
    }
  }

  /// The one method this proxy intercepts.
  pub fn target_method(&self) -> &str {
    &self.target_method
  }

  /// The wrapped, pre-weaving instance.
  pub fn target(&self) -> &BeanRef {
    &self.target
  }
}

impl Bean for AdvisedBean {
  fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, InvokeError> {
    if method != self.target_method {
      return self.target.invoke(method, args);
    }

    // Advice methods are zero-argument callbacks on the aspect bean.
    if let Some(before) = &self.before {
      self.aspect.invoke(before, &[])?;
    }
    let result = self.target.invoke(method, args)?;
    if let Some(after) = &self.after {
      self.aspect.invoke(after, &[])?;
    }
    Ok(result)
  }

  // Injection must land on the real fields even after rewiring.
  fn inject(&self, field: &str, dependency: BeanRef) -> bool {
    self.target.inject(field, dependency)
  }

  fn as_any(&self) -> &dyn Any {
    self
  }
}
