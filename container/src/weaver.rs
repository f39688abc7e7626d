//! Phase 2: aspect weaving.

use std::sync::Arc;

use tracing::{debug, error};

use crate::error::ConfigError;
use crate::metadata::{ComponentType, TypeCatalog, TypeKey};
use crate::proxy::AdvisedBean;
use crate::registry::ComponentRegistry;

/// Resolves each aspect's pointcut/before/after triad and swaps the target's
/// registry entry for an [`AdvisedBean`].
///
/// Each aspect declares at most one pointcut, one before and one after
/// method; this is a deliberate simplification, not a general AOP model.
pub struct AspectWeaver<'a> {
  catalog: &'a TypeCatalog,
  registry: &'a ComponentRegistry,
}

impl<'a> AspectWeaver<'a> {
  pub fn new(catalog: &'a TypeCatalog, registry: &'a ComponentRegistry) -> Self {
    Self { catalog, registry }
  }

  /// Weaves every supplied aspect. An empty list is a no-op.
  ///
  /// A configuration fault aborts only the aspect it belongs to: nothing is
  /// written to the registry for that aspect and the remaining aspects are
  /// still processed. The first fault is returned once the loop completes so
  /// the caller observes the misconfiguration.
  pub fn weave(&self, aspects: &[Arc<ComponentType>]) -> Result<(), ConfigError> {
    let mut first_failure = None;
    for aspect in aspects {
      if let Err(e) = self.weave_one(aspect) {
        error!("aspect {} not woven: {}", aspect.key(), e);
        if first_failure.is_none() {
          first_failure = Some(e);
        }
      }
    }
    match first_failure {
      Some(e) => Err(e),
      None => Ok(()),
    }
  }

  fn weave_one(&self, aspect: &ComponentType) -> Result<(), ConfigError> {
    // Aspects are excluded from phase 1; the weaver owns their creation.
    let aspect_bean = aspect.instantiate().map_err(|source| {
      ConfigError::AspectInstantiation {
        aspect: aspect.key().clone(),
        source,
      }
    })?;

    // The pointcut method's own name is the alias the advice binds to.
    let mut pointcut = None;
    for method in aspect.methods() {
      if let Some(payload) = method.pointcut.as_deref() {
        pointcut = Some((method.name.as_str(), payload));
        break;
      }
    }
    let (alias, payload) = pointcut.ok_or_else(|| ConfigError::MissingPointcut {
      aspect: aspect.key().clone(),
    })?;

    let (target_key, target_method) =
      split_pointcut(payload).ok_or_else(|| ConfigError::MalformedPointcut {
        aspect: aspect.key().clone(),
        payload: payload.to_string(),
      })?;

    // Identity lookup, then a fresh instance: the target may not be managed
    // at all, so the registry is never consulted here.
    let target_ty = self
      .catalog
      .get(&target_key)
      .ok_or_else(|| ConfigError::UnknownTargetType {
        aspect: aspect.key().clone(),
        target: target_key.clone(),
      })?;
    let target_bean = target_ty.instantiate().map_err(|source| {
      ConfigError::TargetInstantiation {
        target: target_key.clone(),
        source,
      }
    })?;

    // Bind at most one before and one after advice to the alias.
    let mut before = None;
    let mut after = None;
    for method in aspect.methods() {
      if let Some(advice_payload) = method.before.as_deref() {
        if strip_params(advice_payload) == alias && before.is_none() {
          before = Some(method.name.clone());
        }
      } else if let Some(advice_payload) = method.after.as_deref() {
        if strip_params(advice_payload) == alias && after.is_none() {
          after = Some(method.name.clone());
        }
      }
    }

    let proxy = AdvisedBean::new(aspect_bean, before, after, target_bean, target_method);

    // Unconditional overwrite: any phase-1 instance for the target type is
    // replaced, and later resolution observes the proxy.
    self.registry.insert(target_key.clone(), Arc::new(proxy));
    debug!("woven {} around {}", aspect.key(), target_key);
    Ok(())
  }
}

/// Splits `"<qualified-target-type>.<method-name>()"` at the last `.` into
/// the target's type key and its bare method name.
fn split_pointcut(payload: &str) -> Option<(TypeKey, String)> {
  let (type_name, method) = payload.rsplit_once('.')?;
  if type_name.is_empty() {
    return None;
  }
  let method = strip_params(method);
  if method.is_empty() {
    return None;
  }
  Some((TypeKey::new(type_name), method.to_string()))
}

/// Drops a trailing parameter list, if any: `"around_work()"` becomes
/// `"around_work"`; a payload without parentheses is taken whole.
fn strip_params(payload: &str) -> &str {
  match payload.split_once('(') {
    Some((name, _)) => name,
    None => payload,
  }
}
