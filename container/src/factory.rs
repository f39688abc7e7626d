//! Phase 1: instance creation and the pending-injection record.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, error};

use crate::error::InstantiationError;
use crate::metadata::{ComponentType, TypeCatalog, TypeKey};
use crate::registry::ComponentRegistry;

/// Outcome of a single [`InstanceFactory::create_instance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Created {
  /// The type was managed: a fresh instance is now registered.
  Registered,
  /// The type carries no managed stereotype; nothing was created.
  Skipped,
}

/// Creates beans for managed types and records which types will need the
/// dependency-resolution pass.
///
/// The record is keyed by type identity, not by instance, so it survives the
/// weaving phase rewiring a registry entry underneath it.
pub struct InstanceFactory<'a> {
  registry: &'a ComponentRegistry,
  pending_injection: HashSet<TypeKey>,
}

impl<'a> InstanceFactory<'a> {
  pub fn new(registry: &'a ComponentRegistry) -> Self {
    Self {
      registry,
      pending_injection: HashSet::new(),
    }
  }

  /// Creates and registers one type.
  ///
  /// Types without a managed stereotype are invisible to the container even
  /// if later referenced: no instance, no injection record. A managed type
  /// with no constructor fails with [`InstantiationError`], which is fatal
  /// for that type only.
  pub fn create_instance(&mut self, ty: &ComponentType) -> Result<Created, InstantiationError> {
    if !ty.is_managed() {
      return Ok(Created::Skipped);
    }

    // Recorded before construction, as in the original scan: a type that
    // fails to instantiate still leaves its record, and the resolver skips
    // it when no live instance turns up.
    if !ty.injectable_fields().is_empty() {
      self.pending_injection.insert(ty.key().clone());
    }

    let bean = ty.instantiate()?;
    self.registry.insert(ty.key().clone(), bean);
    debug!("registered component {}", ty.key());
    Ok(Created::Registered)
  }

  /// Walks the discovered types in order: creates every managed non-aspect
  /// type and hands back the aspect types for the weaving phase.
  ///
  /// A type that fails to instantiate is logged and skipped; the scan
  /// continues with the remaining types.
  pub fn create_all(&mut self, catalog: &TypeCatalog) -> Vec<Arc<ComponentType>> {
    let mut aspects = Vec::new();
    for ty in catalog.types() {
      if ty.is_aspect() {
        aspects.push(ty.clone());
        continue;
      }
      if let Err(e) = self.create_instance(ty) {
        error!("skipping {}: {}", ty.key(), e);
      }
    }
    aspects
  }

  /// Types recorded as requiring the phase-3 resolution pass.
  pub fn pending_injection(&self) -> &HashSet<TypeKey> {
    &self.pending_injection
  }

  /// Consumes the factory, releasing the pending-injection record.
  pub fn into_pending(self) -> HashSet<TypeKey> {
    self.pending_injection
  }
}
