//! Phase 3: dependency resolution against the post-weaving registry.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::bean::BeanRef;
use crate::metadata::{FieldDescriptor, TypeCatalog, TypeKey, TypeRef};
use crate::registry::ComponentRegistry;

/// Walks every type recorded as needing injection and assigns the current
/// registry value for each declared field type.
///
/// This pass must run after weaving: a field declared with a woven type must
/// receive the proxy, never the pre-weaving instance. Capability fields are
/// matched against the first registry entry whose descriptor satisfies the
/// capability; with several implementers the pick is whichever the registry
/// iterates first, and that order is unspecified. A field with no match is
/// left unset; resolution never fails the pass.
pub struct DependencyResolver<'a> {
  catalog: &'a TypeCatalog,
  registry: &'a ComponentRegistry,
}

impl<'a> DependencyResolver<'a> {
  pub fn new(catalog: &'a TypeCatalog, registry: &'a ComponentRegistry) -> Self {
    Self { catalog, registry }
  }

  /// Resolves every injectable field of every pending type.
  pub fn resolve_all(&self, pending: &HashSet<TypeKey>) {
    for key in pending {
      let bean = match self.registry.get(key) {
        Some(bean) => bean,
        None => {
          // The type never made it into the registry (failed construction);
          // there is nothing to inject into.
          debug!("no live instance for {}; injection skipped", key);
          continue;
        }
      };
      let ty = match self.catalog.get(key) {
        Some(ty) => ty,
        None => continue,
      };

      for field in ty.injectable_fields() {
        match self.resolve_field(field) {
          Some(dependency) => {
            if bean.inject(&field.name, dependency) {
              debug!("injected {}.{}", key, field.name);
            } else {
              warn!("{} did not accept injection for field `{}`", key, field.name);
            }
          }
          // Soft failure by design: the field stays unset.
          None => debug!(
            "no registry entry satisfies {}.{} ({:?})",
            key, field.name, field.declared
          ),
        }
      }
    }
  }

  /// The current registry value for a field's declared type, if any.
  pub fn resolve_field(&self, field: &FieldDescriptor) -> Option<BeanRef> {
    match &field.declared {
      TypeRef::Concrete(key) => self.registry.get(key),
      TypeRef::Capability(capability) => self.find_implementer(capability),
    }
  }

  // First registered bean whose declared type satisfies the capability.
  fn find_implementer(&self, capability: &TypeKey) -> Option<BeanRef> {
    for key in self.registry.keys() {
      let satisfies = self
        .catalog
        .get(&key)
        .map_or(false, |ty| ty.satisfies(capability));
      if satisfies {
        return self.registry.get(&key);
      }
    }
    None
  }
}
