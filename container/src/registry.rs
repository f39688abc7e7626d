//! The concurrent bean registry: the single source of truth for what exists.

use dashmap::DashMap;

use crate::bean::BeanRef;
use crate::metadata::TypeKey;

/// Mapping from component type identity to its live instance.
///
/// Keys are unique: at most one live bean per type at any moment. Values are
/// replaced in place when the weaving phase substitutes a proxy for a raw
/// instance, so a lookup made after weaving observes the proxy. Mutation is
/// confined to the startup phases; afterwards the map is logically read-only
/// and safe for concurrent lookups from request-handling threads.
#[derive(Default)]
pub struct ComponentRegistry {
  beans: DashMap<TypeKey, BeanRef>,
}

impl ComponentRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts or replaces the live instance for `key`.
  pub fn insert(&self, key: TypeKey, bean: BeanRef) {
    self.beans.insert(key, bean);
  }

  /// The current instance for `key`, if one is registered.
  pub fn get(&self, key: &TypeKey) -> Option<BeanRef> {
    self.beans.get(key).map(|entry| entry.value().clone())
  }

  pub fn contains(&self, key: &TypeKey) -> bool {
    self.beans.contains_key(key)
  }

  /// A snapshot of the registered keys, in unspecified order.
  pub fn keys(&self) -> Vec<TypeKey> {
    self.beans.iter().map(|entry| entry.key().clone()).collect()
  }

  pub fn len(&self) -> usize {
    self.beans.len()
  }

  pub fn is_empty(&self) -> bool {
    self.beans.is_empty()
  }
}
