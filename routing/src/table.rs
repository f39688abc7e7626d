//! Route-table construction from controller markers.

use std::fmt;

use heddle::{BeanRef, Container, Stereotype, TypeKey};
use tracing::{debug, warn};

/// One routable handler: a URL pattern bound to a live controller method.
#[derive(Clone)]
pub struct RouteEntry {
  /// Full pattern: the owning type's route base plus the method's path.
  pub path: String,
  pub owner: TypeKey,
  pub method: String,
  /// Declared request-parameter names, in declaration order.
  pub params: Vec<String>,
  /// The controller instance captured at build time: the final registry
  /// value, proxy included if the controller was woven.
  pub instance: BeanRef,
}

impl fmt::Debug for RouteEntry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RouteEntry")
      .field("path", &self.path)
      .field("owner", &self.owner)
      .field("method", &self.method)
      .field("params", &self.params)
      .finish()
  }
}

/// The request-routing table.
///
/// Built exactly once, after the container's startup phases have finished,
/// and read-only afterwards.
pub struct RouteTable {
  entries: Vec<RouteEntry>,
}

impl RouteTable {
  /// Collects every route marker on controller-tagged types.
  ///
  /// Controllers without a live registry instance (for example because their
  /// construction failed) are skipped with a warning rather than failing the
  /// build.
  pub fn build(container: &Container) -> Self {
    let mut entries = Vec::new();
    for ty in container.catalog().types() {
      if !ty.has_stereotype(Stereotype::Controller) {
        continue;
      }
      let instance = match container.get_instance(ty.key()) {
        Some(instance) => instance,
        None => {
          warn!("controller {} has no live instance; routes skipped", ty.key());
          continue;
        }
      };
      let base = ty.route_base().unwrap_or("");
      for method in ty.methods() {
        let route = match method.route.as_deref() {
          Some(route) => route,
          None => continue,
        };
        let path = format!("{}{}", base, route);
        debug!("route {} -> {}.{}", path, ty.key(), method.name);
        entries.push(RouteEntry {
          path,
          owner: ty.key().clone(),
          method: method.name.clone(),
          params: method.params.clone(),
          instance: instance.clone(),
        });
      }
    }
    Self { entries }
  }

  /// Exact-match lookup; the first entry registered for a path wins.
  pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
    self.entries.iter().find(|entry| entry.path == path)
  }

  pub fn entries(&self) -> &[RouteEntry] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
