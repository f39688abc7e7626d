//! The container itself: the phased bootstrap pipeline.

use tracing::debug;

use crate::bean::BeanRef;
use crate::error::ConfigError;
use crate::factory::InstanceFactory;
use crate::metadata::{TypeCatalog, TypeKey};
use crate::registry::ComponentRegistry;
use crate::resolver::DependencyResolver;
use crate::weaver::AspectWeaver;

/// A fully constructed application container.
///
/// Construction runs the startup phases to completion before the value
/// exists: managed types are instantiated, aspects are woven (rewiring the
/// registry), and declared dependencies are resolved against the
/// post-weaving registry. The phase ordering is a correctness requirement:
/// a field declared with a woven type must end up holding the proxy.
///
/// After construction the registry is logically read-only and safe for
/// concurrent lookups from request-handling threads. There is no runtime
/// re-registration, hot swap or teardown.
pub struct Container {
  catalog: TypeCatalog,
  registry: ComponentRegistry,
}

impl Container {
  /// Runs the full startup pipeline over `catalog`.
  ///
  /// A type that fails to instantiate is disabled and the scan continues;
  /// an aspect configuration fault aborts startup once every aspect has
  /// been attempted.
  pub fn bootstrap(catalog: TypeCatalog) -> Result<Self, ConfigError> {
    let registry = ComponentRegistry::new();

    // Phase 1: create managed instances; aspect types are set aside.
    let mut factory = InstanceFactory::new(&registry);
    let aspects = factory.create_all(&catalog);
    let pending = factory.into_pending();

    // Phase 2: weave aspects, replacing target entries with proxies.
    AspectWeaver::new(&catalog, &registry).weave(&aspects)?;

    // Phase 3: inject the current (post-weaving) registry values.
    DependencyResolver::new(&catalog, &registry).resolve_all(&pending);

    debug!("container ready with {} live bean(s)", registry.len());
    Ok(Self { catalog, registry })
  }

  /// The current instance for a type identity, if the container holds one.
  /// After weaving this is the proxy, never the raw pre-weave instance.
  pub fn get_instance(&self, key: &TypeKey) -> Option<BeanRef> {
    self.registry.get(key)
  }

  /// The catalog this container was built from.
  pub fn catalog(&self) -> &TypeCatalog {
    &self.catalog
  }

  /// Read access for collaborators that build on the final registry.
  pub fn registry(&self) -> &ComponentRegistry {
    &self.registry
  }
}
