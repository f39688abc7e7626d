//! Component type descriptors and the catalog the discovery layer builds.
//!
//! There is no runtime reflection here: everything the container knows about
//! a type (stereotypes, satisfied capabilities, injectable fields, marked
//! methods, how to construct it) is declared up front by
//! the discovery collaborator through the [`ComponentType`] builder and
//! registered in a [`TypeCatalog`]. The catalog is the container's one and
//! only metadata query surface.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::bean::BeanRef;
use crate::error::InstantiationError;

/// The identity of a declared type: its qualified name.
///
/// Used both for concrete component types and for capability (interface)
/// names. Cheap to clone; pointcut payloads resolve against it by string
/// lookup in the catalog.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeKey(Arc<str>);

impl TypeKey {
  pub fn new(name: impl AsRef<str>) -> Self {
    Self(Arc::from(name.as_ref()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Debug for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "TypeKey({})", self.0)
  }
}

impl fmt::Display for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for TypeKey {
  fn from(name: &str) -> Self {
    Self::new(name)
  }
}

impl From<String> for TypeKey {
  fn from(name: String) -> Self {
    Self(Arc::from(name.as_str()))
  }
}

/// A declarative capability tag: "the container must manage this type".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stereotype {
  Component,
  Controller,
  Service,
  /// Aspect types are handled by the weaving phase, never by the factory.
  Aspect,
}

impl Stereotype {
  /// Whether this tag makes a type eligible for phase-1 instantiation.
  pub fn is_managed(self) -> bool {
    !matches!(self, Stereotype::Aspect)
  }
}

/// The declared type of an injectable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
  /// A concrete component type, resolved by direct registry lookup.
  Concrete(TypeKey),
  /// A capability set; any registered type satisfying it may be injected.
  Capability(TypeKey),
}

impl TypeRef {
  pub fn concrete(name: impl Into<TypeKey>) -> Self {
    TypeRef::Concrete(name.into())
  }

  pub fn capability(name: impl Into<TypeKey>) -> Self {
    TypeRef::Capability(name.into())
  }
}

/// A field the container must assign during the resolution phase.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
  pub name: String,
  pub declared: TypeRef,
}

/// A method together with its declared markers.
///
/// Only marked methods need a descriptor; plain methods are dispatched
/// through [`Bean::invoke`](crate::bean::Bean::invoke) without the catalog
/// ever knowing about them.
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
  pub name: String,
  /// Pointcut payload: `"<qualified-target-type>.<method-name>()"`.
  pub pointcut: Option<String>,
  /// Before-advice payload: the pointcut alias, e.g. `"around_work()"`.
  pub before: Option<String>,
  /// After-advice payload, same form as `before`.
  pub after: Option<String>,
  /// Route path relative to the owning type's route base.
  pub route: Option<String>,
  /// Declared request-parameter names, in declaration order.
  pub params: Vec<String>,
}

impl MethodDescriptor {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      pointcut: None,
      before: None,
      after: None,
      route: None,
      params: Vec::new(),
    }
  }

  pub fn with_pointcut(mut self, payload: impl Into<String>) -> Self {
    self.pointcut = Some(payload.into());
    self
  }

  pub fn with_before(mut self, payload: impl Into<String>) -> Self {
    self.before = Some(payload.into());
    self
  }

  pub fn with_after(mut self, payload: impl Into<String>) -> Self {
    self.after = Some(payload.into());
    self
  }

  pub fn with_route(mut self, path: impl Into<String>) -> Self {
    self.route = Some(path.into());
    self
  }

  /// Appends one declared request-parameter name; call once per parameter,
  /// in declaration order.
  pub fn with_param(mut self, name: impl Into<String>) -> Self {
    self.params.push(name.into());
    self
  }
}

/// The constructor closure registered for a type: the no-argument-constructor
/// analog. Types without one cannot be instantiated.
pub type Constructor = Arc<dyn Fn() -> BeanRef + Send + Sync>;

/// Everything the container knows about one declared type.
///
/// Immutable once registered; the catalog hands out shared references so a
/// catalog clone (and a second bootstrap from it) is cheap.
pub struct ComponentType {
  key: TypeKey,
  stereotypes: Vec<Stereotype>,
  capabilities: Vec<TypeKey>,
  fields: Vec<FieldDescriptor>,
  methods: Vec<MethodDescriptor>,
  route_base: Option<String>,
  constructor: Option<Constructor>,
}

impl ComponentType {
  pub fn new(key: impl Into<TypeKey>) -> Self {
    Self {
      key: key.into(),
      stereotypes: Vec::new(),
      capabilities: Vec::new(),
      fields: Vec::new(),
      methods: Vec::new(),
      route_base: None,
      constructor: None,
    }
  }

  pub fn with_stereotype(mut self, stereotype: Stereotype) -> Self {
    if !self.stereotypes.contains(&stereotype) {
      self.stereotypes.push(stereotype);
    }
    self
  }

  /// Declares that this type satisfies a capability (implements an
  /// interface, in the original model).
  pub fn with_capability(mut self, capability: impl Into<TypeKey>) -> Self {
    self.capabilities.push(capability.into());
    self
  }

  pub fn with_field(mut self, name: impl Into<String>, declared: TypeRef) -> Self {
    self.fields.push(FieldDescriptor {
      name: name.into(),
      declared,
    });
    self
  }

  pub fn with_method(mut self, method: MethodDescriptor) -> Self {
    self.methods.push(method);
    self
  }

  /// Type-level route prefix shared by every handler method on the type.
  pub fn with_route_base(mut self, base: impl Into<String>) -> Self {
    self.route_base = Some(base.into());
    self
  }

  pub fn with_constructor<F>(mut self, constructor: F) -> Self
  where
    F: Fn() -> BeanRef + Send + Sync + 'static,
  {
    self.constructor = Some(Arc::new(constructor));
    self
  }

  // --- Query surface ---

  pub fn key(&self) -> &TypeKey {
    &self.key
  }

  pub fn has_stereotype(&self, stereotype: Stereotype) -> bool {
    self.stereotypes.contains(&stereotype)
  }

  /// Whether the factory should create and register this type.
  pub fn is_managed(&self) -> bool {
    self.stereotypes.iter().any(|s| s.is_managed())
  }

  pub fn is_aspect(&self) -> bool {
    self.has_stereotype(Stereotype::Aspect)
  }

  /// Whether this type satisfies the named capability.
  pub fn satisfies(&self, capability: &TypeKey) -> bool {
    self.capabilities.contains(capability)
  }

  pub fn injectable_fields(&self) -> &[FieldDescriptor] {
    &self.fields
  }

  pub fn methods(&self) -> &[MethodDescriptor] {
    &self.methods
  }

  pub fn route_base(&self) -> Option<&str> {
    self.route_base.as_deref()
  }

  /// Builds a fresh instance, failing when no constructor was declared.
  pub fn instantiate(&self) -> Result<BeanRef, InstantiationError> {
    match &self.constructor {
      Some(constructor) => Ok(constructor()),
      None => Err(InstantiationError::NoConstructor(self.key.clone())),
    }
  }
}

impl fmt::Debug for ComponentType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ComponentType")
      .field("key", &self.key)
      .field("stereotypes", &self.stereotypes)
      .field("capabilities", &self.capabilities)
      .field("fields", &self.fields)
      .field("methods", &self.methods)
      .field("route_base", &self.route_base)
      .field("constructor", &self.constructor.as_ref().map(|_| "<closure>"))
      .finish()
  }
}

/// The ordered set of discovered types: the container's input.
///
/// Registration order is preserved because the startup phases walk the
/// discovered list in order. Descriptors are `Arc`-shared, so cloning the
/// catalog is cheap and a single catalog can feed several bootstraps.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
  types: HashMap<TypeKey, Arc<ComponentType>>,
  order: Vec<TypeKey>,
}

impl TypeCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers a descriptor. Re-registering a key replaces the descriptor
  /// but keeps its original position in discovery order.
  pub fn register(&mut self, ty: ComponentType) {
    let key = ty.key().clone();
    if self.types.insert(key.clone(), Arc::new(ty)).is_none() {
      self.order.push(key);
    }
  }

  /// Identity lookup by qualified name.
  pub fn get(&self, key: &TypeKey) -> Option<&Arc<ComponentType>> {
    self.types.get(key)
  }

  /// All descriptors, in discovery order.
  pub fn types(&self) -> impl Iterator<Item = &Arc<ComponentType>> {
    self.order.iter().filter_map(|key| self.types.get(key))
  }

  pub fn has_stereotype(&self, key: &TypeKey, stereotype: Stereotype) -> bool {
    self.get(key).map_or(false, |ty| ty.has_stereotype(stereotype))
  }

  pub fn injectable_fields(&self, key: &TypeKey) -> &[FieldDescriptor] {
    match self.get(key) {
      Some(ty) => ty.injectable_fields(),
      None => &[],
    }
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }
}
