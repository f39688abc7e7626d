//! The runtime object model: string-dispatched beans and injection slots.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::InvokeError;

/// A loosely-typed argument or return value for a bean method call.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Null,
  Str(String),
  Int(i64),
  Bool(bool),
}

impl Value {
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::Str(s) => Some(s),
      _ => None,
    }
  }

  pub fn is_null(&self) -> bool {
    matches!(self, Value::Null)
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Null => Ok(()),
      Value::Str(s) => f.write_str(s),
      Value::Int(n) => write!(f, "{}", n),
      Value::Bool(b) => write!(f, "{}", b),
    }
  }
}

impl From<&str> for Value {
  fn from(s: &str) -> Self {
    Value::Str(s.to_string())
  }
}

impl From<String> for Value {
  fn from(s: String) -> Self {
    Value::Str(s)
  }
}

impl From<i64> for Value {
  fn from(n: i64) -> Self {
    Value::Int(n)
  }
}

impl From<bool> for Value {
  fn from(b: bool) -> Self {
    Value::Bool(b)
  }
}

/// A live, container-managed object.
///
/// Method calls are dispatched by name: the trait is the stand-in for the
/// reflective proxy of the original model, so an interception proxy can
/// present exactly the same surface as the instance it wraps. The
/// [`impl_bean!`](crate::impl_bean) macro generates the dispatch match for
/// ordinary component structs.
pub trait Bean: Send + Sync + 'static {
  /// Invokes a named method with positional arguments.
  fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, InvokeError>;

  /// Offers a dependency for a named injectable field.
  ///
  /// Returns `false` when the bean has no such field; the resolver treats
  /// that as a soft failure.
  fn inject(&self, field: &str, dependency: BeanRef) -> bool {
    let _ = (field, dependency);
    false
  }

  /// Upcast used by collaborators (and tests) that need the concrete type.
  fn as_any(&self) -> &dyn Any;
}

/// Shared handle to a live bean. The registry owns one per type identity.
pub type BeanRef = Arc<dyn Bean>;

/// An injection point inside a component struct.
///
/// Interior-mutable so the resolution phase can assign a dependency after
/// the owning bean has already been constructed and registered. A slot left
/// unset simply stays empty; reading it yields `None`.
pub struct Slot {
  cell: RwLock<Option<BeanRef>>,
}

impl Slot {
  pub fn new() -> Self {
    Self {
      cell: RwLock::new(None),
    }
  }

  /// Assigns the dependency, replacing any previous one.
  pub fn inject(&self, dependency: BeanRef) {
    *self.cell.write() = Some(dependency);
  }

  /// The currently bound dependency, if the resolution pass found one.
  pub fn get(&self) -> Option<BeanRef> {
    self.cell.read().clone()
  }

  pub fn is_bound(&self) -> bool {
    self.cell.read().is_some()
  }
}

impl Default for Slot {
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Debug for Slot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_bound() {
      f.write_str("Slot(bound)")
    } else {
      f.write_str("Slot(unset)")
    }
  }
}
