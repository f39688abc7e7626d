//! # Heddle
//!
//! A minimal application container for Rust: phased component lifecycle,
//! single-pointcut aspect weaving, and registry-backed dependency injection.
//!
//! A discovery collaborator declares types in a [`TypeCatalog`]: their
//! stereotypes, capabilities, injectable fields, marked methods and
//! constructors. [`Container::bootstrap`] then runs the startup pipeline:
//!
//! 1. **Instantiate** every managed type (aspects are set aside) and record
//!    which types declare injectable fields.
//! 2. **Weave** each aspect: resolve its pointcut, build an [`AdvisedBean`]
//!    proxy around a fresh target instance, and overwrite the target's
//!    registry entry with the proxy.
//! 3. **Resolve** dependencies against the post-weaving registry, so a field
//!    declared with a woven type receives the proxy, never the raw instance.
//!
//! The ordering of phases 2 and 3 is the central correctness guarantee of
//! the whole container, not an optimization.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use heddle::{
//!   impl_bean, Bean, ComponentType, Container, InvokeError, MethodDescriptor, Stereotype,
//!   TypeCatalog, TypeKey, Value,
//! };
//!
//! // A service component with one interceptable method.
//! #[derive(Default)]
//! struct AuditService;
//!
//! impl AuditService {
//!   fn record(&self, _args: &[Value]) -> Result<Value, InvokeError> {
//!     Ok(Value::from("recorded"))
//!   }
//! }
//!
//! impl_bean!(AuditService { methods { "record" => record } });
//!
//! // An aspect that runs before every `record` call.
//! #[derive(Default)]
//! struct TraceAspect;
//!
//! impl TraceAspect {
//!   fn log_before(&self, _args: &[Value]) -> Result<Value, InvokeError> {
//!     println!("about to record");
//!     Ok(Value::Null)
//!   }
//! }
//!
//! impl_bean!(TraceAspect { methods { "log_before" => log_before } });
//!
//! // The discovery layer declares both types.
//! let mut catalog = TypeCatalog::new();
//! catalog.register(
//!   ComponentType::new("demo.AuditService")
//!     .with_stereotype(Stereotype::Service)
//!     .with_constructor(|| Arc::new(AuditService::default())),
//! );
//! catalog.register(
//!   ComponentType::new("demo.TraceAspect")
//!     .with_stereotype(Stereotype::Aspect)
//!     .with_method(
//!       MethodDescriptor::new("around_record").with_pointcut("demo.AuditService.record()"),
//!     )
//!     .with_method(MethodDescriptor::new("log_before").with_before("around_record()"))
//!     .with_constructor(|| Arc::new(TraceAspect::default())),
//! );
//!
//! let container = Container::bootstrap(catalog).expect("container startup");
//!
//! // The registry now serves the proxy, and calls run the advice.
//! let service = container
//!   .get_instance(&TypeKey::new("demo.AuditService"))
//!   .unwrap();
//! let out = service.invoke("record", &[]).unwrap();
//! assert_eq!(out, Value::from("recorded"));
//! ```

pub mod bean;
pub mod container;
pub mod error;
pub mod factory;
mod macros;
pub mod metadata;
pub mod proxy;
pub mod registry;
pub mod resolver;
pub mod weaver;

pub use bean::{Bean, BeanRef, Slot, Value};
pub use container::Container;
pub use error::{ConfigError, InstantiationError, InvokeError};
pub use factory::{Created, InstanceFactory};
pub use metadata::{
  ComponentType, Constructor, FieldDescriptor, MethodDescriptor, Stereotype, TypeCatalog, TypeKey,
  TypeRef,
};
pub use proxy::AdvisedBean;
pub use registry::ComponentRegistry;
pub use resolver::DependencyResolver;
pub use weaver::AspectWeaver;
