//! # Heddle Routing
//!
//! The external-facing layer of the heddle container: a route table compiled
//! once from controller markers, and a transport-free dispatcher that turns
//! an HTTP-like request into a handler invocation.
//!
//! The container owns the hard part (lifecycle, weaving, injection); this
//! crate only consumes its finished registry. [`RouteTable::build`] walks
//! the catalog once after startup and captures, per route, the owning
//! controller's *final* registry instance, proxy included if the controller
//! was woven. [`Dispatcher::handle`] then does exact-path lookup, extracts
//! declared parameters from the request, and invokes the handler bean.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use heddle::{
//!   impl_bean, ComponentType, Container, InvokeError, MethodDescriptor, Stereotype, TypeCatalog,
//!   Value,
//! };
//! use heddle_routing::{Dispatcher, Request, RouteTable};
//!
//! struct PingController;
//!
//! impl PingController {
//!   fn ping(&self, _args: &[Value]) -> Result<Value, InvokeError> {
//!     Ok(Value::from("pong"))
//!   }
//! }
//!
//! impl_bean!(PingController { methods { "ping" => ping } });
//!
//! let mut catalog = TypeCatalog::new();
//! catalog.register(
//!   ComponentType::new("app.PingController")
//!     .with_stereotype(Stereotype::Controller)
//!     .with_route_base("/app")
//!     .with_method(MethodDescriptor::new("ping").with_route("/ping"))
//!     .with_constructor(|| Arc::new(PingController)),
//! );
//!
//! let container = Container::bootstrap(catalog).expect("container startup");
//! let dispatcher = Dispatcher::new(RouteTable::build(&container));
//!
//! let response = dispatcher.handle(&Request::new("/app/ping"));
//! assert_eq!(response.status, 200);
//! assert_eq!(response.body, "pong");
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod table;

pub use config::DispatcherConfig;
pub use dispatch::{Dispatcher, Request, Response};
pub use error::RoutingError;
pub use table::{RouteEntry, RouteTable};
