use std::sync::Arc;

use heddle::{
  impl_bean, Bean, ComponentType, Container, InvokeError, MethodDescriptor, Slot, Stereotype,
  TypeCatalog, TypeRef, Value,
};
use heddle_routing::{Dispatcher, Request, RouteTable};

// A tiny three-component application: a service, a controller that depends
// on it through a capability, and an aspect woven around the service call.

struct UserService;

impl UserService {
  fn find_all(&self, _args: &[Value]) -> Result<Value, InvokeError> {
    println!("    querying all users");
    Ok(Value::from("3 users"))
  }
}

impl_bean!(UserService { methods { "find_all" => find_all } });

struct UserController {
  service: Slot,
}

impl UserController {
  fn find(&self, args: &[Value]) -> Result<Value, InvokeError> {
    let caller = args.first().and_then(Value::as_str).unwrap_or("anonymous");
    match self.service.get() {
      Some(service) => {
        let users = service.invoke("find_all", &[])?;
        Ok(Value::Str(format!("{} found {}", caller, users)))
      }
      None => Ok(Value::from("service unavailable")),
    }
  }
}

impl_bean!(UserController {
  methods { "find" => find }
  fields { "service" => service }
});

struct UserAop;

impl UserAop {
  fn before(&self, _args: &[Value]) -> Result<Value, InvokeError> {
    println!("    before...");
    Ok(Value::Null)
  }

  fn after(&self, _args: &[Value]) -> Result<Value, InvokeError> {
    println!("    after...");
    Ok(Value::Null)
  }
}

impl_bean!(UserAop { methods { "before" => before, "after" => after } });

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .init();

  // The discovery layer's output: the ordered type catalog.
  let mut catalog = TypeCatalog::new();
  catalog.register(
    ComponentType::new("demo.UserService")
      .with_stereotype(Stereotype::Service)
      .with_capability("demo.UserLookup")
      .with_constructor(|| Arc::new(UserService)),
  );
  catalog.register(
    ComponentType::new("demo.UserController")
      .with_stereotype(Stereotype::Controller)
      .with_route_base("/user")
      .with_field("service", TypeRef::capability("demo.UserLookup"))
      .with_method(
        MethodDescriptor::new("find")
          .with_route("/find")
          .with_param("caller"),
      )
      .with_constructor(|| {
        Arc::new(UserController {
          service: Slot::new(),
        })
      }),
  );
  catalog.register(
    ComponentType::new("demo.UserAop")
      .with_stereotype(Stereotype::Aspect)
      .with_method(
        MethodDescriptor::new("mypointcut").with_pointcut("demo.UserService.find_all()"),
      )
      .with_method(MethodDescriptor::new("before").with_before("mypointcut()"))
      .with_method(MethodDescriptor::new("after").with_after("mypointcut()"))
      .with_constructor(|| Arc::new(UserAop)),
  );

  // Startup: instantiate, weave, inject. The routes are built once after.
  let container = Container::bootstrap(catalog).expect("container startup");
  let dispatcher = Dispatcher::new(RouteTable::build(&container));

  println!("GET /user/find?caller=alice");
  let response = dispatcher.handle(&Request::new("/user/find").with_param("caller", "alice"));
  println!("  {} {}", response.status, response.body);

  println!("GET /user/missing");
  let response = dispatcher.handle(&Request::new("/user/missing"));
  println!("  {} {}", response.status, response.body);
}
