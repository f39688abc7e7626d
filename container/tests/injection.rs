use std::sync::{Arc, Mutex};

use heddle::{
  impl_bean, AdvisedBean, Bean, ComponentType, Container, InvokeError, MethodDescriptor, Slot,
  Stereotype, TypeCatalog, TypeKey, TypeRef, Value,
};
use pretty_assertions::assert_eq;

// --- Test Fixtures ---

#[derive(Default)]
struct Recorder {
  calls: Mutex<Vec<String>>,
}

impl Recorder {
  fn log(&self, call: &str) {
    self.calls.lock().unwrap().push(call.to_string());
  }

  fn calls(&self) -> Vec<String> {
    self.calls.lock().unwrap().clone()
  }
}

struct WorkService {
  recorder: Arc<Recorder>,
}

impl WorkService {
  fn work(&self, _args: &[Value]) -> Result<Value, InvokeError> {
    self.recorder.log("work");
    Ok(Value::from("done"))
  }
}

impl_bean!(WorkService { methods { "work" => work } });

struct BackupWorkService;

impl BackupWorkService {
  fn work(&self, _args: &[Value]) -> Result<Value, InvokeError> {
    Ok(Value::from("backup done"))
  }
}

impl_bean!(BackupWorkService { methods { "work" => work } });

// The controller depends on the Workable capability, not a concrete type.
struct UserController {
  service: Slot,
}

impl UserController {
  fn find_all(&self, _args: &[Value]) -> Result<Value, InvokeError> {
    match self.service.get() {
      Some(service) => service.invoke("work", &[]),
      None => Ok(Value::from("no service bound")),
    }
  }
}

impl_bean!(UserController {
  methods { "find_all" => find_all }
  fields { "service" => service }
});

struct LogAspect {
  recorder: Arc<Recorder>,
}

impl LogAspect {
  fn log_before(&self, _args: &[Value]) -> Result<Value, InvokeError> {
    self.recorder.log("before");
    Ok(Value::Null)
  }

  fn log_after(&self, _args: &[Value]) -> Result<Value, InvokeError> {
    self.recorder.log("after");
    Ok(Value::Null)
  }
}

impl_bean!(LogAspect {
  methods { "log_before" => log_before, "log_after" => log_after }
});

// A service that is both woven and itself in need of injection.
struct NeedyService {
  dep: Slot,
}

impl NeedyService {
  fn run(&self, _args: &[Value]) -> Result<Value, InvokeError> {
    match self.dep.get() {
      Some(dep) => dep.invoke("work", &[]),
      None => Ok(Value::from("no dependency")),
    }
  }
}

impl_bean!(NeedyService {
  methods { "run" => run }
  fields { "dep" => dep }
});

fn work_service_type(recorder: &Arc<Recorder>) -> ComponentType {
  let recorder = recorder.clone();
  ComponentType::new("tests.WorkService")
    .with_stereotype(Stereotype::Service)
    .with_capability("tests.Workable")
    .with_constructor(move || {
      Arc::new(WorkService {
        recorder: recorder.clone(),
      })
    })
}

fn backup_service_type() -> ComponentType {
  ComponentType::new("tests.BackupWorkService")
    .with_stereotype(Stereotype::Service)
    .with_capability("tests.Workable")
    .with_constructor(|| Arc::new(BackupWorkService))
}

fn controller_type() -> ComponentType {
  ComponentType::new("tests.UserController")
    .with_stereotype(Stereotype::Controller)
    .with_field("service", TypeRef::capability("tests.Workable"))
    .with_constructor(|| {
      Arc::new(UserController {
        service: Slot::new(),
      })
    })
}

fn log_aspect_type(recorder: &Arc<Recorder>) -> ComponentType {
  let recorder = recorder.clone();
  ComponentType::new("tests.LogAspect")
    .with_stereotype(Stereotype::Aspect)
    .with_method(MethodDescriptor::new("around_work").with_pointcut("tests.WorkService.work()"))
    .with_method(MethodDescriptor::new("log_before").with_before("around_work()"))
    .with_method(MethodDescriptor::new("log_after").with_after("around_work()"))
    .with_constructor(move || {
      Arc::new(LogAspect {
        recorder: recorder.clone(),
      })
    })
}

fn controller_slot(container: &Container) -> Option<heddle::BeanRef> {
  let bean = container
    .get_instance(&TypeKey::new("tests.UserController"))
    .unwrap();
  let controller = bean.as_any().downcast_ref::<UserController>().unwrap();
  controller.service.get()
}

// --- Tests ---

#[test]
fn test_field_receives_the_post_weaving_proxy() {
  // Arrange: the controller's capability field resolves to the woven type.
  let recorder = Arc::new(Recorder::default());
  let mut catalog = TypeCatalog::new();
  catalog.register(work_service_type(&recorder));
  catalog.register(controller_type());
  catalog.register(log_aspect_type(&recorder));

  // Act
  let container = Container::bootstrap(catalog).unwrap();

  // Assert: the slot holds the proxy, the final registry value, not the
  // stale pre-weave instance.
  let injected = controller_slot(&container).expect("field should be bound");
  assert!(injected.as_any().downcast_ref::<AdvisedBean>().is_some());
  let registered = container
    .get_instance(&TypeKey::new("tests.WorkService"))
    .unwrap();
  assert!(Arc::ptr_eq(&injected, &registered));
}

#[test]
fn test_handler_call_through_injected_proxy_runs_advice() {
  // Arrange
  let recorder = Arc::new(Recorder::default());
  let mut catalog = TypeCatalog::new();
  catalog.register(work_service_type(&recorder));
  catalog.register(controller_type());
  catalog.register(log_aspect_type(&recorder));
  let container = Container::bootstrap(catalog).unwrap();
  let controller = container
    .get_instance(&TypeKey::new("tests.UserController"))
    .unwrap();

  // Act
  let result = controller.invoke("find_all", &[]).unwrap();

  // Assert: the whole chain ran, advice included, exactly once each.
  assert_eq!(result, Value::from("done"));
  assert_eq!(recorder.calls(), vec!["before", "work", "after"]);
}

#[test]
fn test_concrete_field_resolves_by_direct_lookup() {
  // Arrange: same controller, but the field names the concrete type.
  let recorder = Arc::new(Recorder::default());
  let mut catalog = TypeCatalog::new();
  catalog.register(work_service_type(&recorder));
  catalog.register(
    ComponentType::new("tests.UserController")
      .with_stereotype(Stereotype::Controller)
      .with_field("service", TypeRef::concrete("tests.WorkService"))
      .with_constructor(|| {
        Arc::new(UserController {
          service: Slot::new(),
        })
      }),
  );

  // Act
  let container = Container::bootstrap(catalog).unwrap();

  // Assert
  let injected = controller_slot(&container).expect("field should be bound");
  let registered = container
    .get_instance(&TypeKey::new("tests.WorkService"))
    .unwrap();
  assert!(Arc::ptr_eq(&injected, &registered));
}

#[test]
fn test_injection_miss_leaves_the_field_unset() {
  // Arrange: nobody satisfies the Workable capability.
  let mut catalog = TypeCatalog::new();
  catalog.register(controller_type());

  // Act: the miss is tolerated; bootstrap still succeeds.
  let container = Container::bootstrap(catalog).unwrap();

  // Assert
  assert!(controller_slot(&container).is_none());
  let controller = container
    .get_instance(&TypeKey::new("tests.UserController"))
    .unwrap();
  let result = controller.invoke("find_all", &[]).unwrap();
  assert_eq!(result, Value::from("no service bound"));
}

#[test]
fn test_two_implementers_resolve_to_exactly_one() {
  // Arrange: two types satisfy Workable. Which one wins is deliberately
  // unspecified; the resolution must simply pick one and not fail.
  let recorder = Arc::new(Recorder::default());
  let mut catalog = TypeCatalog::new();
  catalog.register(work_service_type(&recorder));
  catalog.register(backup_service_type());
  catalog.register(controller_type());

  // Act
  let container = Container::bootstrap(catalog).unwrap();

  // Assert
  let injected = controller_slot(&container).expect("field should be bound");
  let first = container
    .get_instance(&TypeKey::new("tests.WorkService"))
    .unwrap();
  let second = container
    .get_instance(&TypeKey::new("tests.BackupWorkService"))
    .unwrap();
  assert!(Arc::ptr_eq(&injected, &first) || Arc::ptr_eq(&injected, &second));
}

#[test]
fn test_pending_record_survives_proxying() {
  // Arrange: NeedyService declares a field in phase 1 and is then woven in
  // phase 2. The injection record must still reach it in phase 3, through
  // the proxy, onto the real instance.
  let recorder = Arc::new(Recorder::default());
  let needy_recorder = recorder.clone();
  let mut catalog = TypeCatalog::new();
  catalog.register(work_service_type(&recorder));
  catalog.register(
    ComponentType::new("tests.NeedyService")
      .with_stereotype(Stereotype::Service)
      .with_field("dep", TypeRef::concrete("tests.WorkService"))
      .with_constructor(|| Arc::new(NeedyService { dep: Slot::new() })),
  );
  catalog.register(
    ComponentType::new("tests.NeedyAspect")
      .with_stereotype(Stereotype::Aspect)
      .with_method(MethodDescriptor::new("around_run").with_pointcut("tests.NeedyService.run()"))
      .with_method(MethodDescriptor::new("log_before").with_before("around_run()"))
      .with_constructor(move || {
        Arc::new(LogAspect {
          recorder: needy_recorder.clone(),
        })
      }),
  );

  // Act
  let container = Container::bootstrap(catalog).unwrap();

  // Assert: the registry entry is the proxy, and the instance behind it got
  // its dependency.
  let bean = container
    .get_instance(&TypeKey::new("tests.NeedyService"))
    .unwrap();
  let proxy = bean
    .as_any()
    .downcast_ref::<AdvisedBean>()
    .expect("NeedyService should be woven");
  let inner = proxy
    .target()
    .as_any()
    .downcast_ref::<NeedyService>()
    .expect("proxy should wrap the real service");
  assert!(inner.dep.is_bound());

  // And the full invocation exercises advice + injected dependency.
  let result = bean.invoke("run", &[]).unwrap();
  assert_eq!(result, Value::from("done"));
  assert_eq!(recorder.calls(), vec!["before", "work"]);
}

#[test]
fn test_bootstrap_is_idempotent_for_the_same_catalog() {
  // Arrange
  let recorder = Arc::new(Recorder::default());
  let mut catalog = TypeCatalog::new();
  catalog.register(work_service_type(&recorder));
  catalog.register(controller_type());
  catalog.register(log_aspect_type(&recorder));

  // Act: two fresh pipelines over the identical metadata.
  let first = Container::bootstrap(catalog.clone()).unwrap();
  let second = Container::bootstrap(catalog).unwrap();

  // Assert: the route-relevant structure matches; the same type is woven
  // and the same field binding is produced in both containers.
  for container in [&first, &second] {
    let bean = container
      .get_instance(&TypeKey::new("tests.WorkService"))
      .unwrap();
    assert!(bean.as_any().downcast_ref::<AdvisedBean>().is_some());
    let injected = controller_slot(container).expect("field should be bound");
    assert!(Arc::ptr_eq(&injected, &bean));
  }
  assert_eq!(first.registry().len(), second.registry().len());
}
